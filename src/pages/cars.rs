//! Vehicle list for one company.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{Car, CarStatus};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format;

fn status_class(status: CarStatus) -> &'static str {
    match status {
        CarStatus::Espera => "badge badge--espera",
        CarStatus::Proceso => "badge badge--proceso",
        CarStatus::Terminado => "badge badge--terminado",
    }
}

#[component]
pub fn CarListPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    let params = use_params_map();
    let company_id = Memo::new(move |_| {
        params
            .with(|p| p.get("company_id"))
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or_default()
    });

    let cars = RwSignal::new(Vec::<Car>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let id = company_id.get_untracked();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_cars(id).await {
                Ok(found) => cars.set(found),
                Err(e) => error.set(e.to_string()),
            }
            loading.set(false);
        });
    }

    let on_delete = move |car_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window().is_some_and(|w| {
                w.confirm_with_message("¿Eliminar este carro?").unwrap_or(false)
            });
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_car(car_id).await {
                    Ok(()) => cars.update(|list| list.retain(|car| car.id != car_id)),
                    Err(e) => error.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = car_id;
        }
    };

    view! {
        <div class="cars-page">
            <div class="page-header">
                <h1>"Carros"</h1>
                <div class="page-header__actions">
                    <a class="button button--secondary" href="/companies">
                        "Volver a Mi Empresa"
                    </a>
                    <a class="button" href=move || format!("/companies/{}/add-car", company_id.get())>
                        "Agregar Carro"
                    </a>
                </div>
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="page-status page-status--error">{move || error.get()}</p>
            </Show>
            {move || {
                if loading.get() {
                    return view! { <p class="page-status">"Cargando carros..."</p> }.into_any();
                }
                let items = cars.get();
                if items.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"No hay carros registrados todavía."</p>
                        </div>
                    }
                    .into_any();
                }
                let company = company_id.get();
                items
                    .into_iter()
                    .map(|car| {
                        let detail_href = format!("/companies/{company}/car/{}", car.id);
                        let edit_href = format!("/companies/{company}/edit-car/{}", car.id);
                        let car_id = car.id;
                        view! {
                            <div class="car-card">
                                <div class="car-card__head">
                                    <span class="car-card__plate">{car.placa.clone()}</span>
                                    <span class=status_class(car.estado)>{car.estado.label()}</span>
                                </div>
                                <p class="car-card__model">
                                    {car.marca.clone()}
                                    " "
                                    {car.modelo.clone().unwrap_or_default()}
                                    {car.color.clone().map(|c| format!(" · {c}")).unwrap_or_default()}
                                </p>
                                <p class="car-card__price">{format::soles(car.precio)}</p>
                                <p class="car-card__dates">
                                    "Llegada: "
                                    {format::short_datetime(&car.dia_llegada)}
                                    {car.dia_salida
                                        .as_deref()
                                        .map(|salida| format!(" · Salida: {}", format::short_datetime(salida)))
                                        .unwrap_or_default()}
                                </p>
                                <div class="car-card__actions">
                                    <a class="button button--small" href=detail_href>
                                        "Detalle"
                                    </a>
                                    <a class="button button--small button--secondary" href=edit_href>
                                        "Editar"
                                    </a>
                                    <button
                                        class="button button--small button--danger"
                                        on:click=move |_| on_delete(car_id)
                                    >
                                        "Eliminar"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
