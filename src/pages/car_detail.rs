//! Read-only detail view of one vehicle.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::Car;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format;

#[component]
pub fn CarDetailPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    let params = use_params_map();
    let company_id = Memo::new(move |_| {
        params
            .with(|p| p.get("company_id"))
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or_default()
    });
    let car_id = Memo::new(move |_| {
        params
            .with(|p| p.get("car_id"))
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or_default()
    });

    let car = RwSignal::new(None::<Car>);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let id = car_id.get_untracked();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_car(id).await {
                Ok(found) => car.set(Some(found)),
                Err(e) => error.set(e.to_string()),
            }
        });
    }

    view! {
        <div class="car-detail-page">
            <a class="button button--secondary" href=move || format!("/companies/{}/cars", company_id.get())>
                "Volver a Carros"
            </a>
            <Show when=move || !error.get().is_empty()>
                <p class="page-status page-status--error">{move || error.get()}</p>
            </Show>
            {move || match car.get() {
                None => view! { <p class="page-status">"Cargando..."</p> }.into_any(),
                Some(car) => {
                    let edit_href = format!("/companies/{}/edit-car/{}", company_id.get(), car.id);
                    view! {
                        <div class="car-detail">
                            <h1>{car.placa.clone()}</h1>
                            {car.foto
                                .clone()
                                .map(|src| view! { <img class="car-detail__photo" src=src alt="Foto del carro"/> })}
                            <dl class="car-detail__fields">
                                <dt>"Marca"</dt>
                                <dd>{car.marca.clone()}</dd>
                                <dt>"Modelo"</dt>
                                <dd>{car.modelo.clone().unwrap_or_else(|| "—".to_owned())}</dd>
                                <dt>"Color"</dt>
                                <dd>{car.color.clone().unwrap_or_else(|| "—".to_owned())}</dd>
                                <dt>"Estado"</dt>
                                <dd>{car.estado.label()}</dd>
                                <dt>"Precio"</dt>
                                <dd>{format::soles(car.precio)}</dd>
                                <dt>"Teléfono"</dt>
                                <dd>{car.numero_telefono.clone()}</dd>
                                <dt>"Llegada"</dt>
                                <dd>{format::short_datetime(&car.dia_llegada)}</dd>
                                <dt>"Salida"</dt>
                                <dd>
                                    {car.dia_salida
                                        .as_deref()
                                        .map(format::short_datetime)
                                        .unwrap_or_else(|| "—".to_owned())}
                                </dd>
                            </dl>
                            <a class="button" href=edit_href>
                                "Editar"
                            </a>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
