//! Company home: the caller's single registered company, with on-demand
//! statistics and management actions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::stat_card::StatCard;
use crate::net::types::{Company, CompanyStatistics};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format;

#[component]
pub fn CompanyPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    let company = RwSignal::new(None::<Company>);
    let statistics = RwSignal::new(None::<CompanyStatistics>);
    let show_stats = RwSignal::new(false);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_company().await {
            Ok(found) => company.set(found),
            Err(e) => error.set(e.to_string()),
        }
        loading.set(false);
    });

    let on_toggle_stats = move |_| {
        let showing = show_stats.get();
        show_stats.set(!showing);
        if showing || statistics.get_untracked().is_some() {
            return;
        }
        let Some(company_id) = company.get_untracked().map(|c| c.id) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_company_statistics(company_id).await {
                Ok(stats) => statistics.set(Some(stats)),
                Err(e) => error.set(e.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = company_id;
        }
    };

    let on_delete = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window().is_some_and(|w| {
                w.confirm_with_message("¿Estás seguro de que quieres eliminar esta empresa?")
                    .unwrap_or(false)
            });
            if !confirmed {
                return;
            }
            let Some(company_id) = company.get_untracked().map(|c| c.id) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_company(company_id).await {
                    Ok(()) => {
                        company.set(None);
                        statistics.set(None);
                        show_stats.set(false);
                    }
                    Err(e) => error.set(e.to_string()),
                }
            });
        }
    };

    view! {
        <div class="company-page">
            <h1>"Mi Empresa"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="page-status page-status--error">{move || error.get()}</p>
            </Show>
            {move || {
                if loading.get() {
                    return view! { <p class="page-status">"Cargando..."</p> }.into_any();
                }
                match company.get() {
                    None => view! {
                        <div class="empty-state">
                            <h3>"Aún no registras tu empresa"</h3>
                            <p>"Crea tu empresa para comenzar a registrar carros."</p>
                            <a class="button" href="/add-company">
                                "Registrar Empresa"
                            </a>
                        </div>
                    }
                    .into_any(),
                    Some(company) => {
                        let cars_href = format!("/companies/{}/cars", company.id);
                        let edit_href = format!("/edit-company/{}", company.id);
                        view! {
                            <div class="company-card">
                                <h2>{company.nombre.clone()}</h2>
                                <dl class="company-card__details">
                                    <dt>"RUC"</dt>
                                    <dd>{company.ruc.clone().unwrap_or_else(|| "—".to_owned())}</dd>
                                    <dt>"Dirección"</dt>
                                    <dd>{company.direccion.clone().unwrap_or_else(|| "—".to_owned())}</dd>
                                </dl>
                                <div class="company-card__actions">
                                    <a class="button" href=cars_href>
                                        "Ver Carros"
                                    </a>
                                    <a class="button button--secondary" href=edit_href>
                                        "Editar"
                                    </a>
                                    <button class="button button--secondary" on:click=on_toggle_stats>
                                        {move || if show_stats.get() { "Ocultar Estadísticas" } else { "Ver Estadísticas" }}
                                    </button>
                                    <button class="button button--danger" on:click=on_delete>
                                        "Eliminar"
                                    </button>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
            <Show when=move || show_stats.get()>
                {move || match statistics.get() {
                    None => view! { <p class="page-status">"Cargando estadísticas..."</p> }.into_any(),
                    Some(stats) => view! {
                        <div class="stats-grid">
                            <StatCard label="Carros registrados" value=stats.carros_registrados.to_string()/>
                            <StatCard label="Terminados" value=stats.carros_terminados.to_string()/>
                            <StatCard label="Pendientes" value=stats.carros_pendientes.to_string()/>
                            <StatCard label="Ingresos totales" value=format::soles(stats.ingresos_totales)/>
                            <StatCard label="Promedio por carro" value=format::soles(stats.promedio_por_carro)/>
                            <StatCard label="Último mes" value=stats.carros_ultimo_mes.to_string()/>
                        </div>
                    }
                    .into_any(),
                }}
            </Show>
        </div>
    }
}
