//! The caller's own complaints, newest first.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Reclamo, ReclamoStatus};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format;

fn status_class(status: ReclamoStatus) -> &'static str {
    match status {
        ReclamoStatus::Pendiente => "badge badge--pendiente",
        ReclamoStatus::Atendido => "badge badge--atendido",
        ReclamoStatus::Cerrado => "badge badge--cerrado",
    }
}

#[component]
pub fn ReclamoListPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    let reclamos = RwSignal::new(Vec::<Reclamo>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_reclamos().await {
            Ok(found) => reclamos.set(found),
            Err(e) => error.set(e.to_string()),
        }
        loading.set(false);
    });

    view! {
        <div class="reclamos-page">
            <div class="page-header">
                <h1>"Mis Reclamos"</h1>
                <a class="button" href="/reclamo">
                    "Nuevo Reclamo"
                </a>
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="page-status page-status--error">{move || error.get()}</p>
            </Show>
            {move || {
                if loading.get() {
                    return view! { <p class="page-status">"Cargando reclamos..."</p> }.into_any();
                }
                let items = reclamos.get();
                if items.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"No has presentado reclamos."</p>
                        </div>
                    }
                    .into_any();
                }
                items
                    .into_iter()
                    .map(|reclamo| {
                        view! {
                            <div class="reclamo-card">
                                <div class="reclamo-card__head">
                                    <span class="reclamo-card__date">
                                        {format::short_datetime(&reclamo.fecha)}
                                    </span>
                                    <span class=status_class(reclamo.estado)>{reclamo.estado.label()}</span>
                                </div>
                                <p class="reclamo-card__message">{reclamo.mensaje.clone()}</p>
                                {reclamo
                                    .respuesta
                                    .clone()
                                    .map(|respuesta| {
                                        view! {
                                            <div class="reclamo-card__response">
                                                <strong>"Respuesta del equipo:"</strong>
                                                <p>{respuesta}</p>
                                            </div>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
