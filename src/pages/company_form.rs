//! Company create/edit forms.

#[cfg(test)]
#[path = "company_form_test.rs"]
mod company_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::CompanyPayload;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Normalize form inputs into the wire payload: optional fields are omitted
/// when blank instead of being sent as empty strings.
fn company_payload(nombre: &str, ruc: &str, direccion: &str) -> CompanyPayload {
    let optional = |value: &str| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    };
    CompanyPayload {
        nombre: nombre.trim().to_owned(),
        ruc: optional(ruc),
        direccion: optional(direccion),
    }
}

#[component]
pub fn AddCompanyPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    let nombre = RwSignal::new(String::new());
    let ruc = RwSignal::new(String::new());
    let direccion = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = company_payload(&nombre.get(), &ruc.get(), &direccion.get());
        if payload.nombre.is_empty() {
            error.set("El nombre de la empresa es obligatorio.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_company(&payload).await {
                    Ok(_) => navigate("/companies", NavigateOptions::default()),
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, payload);
        }
    };

    view! {
        <div class="form-page">
            <h1>"Registrar Empresa"</h1>
            <form class="form-card" on:submit=on_submit>
                <label>"Nombre"</label>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Lavadero Los Pinos"
                    prop:value=move || nombre.get()
                    on:input=move |ev| nombre.set(event_target_value(&ev))
                />
                <label>"RUC (opcional)"</label>
                <input
                    class="form-input"
                    type="text"
                    placeholder="20123456789"
                    prop:value=move || ruc.get()
                    on:input=move |ev| ruc.set(event_target_value(&ev))
                />
                <label>"Dirección (opcional)"</label>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Av. Principal 123"
                    prop:value=move || direccion.get()
                    on:input=move |ev| direccion.set(event_target_value(&ev))
                />
                <button class="button" type="submit" disabled=move || busy.get()>
                    "Guardar"
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="page-status page-status--error">{move || error.get()}</p>
                </Show>
            </form>
        </div>
    }
}

#[component]
pub fn EditCompanyPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    let params = use_params_map();
    let company_id = Memo::new(move |_| {
        params
            .with(|p| p.get("id"))
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let nombre = RwSignal::new(String::new());
    let ruc = RwSignal::new(String::new());
    let direccion = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    // Prefill the form from the stored record.
    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = company_id.get_untracked() {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_company_by_id(id).await {
                    Ok(company) => {
                        nombre.set(company.nombre);
                        ruc.set(company.ruc.unwrap_or_default());
                        direccion.set(company.direccion.unwrap_or_default());
                    }
                    Err(e) => error.set(e.to_string()),
                }
            });
        }
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(id) = company_id.get_untracked() else {
            return;
        };
        let payload = company_payload(&nombre.get(), &ruc.get(), &direccion.get());
        if payload.nombre.is_empty() {
            error.set("El nombre de la empresa es obligatorio.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_company(id, &payload).await {
                    Ok(_) => navigate("/companies", NavigateOptions::default()),
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, payload, id);
        }
    };

    view! {
        <div class="form-page">
            <h1>"Editar Empresa"</h1>
            <form class="form-card" on:submit=on_submit>
                <label>"Nombre"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || nombre.get()
                    on:input=move |ev| nombre.set(event_target_value(&ev))
                />
                <label>"RUC (opcional)"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || ruc.get()
                    on:input=move |ev| ruc.set(event_target_value(&ev))
                />
                <label>"Dirección (opcional)"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || direccion.get()
                    on:input=move |ev| direccion.set(event_target_value(&ev))
                />
                <button class="button" type="submit" disabled=move || busy.get()>
                    "Guardar Cambios"
                </button>
                <a class="button button--secondary" href="/companies">
                    "Cancelar"
                </a>
                <Show when=move || !error.get().is_empty()>
                    <p class="page-status page-status--error">{move || error.get()}</p>
                </Show>
            </form>
        </div>
    }
}
