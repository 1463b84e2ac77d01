//! Billing profile create/update forms.

#[cfg(test)]
#[path = "customer_form_test.rs"]
mod customer_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::CustomerPayload;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Culqi requires names plus a deliverable address; mirror that before the
/// round trip.
fn validate_customer(payload: &CustomerPayload) -> Option<&'static str> {
    if payload.first_name.is_empty() || payload.last_name.is_empty() {
        return Some("Nombre y apellido son obligatorios.");
    }
    if payload.email.is_empty() || !payload.email.contains('@') {
        return Some("Ingresa un correo válido.");
    }
    if payload.address.is_empty() || payload.address_city.is_empty() {
        return Some("Dirección y ciudad son obligatorias.");
    }
    None
}

#[derive(Clone, Copy)]
struct CustomerFormFields {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    address: RwSignal<String>,
    address_city: RwSignal<String>,
    country_code: RwSignal<String>,
    phone_number: RwSignal<String>,
}

impl CustomerFormFields {
    fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            address_city: RwSignal::new(String::new()),
            country_code: RwSignal::new("PE".to_owned()),
            phone_number: RwSignal::new(String::new()),
        }
    }

    fn payload(&self) -> CustomerPayload {
        CustomerPayload {
            address: self.address.get().trim().to_owned(),
            address_city: self.address_city.get().trim().to_owned(),
            country_code: self.country_code.get().trim().to_uppercase(),
            email: self.email.get().trim().to_owned(),
            first_name: self.first_name.get().trim().to_owned(),
            last_name: self.last_name.get().trim().to_owned(),
            phone_number: self.phone_number.get().trim().to_owned(),
        }
    }
}

#[component]
fn CustomerFormBody(fields: CustomerFormFields) -> impl IntoView {
    view! {
        <label>"Nombre"</label>
        <input
            class="form-input"
            type="text"
            prop:value=move || fields.first_name.get()
            on:input=move |ev| fields.first_name.set(event_target_value(&ev))
        />
        <label>"Apellido"</label>
        <input
            class="form-input"
            type="text"
            prop:value=move || fields.last_name.get()
            on:input=move |ev| fields.last_name.set(event_target_value(&ev))
        />
        <label>"Correo electrónico"</label>
        <input
            class="form-input"
            type="email"
            prop:value=move || fields.email.get()
            on:input=move |ev| fields.email.set(event_target_value(&ev))
        />
        <label>"Dirección"</label>
        <input
            class="form-input"
            type="text"
            prop:value=move || fields.address.get()
            on:input=move |ev| fields.address.set(event_target_value(&ev))
        />
        <label>"Ciudad"</label>
        <input
            class="form-input"
            type="text"
            prop:value=move || fields.address_city.get()
            on:input=move |ev| fields.address_city.set(event_target_value(&ev))
        />
        <label>"Código de país"</label>
        <input
            class="form-input"
            type="text"
            maxlength="2"
            prop:value=move || fields.country_code.get()
            on:input=move |ev| fields.country_code.set(event_target_value(&ev))
        />
        <label>"Teléfono"</label>
        <input
            class="form-input"
            type="tel"
            prop:value=move || fields.phone_number.get()
            on:input=move |ev| fields.phone_number.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn CreateCustomerPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    let fields = CustomerFormFields::new();
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = fields.payload();
        if let Some(message) = validate_customer(&payload) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_customer(&payload).await {
                    Ok(_) => navigate("/profile", NavigateOptions::default()),
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
            <h1>"Crear Perfil de Facturación"</h1>
            <form class="form-card" on:submit=on_submit>
                <CustomerFormBody fields=fields/>
                <button class="button" type="submit" disabled=move || busy.get()>
                    "Crear Perfil"
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="page-status page-status--error">{move || error.get()}</p>
                </Show>
            </form>
        </div>
    }
}

#[component]
pub fn UpdateCustomerPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    let fields = CustomerFormFields::new();
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    // Prefill from the existing profile.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_customer().await {
            Ok(Some(customer)) => {
                fields.first_name.set(customer.first_name.unwrap_or_default());
                fields.last_name.set(customer.last_name.unwrap_or_default());
                fields.email.set(customer.email.unwrap_or_default());
                fields.address.set(customer.address.unwrap_or_default());
                fields.address_city.set(customer.address_city.unwrap_or_default());
                fields
                    .country_code
                    .set(customer.country_code.unwrap_or_else(|| "PE".to_owned()));
                fields.phone_number.set(customer.phone_number.unwrap_or_default());
            }
            Ok(None) => error.set("Aún no tienes un perfil de facturación.".to_owned()),
            Err(e) => error.set(e.to_string()),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = fields.payload();
        if let Some(message) = validate_customer(&payload) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_customer(&payload).await {
                    Ok(_) => navigate("/profile", NavigateOptions::default()),
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
            <h1>"Actualizar Perfil"</h1>
            <form class="form-card" on:submit=on_submit>
                <CustomerFormBody fields=fields/>
                <button class="button" type="submit" disabled=move || busy.get()>
                    "Guardar Cambios"
                </button>
                <a class="button button--secondary" href="/profile">
                    "Cancelar"
                </a>
                <Show when=move || !error.get().is_empty()>
                    <p class="page-status page-status--error">{move || error.get()}</p>
                </Show>
            </form>
        </div>
    }
}
