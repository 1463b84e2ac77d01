//! Billing profile view, behind the customer-profile gate.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::profile_gate::{CustomerProfile, ProfileGate};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn CustomerProfilePage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <div class="profile-page">
            <h1>"Mi Perfil"</h1>
            <ProfileGate>
                <ProfileDetails/>
            </ProfileGate>
        </div>
    }
}

#[component]
fn ProfileDetails() -> impl IntoView {
    let profile = expect_context::<CustomerProfile>();

    let field = |value: Option<String>| value.unwrap_or_else(|| "—".to_owned());

    view! {
        {move || {
            profile
                .0
                .get()
                .map(|customer| {
                    view! {
                        <div class="profile-card">
                            <dl class="profile-card__fields">
                                <dt>"Nombre"</dt>
                                <dd>
                                    {format!(
                                        "{} {}",
                                        field(customer.first_name.clone()),
                                        field(customer.last_name.clone()),
                                    )}
                                </dd>
                                <dt>"Correo"</dt>
                                <dd>{field(customer.email.clone())}</dd>
                                <dt>"Dirección"</dt>
                                <dd>{field(customer.address.clone())}</dd>
                                <dt>"Ciudad"</dt>
                                <dd>{field(customer.address_city.clone())}</dd>
                                <dt>"País"</dt>
                                <dd>{field(customer.country_code.clone())}</dd>
                                <dt>"Teléfono"</dt>
                                <dd>{field(customer.phone_number.clone())}</dd>
                            </dl>
                            <div class="profile-card__actions">
                                <a class="button" href="/update-customer">
                                    "Actualizar Datos"
                                </a>
                                <a class="button button--secondary" href="/card">
                                    "Mis Tarjetas"
                                </a>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
