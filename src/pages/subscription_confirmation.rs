//! Post-subscribe confirmation screen.

use leptos::prelude::*;

#[component]
pub fn SubscriptionConfirmationPage() -> impl IntoView {
    view! {
        <div class="confirmation-page">
            <div class="confirmation-card">
                <h1>"¡Suscripción creada!"</h1>
                <p>
                    "Tu suscripción quedó registrada. El primer cobro se realizará "
                    "a la tarjeta seleccionada y recibirás el detalle por correo."
                </p>
                <div class="confirmation-card__actions">
                    <a class="button" href="/suscripciones">
                        "Ver Mis Suscripciones"
                    </a>
                    <a class="button button--secondary" href="/companies">
                        "Ir a Mi Empresa"
                    </a>
                </div>
            </div>
        </div>
    }
}
