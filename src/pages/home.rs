//! Public landing page for anonymous visitors.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"CarWashPe"</h1>
                <p class="hero__tagline">
                    "Gestiona tu lavadero de autos: registra tu empresa, controla los "
                    "carros en cola y cobra con suscripciones mensuales."
                </p>
                <div class="hero__actions">
                    <a class="button" href="/register">
                        "Comienza gratis"
                    </a>
                    <a class="button button--secondary" href="/login">
                        "Iniciar Sesión"
                    </a>
                </div>
            </section>
            <section class="features">
                <div class="feature-card">
                    <h3>"Control de carros"</h3>
                    <p>"Registra cada vehículo con su placa, estado de lavado y precio."</p>
                </div>
                <div class="feature-card">
                    <h3>"Estadísticas"</h3>
                    <p>"Ingresos totales, promedios por carro y carros del último mes."</p>
                </div>
                <div class="feature-card">
                    <h3>"Suscripciones"</h3>
                    <p>"Planes recurrentes con pago seguro a través de Culqi."</p>
                </div>
            </section>
            <section class="home-page__reclamos">
                <p>
                    "¿Tuviste un problema con el servicio? "
                    <a href="/reclamo">"Deja tu reclamo"</a>
                </p>
            </section>
        </div>
    }
}
