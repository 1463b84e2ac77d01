//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"CarWashPe — Sistema de Gestión Profesional"</p>
            <div class="footer__links">
                <a href="/home">"Inicio"</a>
                <a href="/reclamo">"Libro de Reclamaciones"</a>
            </div>
        </footer>
    }
}
