//! Main navigation bar for regular users and visitors.

use leptos::prelude::*;

use crate::components::user_dropdown::UserDropdown;
use crate::state::session::SessionState;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionState>();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "CarWashPe"
            </a>
            <div class="navbar__links">
                <a href="/">"Inicio"</a>
                <Show
                    when=move || session.get().is_some()
                    fallback=|| {
                        view! {
                            <a href="/login" class="navbar__cta">
                                "Iniciar Sesión"
                            </a>
                            <a href="/register" class="navbar__cta navbar__cta--primary">
                                "Registrarse"
                            </a>
                        }
                    }
                >
                    <a href="/companies">"Mi Empresa"</a>
                    <a href="/plans">"Planes"</a>
                    <a href="/reclamo">"Libro de Reclamos"</a>
                    <UserDropdown/>
                </Show>
            </div>
        </nav>
    }
}
