//! Navigation bar for the admin panel.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

#[component]
pub fn AdminNavbar() -> impl IntoView {
    let session = expect_context::<SessionState>();

    let navigate = use_navigate();
    let on_logout = move |_| {
        session.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar navbar--admin">
            <a class="navbar__brand" href="/admin">
                "CarWashPe Admin"
            </a>
            <div class="navbar__links">
                <a href="/admin">"Panel"</a>
                <a href="/admin/usuarios">"Usuarios"</a>
                <a href="/admin/reclamos">"Reclamos"</a>
                <span class="navbar__user">
                    {move || session.get().map(|s| s.username).unwrap_or_default()}
                </span>
                <button class="navbar__logout" on:click=on_logout>
                    "Cerrar Sesión"
                </button>
            </div>
        </nav>
    }
}
