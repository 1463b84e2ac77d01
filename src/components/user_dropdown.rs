//! Account menu shown in the navbar for an authenticated user.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

#[component]
pub fn UserDropdown() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let open = RwSignal::new(false);

    let navigate = use_navigate();
    let on_logout = move |_| {
        open.set(false);
        session.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="user-dropdown">
            <button
                class="user-dropdown__toggle"
                on:click=move |_| open.update(|value| *value = !*value)
            >
                {move || session.get().map(|s| s.username).unwrap_or_default()}
            </button>
            <Show when=move || open.get()>
                <div class="user-dropdown__menu">
                    <a href="/profile" on:click=move |_| open.set(false)>
                        "Mi Perfil"
                    </a>
                    <a href="/card" on:click=move |_| open.set(false)>
                        "Mis Tarjetas"
                    </a>
                    <a href="/suscripciones" on:click=move |_| open.set(false)>
                        "Mis Suscripciones"
                    </a>
                    <a href="/mis-reclamos" on:click=move |_| open.set(false)>
                        "Mis Reclamos"
                    </a>
                    <button class="user-dropdown__logout" on:click=on_logout.clone()>
                        "Cerrar Sesión"
                    </button>
                </div>
            </Show>
        </div>
    }
}
