//! Root route: forwards each visitor to their place in the app.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Admins go to the panel, signed-in users to their company, everyone else
/// to the public landing. History is replaced so Back never loops here.
#[component]
pub fn RootRedirectPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let navigate = use_navigate();

    Effect::new(move || {
        let target = match session.get() {
            Some(record) if record.is_admin() => "/admin",
            Some(_) => "/companies",
            None => "/home",
        };
        navigate(
            target,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    });

    view! { <p class="page-status">"Redirigiendo..."</p> }
}
