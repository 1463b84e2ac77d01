//! Role-gated route guard.
//!
//! DESIGN
//! ======
//! The access decision is a pure function of (session, required role) —
//! role flags live on the session record from login, so no network round
//! trip happens here and the outcome is known synchronously before the
//! children render. Three outcomes: anonymous visitors are redirected to
//! login (replacing history so Back does not loop), authenticated users
//! without the role get an in-place denied view, and authorized users get
//! the protected subtree unchanged.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Session, SessionState};

/// Role a guarded view demands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleRequirement {
    /// Django staff or superuser; the requirement for all `/admin` views.
    StaffOrSuperuser,
}

/// Outcome of evaluating a guarded navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// No session: go log in.
    RedirectToLogin,
    /// Session without the role: render the denied view in place.
    Denied,
    /// Render the protected subtree.
    Authorized,
}

/// Decide access for `session` against `requirement`.
pub fn decide(session: Option<&Session>, requirement: RoleRequirement) -> Access {
    match session {
        None => Access::RedirectToLogin,
        Some(session) => match requirement {
            RoleRequirement::StaffOrSuperuser => {
                if session.is_admin() {
                    Access::Authorized
                } else {
                    Access::Denied
                }
            }
        },
    }
}

/// Guard wrapper for admin-only routes.
#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionState>();

    // Effects only run in the browser, so SSR output stays passive and the
    // redirect happens after hydration reads the real session.
    let navigate = use_navigate();
    Effect::new(move || {
        let access = decide(session.get().as_ref(), RoleRequirement::StaffOrSuperuser);
        if access == Access::RedirectToLogin {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    view! {
        {move || match decide(session.get().as_ref(), RoleRequirement::StaffOrSuperuser) {
            Access::Authorized => children().into_any(),
            Access::Denied => view! { <DeniedView/> }.into_any(),
            Access::RedirectToLogin => ().into_any(),
        }}
    }
}

/// In-place response to an authenticated-but-unauthorized navigation.
///
/// Says nothing about the resource beyond "insufficient privileges".
#[component]
fn DeniedView() -> impl IntoView {
    let navigate = use_navigate();
    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.history().and_then(|history| history.back());
            }
        }
    };

    view! {
        <div class="denied-page">
            <div class="denied-card">
                <h2>"Acceso Denegado"</h2>
                <p>"No tienes permisos suficientes para acceder a esta página."</p>
                <div class="denied-card__actions">
                    <button class="button" on:click=on_back>
                        "Volver Atrás"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| navigate("/companies", NavigateOptions::default())
                    >
                        "Ir a Mi Empresa"
                    </button>
                </div>
                <p class="denied-card__hint">
                    "Si crees que esto es un error, contacta al administrador del sistema."
                </p>
            </div>
        </div>
    }
}
