//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated route components should apply identical unauthenticated
//! redirect behavior. Role-gated routes use `components::guard` instead.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionState};

/// True when an anonymous visitor should be sent to `/login`.
pub fn should_redirect_unauth(session: Option<&Session>) -> bool {
    session.is_none()
}

/// Redirect to `/login` (replacing history) whenever no session is present.
pub fn install_unauth_redirect<F>(session: SessionState, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(session.get().as_ref()) {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
