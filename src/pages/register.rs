//! Registration page; a successful signup logs the account in directly.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Session, SessionState};

const MIN_PASSWORD_LEN: usize = 6;

/// Client-side validation before hitting the backend. Returns a message to
/// show, or `None` when the form may be submitted.
fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Option<&'static str> {
    if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Some("Completa todos los campos.");
    }
    if !email.contains('@') {
        return Some("Ingresa un correo válido.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Some("La contraseña debe tener al menos 6 caracteres.");
    }
    if password != confirm {
        return Some("Las contraseñas no coinciden.");
    }
    None
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Some(message) = validate_signup(
            &username_value,
            &email_value,
            &password_value,
            &confirm.get(),
        ) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&username_value, &email_value, &password_value).await
                {
                    Ok(response) => {
                        session.login(Session::from_login(response));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, session);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Crea tu cuenta"</h1>
                <p class="auth-card__subtitle">"Gestiona tu lavadero con CarWashPe"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Usuario"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Correo electrónico"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirmar contraseña"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creando cuenta..." } else { "Registrarse" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "¿Ya tienes una cuenta? "
                    <a href="/login">"Inicia sesión"</a>
                </p>
            </div>
        </div>
    }
}
