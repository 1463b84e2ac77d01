//! Complaint submission form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::ReclamoPayload;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ReclamoFormPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    let nombre = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let telefono = RwSignal::new(String::new());
    let mensaje = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = ReclamoPayload {
            nombre: nombre.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            telefono: telefono.get().trim().to_owned(),
            mensaje: mensaje.get().trim().to_owned(),
        };
        if payload.nombre.is_empty() || payload.email.is_empty() || payload.mensaje.is_empty() {
            error.set("Completa nombre, correo y mensaje.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        success.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_reclamo(&payload).await {
                Ok(_) => {
                    success.set("Reclamo enviado. Te responderemos pronto.".to_owned());
                    nombre.set(String::new());
                    email.set(String::new());
                    telefono.set(String::new());
                    mensaje.set(String::new());
                }
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    view! {
        <div class="form-page">
            <h1>"Libro de Reclamaciones"</h1>
            <form class="form-card" on:submit=on_submit>
                <label>"Nombre"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || nombre.get()
                    on:input=move |ev| nombre.set(event_target_value(&ev))
                />
                <label>"Correo electrónico"</label>
                <input
                    class="form-input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label>"Teléfono (opcional)"</label>
                <input
                    class="form-input"
                    type="tel"
                    prop:value=move || telefono.get()
                    on:input=move |ev| telefono.set(event_target_value(&ev))
                />
                <label>"Mensaje"</label>
                <textarea
                    class="form-input form-input--textarea"
                    prop:value=move || mensaje.get()
                    on:input=move |ev| mensaje.set(event_target_value(&ev))
                ></textarea>
                <button class="button" type="submit" disabled=move || busy.get()>
                    "Enviar Reclamo"
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="page-status page-status--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="page-status page-status--success">{move || success.get()}</p>
                </Show>
            </form>
            <p class="form-page__footer">
                <a href="/mis-reclamos">"Ver mis reclamos anteriores"</a>
            </p>
        </div>
    }
}
