//! Admin complaint triage: list every complaint and respond inline.

use leptos::prelude::*;

use crate::net::types::{Reclamo, ReclamoResponsePayload, ReclamoStatus};
use crate::util::format;

#[component]
pub fn AdminReclamosPage() -> impl IntoView {
    let reclamos = RwSignal::new(Vec::<Reclamo>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    // Inline responder state: which complaint is open plus its draft.
    let editing = RwSignal::new(None::<i64>);
    let draft_respuesta = RwSignal::new(String::new());
    let draft_estado = RwSignal::new(ReclamoStatus::Atendido);
    let saving = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_admin_reclamos().await {
            Ok(found) => reclamos.set(found),
            Err(e) => error.set(e.to_string()),
        }
        loading.set(false);
    });

    let on_open = move |reclamo: &Reclamo| {
        editing.set(Some(reclamo.id));
        draft_respuesta.set(reclamo.respuesta.clone().unwrap_or_default());
        draft_estado.set(match reclamo.estado {
            ReclamoStatus::Pendiente => ReclamoStatus::Atendido,
            other => other,
        });
    };

    let on_save = move |reclamo_id: i64| {
        if saving.get() {
            return;
        }
        let payload = ReclamoResponsePayload {
            respuesta: draft_respuesta.get().trim().to_owned(),
            estado: draft_estado.get(),
        };
        saving.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::respond_reclamo(reclamo_id, &payload).await {
                Ok(updated) => {
                    reclamos.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|r| r.id == updated.id) {
                            *slot = updated;
                        }
                    });
                    editing.set(None);
                }
                Err(e) => error.set(e.to_string()),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (reclamo_id, payload);
        }
    };

    view! {
        <div class="admin-page">
            <h1>"Reclamos"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="page-status page-status--error">{move || error.get()}</p>
            </Show>
            {move || {
                if loading.get() {
                    return view! { <p class="page-status">"Cargando reclamos..."</p> }.into_any();
                }
                let items = reclamos.get();
                if items.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"No hay reclamos registrados."</p>
                        </div>
                    }
                    .into_any();
                }
                items
                    .into_iter()
                    .map(|reclamo| {
                        let reclamo_id = reclamo.id;
                        let open_target = reclamo.clone();
                        view! {
                            <div class="reclamo-card reclamo-card--admin">
                                <div class="reclamo-card__head">
                                    <span>
                                        <strong>{reclamo.nombre.clone()}</strong>
                                        " · "
                                        {reclamo.email.clone()}
                                    </span>
                                    <span class="reclamo-card__date">
                                        {format::short_datetime(&reclamo.fecha)}
                                    </span>
                                    <span class="badge">{reclamo.estado.label()}</span>
                                </div>
                                <p class="reclamo-card__message">{reclamo.mensaje.clone()}</p>
                                {reclamo
                                    .respuesta
                                    .clone()
                                    .map(|respuesta| {
                                        view! {
                                            <div class="reclamo-card__response">
                                                <strong>"Respuesta actual:"</strong>
                                                <p>{respuesta}</p>
                                            </div>
                                        }
                                    })}
                                <Show
                                    when=move || editing.get() == Some(reclamo_id)
                                    fallback=move || {
                                        let open_target = open_target.clone();
                                        view! {
                                            <button
                                                class="button button--small"
                                                on:click=move |_| on_open(&open_target)
                                            >
                                                "Responder"
                                            </button>
                                        }
                                    }
                                >
                                    <div class="responder">
                                        <label>"Respuesta"</label>
                                        <textarea
                                            class="form-input form-input--textarea"
                                            prop:value=move || draft_respuesta.get()
                                            on:input=move |ev| draft_respuesta.set(event_target_value(&ev))
                                        ></textarea>
                                        <label>"Estado"</label>
                                        <select
                                            class="form-input"
                                            prop:value=move || draft_estado.get().as_str()
                                            on:change=move |ev| {
                                                draft_estado.set(ReclamoStatus::parse(&event_target_value(&ev)));
                                            }
                                        >
                                            <option value="pendiente">"Pendiente"</option>
                                            <option value="atendido">"Atendido"</option>
                                            <option value="cerrado">"Cerrado"</option>
                                        </select>
                                        <div class="responder__actions">
                                            <button
                                                class="button button--small"
                                                disabled=move || saving.get()
                                                on:click=move |_| on_save(reclamo_id)
                                            >
                                                "Guardar"
                                            </button>
                                            <button
                                                class="button button--small button--secondary"
                                                on:click=move |_| editing.set(None)
                                            >
                                                "Cancelar"
                                            </button>
                                        </div>
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
