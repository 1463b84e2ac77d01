//! Vehicle create/edit forms.

#[cfg(test)]
#[path = "car_form_test.rs"]
mod car_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{CarPayload, CarStatus};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Mirror of the backend's form validation, so obvious mistakes surface
/// before a round trip. The backend remains the authority.
fn validate_car(placa: &str, precio: &str, telefono: &str) -> Option<&'static str> {
    if placa.trim().is_empty() || precio.trim().is_empty() || telefono.trim().is_empty() {
        return Some("Completa placa, teléfono y precio.");
    }
    if placa.trim().len() < 7 {
        return Some("La placa debe tener al menos 7 caracteres.");
    }
    match precio.trim().parse::<f64>() {
        Ok(value) if value >= 0.0 => None,
        _ => Some("El precio debe ser un número positivo."),
    }
}

#[allow(clippy::too_many_arguments)]
fn car_payload(
    placa: &str,
    marca: &str,
    modelo: &str,
    color: &str,
    telefono: &str,
    precio: &str,
    estado: CarStatus,
    dia_salida: &str,
    empresa: i64,
) -> CarPayload {
    let optional = |value: &str| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    };
    CarPayload {
        placa: placa.trim().to_uppercase(),
        marca: marca.trim().to_owned(),
        color: optional(color),
        modelo: optional(modelo),
        numero_telefono: telefono.trim().to_owned(),
        precio: precio.trim().to_owned(),
        estado,
        dia_salida: optional(dia_salida),
        empresa,
    }
}

#[component]
pub fn AddCarPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    let params = use_params_map();
    let company_id = Memo::new(move |_| {
        params
            .with(|p| p.get("company_id"))
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or_default()
    });

    let placa = RwSignal::new(String::new());
    let marca = RwSignal::new(String::new());
    let modelo = RwSignal::new(String::new());
    let color = RwSignal::new(String::new());
    let telefono = RwSignal::new(String::new());
    let precio = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Some(message) = validate_car(&placa.get(), &precio.get(), &telefono.get()) {
            error.set(message.to_owned());
            return;
        }
        let payload = car_payload(
            &placa.get(),
            &marca.get(),
            &modelo.get(),
            &color.get(),
            &telefono.get(),
            &precio.get(),
            CarStatus::Espera,
            "",
            company_id.get_untracked(),
        );
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_car(&payload).await {
                    Ok(_) => navigate(
                        &format!("/companies/{}/cars", payload.empresa),
                        NavigateOptions::default(),
                    ),
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, payload);
        }
    };

    view! {
        <div class="form-page">
            <h1>"Agregar Carro"</h1>
            <form class="form-card" on:submit=on_submit>
                <label>"Placa"</label>
                <input
                    class="form-input"
                    type="text"
                    placeholder="ABC-123"
                    prop:value=move || placa.get()
                    on:input=move |ev| placa.set(event_target_value(&ev))
                />
                <label>"Marca"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || marca.get()
                    on:input=move |ev| marca.set(event_target_value(&ev))
                />
                <label>"Modelo (opcional)"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || modelo.get()
                    on:input=move |ev| modelo.set(event_target_value(&ev))
                />
                <label>"Color (opcional)"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || color.get()
                    on:input=move |ev| color.set(event_target_value(&ev))
                />
                <label>"Teléfono del cliente"</label>
                <input
                    class="form-input"
                    type="tel"
                    placeholder="+51999888777"
                    prop:value=move || telefono.get()
                    on:input=move |ev| telefono.set(event_target_value(&ev))
                />
                <label>"Precio (S/)"</label>
                <input
                    class="form-input"
                    type="number"
                    step="0.10"
                    min="0"
                    prop:value=move || precio.get()
                    on:input=move |ev| precio.set(event_target_value(&ev))
                />
                <button class="button" type="submit" disabled=move || busy.get()>
                    "Registrar"
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="page-status page-status--error">{move || error.get()}</p>
                </Show>
            </form>
        </div>
    }
}

#[component]
pub fn EditCarPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    let params = use_params_map();
    let company_id = Memo::new(move |_| {
        params
            .with(|p| p.get("company_id"))
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or_default()
    });
    let car_id = Memo::new(move |_| {
        params
            .with(|p| p.get("car_id"))
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or_default()
    });

    let placa = RwSignal::new(String::new());
    let marca = RwSignal::new(String::new());
    let modelo = RwSignal::new(String::new());
    let color = RwSignal::new(String::new());
    let telefono = RwSignal::new(String::new());
    let precio = RwSignal::new(String::new());
    let estado = RwSignal::new(CarStatus::Espera);
    let dia_salida = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let id = car_id.get_untracked();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_car(id).await {
                Ok(car) => {
                    placa.set(car.placa);
                    marca.set(car.marca);
                    modelo.set(car.modelo.unwrap_or_default());
                    color.set(car.color.unwrap_or_default());
                    telefono.set(car.numero_telefono);
                    precio.set(format!("{:.2}", car.precio));
                    estado.set(car.estado);
                    dia_salida.set(car.dia_salida.unwrap_or_default());
                }
                Err(e) => error.set(e.to_string()),
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Some(message) = validate_car(&placa.get(), &precio.get(), &telefono.get()) {
            error.set(message.to_owned());
            return;
        }
        let payload = car_payload(
            &placa.get(),
            &marca.get(),
            &modelo.get(),
            &color.get(),
            &telefono.get(),
            &precio.get(),
            estado.get(),
            &dia_salida.get(),
            company_id.get_untracked(),
        );
        let id = car_id.get_untracked();
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_car(id, &payload).await {
                    Ok(_) => navigate(
                        &format!("/companies/{}/cars", payload.empresa),
                        NavigateOptions::default(),
                    ),
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, payload, id);
        }
    };

    view! {
        <div class="form-page">
            <h1>"Editar Carro"</h1>
            <form class="form-card" on:submit=on_submit>
                <label>"Placa"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || placa.get()
                    on:input=move |ev| placa.set(event_target_value(&ev))
                />
                <label>"Marca"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || marca.get()
                    on:input=move |ev| marca.set(event_target_value(&ev))
                />
                <label>"Modelo (opcional)"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || modelo.get()
                    on:input=move |ev| modelo.set(event_target_value(&ev))
                />
                <label>"Color (opcional)"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || color.get()
                    on:input=move |ev| color.set(event_target_value(&ev))
                />
                <label>"Teléfono del cliente"</label>
                <input
                    class="form-input"
                    type="tel"
                    prop:value=move || telefono.get()
                    on:input=move |ev| telefono.set(event_target_value(&ev))
                />
                <label>"Precio (S/)"</label>
                <input
                    class="form-input"
                    type="number"
                    step="0.10"
                    min="0"
                    prop:value=move || precio.get()
                    on:input=move |ev| precio.set(event_target_value(&ev))
                />
                <label>"Estado"</label>
                <select
                    class="form-input"
                    prop:value=move || estado.get().as_str()
                    on:change=move |ev| estado.set(CarStatus::parse(&event_target_value(&ev)))
                >
                    <option value="espera">"En Espera"</option>
                    <option value="proceso">"En Proceso"</option>
                    <option value="terminado">"Terminado"</option>
                </select>
                <label>"Día de salida (opcional)"</label>
                <input
                    class="form-input"
                    type="datetime-local"
                    prop:value=move || dia_salida.get()
                    on:input=move |ev| dia_salida.set(event_target_value(&ev))
                />
                <button class="button" type="submit" disabled=move || busy.get()>
                    "Guardar Cambios"
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="page-status page-status--error">{move || error.get()}</p>
                </Show>
            </form>
        </div>
    }
}
