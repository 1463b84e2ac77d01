//! Glue for the Culqi checkout widget (third-party card tokenization).
//!
//! SYSTEM CONTEXT
//! ==============
//! Card data never touches this client: the widget collects it, Culqi
//! returns an opaque token id, and the token is what we send to the
//! backend. This module only injects the widget script and drives its
//! open/close/token-callback surface through `js_sys`. Browser-only;
//! every entry point degrades gracefully off `hydrate`.

/// Publishable key; safe to embed client-side.
pub const PUBLIC_KEY: &str = "pk_test_d65c942d87301cc5";

#[cfg(feature = "hydrate")]
const WIDGET_URL: &str = "https://checkout.culqi.com/js/v4";
#[cfg(feature = "hydrate")]
const SCRIPT_ID: &str = "culqi-checkout-script";

#[cfg(feature = "hydrate")]
fn widget_ctor(window: &web_sys::Window) -> Option<js_sys::Function> {
    use wasm_bindgen::{JsCast, JsValue};
    js_sys::Reflect::get(window, &JsValue::from_str("CulqiCheckout"))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
}

/// Inject the widget script tag once. Safe to call on every page mount.
pub fn ensure_widget_script() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if widget_ctor(&window).is_some() {
            return;
        }
        let Some(document) = window.document() else {
            return;
        };
        if document.get_element_by_id(SCRIPT_ID).is_some() {
            return;
        }
        let Ok(script) = document.create_element("script") else {
            return;
        };
        let _ = script.set_attribute("id", SCRIPT_ID);
        let _ = script.set_attribute("src", WIDGET_URL);
        let _ = script.set_attribute("defer", "");
        if let Some(body) = document.body() {
            let _ = body.append_child(&script);
        }
    }
}

/// Open the card-capture modal. `on_token` receives the Culqi token id once
/// the shopper finishes; the modal is closed before the callback runs.
#[allow(unused_variables)]
pub fn open_card_checkout(
    title: &str,
    email: &str,
    amount_cents: i64,
    on_token: impl Fn(String) + 'static,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsValue;

        let window = web_sys::window().ok_or_else(|| "sin ventana del navegador".to_owned())?;
        let ctor = widget_ctor(&window)
            .ok_or_else(|| "el widget de pago aún no está disponible".to_owned())?;

        let config_json = serde_json::json!({
            "settings": {
                "title": title,
                "currency": "PEN",
                "amount": amount_cents,
            },
            "client": { "email": email },
            "options": {
                "lang": "auto",
                "installments": false,
                "modal": true,
                "paymentMethods": {
                    "tarjeta": true,
                    "yape": false,
                    "billetera": false,
                    "bancaMovil": false,
                    "agente": false,
                    "cuotealo": false,
                },
                "paymentMethodsSort": ["tarjeta"],
            },
            "appearance": {
                "theme": "default",
                "menuType": "sidebar",
                "buttonCardPayText": "Guardar Tarjeta",
            },
        });
        let config = js_sys::JSON::parse(&config_json.to_string())
            .map_err(|_| "configuración del widget inválida".to_owned())?;

        let args = js_sys::Array::of2(&JsValue::from_str(PUBLIC_KEY), &config);
        let checkout = js_sys::Reflect::construct(&ctor, &args)
            .map_err(|_| "no se pudo iniciar el widget de pago".to_owned())?;

        let handle = checkout.clone();
        let on_event = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            let token = js_sys::Reflect::get(&handle, &JsValue::from_str("token"))
                .ok()
                .filter(|value| !value.is_undefined() && !value.is_null());
            if let Some(token) = token {
                let id = js_sys::Reflect::get(&token, &JsValue::from_str("id"))
                    .ok()
                    .and_then(|value| value.as_string());
                if let Some(id) = id {
                    call_method(&handle, "close");
                    on_token(id);
                }
            }
        });
        js_sys::Reflect::set(
            &checkout,
            &JsValue::from_str("culqi"),
            on_event.as_ref(),
        )
        .map_err(|_| "no se pudo registrar el callback del widget".to_owned())?;
        on_event.forget();

        call_method(&checkout, "open");
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_token;
        Err("no disponible fuera del navegador".to_owned())
    }
}

#[cfg(feature = "hydrate")]
fn call_method(target: &wasm_bindgen::JsValue, name: &str) {
    use wasm_bindgen::{JsCast, JsValue};
    if let Ok(method) = js_sys::Reflect::get(target, &JsValue::from_str(name)) {
        if let Some(function) = method.dyn_ref::<js_sys::Function>() {
            let _ = function.call0(target);
        }
    }
}
