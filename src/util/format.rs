//! Display formatting helpers for money, dates and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format an amount in soles, e.g. `S/ 150.00`.
pub fn soles(amount: f64) -> String {
    format!("S/ {amount:.2}")
}

/// Culqi reports plan amounts in cents.
pub fn soles_from_cents(cents: i64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let amount = cents as f64 / 100.0;
    soles(amount)
}

/// Date part of an ISO 8601 timestamp (`2025-03-01T09:30:00Z` → `2025-03-01`).
pub fn short_date(iso: &str) -> String {
    iso.split('T').next().unwrap_or(iso).to_owned()
}

/// Date plus minutes of an ISO 8601 timestamp
/// (`2025-03-01T09:30:00Z` → `2025-03-01 09:30`).
pub fn short_datetime(iso: &str) -> String {
    match iso.split_once('T') {
        Some((date, rest)) => {
            let time: String = rest.chars().take(5).collect();
            format!("{date} {time}")
        }
        None => iso.to_owned(),
    }
}

/// Localized date for an epoch-seconds timestamp (Culqi billing dates).
/// `None` outside the browser; callers show a placeholder.
pub fn epoch_date(secs: i64) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_precision_loss)]
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(secs as f64 * 1000.0));
        Some(String::from(date.to_locale_date_string("es-PE", &wasm_bindgen::JsValue::UNDEFINED)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = secs;
        None
    }
}
