//! Error type for the REST boundary.
//!
//! ERROR HANDLING
//! ==============
//! The gateway intercepts exactly one condition (401, session expiry);
//! everything else is surfaced to the calling view as a value so each screen
//! owns its own user-facing messaging.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a request issued through the gateway.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the credential; the gateway has already purged
    /// the session and forced navigation to the login view.
    #[error("la sesión ha expirado")]
    Unauthorized,
    /// Any non-success, non-401 HTTP status, with the backend's message
    /// when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("error de red: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("respuesta inválida: {0}")]
    Decode(String),
    /// Requests cannot be issued outside the browser.
    #[error("no disponible fuera del navegador")]
    Unavailable,
}

impl ApiError {
    /// Build the pass-through variant for a non-auth error status.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: error_message(status, body),
        }
    }

    /// The profile gate treats a 404 as "no customer profile yet".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Extract the backend's message from an error body. Django REST answers
/// either `{"error": "..."}` (this backend's own views) or
/// `{"detail": "..."}` (framework defaults); anything else keeps a generic
/// status-tagged message.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "detail"] {
            if let Some(message) = value.get(key).and_then(serde_json::Value::as_str) {
                return message.to_owned();
            }
        }
    }
    format!("la solicitud falló ({status})")
}
