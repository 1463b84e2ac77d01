use super::*;

#[test]
fn error_message_prefers_backend_error_field() {
    let message = error_message(400, r#"{"error": "Ya tienes una empresa registrada."}"#);
    assert_eq!(message, "Ya tienes una empresa registrada.");
}

#[test]
fn error_message_falls_back_to_drf_detail_field() {
    let message = error_message(403, r#"{"detail": "No autorizado."}"#);
    assert_eq!(message, "No autorizado.");
}

#[test]
fn error_message_keeps_generic_text_for_opaque_bodies() {
    assert_eq!(error_message(500, "<html>boom</html>"), "la solicitud falló (500)");
    assert_eq!(error_message(502, ""), "la solicitud falló (502)");
}

#[test]
fn from_status_carries_status_and_message() {
    let error = ApiError::from_status(404, r#"{"error": "Cliente no encontrado"}"#);
    assert_eq!(
        error,
        ApiError::Status {
            status: 404,
            message: "Cliente no encontrado".to_owned()
        }
    );
    assert!(error.is_not_found());
}

#[test]
fn non_404_statuses_are_not_not_found() {
    assert!(!ApiError::from_status(400, "{}").is_not_found());
    assert!(!ApiError::Unauthorized.is_not_found());
}
