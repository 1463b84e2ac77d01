use super::*;

#[test]
fn validate_signup_requires_all_fields() {
    assert_eq!(
        validate_signup("", "a@b.pe", "secreto1", "secreto1"),
        Some("Completa todos los campos.")
    );
    assert_eq!(
        validate_signup("ana", "", "secreto1", "secreto1"),
        Some("Completa todos los campos.")
    );
}

#[test]
fn validate_signup_rejects_bad_email() {
    assert_eq!(
        validate_signup("ana", "no-es-correo", "secreto1", "secreto1"),
        Some("Ingresa un correo válido.")
    );
}

#[test]
fn validate_signup_rejects_short_password() {
    assert_eq!(
        validate_signup("ana", "a@b.pe", "corta", "corta"),
        Some("La contraseña debe tener al menos 6 caracteres.")
    );
}

#[test]
fn validate_signup_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_signup("ana", "a@b.pe", "secreto1", "secreto2"),
        Some("Las contraseñas no coinciden.")
    );
}

#[test]
fn validate_signup_accepts_a_complete_form() {
    assert_eq!(validate_signup("ana", "a@b.pe", "secreto1", "secreto1"), None);
}
