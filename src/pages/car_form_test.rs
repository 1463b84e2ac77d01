use super::*;

#[test]
fn validate_car_requires_core_fields() {
    assert_eq!(
        validate_car("", "150.00", "999888777"),
        Some("Completa placa, teléfono y precio.")
    );
    assert_eq!(
        validate_car("ABC-123", "", "999888777"),
        Some("Completa placa, teléfono y precio.")
    );
}

#[test]
fn validate_car_rejects_short_plates() {
    assert_eq!(
        validate_car("AB-12", "150.00", "999888777"),
        Some("La placa debe tener al menos 7 caracteres.")
    );
}

#[test]
fn validate_car_rejects_negative_or_malformed_prices() {
    assert_eq!(
        validate_car("ABC-123", "-5", "999888777"),
        Some("El precio debe ser un número positivo.")
    );
    assert_eq!(
        validate_car("ABC-123", "gratis", "999888777"),
        Some("El precio debe ser un número positivo.")
    );
}

#[test]
fn validate_car_accepts_a_complete_form() {
    assert_eq!(validate_car("ABC-123", "150.00", "+51999888777"), None);
}

#[test]
fn car_payload_uppercases_plate_and_omits_blank_optionals() {
    let payload = car_payload(
        "abc-123",
        " Toyota ",
        "",
        "rojo",
        "999888777",
        "150.00",
        CarStatus::Espera,
        "",
        4,
    );
    assert_eq!(payload.placa, "ABC-123");
    assert_eq!(payload.marca, "Toyota");
    assert_eq!(payload.modelo, None);
    assert_eq!(payload.color.as_deref(), Some("rojo"));
    assert_eq!(payload.dia_salida, None);
    assert_eq!(payload.empresa, 4);
}
