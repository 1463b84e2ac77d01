use super::*;

fn complete_payload() -> CustomerPayload {
    CustomerPayload {
        address: "Av. Principal 123".to_owned(),
        address_city: "Lima".to_owned(),
        country_code: "PE".to_owned(),
        email: "ana@example.com".to_owned(),
        first_name: "Ana".to_owned(),
        last_name: "Torres".to_owned(),
        phone_number: "999888777".to_owned(),
    }
}

#[test]
fn validate_customer_accepts_a_complete_payload() {
    assert_eq!(validate_customer(&complete_payload()), None);
}

#[test]
fn validate_customer_requires_both_names() {
    let mut payload = complete_payload();
    payload.last_name.clear();
    assert_eq!(
        validate_customer(&payload),
        Some("Nombre y apellido son obligatorios.")
    );
}

#[test]
fn validate_customer_requires_a_plausible_email() {
    let mut payload = complete_payload();
    payload.email = "sin-arroba".to_owned();
    assert_eq!(validate_customer(&payload), Some("Ingresa un correo válido."));
}

#[test]
fn validate_customer_requires_address_and_city() {
    let mut payload = complete_payload();
    payload.address_city.clear();
    assert_eq!(
        validate_customer(&payload),
        Some("Dirección y ciudad son obligatorias.")
    );
}
