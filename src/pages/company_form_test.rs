use super::*;

#[test]
fn company_payload_trims_and_keeps_filled_fields() {
    let payload = company_payload("  Lavadero Sur  ", "20123456789", "Av. Principal 123");
    assert_eq!(payload.nombre, "Lavadero Sur");
    assert_eq!(payload.ruc.as_deref(), Some("20123456789"));
    assert_eq!(payload.direccion.as_deref(), Some("Av. Principal 123"));
}

#[test]
fn company_payload_omits_blank_optionals() {
    let payload = company_payload("Lavadero Sur", "   ", "");
    assert_eq!(payload.ruc, None);
    assert_eq!(payload.direccion, None);
}
