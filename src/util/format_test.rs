use super::*;

#[test]
fn soles_renders_two_decimals() {
    assert_eq!(soles(150.0), "S/ 150.00");
    assert_eq!(soles(85.5), "S/ 85.50");
    assert_eq!(soles(0.0), "S/ 0.00");
}

#[test]
fn soles_from_cents_divides_by_hundred() {
    assert_eq!(soles_from_cents(2990), "S/ 29.90");
    assert_eq!(soles_from_cents(100), "S/ 1.00");
}

#[test]
fn short_date_takes_date_part() {
    assert_eq!(short_date("2025-03-01T09:30:00Z"), "2025-03-01");
    assert_eq!(short_date("2025-03-01"), "2025-03-01");
}

#[test]
fn short_datetime_keeps_minutes() {
    assert_eq!(short_datetime("2025-03-01T09:30:00.123Z"), "2025-03-01 09:30");
    assert_eq!(short_datetime("sin-fecha"), "sin-fecha");
}

#[test]
fn epoch_date_is_unavailable_off_browser() {
    assert_eq!(epoch_date(1_716_600_000), None);
}
