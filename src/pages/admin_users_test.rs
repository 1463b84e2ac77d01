use super::*;

#[test]
fn role_label_prefers_superuser() {
    assert_eq!(role_label(true, true), "Superusuario");
    assert_eq!(role_label(false, true), "Superusuario");
}

#[test]
fn role_label_reports_staff_and_plain_users() {
    assert_eq!(role_label(true, false), "Staff");
    assert_eq!(role_label(false, false), "Usuario");
}
