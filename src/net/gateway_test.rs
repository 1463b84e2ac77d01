use super::*;

#[test]
fn auth_header_value_uses_token_scheme() {
    assert_eq!(auth_header_value("T1"), "Token T1");
}

#[test]
fn auth_header_value_does_not_alter_the_credential() {
    let token = "9c3b1e-with-dashes_and_underscores";
    assert_eq!(auth_header_value(token), format!("Token {token}"));
}

#[test]
fn only_401_counts_as_unauthorized() {
    assert!(is_unauthorized(401));
    for status in [200u16, 201, 204, 400, 403, 404, 500] {
        assert!(!is_unauthorized(status), "status {status}");
    }
}

#[test]
fn expiry_is_handled_exactly_once() {
    reset_expiry_latch();
    assert!(handle_unauthorized());
    // Every later 401 in the same page lifetime is a no-op.
    assert!(!handle_unauthorized());
    assert!(!handle_unauthorized());
    reset_expiry_latch();
    assert!(handle_unauthorized());
    reset_expiry_latch();
}
