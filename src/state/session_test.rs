use super::*;
use crate::net::types::{LoginResponse, UserAccount};

fn sample_session() -> Session {
    Session {
        username: "ana".to_owned(),
        email: Some("ana@example.com".to_owned()),
        roles: RoleFlags {
            is_staff: false,
            is_superuser: false,
        },
        token: "T1".to_owned(),
    }
}

#[test]
fn role_flags_admin_truth_table() {
    let cases = [
        (false, false, false),
        (true, false, true),
        (false, true, true),
        (true, true, true),
    ];
    for (is_staff, is_superuser, expected) in cases {
        let roles = RoleFlags { is_staff, is_superuser };
        assert_eq!(roles.is_admin(), expected, "staff={is_staff} super={is_superuser}");
    }
}

#[test]
fn session_record_round_trips_flattened_wire_shape() {
    let session = sample_session();
    let value = serde_json::to_value(&session).unwrap();
    // The stored object keeps the historical flat layout.
    assert_eq!(value["username"], "ana");
    assert_eq!(value["is_staff"], false);
    assert_eq!(value["is_superuser"], false);
    assert_eq!(value["token"], "T1");

    let parsed: Session = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, session);
}

#[test]
fn session_parses_record_without_role_flags() {
    let parsed: Session =
        serde_json::from_str(r#"{"username":"bob","token":"T2"}"#).unwrap();
    assert!(!parsed.is_admin());
    assert_eq!(parsed.email, None);
}

#[test]
fn from_login_copies_identity_roles_and_credential() {
    let session = Session::from_login(LoginResponse {
        token: "T2".to_owned(),
        user: UserAccount {
            username: "bob".to_owned(),
            email: None,
            is_staff: true,
            is_superuser: false,
        },
    });
    assert_eq!(session.username, "bob");
    assert!(session.is_admin());
    assert_eq!(session.token, "T2");
}

#[test]
fn debug_output_redacts_the_credential() {
    let rendered = format!("{:?}", sample_session());
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("T1"));
}

#[test]
fn current_is_anonymous_off_browser() {
    assert!(current().is_none());
}

#[test]
fn purge_twice_is_a_safe_noop() {
    purge();
    purge();
    assert!(current().is_none());
}

#[test]
fn session_state_login_exposes_record_to_readers() {
    let state = SessionState::new();
    assert!(state.get_untracked().is_none());

    state.login(sample_session());
    assert_eq!(state.get_untracked(), Some(sample_session()));

    state.logout();
    state.logout();
    assert!(state.get_untracked().is_none());
}
