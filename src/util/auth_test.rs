use super::*;
use crate::state::session::RoleFlags;

#[test]
fn should_redirect_when_session_missing() {
    assert!(should_redirect_unauth(None));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let session = Session {
        username: "ana".to_owned(),
        email: None,
        roles: RoleFlags::default(),
        token: "T1".to_owned(),
    };
    assert!(!should_redirect_unauth(Some(&session)));
}
