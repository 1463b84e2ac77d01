use super::*;
use crate::state::session::RoleFlags;

fn session_with(is_staff: bool, is_superuser: bool) -> Session {
    Session {
        username: "u".to_owned(),
        email: None,
        roles: RoleFlags { is_staff, is_superuser },
        token: "tok".to_owned(),
    }
}

#[test]
fn anonymous_is_redirected_never_denied() {
    assert_eq!(
        decide(None, RoleRequirement::StaffOrSuperuser),
        Access::RedirectToLogin
    );
}

#[test]
fn plain_user_gets_denied_view_never_the_subtree() {
    let session = session_with(false, false);
    assert_eq!(
        decide(Some(&session), RoleRequirement::StaffOrSuperuser),
        Access::Denied
    );
}

#[test]
fn staff_flag_alone_authorizes() {
    let session = session_with(true, false);
    assert_eq!(
        decide(Some(&session), RoleRequirement::StaffOrSuperuser),
        Access::Authorized
    );
}

#[test]
fn superuser_flag_alone_authorizes() {
    let session = session_with(false, true);
    assert_eq!(
        decide(Some(&session), RoleRequirement::StaffOrSuperuser),
        Access::Authorized
    );
}
