use super::*;

fn authed() -> SessionState {
    SessionState::restore(Some("jwt".to_owned()))
}

#[test]
fn protected_routes_redirect_without_token() {
    let session = SessionState::default();
    assert_eq!(
        check_path(HOME_PATH, &session),
        GuardOutcome::RedirectToLogin
    );
    assert_eq!(
        check_path(ARTICLES_PATH, &session),
        GuardOutcome::RedirectToLogin
    );
}

#[test]
fn protected_routes_proceed_with_token() {
    let session = authed();
    assert_eq!(check_path(HOME_PATH, &session), GuardOutcome::Allowed);
    assert_eq!(check_path(ARTICLES_PATH, &session), GuardOutcome::Allowed);
}

#[test]
fn public_routes_always_proceed() {
    for session in [SessionState::default(), authed()] {
        assert_eq!(check_path(LOGIN_PATH, &session), GuardOutcome::Allowed);
        assert_eq!(check_path(REGISTER_PATH, &session), GuardOutcome::Allowed);
    }
}

#[test]
fn unknown_paths_carry_no_auth_requirement() {
    assert_eq!(
        check_path("/no-such-route", &SessionState::default()),
        GuardOutcome::Allowed
    );
}

#[test]
fn guard_redirects_again_after_logout() {
    let mut session = authed();
    assert_eq!(check_path(HOME_PATH, &session), GuardOutcome::Allowed);
    session.clear_auth();
    assert_eq!(
        check_path(HOME_PATH, &session),
        GuardOutcome::RedirectToLogin
    );
}

#[test]
fn route_meta_lookup_matches_table() {
    assert_eq!(route_meta(LOGIN_PATH).map(|m| m.requires_auth), Some(false));
    assert_eq!(route_meta(HOME_PATH).map(|m| m.requires_auth), Some(true));
    assert_eq!(route_meta("/nope"), None);
}
