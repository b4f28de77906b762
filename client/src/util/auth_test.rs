use super::*;

#[test]
fn stored_token_is_absent_in_non_hydrate_tests() {
    assert!(read_stored_token().is_none());
}

#[test]
fn unauthorized_shows_session_expired_alert() {
    let mut session = Session::new(Some("tok".to_owned()));
    let mut alert = AlertState::default();
    register_unauthorized(&mut session, &mut alert);
    assert_eq!(alert.kind, AlertKind::Danger);
    assert_eq!(alert.message, SESSION_EXPIRED_MESSAGE);
    assert!(alert.visible);
}

#[test]
fn repeated_unauthorized_schedules_one_redirect() {
    let mut session = Session::new(Some("tok".to_owned()));
    let mut alert = AlertState::default();

    let redirects = (0..3)
        .filter(|_| register_unauthorized(&mut session, &mut alert))
        .count();
    assert_eq!(redirects, 1);
    assert_eq!(alert.message, SESSION_EXPIRED_MESSAGE);
}

#[test]
fn login_route_targets_backend_login_page() {
    assert_eq!(LOGIN_ROUTE, "/api/user/login-page");
    assert_eq!(SESSION_EXPIRED_REDIRECT_MS, 2000);
}
