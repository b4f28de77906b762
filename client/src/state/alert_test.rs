use super::*;

#[test]
fn alert_state_default_hidden() {
    let state = AlertState::default();
    assert!(!state.visible);
    assert_eq!(state.seq, 0);
}

#[test]
fn show_replaces_kind_and_message() {
    let mut state = AlertState::default();
    state.show(AlertKind::Warning, "first");
    state.show(AlertKind::Danger, "second");
    assert_eq!(state.kind, AlertKind::Danger);
    assert_eq!(state.message, "second");
    assert!(state.visible);
}

#[test]
fn stale_timer_does_not_hide_newer_alert() {
    let mut state = AlertState::default();
    let first = state.show(AlertKind::Success, "Email added");
    let _second = state.show(AlertKind::Danger, "Failed to load emails. Please try again.");
    assert!(!state.dismiss_if_current(first));
    assert!(state.visible);
}

#[test]
fn current_timer_hides_its_alert() {
    let mut state = AlertState::default();
    let seq = state.show(AlertKind::Info, "Loading");
    assert!(state.dismiss_if_current(seq));
    assert!(!state.visible);
}

#[test]
fn only_success_and_info_auto_dismiss() {
    assert!(AlertKind::Success.auto_dismisses());
    assert!(AlertKind::Info.auto_dismisses());
    assert!(!AlertKind::Danger.auto_dismisses());
    assert!(!AlertKind::Warning.auto_dismisses());
}

#[test]
fn css_class_matches_kind() {
    assert_eq!(AlertKind::Success.css_class(), "alert-success");
    assert_eq!(AlertKind::Danger.css_class(), "alert-danger");
    assert_eq!(AlertKind::Warning.css_class(), "alert-warning");
    assert_eq!(AlertKind::Info.css_class(), "alert-info");
}
