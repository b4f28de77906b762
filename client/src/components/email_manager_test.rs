use super::*;

use crate::error::ValidationWarning;
use crate::state::alert::AlertKind;

#[test]
fn whitespace_email_only_warns() {
    let ctx = DashboardContext::new();
    ctx.emails.update(|s| s.new_email = "   \t".to_owned());

    add_email(ctx);

    let alert = ctx.alert.get_untracked();
    assert!(alert.visible);
    assert_eq!(alert.kind, AlertKind::Warning);
    assert_eq!(alert.message, "Please enter a valid email address.");
    assert_eq!(alert.message, ValidationWarning::EmptyEmail.to_string());

    let state = ctx.emails.get_untracked();
    assert_eq!(state.new_email, "   \t");
    assert_eq!(state.list, EmailsState::default().list);
}

#[test]
fn empty_email_only_warns() {
    let ctx = DashboardContext::new();

    add_email(ctx);

    let alert = ctx.alert.get_untracked();
    assert_eq!(alert.kind, AlertKind::Warning);
    assert_eq!(alert.message, ValidationWarning::EmptyEmail.to_string());
    assert_eq!(ctx.emails.get_untracked(), EmailsState::default());
}
