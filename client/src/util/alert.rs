//! Show the shared status alert, scheduling auto-dismiss where applicable.

use leptos::prelude::*;

use crate::error::ValidationWarning;
#[cfg(feature = "hydrate")]
use crate::state::alert::AUTO_DISMISS_MS;
use crate::state::alert::{AlertKind, AlertState};

/// Replace the alert with `message`. Success/info alerts hide themselves
/// after [`crate::state::alert::AUTO_DISMISS_MS`] unless replaced first.
pub fn show_alert(alert: RwSignal<AlertState>, kind: AlertKind, message: impl Into<String>) {
    let message = message.into();
    let seq = alert.try_update(|a| a.show(kind, message)).unwrap_or_default();
    if !kind.auto_dismisses() {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_DISMISS_MS)).await;
        alert.update(|a| {
            a.dismiss_if_current(seq);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

/// Surface a local validation failure as a warning.
pub fn show_warning(alert: RwSignal<AlertState>, warning: ValidationWarning) {
    show_alert(alert, AlertKind::Warning, warning.to_string());
}
