//! Shared auth helpers: token storage, login redirects, 401 handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every controller applies identical unauthenticated behavior: a missing
//! token redirects immediately, a rejected token shows one session-expired
//! alert and redirects after a short delay.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::error::ApiError;
use crate::state::alert::{AlertKind, AlertState};
use crate::state::session::Session;
#[cfg(feature = "hydrate")]
use crate::state::session::TOKEN_STORAGE_KEY;

/// Login page served by the backend.
pub const LOGIN_ROUTE: &str = "/api/user/login-page";
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please login again.";
/// Delay before redirecting after a 401, long enough to read the alert.
pub const SESSION_EXPIRED_REDIRECT_MS: u64 = 2000;

/// Read the bearer token written by the login flow.
pub fn read_stored_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(TOKEN_STORAGE_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn clear_stored_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// Navigate the browser to the login page.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_ROUTE);
        }
    }
}

/// Return `true` if a token is present; otherwise redirect to login.
pub fn check_authentication(session: RwSignal<Session>) -> bool {
    if session.with_untracked(Session::is_authenticated) {
        return true;
    }
    log::info!("no session token; redirecting to login");
    redirect_to_login();
    false
}

/// Record a 401: show the session-expired alert and expire the session.
///
/// Returns whether the caller should schedule the login redirect, which is
/// true only for the first 401 of a session.
pub fn register_unauthorized(session: &mut Session, alert: &mut AlertState) -> bool {
    alert.show(AlertKind::Danger, SESSION_EXPIRED_MESSAGE);
    session.expire()
}

/// Handle `err` if it is a 401. Returns `false` for every other error, in
/// which case the caller shows its own message.
pub fn handle_auth_error(err: &ApiError, session: RwSignal<Session>, alert: RwSignal<AlertState>) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    let mut schedule_redirect = false;
    session.update(|s| alert.update(|a| schedule_redirect = register_unauthorized(s, a)));
    if schedule_redirect {
        log::warn!("session rejected by backend; redirecting to login");
        clear_stored_token();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async {
            gloo_timers::future::sleep(std::time::Duration::from_millis(SESSION_EXPIRED_REDIRECT_MS)).await;
            redirect_to_login();
        });
    }
    true
}

/// Forget the token and go to the login page. Safe to call repeatedly.
pub fn logout(session: RwSignal<Session>) {
    session.update(Session::clear);
    clear_stored_token();
    redirect_to_login();
}
