//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::error::ApiError;
use crate::pages::dashboard::DashboardPage;
use crate::state::alert::{AlertKind, AlertState};
use crate::state::breaches::BreachesState;
use crate::state::emails::EmailsState;
use crate::state::schedule::ScheduleState;
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::alert::show_alert;
use crate::util::auth::handle_auth_error;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Shared signals for every dashboard controller.
///
/// Provided once via context; controllers take it by value (it is `Copy`).
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub session: RwSignal<Session>,
    pub alert: RwSignal<AlertState>,
    pub ui: RwSignal<UiState>,
    pub emails: RwSignal<EmailsState>,
    pub breaches: RwSignal<BreachesState>,
    pub schedule: RwSignal<ScheduleState>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::default()),
            alert: RwSignal::new(AlertState::default()),
            ui: RwSignal::new(UiState::default()),
            emails: RwSignal::new(EmailsState::default()),
            breaches: RwSignal::new(BreachesState::default()),
            schedule: RwSignal::new(ScheduleState::default()),
        }
    }

    /// The context installed by [`App`].
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Bearer headers for the current session.
    pub fn headers(&self) -> [(&'static str, String); 2] {
        self.session.with_untracked(Session::auth_headers)
    }

    /// Report a failed call: 401s go through the session-expired flow,
    /// everything else becomes a danger alert with `message`.
    pub fn fail(&self, err: &ApiError, message: impl Into<String>) {
        if handle_auth_error(err, self.session, self.alert) {
            return;
        }
        log::warn!("request failed: {err}");
        show_alert(self.alert, AlertKind::Danger, message);
    }

    /// Like [`Self::fail`] for a region load. A superseded load only reports
    /// 401s, so a stale failure cannot overwrite a newer alert.
    pub fn fail_load(&self, current: bool, err: &ApiError, message: impl Into<String>) {
        if current {
            self.fail(err, message);
        } else if !handle_auth_error(err, self.session, self.alert) {
            log::debug!("ignoring failure of superseded load: {err}");
        }
    }

    pub fn succeed(&self, message: impl Into<String>) {
        show_alert(self.alert, AlertKind::Success, message);
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Provides the shared dashboard context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(DashboardContext::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/pwnwatch.css"/>
        <Title text="Pwned Monitor"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
