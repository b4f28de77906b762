//! Dashboard page: navbar, shared alert, and the three tabbed regions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On hydration it reads the stored token into the
//! session, redirects to login when there is none, and loads the emails tab.
//! Switching tabs loads the newly shown region.

use leptos::prelude::*;

use crate::app::DashboardContext;
use crate::components::alert_banner::AlertBanner;
use crate::components::breach_viewer::{BreachViewer, load_breaches};
use crate::components::email_manager::{EmailManager, load_emails};
use crate::components::schedule_settings::{ScheduleSettings, load_scheduler_settings};
use crate::state::session::Session;
use crate::state::ui::DashboardTab;
use crate::util::auth::{check_authentication, logout, read_stored_token};

/// Load the region behind `tab`.
pub fn load_tab(ctx: DashboardContext, tab: DashboardTab) {
    match tab {
        DashboardTab::Emails => load_emails(ctx),
        DashboardTab::Breaches => load_breaches(ctx),
        DashboardTab::Settings => load_scheduler_settings(ctx),
    }
}

/// Dashboard page. Content stays hidden until a session token is present.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = DashboardContext::expect();
    let session = ctx.session;
    let ui = ctx.ui;

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        session.set(Session::new(read_stored_token()));
        if check_authentication(session) {
            load_emails(ctx);
        }
    });

    let authenticated = Memo::new(move |_| session.with(Session::is_authenticated));
    let active_tab = Memo::new(move |_| ui.with(|u| u.active_tab));

    let on_tab = move |tab: DashboardTab| {
        let changed = ui.try_update(|u| u.activate(tab)).unwrap_or(false);
        if changed && session.with_untracked(Session::is_authenticated) {
            load_tab(ctx, tab);
        }
    };

    view! {
        <nav class="navbar navbar-dark bg-dark mb-4">
            <div class="container">
                <span class="navbar-brand">
                    <i class="bi bi-shield-lock me-2"></i>
                    "Pwned Monitor"
                </span>
                <button type="button" class="btn btn-outline-light btn-sm" on:click=move |_| logout(session)>
                    "Logout"
                </button>
            </div>
        </nav>

        <main class="container">
            <AlertBanner/>

            <Show
                when=move || authenticated.get()
                fallback=|| view! { <p class="text-muted">"Checking session..."</p> }
            >
                <ul class="nav nav-tabs mb-3" role="tablist">
                    {DashboardTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <li class="nav-item" role="presentation">
                                    <button
                                        id=tab.button_id()
                                        type="button"
                                        class="nav-link"
                                        class:active=move || active_tab.get() == tab
                                        role="tab"
                                        on:click=move |_| on_tab(tab)
                                    >
                                        {tab.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="tab-content">
                    <div class="tab-pane show active" class:d-none=move || active_tab.get() != DashboardTab::Emails>
                        <EmailManager/>
                    </div>
                    <div class="tab-pane show active" class:d-none=move || active_tab.get() != DashboardTab::Breaches>
                        <BreachViewer/>
                    </div>
                    <div class="tab-pane show active" class:d-none=move || active_tab.get() != DashboardTab::Settings>
                        <ScheduleSettings/>
                    </div>
                </div>
            </Show>
        </main>
    }
}
