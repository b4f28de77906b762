//! Breaches tab: fetch, group by email, join addresses, render cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Breach records only carry `email_id`, so a non-empty breach list triggers
//! a second `GET /api/email` to label the groups. Both fetches share one
//! ticket; a reload issued in between discards the older chain.

#[cfg(test)]
#[path = "breach_viewer_test.rs"]
mod breach_viewer_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::DashboardContext;
use crate::components::breach_card::BreachCard;
use crate::net::api;
use crate::net::types::{BreachList, BreachRecord, EmailList};
use crate::state::breaches::{
    BreachGroup, BreachStep, BreachView, EMAIL_LOOKUP_FAILED_MESSAGE, LOAD_FAILED_MESSAGE, NO_BREACHES_MESSAGE,
    NO_BREACHES_TITLE, label_groups, plan_breach_view,
};
use crate::state::region::Region;
use crate::util::auth::handle_auth_error;

/// Fetch breaches (and, when there are any, the email list) into the
/// breaches region.
pub fn load_breaches(ctx: DashboardContext) {
    let ticket = ctx.breaches.try_update(|s| s.view.begin()).unwrap_or_default();
    let headers = ctx.headers();
    leptos::task::spawn_local(async move {
        let records = match api::send::<BreachList>(api::list_breaches(), headers.clone()).await {
            Ok(resp) => resp.data.unwrap_or_default().platforms,
            Err(err) => {
                let current = ctx
                    .breaches
                    .try_update(|s| s.settle(ticket, Region::Failed(LOAD_FAILED_MESSAGE.to_owned())))
                    .unwrap_or(false);
                ctx.fail_load(current, &err, err.alert_message(LOAD_FAILED_MESSAGE));
                return;
            }
        };

        let Some(groups) = apply_breach_list(ctx, ticket, records) else {
            return;
        };

        let region = match api::send::<EmailList>(api::list_emails(), headers).await {
            Ok(resp) => {
                let emails = resp.data.unwrap_or_default().emails;
                Region::Ready(BreachView::Grouped(label_groups(groups, &emails)))
            }
            Err(err) => {
                if !handle_auth_error(&err, ctx.session, ctx.alert) {
                    log::warn!("email lookup for breaches failed: {err}");
                }
                Region::Failed(EMAIL_LOOKUP_FAILED_MESSAGE.to_owned())
            }
        };
        ctx.breaches.update(|s| {
            s.settle(ticket, region);
        });
    });
}

/// Settle the region when the breach list needs no email lookup. Returns the
/// groups to label, or `None` when the chain stops here (empty list or a
/// newer load).
fn apply_breach_list(ctx: DashboardContext, ticket: u64, records: Vec<BreachRecord>) -> Option<Vec<BreachGroup>> {
    match plan_breach_view(records) {
        BreachStep::Done(view) => {
            ctx.breaches.update(|s| {
                s.settle(ticket, Region::Ready(view));
            });
            None
        }
        BreachStep::ResolveEmails(groups) => {
            if ctx.breaches.with_untracked(|s| s.view.seq.is_current(ticket)) {
                Some(groups)
            } else {
                log::debug!("breach load {ticket} superseded before email lookup");
                None
            }
        }
    }
}

/// Breaches tab body.
#[component]
pub fn BreachViewer() -> impl IntoView {
    let breaches = DashboardContext::expect().breaches;
    let region = Memo::new(move |_| breaches.with(|s| s.view.region.clone()));

    view! {
        <div id="breachesContent">
            {move || match region.get() {
                Region::Idle => ().into_any(),
                Region::Loading => view! { <p class="text-muted">"Loading breaches..."</p> }.into_any(),
                Region::Failed(message) => view! { <div class="alert alert-danger">{message}</div> }.into_any(),
                Region::Ready(BreachView::NoBreaches) => view! {
                    <div class="alert alert-success">
                        <h5>{NO_BREACHES_TITLE}</h5>
                        <p>{NO_BREACHES_MESSAGE}</p>
                    </div>
                }
                .into_any(),
                Region::Ready(BreachView::Grouped(groups)) => groups
                    .into_iter()
                    .map(|group| view! { <BreachCard group=group/> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
