//! Monitored-email tab: list, add, delete, and bulk delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mutation is followed by a full list reload; nothing is patched
//! locally. The list region renders whatever the latest `GET /api/email`
//! settled into `EmailsState`.

#[cfg(test)]
#[path = "email_manager_test.rs"]
mod email_manager_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::DashboardContext;
use crate::net::api;
use crate::net::types::{EmailList, EmailRecord};
use crate::state::emails::{
    CONFIRM_DELETE_ALL_MESSAGE, CONFIRM_DELETE_MESSAGE, DELETE_ALL_FAILED_MESSAGE, DELETE_FAILED_MESSAGE,
    EMPTY_LIST_MESSAGE, EmailsState, LOAD_FAILED_MESSAGE, add_failure_message, validate_new_email,
};
use crate::state::region::Region;
use crate::util::alert::show_warning;
use crate::util::dialog::confirm;

/// Fetch the email list into the emails region.
pub fn load_emails(ctx: DashboardContext) {
    let ticket = ctx.emails.try_update(|s| s.list.begin()).unwrap_or_default();
    let headers = ctx.headers();
    leptos::task::spawn_local(async move {
        match api::send::<EmailList>(api::list_emails(), headers).await {
            Ok(resp) => {
                let emails = resp.data.unwrap_or_default().emails;
                ctx.emails.update(|s| {
                    s.list.settle(ticket, Region::Ready(emails));
                });
            }
            Err(err) => {
                let current = ctx.emails.try_update(|s| s.list.fail(ticket, LOAD_FAILED_MESSAGE)).unwrap_or(false);
                ctx.fail_load(current, &err, err.alert_message(LOAD_FAILED_MESSAGE));
            }
        }
    });
}

/// Submit the add-email input. Blank input only raises a warning.
pub fn add_email(ctx: DashboardContext) {
    let raw = ctx.emails.with_untracked(|s| s.new_email.clone());
    let email = match validate_new_email(&raw) {
        Ok(email) => email,
        Err(warning) => {
            show_warning(ctx.alert, warning);
            return;
        }
    };
    let headers = ctx.headers();
    leptos::task::spawn_local(async move {
        match api::send::<serde_json::Value>(api::add_email(&email), headers).await {
            Ok(resp) => {
                ctx.succeed(resp.message);
                ctx.emails.update(|s| s.new_email.clear());
                load_emails(ctx);
            }
            Err(err) => ctx.fail(&err, add_failure_message(&err)),
        }
    });
}

pub fn delete_email(ctx: DashboardContext, id: i64) {
    if !confirm(CONFIRM_DELETE_MESSAGE) {
        return;
    }
    run_mutation(ctx, api::delete_email(id), DELETE_FAILED_MESSAGE);
}

pub fn delete_all_emails(ctx: DashboardContext) {
    if !confirm(CONFIRM_DELETE_ALL_MESSAGE) {
        return;
    }
    run_mutation(ctx, api::delete_all_emails(), DELETE_ALL_FAILED_MESSAGE);
}

fn run_mutation(ctx: DashboardContext, request: api::ApiRequest, fallback: &'static str) {
    let headers = ctx.headers();
    leptos::task::spawn_local(async move {
        match api::send::<serde_json::Value>(request, headers).await {
            Ok(resp) => {
                ctx.succeed(resp.message);
                load_emails(ctx);
            }
            Err(err) => ctx.fail(&err, err.alert_message(fallback)),
        }
    });
}

/// Emails tab body.
#[component]
pub fn EmailManager() -> impl IntoView {
    let ctx = DashboardContext::expect();
    let emails = ctx.emails;

    let region = Memo::new(move |_| emails.with(|s| s.list.region.clone()));
    let show_bulk_delete = Memo::new(move |_| emails.with(EmailsState::show_bulk_delete));
    let show_empty_message = Memo::new(move |_| emails.with(EmailsState::show_empty_message));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        add_email(ctx);
    };

    view! {
        <div class="card mb-4">
            <div class="card-body">
                <form id="addEmailForm" class="d-flex gap-2" on:submit=on_submit>
                    <input
                        id="newEmailInput"
                        type="email"
                        class="form-control"
                        placeholder="Enter email address"
                        prop:value=move || emails.with(|s| s.new_email.clone())
                        on:input=move |ev| emails.update(|s| s.new_email = event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">"Add Email"</button>
                </form>
            </div>
        </div>

        <div class="d-flex justify-content-between align-items-center mb-2">
            <h5 class="mb-0">"Monitored Emails"</h5>
            <button
                id="deleteAllBtn"
                type="button"
                class="btn btn-outline-danger btn-sm"
                class:d-none=move || !show_bulk_delete.get()
                on:click=move |_| delete_all_emails(ctx)
            >
                "Delete All"
            </button>
        </div>

        <div id="emailList">
            {move || match region.get() {
                Region::Idle => ().into_any(),
                Region::Loading => view! { <p class="text-muted">"Loading emails..."</p> }.into_any(),
                Region::Failed(message) => view! { <div class="text-danger">{message}</div> }.into_any(),
                Region::Ready(_) if show_empty_message.get() => {
                    view! { <div class="alert alert-info">{EMPTY_LIST_MESSAGE}</div> }.into_any()
                }
                Region::Ready(items) => items
                    .into_iter()
                    .map(|record| view! { <EmailRow record=record/> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn EmailRow(record: EmailRecord) -> impl IntoView {
    let ctx = DashboardContext::expect();
    let id = record.id;

    view! {
        <div class="email-item" data-email-id=id.to_string()>
            <span class="email-text">{record.email}</span>
            <button type="button" class="btn btn-danger btn-sm" on:click=move |_| delete_email(ctx, id)>
                "Delete"
            </button>
        </div>
    }
}
