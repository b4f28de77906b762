//! Scheduler tab: polling interval form plus current settings and job status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Settings and job status come from two endpoints that load concurrently and
//! fill separate panels. A successful update waits briefly before reloading
//! both so the backend has rescheduled its job.

#[cfg(test)]
#[path = "schedule_settings_test.rs"]
mod schedule_settings_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::app::DashboardContext;
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::{IntervalUnit, JobList, JobStatus, ScheduleSetting};
use crate::state::region::Region;
#[cfg(feature = "hydrate")]
use crate::state::schedule::RELOAD_AFTER_UPDATE_MS;
use crate::state::schedule::{
    JOBS_FAILED_MESSAGE, JobSelection, NO_JOBS_MESSAGE, NOT_SCHEDULED, SETTINGS_FAILED_MESSAGE, ScheduleForm,
    extra_jobs_label, frequency_label, schedule_summary, select_job, update_failure_message,
};
use crate::util::alert::show_warning;
use crate::util::auth::handle_auth_error;
use crate::util::format::next_run_label;

/// Reload both scheduler panels. The two requests run concurrently.
pub fn load_scheduler_settings(ctx: DashboardContext) {
    load_current_settings(ctx);
    load_job_status(ctx);
}

fn load_current_settings(ctx: DashboardContext) {
    let ticket = ctx.schedule.try_update(|s| s.settings.begin()).unwrap_or_default();
    let headers = ctx.headers();
    leptos::task::spawn_local(async move {
        let region = match api::send::<ScheduleSetting>(api::scheduler_settings(), headers).await {
            Ok(resp) => resp
                .data
                .map_or_else(|| Region::Failed(SETTINGS_FAILED_MESSAGE.to_owned()), Region::Ready),
            Err(err) => {
                report_panel_failure(ctx, &err);
                Region::Failed(SETTINGS_FAILED_MESSAGE.to_owned())
            }
        };
        let setting = region.ready().copied();
        ctx.schedule.update(|s| {
            if s.settings.settle(ticket, region) {
                if let Some(setting) = setting {
                    s.form = ScheduleForm::from_setting(setting);
                }
            }
        });
    });
}

fn load_job_status(ctx: DashboardContext) {
    let ticket = ctx.schedule.try_update(|s| s.jobs.begin()).unwrap_or_default();
    let headers = ctx.headers();
    leptos::task::spawn_local(async move {
        let region = match api::send::<JobList>(api::scheduler_status(), headers).await {
            Ok(resp) => {
                let jobs = resp.data.unwrap_or_default().jobs;
                if jobs.len() > 1 {
                    log::warn!("scheduler reports {} jobs; showing the first", jobs.len());
                }
                Region::Ready(jobs)
            }
            Err(err) => {
                report_panel_failure(ctx, &err);
                Region::Failed(JOBS_FAILED_MESSAGE.to_owned())
            }
        };
        ctx.schedule.update(|s| {
            s.jobs.settle(ticket, region);
        });
    });
}

/// Panel loads report inline; only a 401 escalates to the shared alert.
fn report_panel_failure(ctx: DashboardContext, err: &ApiError) {
    if !handle_auth_error(err, ctx.session, ctx.alert) {
        log::warn!("scheduler panel load failed: {err}");
    }
}

/// Validate the form and submit it. Invalid input only raises a warning.
pub fn update_scheduler_settings(ctx: DashboardContext) {
    let setting = match ctx.schedule.with_untracked(|s| s.form.validate()) {
        Ok(setting) => setting,
        Err(warning) => {
            show_warning(ctx.alert, warning);
            return;
        }
    };
    let headers = ctx.headers();
    ctx.schedule.update(|s| s.saving = true);
    leptos::task::spawn_local(async move {
        let result = api::send::<serde_json::Value>(api::update_scheduler_settings(setting), headers).await;
        ctx.schedule.update(|s| s.saving = false);
        match result {
            Ok(resp) => {
                ctx.succeed(resp.message);
                #[cfg(feature = "hydrate")]
                gloo_timers::future::sleep(std::time::Duration::from_millis(RELOAD_AFTER_UPDATE_MS)).await;
                load_scheduler_settings(ctx);
            }
            Err(err) => ctx.fail(&err, update_failure_message(&err)),
        }
    });
}

/// Settings tab body.
#[component]
pub fn ScheduleSettings() -> impl IntoView {
    let ctx = DashboardContext::expect();
    let schedule = ctx.schedule;

    let settings = Memo::new(move |_| schedule.with(|s| s.settings.region.clone()));
    let jobs = Memo::new(move |_| schedule.with(|s| s.jobs.region.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        update_scheduler_settings(ctx);
    };

    view! {
        <div class="row g-4">
            <div class="col-md-6">
                <div class="card">
                    <div class="card-header">"Check Frequency"</div>
                    <div class="card-body">
                        <form id="schedulerSettingsForm" on:submit=on_submit>
                            <div class="mb-3">
                                <label for="intervalValue" class="form-label">"Interval"</label>
                                <input
                                    id="intervalValue"
                                    type="number"
                                    min="1"
                                    class="form-control"
                                    prop:value=move || schedule.with(|s| s.form.interval_value.clone())
                                    on:input=move |ev| {
                                        schedule.update(|s| s.form.interval_value = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <div class="mb-3">
                                <label for="intervalUnit" class="form-label">"Unit"</label>
                                <select
                                    id="intervalUnit"
                                    class="form-select"
                                    prop:value=move || schedule.with(|s| s.form.interval_unit.clone())
                                    on:change=move |ev| {
                                        schedule.update(|s| s.form.interval_unit = event_target_value(&ev));
                                    }
                                >
                                    <option value="">"Select unit"</option>
                                    {IntervalUnit::ALL
                                        .into_iter()
                                        .map(|unit| view! { <option value=unit.as_str()>{unit.label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || schedule.with(|s| s.saving)
                            >
                                "Update Settings"
                            </button>
                        </form>
                    </div>
                </div>
            </div>

            <div class="col-md-6">
                <div class="card mb-3">
                    <div class="card-header">"Current Schedule"</div>
                    <div class="card-body" id="currentScheduleInfo">
                        {move || match settings.get() {
                            Region::Idle => ().into_any(),
                            Region::Loading => loading_view(),
                            Region::Failed(message) => view! { <div class="text-danger">{message}</div> }.into_any(),
                            Region::Ready(setting) => current_settings_view(setting),
                        }}
                    </div>
                </div>
                <div class="card">
                    <div class="card-header">"Job Status"</div>
                    <div class="card-body" id="jobStatusInfo">
                        {move || match jobs.get() {
                            Region::Idle => ().into_any(),
                            Region::Loading => loading_view(),
                            Region::Failed(message) => view! { <div class="text-danger">{message}</div> }.into_any(),
                            Region::Ready(jobs) => job_status_view(&jobs),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

fn loading_view() -> AnyView {
    view! { <p class="text-muted">"Loading..."</p> }.into_any()
}

fn current_settings_view(setting: ScheduleSetting) -> AnyView {
    view! {
        <div class="d-flex justify-content-between align-items-center mb-2">
            <span class="fw-bold">"Frequency:"</span>
            <span class="badge bg-primary">{frequency_label(setting)}</span>
        </div>
        <div class="text-muted small">{schedule_summary(setting)}</div>
    }
    .into_any()
}

fn job_status_view(jobs: &[JobStatus]) -> AnyView {
    match select_job(jobs) {
        JobSelection::None => view! { <div class="text-warning">{NO_JOBS_MESSAGE}</div> }.into_any(),
        JobSelection::Single(job) => job_details(job, None),
        JobSelection::Multiple { primary, others } => job_details(primary, Some(extra_jobs_label(others))),
    }
}

fn job_details(job: &JobStatus, extra: Option<String>) -> AnyView {
    let name = job.display_name().to_owned();
    let next_run = next_run_label(job.next_run_time.as_deref(), NOT_SCHEDULED);
    let trigger = job.trigger.clone().filter(|t| !t.trim().is_empty());

    view! {
        <div class="d-flex justify-content-between align-items-center mb-2">
            <span class="fw-bold">"Status:"</span>
            <span class="badge bg-success">"Active"</span>
        </div>
        <div class="d-flex justify-content-between align-items-center mb-2">
            <span class="fw-bold">"Job Name:"</span>
            <span>{name}</span>
        </div>
        <div class="d-flex justify-content-between align-items-center">
            <span class="fw-bold">"Next Run:"</span>
            <span class="text-muted small">{next_run}</span>
        </div>
        {trigger.map(|t| view! { <div class="text-muted small mt-2">"Trigger: " {t}</div> })}
        {extra.map(|note| view! { <div class="text-warning small mt-2">{note}</div> })}
    }
    .into_any()
}
