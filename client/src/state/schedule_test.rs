use super::*;
use crate::net::api::{HttpMethod, update_scheduler_settings};

fn form(value: &str, unit: &str) -> ScheduleForm {
    ScheduleForm { interval_value: value.to_owned(), interval_unit: unit.to_owned() }
}

fn job(id: &str) -> JobStatus {
    JobStatus { id: id.to_owned(), name: None, next_run_time: None, trigger: None }
}

// =============================================================
// Form validation
// =============================================================

#[test]
fn zero_interval_is_rejected() {
    assert_eq!(form("0", "hours").validate(), Err(ValidationWarning::InvalidInterval));
}

#[test]
fn negative_interval_is_rejected() {
    assert_eq!(form("-3", "minutes").validate(), Err(ValidationWarning::InvalidInterval));
}

#[test]
fn non_numeric_interval_is_rejected() {
    assert_eq!(form("", "hours").validate(), Err(ValidationWarning::InvalidInterval));
    assert_eq!(form("five", "hours").validate(), Err(ValidationWarning::InvalidInterval));
}

#[test]
fn missing_unit_is_rejected() {
    assert_eq!(form("5", "").validate(), Err(ValidationWarning::MissingUnit));
}

#[test]
fn interval_is_checked_before_unit() {
    assert_eq!(form("0", "").validate(), Err(ValidationWarning::InvalidInterval));
}

#[test]
fn valid_form_builds_exactly_one_put() {
    let setting = form(" 5 ", "hours").validate().unwrap();
    assert_eq!(setting, ScheduleSetting { interval_value: 5, interval_unit: IntervalUnit::Hours });

    let req = update_scheduler_settings(setting);
    assert_eq!(req.method, HttpMethod::Put);
    assert_eq!(req.body, Some(serde_json::json!({ "interval_value": 5, "interval_unit": "hours" })));
}

#[test]
fn form_prefills_from_setting() {
    let prefilled = ScheduleForm::from_setting(ScheduleSetting { interval_value: 30, interval_unit: IntervalUnit::Minutes });
    assert_eq!(prefilled, form("30", "minutes"));
}

// =============================================================
// Summary text
// =============================================================

#[test]
fn summary_sentence_names_frequency() {
    let setting = ScheduleSetting { interval_value: 2, interval_unit: IntervalUnit::Days };
    assert_eq!(frequency_label(setting), "2 days");
    assert_eq!(schedule_summary(setting), "The system checks for new breaches every 2 days.");
}

// =============================================================
// Job selection
// =============================================================

#[test]
fn no_jobs_selects_none() {
    assert_eq!(select_job(&[]), JobSelection::None);
}

#[test]
fn single_job_is_selected() {
    let jobs = vec![job("pwn_check_job")];
    assert_eq!(select_job(&jobs), JobSelection::Single(&jobs[0]));
}

#[test]
fn multiple_jobs_are_reported_explicitly() {
    let jobs = vec![job("a"), job("b"), job("c")];
    assert_eq!(select_job(&jobs), JobSelection::Multiple { primary: &jobs[0], others: 2 });
}

#[test]
fn extra_jobs_label_pluralizes() {
    assert_eq!(extra_jobs_label(1), "+1 more job");
    assert_eq!(extra_jobs_label(3), "+3 more jobs");
}

// =============================================================
// Update failures
// =============================================================

#[test]
fn invalid_format_gets_specific_message() {
    assert_eq!(update_failure_message(&ApiError::InvalidFormat), INVALID_FORMAT_MESSAGE);
}

#[test]
fn rejected_update_shows_server_message() {
    let err = ApiError::Rejected { message: "Invalid interval unit".to_owned() };
    assert_eq!(update_failure_message(&err), "Invalid interval unit");

    let blank = ApiError::Rejected { message: String::new() };
    assert_eq!(update_failure_message(&blank), UPDATE_REJECTED_MESSAGE);
}

#[test]
fn other_update_failures_are_generic() {
    let err = ApiError::Status { status: 500, message: Some("An unknown error occurred.".to_owned()) };
    assert_eq!(update_failure_message(&err), UPDATE_FAILED_MESSAGE);
    assert_eq!(update_failure_message(&ApiError::Network("offline".to_owned())), UPDATE_FAILED_MESSAGE);
}
