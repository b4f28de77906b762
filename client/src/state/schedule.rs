//! Scheduler settings form and job-status state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The polling interval lives on the backend; this state mirrors the latest
//! settings and job list and holds the unsaved form inputs. Settings and job
//! status load independently and settle into separate regions.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use super::region::Tracked;
use crate::error::{ApiError, ValidationWarning};
use crate::net::types::{IntervalUnit, JobStatus, ScheduleSetting};

pub const SETTINGS_FAILED_MESSAGE: &str = "Failed to load settings";
pub const JOBS_FAILED_MESSAGE: &str = "Failed to load job status";
pub const NO_JOBS_MESSAGE: &str = "No scheduled jobs found";
pub const NOT_SCHEDULED: &str = "Not scheduled";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid settings format. Please check your input.";
pub const UPDATE_REJECTED_MESSAGE: &str = "Failed to update settings";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update scheduler settings. Please try again.";
/// Grace period before re-reading settings after an update, so the backend
/// can reschedule its job first.
pub const RELOAD_AFTER_UPDATE_MS: u64 = 1000;

/// Raw form inputs as typed/selected by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleForm {
    pub interval_value: String,
    pub interval_unit: String,
}

impl ScheduleForm {
    /// Pre-fill the form from the server's current settings.
    pub fn from_setting(setting: ScheduleSetting) -> Self {
        Self {
            interval_value: setting.interval_value.to_string(),
            interval_unit: setting.interval_unit.as_str().to_owned(),
        }
    }

    /// Check the inputs before any request is issued.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationWarning::InvalidInterval`] unless the value parses
    /// as a positive integer, and [`ValidationWarning::MissingUnit`] when no
    /// known unit is selected.
    pub fn validate(&self) -> Result<ScheduleSetting, ValidationWarning> {
        let interval_value = self
            .interval_value
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|v| *v > 0)
            .ok_or(ValidationWarning::InvalidInterval)?;
        let interval_unit = IntervalUnit::parse(&self.interval_unit).ok_or(ValidationWarning::MissingUnit)?;
        Ok(ScheduleSetting { interval_value, interval_unit })
    }
}

/// Which job the status panel describes.
///
/// The backend registers a single breach-check job; more than one is
/// unexpected and is surfaced rather than silently ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JobSelection<'a> {
    None,
    Single(&'a JobStatus),
    Multiple { primary: &'a JobStatus, others: usize },
}

pub fn select_job(jobs: &[JobStatus]) -> JobSelection<'_> {
    match jobs {
        [] => JobSelection::None,
        [job] => JobSelection::Single(job),
        [primary, rest @ ..] => JobSelection::Multiple { primary, others: rest.len() },
    }
}

/// "5 hours"
pub fn frequency_label(setting: ScheduleSetting) -> String {
    format!("{} {}", setting.interval_value, setting.interval_unit.as_str())
}

pub fn schedule_summary(setting: ScheduleSetting) -> String {
    format!("The system checks for new breaches every {}.", frequency_label(setting))
}

/// "+1 more job" / "+N more jobs"
pub fn extra_jobs_label(others: usize) -> String {
    if others == 1 { "+1 more job".to_owned() } else { format!("+{others} more jobs") }
}

/// Alert text for a failed settings update.
pub fn update_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::InvalidFormat => INVALID_FORMAT_MESSAGE.to_owned(),
        ApiError::Rejected { .. } => err.alert_message(UPDATE_REJECTED_MESSAGE),
        _ => UPDATE_FAILED_MESSAGE.to_owned(),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScheduleState {
    pub settings: Tracked<ScheduleSetting>,
    pub jobs: Tracked<Vec<JobStatus>>,
    pub form: ScheduleForm,
    pub saving: bool,
}
