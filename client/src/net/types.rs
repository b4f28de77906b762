//! Wire DTOs for the breach backend's REST API.
//!
//! DESIGN
//! ======
//! Every endpoint answers with the same `{success, message, data, error}`
//! envelope. Payload types mirror the backend JSON so decoding stays
//! schema-driven; display fallbacks (`title` vs `name`, `name` vs `id`) live
//! next to the fields they resolve.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Standard response envelope returned by every backend endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A monitored email address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    pub id: i64,
    pub email: String,
}

/// `data` payload of `GET /api/email`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EmailList {
    #[serde(default)]
    pub emails: Vec<EmailRecord>,
}

/// A disclosed breach affecting one monitored email.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreachRecord {
    /// Foreign key into the email list.
    pub email_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    /// Calendar date as reported by the breach source (`YYYY-MM-DD`).
    #[serde(default)]
    pub breach_date: String,
    #[serde(default, alias = "descripiton")]
    pub description: Option<String>,
    #[serde(default)]
    pub data_classes: Option<Vec<String>>,
    #[serde(default)]
    pub is_verified: bool,
}

impl BreachRecord {
    /// Title shown on the card: `title`, falling back to `name`.
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref())
            .or_else(|| non_empty(self.name.as_deref()))
            .unwrap_or_default()
    }

    /// Description, if the backend supplied a non-empty one.
    pub fn display_description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    /// Compromised data categories; empty when unclassified.
    pub fn data_classes(&self) -> &[String] {
        self.data_classes.as_deref().unwrap_or_default()
    }
}

/// `data` payload of `GET /api/pwned_platforms`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BreachList {
    #[serde(default)]
    pub platforms: Vec<BreachRecord>,
}

/// Granularity of the periodic breach-check job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    Seconds,
    Minutes,
    #[default]
    Hours,
    Days,
}

impl IntervalUnit {
    pub const ALL: [IntervalUnit; 4] = [Self::Seconds, Self::Minutes, Self::Hours, Self::Days];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
        }
    }

    /// Human label for the unit selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Seconds => "Seconds",
            Self::Minutes => "Minutes",
            Self::Hours => "Hours",
            Self::Days => "Days",
        }
    }

    /// Parse a selector value; `None` for empty or unknown values.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == raw.trim())
    }
}

/// Current polling schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSetting {
    pub interval_value: i64,
    pub interval_unit: IntervalUnit,
}

impl Default for ScheduleSetting {
    fn default() -> Self {
        Self { interval_value: 1, interval_unit: IntervalUnit::Hours }
    }
}

/// One scheduled background job as reported by `GET /api/scheduler/status`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// ISO-8601 timestamp; `None` when the job is paused.
    #[serde(default)]
    pub next_run_time: Option<String>,
    #[serde(default)]
    pub trigger: Option<String>,
}

impl JobStatus {
    /// `name`, falling back to `id`.
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(&self.id)
    }
}

/// `data` payload of `GET /api/scheduler/status`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct JobList {
    #[serde(default)]
    pub jobs: Vec<JobStatus>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
