//! Monitored-email list state.
//!
//! DESIGN
//! ======
//! The list is a read-through copy of the server's records, replaced wholesale
//! on every fetch. The add-email input lives here so a successful create can
//! clear it.

#[cfg(test)]
#[path = "emails_test.rs"]
mod emails_test;

use super::region::{Region, Tracked};
use crate::error::{ApiError, ValidationWarning};
use crate::net::types::EmailRecord;

pub const EMPTY_LIST_MESSAGE: &str = "No emails added yet. Add your first email above!";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load emails. Please try again.";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add email. Please try again.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete email. Please try again.";
pub const DELETE_ALL_FAILED_MESSAGE: &str = "Failed to delete all emails. Please try again.";
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this email?";
pub const CONFIRM_DELETE_ALL_MESSAGE: &str = "Are you sure you want to delete ALL emails? This action cannot be undone.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmailsState {
    pub list: Tracked<Vec<EmailRecord>>,
    /// Raw contents of the add-email input.
    pub new_email: String,
}

impl EmailsState {
    pub fn items(&self) -> &[EmailRecord] {
        self.list.region.ready().map(Vec::as_slice).unwrap_or_default()
    }

    /// The bulk-delete control is only offered for a non-empty list.
    pub fn show_bulk_delete(&self) -> bool {
        !self.items().is_empty()
    }

    /// Whether the empty-state message replaces the list.
    pub fn show_empty_message(&self) -> bool {
        matches!(&self.list.region, Region::Ready(items) if items.is_empty())
    }
}

/// Trim the add-email input, rejecting blank input before any request.
///
/// # Errors
///
/// Returns [`ValidationWarning::EmptyEmail`] for empty or whitespace-only input.
pub fn validate_new_email(raw: &str) -> Result<String, ValidationWarning> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ValidationWarning::EmptyEmail);
    }
    Ok(email.to_owned())
}

/// Alert text for a failed create: whatever the backend said, else the fallback.
pub fn add_failure_message(err: &ApiError) -> String {
    err.server_message().unwrap_or(ADD_FAILED_MESSAGE).to_owned()
}
