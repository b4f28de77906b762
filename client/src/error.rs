//! Failure taxonomy for dashboard operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiError` covers everything that can go wrong once a request is issued;
//! `ValidationWarning` covers local form checks that short-circuit before any
//! request exists. Controllers turn either into exactly one user-visible alert.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The bearer token was rejected (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,

    /// The backend rejected the payload shape (HTTP 422).
    #[error("invalid request format")]
    InvalidFormat,

    /// Any other non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },

    /// A 2xx response whose envelope carried `success: false`.
    #[error("rejected: {message}")]
    Rejected { message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected schema.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Message the backend attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        let message = match self {
            Self::Rejected { message } => Some(message.as_str()),
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        };
        message.filter(|m| !m.trim().is_empty())
    }

    /// Alert text: the server message for rejected envelopes, otherwise the
    /// operation-specific fallback.
    pub fn alert_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { .. } => self.server_message().unwrap_or(fallback).to_owned(),
            _ => fallback.to_owned(),
        }
    }
}

/// Local form check that failed before any request was issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationWarning {
    #[error("Please enter a valid email address.")]
    EmptyEmail,
    #[error("Please enter a valid interval value (positive number).")]
    InvalidInterval,
    #[error("Please select a time unit.")]
    MissingUnit,
}
