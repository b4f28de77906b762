//! REST API helpers for the breach backend.
//!
//! Every call is described by an [`ApiRequest`] built from pure functions, so
//! the exact method/path/body is testable without a browser. Client-side
//! (hydrate) execution goes through `gloo-net`; server-side (SSR) returns an
//! error since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! [`interpret`] maps status + body onto [`ApiError`] in one place so 401 and
//! 422 handling cannot drift between call sites.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{ApiResponse, ScheduleSetting};
use crate::error::ApiError;

pub const EMAILS_PATH: &str = "/api/email";
pub const ALL_EMAILS_PATH: &str = "/api/email/all";
pub const BREACHES_PATH: &str = "/api/pwned_platforms";
pub const SCHEDULER_SETTINGS_PATH: &str = "/api/scheduler/settings";
pub const SCHEDULER_STATUS_PATH: &str = "/api/scheduler/status";

/// HTTP verbs used by the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully-described backend call, minus auth headers.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None }
    }

    fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// `GET /api/email`
pub fn list_emails() -> ApiRequest {
    ApiRequest::new(HttpMethod::Get, EMAILS_PATH)
}

/// `POST /api/email` with an already-trimmed address.
pub fn add_email(email: &str) -> ApiRequest {
    ApiRequest::new(HttpMethod::Post, EMAILS_PATH).with_body(serde_json::json!({ "email": email }))
}

/// `DELETE /api/email/{id}`
pub fn delete_email(id: i64) -> ApiRequest {
    ApiRequest::new(HttpMethod::Delete, format!("{EMAILS_PATH}/{id}"))
}

/// `DELETE /api/email/all`
pub fn delete_all_emails() -> ApiRequest {
    ApiRequest::new(HttpMethod::Delete, ALL_EMAILS_PATH)
}

/// `GET /api/pwned_platforms`
pub fn list_breaches() -> ApiRequest {
    ApiRequest::new(HttpMethod::Get, BREACHES_PATH)
}

/// `GET /api/scheduler/settings`
pub fn scheduler_settings() -> ApiRequest {
    ApiRequest::new(HttpMethod::Get, SCHEDULER_SETTINGS_PATH)
}

/// `PUT /api/scheduler/settings`
pub fn update_scheduler_settings(setting: ScheduleSetting) -> ApiRequest {
    ApiRequest::new(HttpMethod::Put, SCHEDULER_SETTINGS_PATH).with_body(serde_json::json!({
        "interval_value": setting.interval_value,
        "interval_unit": setting.interval_unit.as_str(),
    }))
}

/// `GET /api/scheduler/status`
pub fn scheduler_status() -> ApiRequest {
    ApiRequest::new(HttpMethod::Get, SCHEDULER_STATUS_PATH)
}

/// Classify a raw HTTP response.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for 401, [`ApiError::InvalidFormat`]
/// for 422, [`ApiError::Status`] for other non-2xx statuses,
/// [`ApiError::Decode`] for unparseable 2xx bodies and
/// [`ApiError::Rejected`] when the envelope reports `success: false`.
pub fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> Result<ApiResponse<T>, ApiError> {
    match status {
        401 => return Err(ApiError::Unauthorized),
        422 => return Err(ApiError::InvalidFormat),
        200..=299 => {}
        _ => {
            let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
                .ok()
                .map(|resp| resp.message)
                .filter(|m| !m.trim().is_empty());
            return Err(ApiError::Status { status, message });
        }
    }

    let resp: ApiResponse<T> = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !resp.success {
        return Err(ApiError::Rejected { message: resp.message });
    }
    Ok(resp)
}

/// Execute `request` with the session's bearer headers.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the request cannot be sent, otherwise
/// whatever [`interpret`] reports for the response.
pub async fn send<T: DeserializeOwned>(
    request: ApiRequest,
    headers: [(&'static str, String); 2],
) -> Result<ApiResponse<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.path),
            HttpMethod::Post => Request::post(&request.path),
            HttpMethod::Put => Request::put(&request.path),
            HttpMethod::Delete => Request::delete(&request.path),
        };
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        let sent = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        log::debug!("{:?} {} -> {status}", request.method, request.path);
        interpret(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, headers);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
