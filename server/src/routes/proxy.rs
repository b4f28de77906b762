//! Reverse proxy for the breach backend's `/api/*` surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard calls same-origin `/api/...` paths. This handler forwards
//! them unchanged to `BACKEND_URL`, carrying the bearer token and body, and
//! relays the backend's status and body back. The host never inspects or
//! rewrites payloads.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied to the backend.
pub const FORWARDED_REQUEST_HEADERS: [HeaderName; 2] = [AUTHORIZATION, CONTENT_TYPE];
/// Response headers copied back to the browser.
pub const FORWARDED_RESPONSE_HEADERS: [HeaderName; 3] = [CONTENT_TYPE, LOCATION, SET_COOKIE];

/// Errors produced while talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(String),
    #[error("upstream body read failed: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "success": false,
            "message": "Breach backend unavailable",
            "error": self.to_string(),
        });
        (StatusCode::BAD_GATEWAY, axum::Json(body)).into_response()
    }
}

/// Backend URL for an `/api/{path}` request, keeping the query string.
pub fn upstream_url(backend_url: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/api/{}", backend_url.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Copy the headers in `names` that are present in `source`.
pub fn select_headers(source: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut selected = HeaderMap::new();
    for name in names {
        for value in source.get_all(name) {
            selected.append(name.clone(), value.clone());
        }
    }
    selected
}

/// `ANY /api/{*path}`
pub async fn proxy_api(
    State(state): State<AppState>,
    Path(path): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.backend_url, &path, uri.query());
    tracing::debug!(%method, %url, "proxying api request");
    match forward(&state, method, &url, &headers, body).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, %url, "backend request failed");
            e.into_response()
        }
    }
}

async fn forward(state: &AppState, method: Method, url: &str, headers: &HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
    let upstream = state
        .http
        .request(method, url)
        .headers(select_headers(headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await
        .map_err(|e| ProxyError::Upstream(e.to_string()))?;

    let status = upstream.status();
    let relayed = select_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;
    tracing::debug!(%status, %url, "backend responded");

    let mut response = (status, bytes).into_response();
    response.headers_mut().remove(CONTENT_TYPE);
    response.headers_mut().extend(relayed);
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
