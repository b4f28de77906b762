use super::*;
use crate::net::types::{EmailList, IntervalUnit};

#[test]
fn list_emails_is_plain_get() {
    let req = list_emails();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.path, "/api/email");
    assert!(req.body.is_none());
}

#[test]
fn add_email_posts_trimmed_address() {
    let req = add_email("me@example.com");
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.path, "/api/email");
    assert_eq!(req.body, Some(serde_json::json!({ "email": "me@example.com" })));
}

#[test]
fn delete_email_targets_record_id() {
    let req = delete_email(42);
    assert_eq!(req.method, HttpMethod::Delete);
    assert_eq!(req.path, "/api/email/42");
}

#[test]
fn delete_all_emails_targets_collection() {
    let req = delete_all_emails();
    assert_eq!(req.method, HttpMethod::Delete);
    assert_eq!(req.path, "/api/email/all");
}

#[test]
fn scheduler_reads_are_gets() {
    assert_eq!(list_breaches().path, "/api/pwned_platforms");
    assert_eq!(scheduler_settings().path, "/api/scheduler/settings");
    assert_eq!(scheduler_status().path, "/api/scheduler/status");
    assert_eq!(scheduler_status().method, HttpMethod::Get);
}

#[test]
fn update_scheduler_settings_puts_value_and_unit() {
    let req = update_scheduler_settings(ScheduleSetting { interval_value: 5, interval_unit: IntervalUnit::Hours });
    assert_eq!(req.method, HttpMethod::Put);
    assert_eq!(req.path, "/api/scheduler/settings");
    assert_eq!(req.body, Some(serde_json::json!({ "interval_value": 5, "interval_unit": "hours" })));
}

#[test]
fn interpret_maps_401_to_unauthorized() {
    let err = interpret::<EmailList>(401, r#"{"msg":"Token has expired"}"#).unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
}

#[test]
fn interpret_maps_422_to_invalid_format() {
    let err = interpret::<serde_json::Value>(422, r#"{"success":false,"message":"Wrong JSON Format!"}"#).unwrap_err();
    assert_eq!(err, ApiError::InvalidFormat);
}

#[test]
fn interpret_keeps_server_message_on_other_statuses() {
    let err = interpret::<serde_json::Value>(400, r#"{"success":false,"message":"Invalid interval unit"}"#).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 400, message: Some("Invalid interval unit".to_owned()) });
}

#[test]
fn interpret_tolerates_non_json_error_bodies() {
    let err = interpret::<serde_json::Value>(502, "<html>Bad Gateway</html>").unwrap_err();
    assert_eq!(err, ApiError::Status { status: 502, message: None });
}

#[test]
fn interpret_rejects_unsuccessful_envelope() {
    let err = interpret::<EmailList>(200, r#"{"success":false,"message":"No user found"}"#).unwrap_err();
    assert_eq!(err, ApiError::Rejected { message: "No user found".to_owned() });
}

#[test]
fn interpret_reports_decode_failures() {
    let err = interpret::<EmailList>(200, "{not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn interpret_returns_envelope_on_success() {
    let resp = interpret::<EmailList>(
        200,
        r#"{"success":true,"message":"ok","data":{"emails":[{"id":3,"email":"x@y.z"}]},"error":null}"#,
    )
    .unwrap();
    assert_eq!(resp.data.unwrap().emails.len(), 1);
}
