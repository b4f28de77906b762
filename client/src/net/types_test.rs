use super::*;

#[test]
fn envelope_decodes_email_list() {
    let raw = serde_json::json!({
        "success": true,
        "message": "Emails retrieved",
        "data": { "emails": [{ "id": 1, "email": "a@example.com" }] },
        "error": null
    });
    let resp: ApiResponse<EmailList> = serde_json::from_value(raw).unwrap();
    assert!(resp.success);
    assert_eq!(resp.message, "Emails retrieved");
    assert_eq!(
        resp.data.unwrap().emails,
        vec![EmailRecord { id: 1, email: "a@example.com".to_owned() }]
    );
}

#[test]
fn envelope_tolerates_missing_data_and_message() {
    let resp: ApiResponse<EmailList> = serde_json::from_value(serde_json::json!({ "success": false })).unwrap();
    assert!(!resp.success);
    assert!(resp.message.is_empty());
    assert!(resp.data.is_none());
    assert!(resp.error.is_none());
}

#[test]
fn breach_record_accepts_minimal_payload() {
    let breach: BreachRecord =
        serde_json::from_value(serde_json::json!({ "email_id": 7, "name": "Adobe", "breach_date": "2013-10-04" }))
            .unwrap();
    assert_eq!(breach.email_id, 7);
    assert_eq!(breach.display_title(), "Adobe");
    assert!(!breach.is_verified);
    assert!(breach.data_classes().is_empty());
    assert!(breach.display_description().is_none());
}

#[test]
fn breach_title_prefers_title_over_name() {
    let breach: BreachRecord = serde_json::from_value(serde_json::json!({
        "email_id": 1,
        "title": "LinkedIn",
        "name": "linkedin",
        "breach_date": "2012-05-05"
    }))
    .unwrap();
    assert_eq!(breach.display_title(), "LinkedIn");
}

#[test]
fn breach_title_falls_back_when_title_blank() {
    let breach: BreachRecord = serde_json::from_value(serde_json::json!({
        "email_id": 1,
        "title": "  ",
        "name": "Dropbox",
        "breach_date": "2012-07-01"
    }))
    .unwrap();
    assert_eq!(breach.display_title(), "Dropbox");
}

#[test]
fn breach_description_accepts_legacy_column_spelling() {
    let breach: BreachRecord = serde_json::from_value(serde_json::json!({
        "email_id": 2,
        "title": "Canva",
        "breach_date": "2019-05-24",
        "descripiton": "Scraped profile data"
    }))
    .unwrap();
    assert_eq!(breach.display_description(), Some("Scraped profile data"));
}

#[test]
fn interval_unit_parses_selector_values() {
    assert_eq!(IntervalUnit::parse("hours"), Some(IntervalUnit::Hours));
    assert_eq!(IntervalUnit::parse(" days "), Some(IntervalUnit::Days));
    assert_eq!(IntervalUnit::parse(""), None);
    assert_eq!(IntervalUnit::parse("weeks"), None);
}

#[test]
fn interval_unit_serializes_lowercase() {
    assert_eq!(serde_json::to_value(IntervalUnit::Minutes).unwrap(), serde_json::json!("minutes"));
}

#[test]
fn schedule_setting_default_matches_backend_default() {
    let setting = ScheduleSetting::default();
    assert_eq!(setting.interval_value, 1);
    assert_eq!(setting.interval_unit, IntervalUnit::Hours);
}

#[test]
fn job_display_name_falls_back_to_id() {
    let job: JobStatus = serde_json::from_value(serde_json::json!({ "id": "pwn_check_job", "next_run_time": null })).unwrap();
    assert_eq!(job.display_name(), "pwn_check_job");
    assert!(job.next_run_time.is_none());

    let named = JobStatus { name: Some("Pwn check".to_owned()), ..job };
    assert_eq!(named.display_name(), "Pwn check");
}
