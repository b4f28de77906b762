//! Local date formatting for server timestamps.
//!
//! The browser's locale decides the output; outside the browser (SSR, tests)
//! the raw server value is returned unchanged.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a `YYYY-MM-DD` breach date as a local date string.
pub fn local_date(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        parse_js_date(raw).map_or_else(
            || raw.to_owned(),
            |date| String::from(date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)),
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}

/// Format an ISO-8601 timestamp as a local date-time string.
pub fn local_datetime(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        parse_js_date(raw).map_or_else(
            || raw.to_owned(),
            |date| String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)),
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}

/// Next-run label for the job panel.
pub fn next_run_label(next_run_time: Option<&str>, not_scheduled: &str) -> String {
    match next_run_time.filter(|t| !t.trim().is_empty()) {
        Some(raw) => local_datetime(raw),
        None => not_scheduled.to_owned(),
    }
}

#[cfg(feature = "hydrate")]
fn parse_js_date(raw: &str) -> Option<js_sys::Date> {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
    if date.get_time().is_nan() { None } else { Some(date) }
}
