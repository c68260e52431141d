#[cfg(target_arch = "wasm32")]
thread_local! {
    static PERFORMANCE: Option<web_sys::Performance> =
        web_sys::window().and_then(|w| w.performance());
}

/// High resolution timer in milliseconds; 0.0 when unavailable
#[cfg(target_arch = "wasm32")]
pub fn performance_now() -> f64 {
    PERFORMANCE.with(|perf| perf.as_ref().map(|p| p.now()).unwrap_or(0.0))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn performance_now() -> f64 {
    0.0
}

/// Current UTC time as an ISO-8601 string
#[cfg(target_arch = "wasm32")]
pub fn now_iso8601() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_iso8601() -> String {
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}

/// `YYYY-MM-DDTHH-MM-SS` from an ISO timestamp, safe for file names
pub fn file_stamp(iso: &str) -> String {
    iso.chars()
        .take(19)
        .map(|c| if c == ':' || c == '.' { '-' } else { c })
        .collect()
}
