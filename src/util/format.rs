//! Timestamp display formatting.
//!
//! The service reports naive ISO 8601 timestamps that are UTC by convention.
//! On the client they are rendered in the browser's local time zone as
//! `YYYY-MM-DD hh:mm:ss am/pm`. SSR paths fall back to the raw string so
//! server rendering stays deterministic.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a server timestamp in the browser's local time zone.
///
/// Returns the raw string unchanged when not running in a browser or when the
/// timestamp does not parse.
pub fn format_timestamp(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = ensure_utc_suffix(raw);
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(&iso));
        if date.get_time().is_nan() {
            return raw.to_owned();
        }
        format_local_parts(
            date.get_full_year(),
            date.get_month() + 1,
            date.get_date(),
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}

/// Tag a naive ISO 8601 timestamp as UTC so `Date` does not reinterpret it in
/// local time. Timestamps that already carry a zone designator pass through.
#[cfg(any(test, feature = "hydrate"))]
fn ensure_utc_suffix(raw: &str) -> String {
    let trimmed = raw.trim();
    let has_zone = trimmed.ends_with('Z')
        || trimmed.ends_with('z')
        || trimmed
            .find('T')
            .is_some_and(|t| trimmed[t..].contains('+') || trimmed[t + 1..].contains('-'));
    if has_zone {
        trimmed.to_owned()
    } else {
        format!("{trimmed}Z")
    }
}

/// Compose already-localized date parts into `YYYY-MM-DD hh:mm:ss am/pm`.
#[cfg(any(test, feature = "hydrate"))]
fn format_local_parts(year: u32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> String {
    let meridiem = if hour < 12 { "am" } else { "pm" };
    let clock_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{year:04}-{month:02}-{day:02} {clock_hour:02}:{minute:02}:{second:02} {meridiem}")
}
