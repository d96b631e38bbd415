use super::*;

// =============================================================
// ensure_utc_suffix
// =============================================================

#[test]
fn naive_timestamps_get_a_utc_suffix() {
    assert_eq!(ensure_utc_suffix("2026-08-07T10:15:00"), "2026-08-07T10:15:00Z");
    assert_eq!(
        ensure_utc_suffix("2026-08-07T10:15:00.123456"),
        "2026-08-07T10:15:00.123456Z"
    );
}

#[test]
fn zoned_timestamps_pass_through() {
    assert_eq!(ensure_utc_suffix("2026-08-07T10:15:00Z"), "2026-08-07T10:15:00Z");
    assert_eq!(
        ensure_utc_suffix("2026-08-07T10:15:00+02:00"),
        "2026-08-07T10:15:00+02:00"
    );
    assert_eq!(
        ensure_utc_suffix("2026-08-07T10:15:00-05:00"),
        "2026-08-07T10:15:00-05:00"
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(ensure_utc_suffix(" 2026-08-07T10:15:00 "), "2026-08-07T10:15:00Z");
}

// =============================================================
// format_local_parts
// =============================================================

#[test]
fn afternoon_hours_use_twelve_hour_clock() {
    assert_eq!(format_local_parts(2026, 8, 7, 13, 5, 9), "2026-08-07 01:05:09 pm");
}

#[test]
fn morning_hours_keep_their_value() {
    assert_eq!(format_local_parts(2026, 8, 7, 9, 30, 0), "2026-08-07 09:30:00 am");
}

#[test]
fn midnight_renders_as_twelve_am() {
    assert_eq!(format_local_parts(2026, 1, 2, 0, 0, 0), "2026-01-02 12:00:00 am");
}

#[test]
fn noon_renders_as_twelve_pm() {
    assert_eq!(format_local_parts(2026, 12, 31, 12, 0, 0), "2026-12-31 12:00:00 pm");
}

// =============================================================
// format_timestamp (SSR fallback)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn format_timestamp_passes_raw_string_through_off_browser() {
    assert_eq!(format_timestamp("2026-08-07T10:15:00"), "2026-08-07T10:15:00");
}
