use super::*;

// =============================================================
// format_duration
// =============================================================

#[test]
fn duration_zero_and_negative_render_as_zero() {
    assert_eq!(format_duration(0.0), "0:00");
    assert_eq!(format_duration(-5.0), "0:00");
    assert_eq!(format_duration(f64::NAN), "0:00");
}

#[test]
fn duration_under_an_hour_is_minutes_seconds() {
    assert_eq!(format_duration(7.0), "0:07");
    assert_eq!(format_duration(65.4), "1:05");
    assert_eq!(format_duration(599.0), "9:59");
}

#[test]
fn duration_over_an_hour_includes_hours() {
    assert_eq!(format_duration(3600.0), "1:00:00");
    assert_eq!(format_duration(3723.0), "1:02:03");
}

// =============================================================
// format_views
// =============================================================

#[test]
fn views_below_a_thousand_are_plain() {
    assert_eq!(format_views(0), "0");
    assert_eq!(format_views(999), "999");
}

#[test]
fn views_scale_to_k_and_m() {
    assert_eq!(format_views(1_000), "1.0K");
    assert_eq!(format_views(12_345), "12.3K");
    assert_eq!(format_views(2_500_000), "2.5M");
}

// =============================================================
// format_subscribers
// =============================================================

#[test]
fn subscribers_singular_and_plural() {
    assert_eq!(format_subscribers(0), "0 subscribers");
    assert_eq!(format_subscribers(1), "1 subscriber");
    assert_eq!(format_subscribers(42), "42 subscribers");
}

#[test]
fn subscribers_scale_to_k_and_m() {
    assert_eq!(format_subscribers(1_500), "1.5K subscribers");
    assert_eq!(format_subscribers(3_000_000), "3.0M subscribers");
}

// =============================================================
// format_file_size
// =============================================================

#[test]
fn file_size_zero_bytes() {
    assert_eq!(format_file_size(0), "0 Bytes");
}

#[test]
fn file_size_picks_largest_unit_and_trims_zeros() {
    assert_eq!(format_file_size(512), "512 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(1_048_576), "1 MB");
    assert_eq!(format_file_size(1_363_149), "1.3 MB");
}

// =============================================================
// relative_time
// =============================================================

const NOW_MS: i64 = 1_700_000_000_000;

fn iso_seconds_before_now(seconds: i64) -> String {
    let then = chrono::DateTime::from_timestamp(NOW_MS / 1000 - seconds, 0).unwrap();
    then.to_rfc3339()
}

#[test]
fn relative_time_just_now_under_a_minute() {
    assert_eq!(relative_time(&iso_seconds_before_now(5), NOW_MS), "just now");
    assert_eq!(relative_time(&iso_seconds_before_now(59), NOW_MS), "just now");
}

#[test]
fn relative_time_minutes_hours_days() {
    assert_eq!(relative_time(&iso_seconds_before_now(60), NOW_MS), "1 minute ago");
    assert_eq!(relative_time(&iso_seconds_before_now(180), NOW_MS), "3 minutes ago");
    assert_eq!(relative_time(&iso_seconds_before_now(7200), NOW_MS), "2 hours ago");
    assert_eq!(relative_time(&iso_seconds_before_now(86_400 * 6), NOW_MS), "6 days ago");
}

#[test]
fn relative_time_months_and_years() {
    assert_eq!(relative_time(&iso_seconds_before_now(2_592_000 * 2), NOW_MS), "2 months ago");
    assert_eq!(relative_time(&iso_seconds_before_now(31_536_000), NOW_MS), "1 year ago");
}

#[test]
fn relative_time_unparseable_is_empty() {
    assert_eq!(relative_time("not-a-date", NOW_MS), "");
    assert_eq!(relative_time("", NOW_MS), "");
}
