//! Display formatting helpers shared by cards, pages, and the dashboard.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a duration in seconds as `m:ss`, or `h:mm:ss` past an hour.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_owned();
    }
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Compact view count: `831`, `1.2K`, `4.0M`.
#[allow(clippy::cast_precision_loss)]
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{:.1}M", views as f64 / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.1}K", views as f64 / 1_000.0)
    } else {
        views.to_string()
    }
}

/// Subscriber count with unit: `0 subscribers`, `1 subscriber`, `1.2K subscribers`.
#[allow(clippy::cast_precision_loss)]
pub fn format_subscribers(count: u64) -> String {
    match count {
        0 => "0 subscribers".to_owned(),
        1 => "1 subscriber".to_owned(),
        n if n >= 1_000_000 => format!("{:.1}M subscribers", n as f64 / 1_000_000.0),
        n if n >= 1_000 => format!("{:.1}K subscribers", n as f64 / 1_000.0),
        n => format!("{n} subscribers"),
    }
}

/// File size in the largest whole unit, two decimals with trailing zeros
/// trimmed: `0 Bytes`, `1.5 KB`, `2 MB`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rendered = format!("{scaled:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{rendered} {}", UNITS[exponent])
}

/// Relative age of an ISO 8601 timestamp against `now_ms` (Unix millis):
/// `just now`, `5 minutes ago`, `3 days ago`. Unparseable input renders
/// as an empty string so cards degrade quietly.
pub fn relative_time(iso: &str, now_ms: i64) -> String {
    let Ok(then) = chrono::DateTime::parse_from_rfc3339(iso) else {
        return String::new();
    };
    let seconds = now_ms / 1000 - then.timestamp();
    if seconds < 60 {
        return "just now".to_owned();
    }
    let (amount, unit) = if seconds < 3600 {
        (seconds / 60, "minute")
    } else if seconds < 86_400 {
        (seconds / 3600, "hour")
    } else if seconds < 2_592_000 {
        (seconds / 86_400, "day")
    } else if seconds < 31_536_000 {
        (seconds / 2_592_000, "month")
    } else {
        (seconds / 31_536_000, "year")
    };
    if amount == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{amount} {unit}s ago")
    }
}

/// Current Unix time in milliseconds.
#[allow(clippy::cast_possible_truncation)]
pub fn now_millis() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}
