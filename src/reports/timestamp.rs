//! Display formatting for message timestamps.

use chrono::{DateTime, Duration, Utc};

/// Format used for every timestamp shown in a thread.
pub const TIMESTAMP_FORMAT: &str = "%b %-d, %Y %H:%M";

/// Format `created_at` for display, shifted by `timezone_correction` hours.
///
/// Fractional corrections (e.g. `5.5`) are rounded to whole minutes. A
/// correction that is not finite or would leave chrono's range is ignored.
pub fn format_created_at(created_at: DateTime<Utc>, timezone_correction: Option<f64>) -> String {
    let shifted = timezone_correction
        .and_then(|hours| shift_by_hours(created_at, hours))
        .unwrap_or(created_at);

    shifted.format(TIMESTAMP_FORMAT).to_string()
}

fn shift_by_hours(created_at: DateTime<Utc>, hours: f64) -> Option<DateTime<Utc>> {
    if !hours.is_finite() {
        return None;
    }
    // Saturating cast; out-of-range values are rejected by `try_minutes`.
    let minutes = (hours * 60.0).round() as i64;
    created_at.checked_add_signed(Duration::try_minutes(minutes)?)
}
