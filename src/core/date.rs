//! Submission timestamps.

use chrono::{DateTime, SecondsFormat, Utc};

/// Render `at` as `YYYY-MM-DDTHH:mm:ss` in UTC, without fractional seconds
/// or zone designator.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use ekuatia::core::format_for_submission;
///
/// let at = Utc.with_ymd_and_hms(2025, 8, 14, 10, 57, 26).unwrap();
/// assert_eq!(format_for_submission(at), "2025-08-14T10:57:26");
/// ```
pub fn format_for_submission(at: DateTime<Utc>) -> String {
    let iso = at.to_rfc3339_opts(SecondsFormat::Secs, true);
    iso.trim_end_matches('Z').to_string()
}

/// The current time, formatted for submission.
pub fn submission_timestamp() -> String {
    format_for_submission(Utc::now())
}
