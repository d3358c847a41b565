//! `ADD_DATE` / `LAST_MODIFIED` interpretation

use chrono::{DateTime, Utc};

/// Values above this are read as milliseconds, everything else as seconds
///
/// 10^12 seconds is tens of thousands of years away while 10^12 milliseconds
/// is September 2001, so real exports fall cleanly on either side.
pub const MILLISECONDS_THRESHOLD: i64 = 1_000_000_000_000;

/// Convert an optional numeric attribute value into a point in time
///
/// Returns `None` for missing, non-numeric or out-of-range values.
pub fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    let raw: i64 = value?.trim().parse().ok()?;
    if raw > MILLISECONDS_THRESHOLD {
        DateTime::from_timestamp_millis(raw)
    } else {
        DateTime::from_timestamp(raw, 0)
    }
}
