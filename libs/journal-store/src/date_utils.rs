//! Day keys and day boundaries for "today" queries.
//!
//! The daily caches are keyed on the local calendar day; entry timestamps
//! are stored as RFC 3339 UTC strings. "Today" queries therefore convert
//! the local day's bounds to UTC strings and compare lexically, which is
//! sound because every stored timestamp uses the same format.

use chrono::{DateTime, Duration, Local, NaiveTime, Utc};

/// Calendar-day key for the daily cache tables, from the local clock.
pub fn today_key() -> String {
    day_key(Local::now())
}

/// Format a local instant as a `YYYY-MM-DD` cache key.
pub fn day_key(now: DateTime<Local>) -> String {
    now.date_naive().format("%Y-%m-%d").to_string()
}

/// Bounds of the local calendar day containing `now`, as RFC 3339 UTC
/// strings. Start is 00:00:00.000, end is 23:59:59.999; both derive from
/// the single captured `now`.
pub fn day_bounds(now: DateTime<Local>) -> (String, String) {
    let start_naive = now.date_naive().and_time(NaiveTime::MIN);
    let end_naive = start_naive + Duration::days(1) - Duration::milliseconds(1);

    // earliest()/latest() cover DST transitions; the fallback to `now`
    // is unreachable on days where local midnight exists.
    let start = start_naive.and_local_timezone(Local).earliest().unwrap_or(now);
    let end = end_naive.and_local_timezone(Local).latest().unwrap_or(now);

    (
        start.with_timezone(&Utc).to_rfc3339(),
        end.with_timezone(&Utc).to_rfc3339(),
    )
}

/// Bounds of the current local day.
pub fn today_bounds() -> (String, String) {
    day_bounds(Local::now())
}

/// Current timestamp in the format stored in entry rows.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_key_format() {
        let key = today_key();
        assert_eq!(key.len(), 10);
        assert_eq!(&key[4..5], "-");
        assert_eq!(&key[7..8], "-");
    }

    #[test]
    fn bounds_contain_now() {
        let (start, end) = today_bounds();
        let now = now_rfc3339();
        assert!(start <= now, "start {start} should not exceed now {now}");
        assert!(now <= end, "now {now} should not exceed end {end}");
    }

    #[test]
    fn bounds_span_one_day() {
        let (start, end) = today_bounds();
        let start = DateTime::parse_from_rfc3339(&start).unwrap();
        let end = DateTime::parse_from_rfc3339(&end).unwrap();
        assert_eq!((end - start).num_milliseconds(), 86_399_999);
    }

    #[test]
    fn bounds_derive_from_given_instant() {
        let now = Local::now();
        let (start, _) = day_bounds(now);
        let start = DateTime::parse_from_rfc3339(&start).unwrap();
        assert_eq!(start.with_timezone(&Local).date_naive(), now.date_naive());
    }
}
