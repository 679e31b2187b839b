//! Timestamp normalization for write/read-back comparisons.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Convert a timestamp to its canonical comparable form: UTC, truncated to
/// microsecond resolution.
///
/// PostgreSQL stores timestamps with microsecond precision, so a timestamp
/// generated in Rust (with nanoseconds) comes back truncated after a round
/// trip through the database. Tests comparing "time inserted" against "time
/// read back" should normalize both sides with this function.
///
/// The function is pure and idempotent.
pub fn normalize_time<Tz: TimeZone>(t: DateTime<Tz>) -> DateTime<Utc> {
    let t = t.with_timezone(&Utc);
    let sub_micro_nanos = (t.timestamp_subsec_nanos() % 1_000) as i64;
    t - Duration::nanoseconds(sub_micro_nanos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    #[test]
    fn test_truncates_sub_microsecond_component() {
        let t = Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 30, 45)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();

        let normalized = normalize_time(t);
        assert_eq!(normalized.nanosecond(), 123_456_000);
        assert_eq!(normalized.timestamp(), t.timestamp());
    }

    #[test]
    fn test_idempotent() {
        let t = Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 30, 45)
            .unwrap()
            .with_nanosecond(999_999_999)
            .unwrap();

        let once = normalize_time(t);
        assert_eq!(normalize_time(once), once);
    }

    #[test]
    fn test_converts_to_utc() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset
            .with_ymd_and_hms(2024, 3, 1, 14, 0, 0)
            .unwrap()
            .with_nanosecond(1_500)
            .unwrap();

        let normalized = normalize_time(local);
        assert_eq!(normalized.timezone(), Utc);
        assert_eq!(normalized.hour(), 12);
        assert_eq!(normalized.nanosecond(), 1_000);
    }

    #[test]
    fn test_already_microsecond_precision_is_unchanged() {
        let t = Utc
            .with_ymd_and_hms(2024, 3, 1, 0, 0, 0)
            .unwrap()
            .with_nanosecond(42_000)
            .unwrap();

        assert_eq!(normalize_time(t), t);
    }
}
