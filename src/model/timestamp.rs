//! Timestamps in the café's configured zone, and their single wire format.

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeDelta};
use serde::Serializer;

/// A point in time carrying the café's fixed UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

/// Renders a timestamp as RFC 3339 with millisecond precision and an explicit offset,
/// e.g. `2024-05-01T12:00:05.250+09:00`. Every timestamp on the wire uses this.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, false)
}

/// `serialize_with` adapter for [`format_timestamp`].
pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(ts))
}

/// Signed difference `later - earlier` in seconds, rounded to one decimal place.
pub fn seconds_between(earlier: &Timestamp, later: &Timestamp) -> f64 {
    let delta: TimeDelta = *later - *earlier;
    round1(delta.num_milliseconds() as f64 / 1000.0)
}

/// Rounds to one decimal place, ties to even.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn seoul() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn formats_with_millis_and_offset() {
        let ts = seoul()
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 5)
            .unwrap()
            + TimeDelta::milliseconds(250);
        assert_eq!(format_timestamp(&ts), "2024-05-01T12:00:05.250+09:00");
    }

    #[test]
    fn seconds_between_is_signed_and_rounded() {
        let t0 = seoul().with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let later = t0 + TimeDelta::milliseconds(30_049);
        assert_eq!(seconds_between(&t0, &later), 30.0);
        assert_eq!(seconds_between(&later, &t0), -30.0);
        assert_eq!(
            seconds_between(&t0, &(t0 + TimeDelta::milliseconds(1_260))),
            1.3
        );
    }

    #[test]
    fn round1_matches_display_precision() {
        assert_eq!(round1(88.888_9), 88.9);
        assert_eq!(round1(-10.04), -10.0);
        assert_eq!(round1(10.0), 10.0);
    }

    #[test]
    fn half_tenths_round_to_even() {
        let t0 = seoul().with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(
            seconds_between(&t0, &(t0 + TimeDelta::milliseconds(1_250))),
            1.2
        );
        assert_eq!(
            seconds_between(&t0, &(t0 + TimeDelta::milliseconds(1_350))),
            1.4
        );
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(-0.25), -0.2);
    }
}
