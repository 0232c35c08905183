//! Julian Day conversions.
//!
//! Computed from the Unix timestamp so that sub-second precision survives;
//! the calendar-based `julday` of the Swiss Ephemeris only takes whole
//! seconds through its decimal hour.

use chrono::{DateTime, Utc};

/// Julian Day of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
pub const J2000_JD: f64 = 2_451_545.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert UTC datetime to Julian Day
pub fn julian_day(dt: DateTime<Utc>) -> f64 {
    let seconds = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Convert Julian Day to UTC datetime (millisecond resolution).
///
/// Returns `None` when the instant is outside chrono's range.
pub fn datetime_from_julian_day(jd: f64) -> Option<DateTime<Utc>> {
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if !millis.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36525.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_j2000_epoch() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(dt) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn test_subsecond_precision() {
        let base = Utc.with_ymd_and_hms(2024, 3, 15, 6, 30, 0).unwrap();
        let later = base + chrono::Duration::milliseconds(500);
        let delta_seconds = (julian_day(later) - julian_day(base)) * SECONDS_PER_DAY;
        assert!((delta_seconds - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_round_trip() {
        let dt = Utc.with_ymd_and_hms(1987, 7, 4, 18, 45, 12).unwrap();
        assert_eq!(datetime_from_julian_day(julian_day(dt)), Some(dt));
    }
}
