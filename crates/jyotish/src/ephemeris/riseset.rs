//! Sunrise, sunset and meridian transit by hour-angle iteration.
//!
//! The body's tropical ecliptic position is supplied by the caller, so the
//! same routine runs against the Swiss Ephemeris or an analytic model.

use crate::ephemeris::provider::EphemerisError;
use crate::ephemeris::time::julian_centuries;
use crate::ephemeris::types::RiseTransitKind;

/// Apparent altitude of the upper limb at rise/set: refraction plus semi-diameter.
pub const STANDARD_DEPRESSION_DEG: f64 = -0.8333;

/// Sidereal degrees per solar day.
const SIDEREAL_RATE: f64 = 360.985_647;
const MAX_ITERATIONS: usize = 8;
const CONVERGENCE_DAYS: f64 = 1e-7;

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity(julian_day: f64) -> f64 {
    23.439_291 - 0.013_004_2 * julian_centuries(julian_day)
}

/// Greenwich mean sidereal time in degrees (IAU 1982).
pub fn greenwich_mean_sidereal_time(julian_day: f64) -> f64 {
    let t = julian_centuries(julian_day);
    let gmst = 280.460_618_37 + 360.985_647_366_29 * (julian_day - 2_451_545.0)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    gmst.rem_euclid(360.0)
}

/// Right ascension and declination in degrees from ecliptic coordinates.
pub fn ecliptic_to_equatorial(longitude: f64, latitude: f64, obliquity: f64) -> (f64, f64) {
    let (lam, beta, eps) = (longitude.to_radians(), latitude.to_radians(), obliquity.to_radians());
    let ra = (lam.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lam.cos());
    let dec = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lam.sin()).asin();
    (ra.to_degrees().rem_euclid(360.0), dec.to_degrees())
}

fn signed_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    if a > 180.0 {
        a - 360.0
    } else {
        a
    }
}

/// Target hour angle for the event, or `None` when the body never reaches
/// the rise/set altitude that day.
fn target_hour_angle(kind: RiseTransitKind, latitude: f64, declination: f64) -> Option<f64> {
    if kind == RiseTransitKind::UpperTransit {
        return Some(0.0);
    }
    let (phi, dec) = (latitude.to_radians(), declination.to_radians());
    let cos_h0 = (STANDARD_DEPRESSION_DEG.to_radians().sin() - phi.sin() * dec.sin())
        / (phi.cos() * dec.cos());
    if !(-1.0..=1.0).contains(&cos_h0) {
        return None;
    }
    let h0 = cos_h0.acos().to_degrees();
    Some(match kind {
        RiseTransitKind::Rise => -h0,
        _ => h0,
    })
}

/// Iterate from `start` to the nearest event, within half a day either side.
fn converge<F>(
    start: f64,
    latitude: f64,
    longitude: f64,
    kind: RiseTransitKind,
    ecliptic_at: &F,
) -> Result<Option<f64>, EphemerisError>
where
    F: Fn(f64) -> Result<(f64, f64), EphemerisError>,
{
    let mut t = start;
    for _ in 0..MAX_ITERATIONS {
        let (lam, beta) = ecliptic_at(t)?;
        let (ra, dec) = ecliptic_to_equatorial(lam, beta, mean_obliquity(t));
        let target = match target_hour_angle(kind, latitude, dec) {
            Some(h) => h,
            None => return Ok(None),
        };
        let hour_angle = greenwich_mean_sidereal_time(t) + longitude - ra;
        let step = signed_degrees(target - hour_angle) / SIDEREAL_RATE;
        t += step;
        if step.abs() < CONVERGENCE_DAYS {
            break;
        }
    }
    Ok(Some(t))
}

/// Next rise, set or upper transit strictly after `julian_day`.
///
/// `longitude` is east-positive. `ecliptic_at` returns the body's tropical
/// ecliptic longitude and latitude at a Julian Day (UT).
pub fn next_event<F>(
    julian_day: f64,
    latitude: f64,
    longitude: f64,
    kind: RiseTransitKind,
    ecliptic_at: F,
) -> Result<Option<f64>, EphemerisError>
where
    F: Fn(f64) -> Result<(f64, f64), EphemerisError>,
{
    let mut start = julian_day;
    for _ in 0..3 {
        match converge(start, latitude, longitude, kind, &ecliptic_at)? {
            Some(t) if t > julian_day => return Ok(Some(t)),
            Some(t) => start = t + 1.0,
            None => return Ok(None),
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::time::J2000_JD;

    /// Low-precision solar longitude, good to about a degree.
    fn analytic_sun(jd: f64) -> Result<(f64, f64), EphemerisError> {
        let d = jd - J2000_JD;
        let g = (357.529 + 0.985_600_28 * d).to_radians();
        let q = 280.459 + 0.985_647_36 * d;
        Ok(((q + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()).rem_euclid(360.0), 0.0))
    }

    // 2024-03-20 00:00 UT
    const EQUINOX_2024: f64 = 2_460_389.5;

    #[test]
    fn test_equator_day_length_near_equinox() {
        let rise = next_event(EQUINOX_2024, 0.0, 0.0, RiseTransitKind::Rise, analytic_sun)
            .unwrap()
            .unwrap();
        let set = next_event(rise, 0.0, 0.0, RiseTransitKind::Set, analytic_sun)
            .unwrap()
            .unwrap();
        let hours = (set - rise) * 24.0;
        assert!((hours - 12.1).abs() < 0.1, "day length {hours}");
        // rise near 06:00 UT at Greenwich meridian
        let rise_hour = (rise - EQUINOX_2024) * 24.0;
        assert!((rise_hour - 6.0).abs() < 0.3, "rise at {rise_hour}");
    }

    #[test]
    fn test_events_are_after_start() {
        let start = EQUINOX_2024 + 0.5;
        let rise = next_event(start, 0.0, 0.0, RiseTransitKind::Rise, analytic_sun)
            .unwrap()
            .unwrap();
        assert!(rise > start);
        assert!(rise - start < 1.0);
    }

    #[test]
    fn test_transit_near_local_noon() {
        // 90 degrees east: local noon near 06:00 UT
        let transit = next_event(EQUINOX_2024, 0.0, 90.0, RiseTransitKind::UpperTransit, analytic_sun)
            .unwrap()
            .unwrap();
        let hour = (transit - EQUINOX_2024) * 24.0;
        assert!((hour - 6.1).abs() < 0.3, "transit at {hour}");
    }

    #[test]
    fn test_polar_day_has_no_sunrise() {
        // 2024-06-21, 80N
        let rise = next_event(2_460_482.5, 80.0, 0.0, RiseTransitKind::Rise, analytic_sun).unwrap();
        assert_eq!(rise, None);
    }

    #[test]
    fn test_equatorial_conversion_at_equinox_point() {
        let (ra, dec) = ecliptic_to_equatorial(0.0, 0.0, 23.44);
        assert!(ra.abs() < 1e-9 || (ra - 360.0).abs() < 1e-9);
        assert!(dec.abs() < 1e-9);
        let (_, dec) = ecliptic_to_equatorial(90.0, 0.0, 23.44);
        assert!((dec - 23.44).abs() < 1e-9);
    }
}
