//! Ayanamsa from a J2000 reference value plus IAU 2006 general precession.

use crate::ephemeris::time::julian_centuries;
use crate::ephemeris::types::Ayanamsa;
use crate::vedic::position::normalize_degrees;

/// IAU 2006 general precession in ecliptic longitude, in arcseconds.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// Nutation in longitude from the four largest IAU 1980 terms, in arcseconds.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let sun = (280.4665 + 36000.7698 * t).to_radians();
    let moon = (218.3165 + 481267.8813 * t).to_radians();
    -17.20 * omega.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
        + 0.21 * (2.0 * omega).sin()
}

/// Ayanamsa in degrees at Julian Day. Systems on the true equinox
/// include nutation in longitude.
pub fn ayanamsa_deg(ayanamsa: Ayanamsa, julian_day: f64) -> f64 {
    let t = julian_centuries(julian_day);
    let mut arcsec = general_precession_longitude_arcsec(t);
    if ayanamsa.uses_true_equinox() {
        arcsec += nutation_longitude_arcsec(t);
    }
    ayanamsa.reference_j2000_deg() + arcsec / 3600.0
}

/// Shift a tropical longitude onto the sidereal zodiac.
pub fn tropical_to_sidereal(tropical_longitude: f64, ayanamsa_value: f64) -> f64 {
    normalize_degrees(tropical_longitude - ayanamsa_value)
}
