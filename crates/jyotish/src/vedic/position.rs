//! Longitude normalisation and house assignment.
//!
//! Everything here is a pure function of its arguments. The house
//! containment test is written so that a house spanning 0° Aries works
//! without special cases.

use serde::{Deserialize, Serialize};
use crate::vedic::types::{sign_from_index, ZodiacSign};

pub const SIGN_SPAN: f64 = 30.0;

/// Longitudes this close below a segment boundary count as the next segment.
pub const BOUNDARY_EPSILON: f64 = 1e-6;

/// Degree / minute / second breakdown of a position within its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreeMinuteSecond {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Shortest arc between two longitudes, in [0, 180].
pub fn angular_distance(lon1: f64, lon2: f64) -> f64 {
    let diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    diff.min(360.0 - diff)
}

/// Arc travelled forward (in zodiacal order) from `from` to `to`, in [0, 360).
pub fn forward_distance(from: f64, to: f64) -> f64 {
    normalize_degrees(to - from)
}

/// Locate `value` among `count` equal segments of `width` degrees.
///
/// Returns the 0-based segment index and the offset into that segment.
/// Values within [`BOUNDARY_EPSILON`] of the next boundary are snapped onto it.
pub fn segment(value: f64, width: f64, count: usize) -> (usize, f64) {
    let floor = (value / width).floor().max(0.0);
    let mut index = floor as usize;
    let mut offset = value - floor * width;
    if width - offset < BOUNDARY_EPSILON {
        index += 1;
        offset = 0.0;
    }
    (index % count, offset.max(0.0))
}

/// Zodiac sign containing a longitude.
pub fn sign_of(longitude: f64) -> ZodiacSign {
    let (index, _) = segment(normalize_degrees(longitude), SIGN_SPAN, 12);
    sign_from_index(index)
}

/// Degrees elapsed within the sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    let (_, offset) = segment(normalize_degrees(longitude), SIGN_SPAN, 12);
    offset
}

pub fn to_dms(longitude: f64) -> DegreeMinuteSecond {
    let within = degree_in_sign(longitude);
    let degrees = within.floor();
    let minutes_total = (within - degrees) * 60.0;
    let minutes = minutes_total.floor();
    let seconds = (minutes_total - minutes) * 60.0;
    DegreeMinuteSecond {
        degrees: degrees as u32,
        minutes: minutes as u32,
        seconds,
    }
}

/// Ketu sits exactly opposite Rahu.
pub fn ketu_longitude(rahu_longitude: f64) -> f64 {
    normalize_degrees(rahu_longitude + 180.0)
}

pub fn is_retrograde(speed: f64) -> bool {
    speed < 0.0
}

/// Cusp-based house (1..=12) for a longitude.
///
/// House `i` runs from cusp `i` to cusp `i + 1` (house 12 closes on cusp 1).
/// Returns `None` only for a degenerate cusp set where no house contains
/// the point; callers must not substitute a default house.
pub fn house_for_longitude(longitude: f64, cusps: &[f64; 12]) -> Option<u8> {
    let lon = normalize_degrees(longitude);
    for i in 0..12 {
        let cusp_start = normalize_degrees(cusps[i]);
        let cusp_end = normalize_degrees(cusps[(i + 1) % 12]);
        let relative = (lon - cusp_start + 360.0) % 360.0;
        let span = (cusp_end - cusp_start + 360.0) % 360.0;
        if relative < span {
            return Some(i as u8 + 1);
        }
    }
    None
}

/// Sign occupying house `house` (1..=12) when the ascendant is in `ascendant_sign`.
pub fn sign_for_house(ascendant_sign: ZodiacSign, house: u8) -> ZodiacSign {
    sign_from_index(ascendant_sign.index() + (house as usize + 11) % 12)
}

/// Sign-based house (1..=12) of `sign` counted from the ascendant sign.
pub fn house_for_sign(sign: ZodiacSign, ascendant_sign: ZodiacSign) -> u8 {
    ((sign.index() + 12 - ascendant_sign.index()) % 12) as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert!(normalize_degrees(-1e-18) < 360.0);
    }

    #[test]
    fn test_angular_distance_wraps() {
        assert!((angular_distance(355.0, 5.0) - 10.0).abs() < 1e-9);
        assert!((angular_distance(10.0, 190.0) - 180.0).abs() < 1e-9);
        assert!((forward_distance(350.0, 20.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_sign_and_dms() {
        assert_eq!(sign_of(0.0), ZodiacSign::Aries);
        assert_eq!(sign_of(45.5), ZodiacSign::Taurus);
        assert_eq!(sign_of(-0.5), ZodiacSign::Pisces);
        let dms = to_dms(45.5125);
        assert_eq!(dms.degrees, 15);
        assert_eq!(dms.minutes, 30);
        assert!((dms.seconds - 45.0).abs() < 1e-6);
    }

    #[test]
    fn test_segment_snaps_to_boundary() {
        let (index, offset) = segment(29.9999999, 30.0, 12);
        assert_eq!(index, 1);
        assert_eq!(offset, 0.0);
        let (index, _) = segment(359.99999999, 30.0, 12);
        assert_eq!(index, 0);
    }

    #[test]
    fn test_ketu_opposite_rahu() {
        assert!((ketu_longitude(200.0) - 20.0).abs() < 1e-9);
        assert!((ketu_longitude(90.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_house_wraparound() {
        // House 1 spans 350° -> 10°, crossing 0° Aries.
        let mut cusps = [0.0; 12];
        cusps[0] = 350.0;
        for i in 1..12 {
            cusps[i] = 10.0 + (i as f64 - 1.0) * 340.0 / 11.0;
        }
        assert_eq!(house_for_longitude(359.0, &cusps), Some(1));
        assert_eq!(house_for_longitude(5.0, &cusps), Some(1));
        assert_eq!(house_for_longitude(10.0, &cusps), Some(2));
        assert_eq!(house_for_longitude(349.9, &cusps), Some(12));
    }

    #[test]
    fn test_degenerate_cusps_have_no_house() {
        let cusps = [42.0; 12];
        assert_eq!(house_for_longitude(100.0, &cusps), None);
    }

    #[test]
    fn test_sign_rotation() {
        for asc in 0..12 {
            let asc_sign = sign_from_index(asc);
            for house in 1..=12u8 {
                let sign = sign_for_house(asc_sign, house);
                assert_eq!(sign.index(), (asc + house as usize - 1) % 12);
                assert_eq!(house_for_sign(sign, asc_sign), house);
            }
        }
    }
}
