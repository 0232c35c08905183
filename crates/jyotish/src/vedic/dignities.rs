//! Dignities for Vedic astrology.
//!
//! Classifies a graha's sign placement as exalted, debilitated,
//! moolatrikona, own sign or neutral.

use serde::{Deserialize, Serialize};
use crate::vedic::position::{degree_in_sign, sign_of};
use crate::vedic::rulers::get_sign_ruler;
use crate::vedic::types::{sign_offset, Planet, ZodiacSign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Exalted,
    Debilitated,
    Moolatrikona,
    OwnSign,
    Neutral,
}

/// Exaltation sign and the degree of deepest exaltation.
pub fn exaltation(planet: Planet) -> Option<(ZodiacSign, f64)> {
    match planet {
        Planet::Sun => Some((ZodiacSign::Aries, 10.0)),
        Planet::Moon => Some((ZodiacSign::Taurus, 3.0)),
        Planet::Mars => Some((ZodiacSign::Capricorn, 28.0)),
        Planet::Mercury => Some((ZodiacSign::Virgo, 15.0)),
        Planet::Jupiter => Some((ZodiacSign::Cancer, 5.0)),
        Planet::Venus => Some((ZodiacSign::Pisces, 27.0)),
        Planet::Saturn => Some((ZodiacSign::Libra, 20.0)),
        Planet::Rahu => Some((ZodiacSign::Taurus, 20.0)),
        Planet::Ketu => Some((ZodiacSign::Scorpio, 20.0)),
        Planet::Uranus | Planet::Neptune | Planet::Pluto => None,
    }
}

/// Debilitation is the sign opposite exaltation.
pub fn debilitation(planet: Planet) -> Option<ZodiacSign> {
    exaltation(planet).map(|(sign, _)| sign_offset(sign, 6))
}

/// Moolatrikona sign with its degree range.
fn moolatrikona(planet: Planet) -> Option<(ZodiacSign, f64, f64)> {
    match planet {
        Planet::Sun => Some((ZodiacSign::Leo, 0.0, 20.0)),
        Planet::Moon => Some((ZodiacSign::Taurus, 4.0, 30.0)),
        Planet::Mars => Some((ZodiacSign::Aries, 0.0, 12.0)),
        Planet::Mercury => Some((ZodiacSign::Virgo, 16.0, 20.0)),
        Planet::Jupiter => Some((ZodiacSign::Sagittarius, 0.0, 10.0)),
        Planet::Venus => Some((ZodiacSign::Libra, 0.0, 15.0)),
        Planet::Saturn => Some((ZodiacSign::Aquarius, 0.0, 20.0)),
        _ => None,
    }
}

/// Dignity of a planet at a sidereal longitude.
///
/// Mercury is only exalted up to its deep exaltation degree in Virgo; the
/// rest of Virgo is moolatrikona and then own sign.
pub fn get_dignity(planet: Planet, longitude: f64) -> Dignity {
    let sign = sign_of(longitude);
    let degree = degree_in_sign(longitude);

    if let Some((exalt_sign, deep_degree)) = exaltation(planet) {
        let partial = planet == Planet::Mercury;
        if sign == exalt_sign && (!partial || degree <= deep_degree) {
            return Dignity::Exalted;
        }
    }
    if debilitation(planet) == Some(sign) {
        return Dignity::Debilitated;
    }
    if let Some((mt_sign, from, to)) = moolatrikona(planet) {
        if sign == mt_sign && degree >= from && degree < to {
            return Dignity::Moolatrikona;
        }
    }
    if !planet.is_node() && !planet.is_outer() && get_sign_ruler(sign) == planet {
        return Dignity::OwnSign;
    }
    Dignity::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_dignities() {
        assert_eq!(get_dignity(Planet::Sun, 10.0), Dignity::Exalted);
        assert_eq!(get_dignity(Planet::Sun, 190.0), Dignity::Debilitated);
        assert_eq!(get_dignity(Planet::Sun, 125.0), Dignity::Moolatrikona);
        assert_eq!(get_dignity(Planet::Sun, 145.0), Dignity::OwnSign);
        assert_eq!(get_dignity(Planet::Sun, 70.0), Dignity::Neutral);
    }

    #[test]
    fn test_mercury_virgo_split() {
        assert_eq!(get_dignity(Planet::Mercury, 160.0), Dignity::Exalted);
        assert_eq!(get_dignity(Planet::Mercury, 168.0), Dignity::Moolatrikona);
        assert_eq!(get_dignity(Planet::Mercury, 175.0), Dignity::OwnSign);
        assert_eq!(get_dignity(Planet::Mercury, 345.0), Dignity::Debilitated);
    }

    #[test]
    fn test_moon_taurus_is_exalted_first() {
        assert_eq!(get_dignity(Planet::Moon, 45.0), Dignity::Exalted);
        assert_eq!(get_dignity(Planet::Moon, 100.0), Dignity::OwnSign);
    }

    #[test]
    fn test_outer_planets_neutral() {
        assert_eq!(get_dignity(Planet::Pluto, 220.0), Dignity::Neutral);
        assert_eq!(debilitation(Planet::Neptune), None);
    }
}
