//! Core Vedic enumerations.
//!
//! The types here only carry data (ordinal, display name, fixed relations).
//! Anything derived from a longitude lives in free functions in
//! [`crate::vedic::position`] and friends.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Uranus,
    Neptune,
    Pluto,
}

/// The nine grahas in traditional order.
pub const NAVAGRAHAS: [Planet; 9] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
];

pub const OUTER_PLANETS: [Planet; 3] = [Planet::Uranus, Planet::Neptune, Planet::Pluto];

impl Planet {
    pub const fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Mercury => "Mercury",
            Planet::Jupiter => "Jupiter",
            Planet::Venus => "Venus",
            Planet::Saturn => "Saturn",
            Planet::Rahu => "Rahu",
            Planet::Ketu => "Ketu",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }

    pub const fn is_luminary(self) -> bool {
        matches!(self, Planet::Sun | Planet::Moon)
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Planet::Rahu | Planet::Ketu)
    }

    pub const fn is_outer(self) -> bool {
        matches!(self, Planet::Uranus | Planet::Neptune | Planet::Pluto)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let planet = match s.to_lowercase().as_str() {
            "sun" => Planet::Sun,
            "moon" => Planet::Moon,
            "mars" => Planet::Mars,
            "mercury" => Planet::Mercury,
            "jupiter" => Planet::Jupiter,
            "venus" => Planet::Venus,
            "saturn" => Planet::Saturn,
            "rahu" | "north_node" => Planet::Rahu,
            "ketu" | "south_node" => Planet::Ketu,
            "uranus" => Planet::Uranus,
            "neptune" => Planet::Neptune,
            "pluto" => Planet::Pluto,
            other => return Err(format!("Unknown planet ID: {}", other)),
        };
        Ok(planet)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignQuality {
    Movable,
    Fixed,
    Dual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl ZodiacSign {
    /// 0 = Aries .. 11 = Pisces.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub const fn quality(self) -> SignQuality {
        match self.index() % 3 {
            0 => SignQuality::Movable,
            1 => SignQuality::Fixed,
            _ => SignQuality::Dual,
        }
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Odd signs in the traditional 1-based count (Aries, Gemini, Leo, ...).
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign for a 0-based index, wrapping past Pisces.
pub fn sign_from_index(index: usize) -> ZodiacSign {
    ZODIAC_SIGNS[index % 12]
}

/// Sign `offset` places after `sign` (0 = the sign itself).
pub fn sign_offset(sign: ZodiacSign, offset: usize) -> ZodiacSign {
    sign_from_index(sign.index() + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_qualities() {
        assert_eq!(ZodiacSign::Aries.quality(), SignQuality::Movable);
        assert_eq!(ZodiacSign::Taurus.quality(), SignQuality::Fixed);
        assert_eq!(ZodiacSign::Pisces.quality(), SignQuality::Dual);
        assert_eq!(ZodiacSign::Capricorn.quality(), SignQuality::Movable);
    }

    #[test]
    fn test_sign_elements() {
        assert_eq!(ZodiacSign::Leo.element(), Element::Fire);
        assert_eq!(ZodiacSign::Virgo.element(), Element::Earth);
        assert_eq!(ZodiacSign::Aquarius.element(), Element::Air);
        assert_eq!(ZodiacSign::Scorpio.element(), Element::Water);
    }

    #[test]
    fn test_sign_offset_wraps() {
        assert_eq!(sign_offset(ZodiacSign::Sagittarius, 8), ZodiacSign::Leo);
        assert_eq!(sign_from_index(12), ZodiacSign::Aries);
    }

    #[test]
    fn test_planet_from_str() {
        assert_eq!("north_node".parse::<Planet>().unwrap(), Planet::Rahu);
        assert_eq!("Jupiter".parse::<Planet>().unwrap(), Planet::Jupiter);
        assert!("vulcan".parse::<Planet>().is_err());
    }
}
