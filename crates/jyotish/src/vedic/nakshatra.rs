//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use serde::{Deserialize, Serialize};
use crate::vedic::position::{normalize_degrees, segment};
use crate::vedic::types::Planet;

pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

// (nakshatra, display_name, planetary lord)
pub const NAKSHATRA_ORDER: [(Nakshatra, &str, Planet); 27] = [
    (Nakshatra::Ashwini, "Ashwini", Planet::Ketu),
    (Nakshatra::Bharani, "Bharani", Planet::Venus),
    (Nakshatra::Krittika, "Krittika", Planet::Sun),
    (Nakshatra::Rohini, "Rohini", Planet::Moon),
    (Nakshatra::Mrigashira, "Mrigashira", Planet::Mars),
    (Nakshatra::Ardra, "Ardra", Planet::Rahu),
    (Nakshatra::Punarvasu, "Punarvasu", Planet::Jupiter),
    (Nakshatra::Pushya, "Pushya", Planet::Saturn),
    (Nakshatra::Ashlesha, "Ashlesha", Planet::Mercury),
    (Nakshatra::Magha, "Magha", Planet::Ketu),
    (Nakshatra::PurvaPhalguni, "Purva Phalguni", Planet::Venus),
    (Nakshatra::UttaraPhalguni, "Uttara Phalguni", Planet::Sun),
    (Nakshatra::Hasta, "Hasta", Planet::Moon),
    (Nakshatra::Chitra, "Chitra", Planet::Mars),
    (Nakshatra::Swati, "Swati", Planet::Rahu),
    (Nakshatra::Vishakha, "Vishakha", Planet::Jupiter),
    (Nakshatra::Anuradha, "Anuradha", Planet::Saturn),
    (Nakshatra::Jyeshtha, "Jyeshtha", Planet::Mercury),
    (Nakshatra::Mula, "Mula", Planet::Ketu),
    (Nakshatra::PurvaAshadha, "Purva Ashadha", Planet::Venus),
    (Nakshatra::UttaraAshadha, "Uttara Ashadha", Planet::Sun),
    (Nakshatra::Shravana, "Shravana", Planet::Moon),
    (Nakshatra::Dhanishta, "Dhanishta", Planet::Mars),
    (Nakshatra::Shatabhisha, "Shatabhisha", Planet::Rahu),
    (Nakshatra::PurvaBhadrapada, "Purva Bhadrapada", Planet::Jupiter),
    (Nakshatra::UttaraBhadrapada, "Uttara Bhadrapada", Planet::Saturn),
    (Nakshatra::Revati, "Revati", Planet::Mercury),
];

impl Nakshatra {
    /// 0-based position in the zodiac (Ashwini = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        NAKSHATRA_ORDER[self.index()].1
    }

    /// Vimshottari lord.
    pub const fn lord(self) -> Planet {
        NAKSHATRA_ORDER[self.index()].2
    }

    pub fn start_degree(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SEGMENT_SIZE
    }
}

pub fn nakshatra_from_index(index: usize) -> Nakshatra {
    NAKSHATRA_ORDER[index % 27].0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraMetadata {
    pub nakshatra: Nakshatra,
    pub lord: Planet,
    pub start: f64,
    pub end: f64,
    /// Degrees elapsed since the start of the nakshatra.
    pub offset: f64,
    /// Fraction of the nakshatra traversed, in [0, 1).
    pub progress: f64,
    /// Quarter, 1..=4.
    pub pada: u8,
    pub pada_fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraPlacement {
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

/// Return metadata for the nakshatra containing the given longitude.
pub fn get_nakshatra_for_longitude(longitude: f64) -> NakshatraMetadata {
    let lon = normalize_degrees(longitude);
    let (index, offset) = segment(lon, NAKSHATRA_SEGMENT_SIZE, 27);
    let nakshatra = nakshatra_from_index(index);
    let start = nakshatra.start_degree();

    let (pada_index, pada_offset) = segment(offset, PADA_SIZE, 4);
    // an offset snapped past the last pada belongs to the next nakshatra,
    // which `segment` above has already accounted for
    let pada = (pada_index as u8 + 1).clamp(1, 4);

    NakshatraMetadata {
        nakshatra,
        lord: nakshatra.lord(),
        start,
        end: start + NAKSHATRA_SEGMENT_SIZE,
        offset,
        progress: offset / NAKSHATRA_SEGMENT_SIZE,
        pada,
        pada_fraction: pada_offset / PADA_SIZE,
    }
}

pub fn nakshatra_placement(longitude: f64) -> NakshatraPlacement {
    let meta = get_nakshatra_for_longitude(longitude);
    NakshatraPlacement {
        nakshatra: meta.nakshatra,
        pada: meta.pada,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_nakshatra_for_longitude() {
        let meta = get_nakshatra_for_longitude(0.0);
        assert_eq!(meta.nakshatra, Nakshatra::Ashwini);
        assert_eq!(meta.lord, Planet::Ketu);
        assert_eq!(meta.pada, 1);

        let meta2 = get_nakshatra_for_longitude(13.33);
        assert_eq!(meta2.nakshatra, Nakshatra::Ashwini);
        assert_eq!(meta2.pada, 4);
    }

    #[test]
    fn test_boundary_selects_next_nakshatra() {
        let meta = get_nakshatra_for_longitude(13.333333);
        assert_eq!(meta.nakshatra, Nakshatra::Bharani);
        assert_eq!(meta.progress, 0.0);
        assert_eq!(meta.pada, 1);
    }

    #[test]
    fn test_pada_boundaries() {
        assert_eq!(get_nakshatra_for_longitude(3.0).pada, 1);
        assert_eq!(get_nakshatra_for_longitude(3.5).pada, 2);
        assert_eq!(get_nakshatra_for_longitude(7.0).pada, 3);
        assert_eq!(get_nakshatra_for_longitude(10.0).pada, 4);
    }

    #[test]
    fn test_revati_wraps_to_ashwini() {
        assert_eq!(get_nakshatra_for_longitude(359.9).nakshatra, Nakshatra::Revati);
        assert_eq!(get_nakshatra_for_longitude(360.0).nakshatra, Nakshatra::Ashwini);
    }

    #[test]
    fn test_table_order_matches_enum() {
        for (idx, (nakshatra, _, _)) in NAKSHATRA_ORDER.iter().enumerate() {
            assert_eq!(nakshatra.index(), idx);
        }
    }
}
