//! Divisional chart (varga) helpers for Vedic astrology.
//!
//! Vargas are derived charts that divide each sign into multiple parts.
//! Each part maps onto a whole sign; which sign the first part of a given
//! rashi lands on is fixed by Parashari convention and differs per chart.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chart::data::{PlanetPosition, VedicChart};
use crate::vedic::position::{
    degree_in_sign, house_for_sign, segment, sign_of, BOUNDARY_EPSILON, SIGN_SPAN,
};
use crate::vedic::types::{sign_offset, Element, SignQuality, ZodiacSign};

/// The Shodasavarga, plus the rashi chart itself as D1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChartType {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VargaSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub division: u32,
}

const fn varga(id: &'static str, label: &'static str, division: u32) -> VargaSpec {
    VargaSpec { id, label, division }
}

pub const ALL_CHART_TYPES: [ChartType; 16] = [
    ChartType::D1,
    ChartType::D2,
    ChartType::D3,
    ChartType::D4,
    ChartType::D7,
    ChartType::D9,
    ChartType::D10,
    ChartType::D12,
    ChartType::D16,
    ChartType::D20,
    ChartType::D24,
    ChartType::D27,
    ChartType::D30,
    ChartType::D40,
    ChartType::D45,
    ChartType::D60,
];

impl ChartType {
    pub const fn spec(self) -> VargaSpec {
        match self {
            ChartType::D1 => varga("d1", "Rashi", 1),
            ChartType::D2 => varga("d2", "Hora", 2),
            ChartType::D3 => varga("d3", "Drekkana", 3),
            ChartType::D4 => varga("d4", "Chaturthamsa", 4),
            ChartType::D7 => varga("d7", "Saptamsa", 7),
            ChartType::D9 => varga("d9", "Navamsa", 9),
            ChartType::D10 => varga("d10", "Dasamsa", 10),
            ChartType::D12 => varga("d12", "Dvadasamsa", 12),
            ChartType::D16 => varga("d16", "Shodasamsa", 16),
            ChartType::D20 => varga("d20", "Vimsamsa", 20),
            ChartType::D24 => varga("d24", "Chaturvimsamsa", 24),
            ChartType::D27 => varga("d27", "Bhamsa", 27),
            ChartType::D30 => varga("d30", "Trimsamsa", 30),
            ChartType::D40 => varga("d40", "Khavedamsa", 40),
            ChartType::D45 => varga("d45", "Akshavedamsa", 45),
            ChartType::D60 => varga("d60", "Shashtiamsa", 60),
        }
    }

    pub fn division(self) -> u32 {
        self.spec().division
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn id(self) -> &'static str {
        self.spec().id
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{} ({})", self.division(), self.label())
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_lowercase();
        ALL_CHART_TYPES
            .iter()
            .copied()
            .find(|chart_type| {
                let spec = chart_type.spec();
                spec.id == key || spec.label.to_lowercase() == key
            })
            .ok_or_else(|| {
                let valid: Vec<&str> = ALL_CHART_TYPES.iter().map(|c| c.id()).collect();
                format!("Unknown divisional chart '{}'. Valid charts: {:?}", s, valid)
            })
    }
}

/// Trimsamsa spans (degrees, ruling sign) for odd signs; even signs reverse them.
const TRIMSAMSA_ODD: [(f64, ZodiacSign); 5] = [
    (5.0, ZodiacSign::Aries),
    (5.0, ZodiacSign::Aquarius),
    (8.0, ZodiacSign::Sagittarius),
    (7.0, ZodiacSign::Gemini),
    (5.0, ZodiacSign::Libra),
];
const TRIMSAMSA_EVEN: [(f64, ZodiacSign); 5] = [
    (5.0, ZodiacSign::Taurus),
    (7.0, ZodiacSign::Virgo),
    (8.0, ZodiacSign::Pisces),
    (5.0, ZodiacSign::Capricorn),
    (5.0, ZodiacSign::Scorpio),
];

fn by_quality(sign: ZodiacSign, movable: usize, fixed: usize, dual: usize) -> usize {
    match sign.quality() {
        SignQuality::Movable => movable,
        SignQuality::Fixed => fixed,
        SignQuality::Dual => dual,
    }
}

fn by_parity(sign: ZodiacSign, odd: usize, even: usize) -> usize {
    if sign.is_odd() {
        odd
    } else {
        even
    }
}

/// Divisional sign of the `part`-th (0-based) division of `sign`.
fn part_sign(chart_type: ChartType, sign: ZodiacSign, part: usize) -> ZodiacSign {
    let own = sign.index();
    let (start, step) = match chart_type {
        ChartType::D1 => (own, 0),
        // Hora: Sun's Leo and Moon's Cancer
        ChartType::D2 => {
            return if sign.is_odd() == (part == 0) {
                ZodiacSign::Leo
            } else {
                ZodiacSign::Cancer
            };
        }
        ChartType::D3 => (own, 4),
        ChartType::D4 => (own, 3),
        ChartType::D7 => (by_parity(sign, own, own + 6), 1),
        ChartType::D9 => (by_quality(sign, own, own + 8, own + 4), 1),
        ChartType::D10 => (by_parity(sign, own, own + 8), 1),
        ChartType::D12 => (own, 1),
        ChartType::D16 => (by_quality(sign, 0, 4, 8), 1),
        ChartType::D20 => (by_quality(sign, 0, 8, 4), 1),
        ChartType::D24 => (by_parity(sign, 4, 3), 1),
        ChartType::D27 => {
            let start = match sign.element() {
                Element::Fire => 0,
                Element::Earth => 3,
                Element::Air => 6,
                Element::Water => 9,
            };
            (start, 1)
        }
        ChartType::D40 => (by_parity(sign, 0, 6), 1),
        ChartType::D45 => (by_quality(sign, 0, 4, 8), 1),
        ChartType::D60 => (own, 1),
        ChartType::D30 => {
            let table = if sign.is_odd() { &TRIMSAMSA_ODD } else { &TRIMSAMSA_EVEN };
            return table[part.min(4)].1;
        }
    };
    sign_offset(ZodiacSign::Aries, start + step * part)
}

/// Index of the Trimsamsa span containing `degree` and the fraction through it.
///
/// Span edges snap like [`segment`] does for the equal divisions.
fn trimsamsa_part(sign: ZodiacSign, degree: f64) -> (usize, f64) {
    let table = if sign.is_odd() { &TRIMSAMSA_ODD } else { &TRIMSAMSA_EVEN };
    let mut start = 0.0;
    for (i, (span, _)) in table.iter().enumerate() {
        let end = start + span;
        if end - degree >= BOUNDARY_EPSILON || i == table.len() - 1 {
            let offset = (degree - start).max(0.0);
            return (i, (offset / span).clamp(0.0, 1.0 - f64::EPSILON));
        }
        start = end;
    }
    (table.len() - 1, 0.0)
}

/// Map a sidereal longitude into the given divisional chart.
///
/// The result lies in the divisional sign at the same fractional position
/// through the sign as the input had through its part.
pub fn transform_longitude(chart_type: ChartType, longitude: f64) -> f64 {
    let sign = sign_of(longitude);
    let degree = degree_in_sign(longitude);
    if chart_type == ChartType::D1 {
        return sign.index() as f64 * SIGN_SPAN + degree;
    }

    let (part, fraction) = if chart_type == ChartType::D30 {
        trimsamsa_part(sign, degree)
    } else {
        let k = chart_type.division() as usize;
        let width = SIGN_SPAN / k as f64;
        let (part, offset) = segment(degree, width, k);
        (part.min(k - 1), offset / width)
    };

    let target = part_sign(chart_type, sign, part);
    target.index() as f64 * SIGN_SPAN + fraction * SIGN_SPAN
}

/// Divisional sign of a longitude.
pub fn divisional_sign(chart_type: ChartType, longitude: f64) -> ZodiacSign {
    sign_of(transform_longitude(chart_type, longitude))
}

/// A planet in the same sign in the rashi and the navamsa.
pub fn is_vargottama(longitude: f64) -> bool {
    divisional_sign(ChartType::D9, longitude) == sign_of(longitude)
}

/// A divisional chart, housed from its own ascendant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionalChartData {
    pub chart_type: ChartType,
    pub ascendant_longitude: f64,
    pub ascendant_sign: ZodiacSign,
    pub positions: Vec<PlanetPosition>,
}

/// Rehouse a set of transformed positions from a divisional ascendant sign.
pub fn rehouse(
    positions: &[PlanetPosition],
    ascendant_sign: ZodiacSign,
    chart_type: ChartType,
) -> Vec<PlanetPosition> {
    positions
        .iter()
        .map(|p| {
            let longitude = transform_longitude(chart_type, p.longitude);
            let house = house_for_sign(sign_of(longitude), ascendant_sign);
            p.relocated(longitude, house)
        })
        .collect()
}

/// Build one divisional chart from the rashi chart.
pub fn build_divisional_chart(chart: &VedicChart, chart_type: ChartType) -> DivisionalChartData {
    let ascendant_longitude = transform_longitude(chart_type, chart.ascendant);
    let ascendant_sign = sign_of(ascendant_longitude);
    debug!(
        "{}: ascendant {:.4} -> {:.4} ({})",
        chart_type, chart.ascendant, ascendant_longitude, ascendant_sign
    );
    DivisionalChartData {
        chart_type,
        ascendant_longitude,
        ascendant_sign,
        positions: rehouse(&chart.positions, ascendant_sign, chart_type),
    }
}

/// Build each requested divisional chart in order.
pub fn build_divisional_charts(
    chart: &VedicChart,
    chart_types: &[ChartType],
) -> Vec<DivisionalChartData> {
    chart_types
        .iter()
        .map(|chart_type| build_divisional_chart(chart, *chart_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_at(chart_type: ChartType, lon: f64) -> ZodiacSign {
        divisional_sign(chart_type, lon)
    }

    #[test]
    fn test_navamsa_of_zero_aries() {
        assert_eq!(transform_longitude(ChartType::D9, 0.0), 0.0);
    }

    #[test]
    fn test_navamsa_starting_signs() {
        // movable from itself, fixed from the 9th, dual from the 5th
        assert_eq!(sign_at(ChartType::D9, 0.5), ZodiacSign::Aries);
        assert_eq!(sign_at(ChartType::D9, 30.5), ZodiacSign::Capricorn);
        assert_eq!(sign_at(ChartType::D9, 60.5), ZodiacSign::Libra);
        // last navamsa of Pisces is Pisces
        assert_eq!(sign_at(ChartType::D9, 359.9), ZodiacSign::Pisces);
    }

    #[test]
    fn test_navamsa_rescales_degree() {
        // halfway through the 2nd navamsa of Aries: Taurus 15
        let lon = 10.0 / 3.0 * 1.5;
        assert!((transform_longitude(ChartType::D9, lon) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_dasamsa_even_sign_starts_ninth() {
        assert_eq!(sign_at(ChartType::D10, 30.1), ZodiacSign::Capricorn);
        assert_eq!(sign_at(ChartType::D10, 0.1), ZodiacSign::Aries);
    }

    #[test]
    fn test_hora() {
        assert_eq!(sign_at(ChartType::D2, 10.0), ZodiacSign::Leo);
        assert_eq!(sign_at(ChartType::D2, 20.0), ZodiacSign::Cancer);
        assert_eq!(sign_at(ChartType::D2, 40.0), ZodiacSign::Cancer);
        assert_eq!(sign_at(ChartType::D2, 50.0), ZodiacSign::Leo);
    }

    #[test]
    fn test_drekkana_trines() {
        assert_eq!(sign_at(ChartType::D3, 5.0), ZodiacSign::Aries);
        assert_eq!(sign_at(ChartType::D3, 15.0), ZodiacSign::Leo);
        assert_eq!(sign_at(ChartType::D3, 25.0), ZodiacSign::Sagittarius);
    }

    #[test]
    fn test_trimsamsa_unequal_spans() {
        assert_eq!(sign_at(ChartType::D30, 4.9), ZodiacSign::Aries);
        assert_eq!(sign_at(ChartType::D30, 12.0), ZodiacSign::Sagittarius);
        assert_eq!(sign_at(ChartType::D30, 19.0), ZodiacSign::Gemini);
        // Taurus is even: 5..12 Virgo
        assert_eq!(sign_at(ChartType::D30, 36.0), ZodiacSign::Virgo);
        assert_eq!(sign_at(ChartType::D30, 59.0), ZodiacSign::Scorpio);
    }

    #[test]
    fn test_trimsamsa_edges_snap_like_equal_divisions() {
        assert_eq!(sign_at(ChartType::D9, 3.3333333), ZodiacSign::Taurus);
        assert_eq!(sign_at(ChartType::D30, 4.9999999), ZodiacSign::Aquarius);
        assert!((transform_longitude(ChartType::D30, 4.9999999) - 300.0).abs() < 1e-9);
        // Taurus 12 is the Virgo/Pisces edge
        assert_eq!(sign_at(ChartType::D30, 41.9999995), ZodiacSign::Pisces);
        assert_eq!(sign_at(ChartType::D30, 4.99), ZodiacSign::Aries);
    }

    #[test]
    fn test_chart_type_metadata_is_consistent() {
        for chart_type in ALL_CHART_TYPES {
            let spec = chart_type.spec();
            assert_eq!(spec.id, format!("d{}", spec.division));
            assert_eq!(spec.id.parse::<ChartType>().unwrap(), chart_type);
            assert_eq!(spec.label.parse::<ChartType>().unwrap(), chart_type);
        }
    }

    #[test]
    fn test_zero_aries_lands_on_part_boundary() {
        for chart_type in ALL_CHART_TYPES {
            let k = chart_type.division() as f64;
            let out = transform_longitude(chart_type, 0.0);
            let parts = out / (SIGN_SPAN / k);
            assert!((parts - parts.round()).abs() < 1e-9, "{chart_type}: {out}");
        }
    }

    #[test]
    fn test_transform_stays_in_range() {
        for chart_type in ALL_CHART_TYPES {
            let mut lon = 0.0;
            while lon < 360.0 {
                let out = transform_longitude(chart_type, lon);
                assert!((0.0..360.0).contains(&out), "{chart_type} {lon} -> {out}");
                lon += 0.37;
            }
        }
    }

    #[test]
    fn test_vargottama() {
        // first navamsa of Aries is Aries
        assert!(is_vargottama(1.0));
        assert!(!is_vargottama(5.0));
    }

    #[test]
    fn test_chart_type_parsing() {
        assert_eq!("D9".parse::<ChartType>().unwrap(), ChartType::D9);
        assert_eq!("navamsa".parse::<ChartType>().unwrap(), ChartType::D9);
        assert!("d5".parse::<ChartType>().is_err());
        assert_eq!(ChartType::D60.division(), 60);
    }
}
