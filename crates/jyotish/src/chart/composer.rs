//! Rashi (sign-based) and Bhava (cusp-based) house charts.
//!
//! Both label house `n` with the sign `n - 1` places after the ascendant
//! sign. They differ in occupancy: Rashi places by sign, Bhava by cusp
//! containment, and the two may disagree for the same planet.

use serde::{Deserialize, Serialize};

use crate::chart::data::VedicChart;
use crate::error::ChartError;
use crate::vedic::rulers::get_sign_ruler;
use crate::vedic::position::{house_for_longitude, house_for_sign, normalize_degrees, sign_for_house};
use crate::vedic::types::{Planet, ZodiacSign};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RashiHouse {
    pub number: u8,
    pub sign: ZodiacSign,
    /// Lord of the house sign.
    pub lord: Planet,
    pub occupants: Vec<Planet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RashiChart {
    pub ascendant_sign: ZodiacSign,
    pub houses: Vec<RashiHouse>,
}

impl RashiChart {
    pub fn house_of(&self, planet: Planet) -> Option<u8> {
        self.houses
            .iter()
            .find(|h| h.occupants.contains(&planet))
            .map(|h| h.number)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BhavaHouse {
    pub number: u8,
    pub sign: ZodiacSign,
    pub start: f64,
    pub end: f64,
    pub occupants: Vec<Planet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BhavaChart {
    pub ascendant_sign: ZodiacSign,
    pub houses: Vec<BhavaHouse>,
}

impl BhavaChart {
    pub fn house_of(&self, planet: Planet) -> Option<u8> {
        self.houses
            .iter()
            .find(|h| h.occupants.contains(&planet))
            .map(|h| h.number)
    }
}

/// Build the sign-based chart.
pub fn compose_rashi(chart: &VedicChart) -> RashiChart {
    let ascendant_sign = chart.ascendant_sign();
    let houses = (1..=12u8)
        .map(|number| {
            let sign = sign_for_house(ascendant_sign, number);
            let occupants = chart
                .positions
                .iter()
                .filter(|p| p.sign == sign)
                .map(|p| p.planet)
                .collect();
            RashiHouse {
                number,
                sign,
                lord: get_sign_ruler(sign),
                occupants,
            }
        })
        .collect();
    RashiChart { ascendant_sign, houses }
}

/// House boundaries of the Bhava chart: the ascendant followed by cusps 2..=12.
pub fn bhava_boundaries(chart: &VedicChart) -> [f64; 12] {
    let mut boundaries = chart.cusps.map(normalize_degrees);
    boundaries[0] = normalize_degrees(chart.ascendant);
    boundaries
}

/// Build the cusp-based chart.
///
/// Fails with [`ChartError::HouseAssignment`] when a planet falls in no
/// house, which only happens for a degenerate cusp set.
pub fn compose_bhava(chart: &VedicChart) -> Result<BhavaChart, ChartError> {
    let ascendant_sign = chart.ascendant_sign();
    let boundaries = bhava_boundaries(chart);

    let mut houses: Vec<BhavaHouse> = (1..=12u8)
        .map(|number| {
            let i = number as usize - 1;
            BhavaHouse {
                number,
                sign: sign_for_house(ascendant_sign, number),
                start: boundaries[i],
                end: boundaries[(i + 1) % 12],
                occupants: Vec::new(),
            }
        })
        .collect();

    for position in &chart.positions {
        let house = house_for_longitude(position.longitude, &boundaries).ok_or(
            ChartError::HouseAssignment {
                longitude: position.longitude,
            },
        )?;
        houses[house as usize - 1].occupants.push(position.planet);
    }

    Ok(BhavaChart { ascendant_sign, houses })
}

/// Sign-based house of every position, keyed by planet.
pub fn rashi_houses(chart: &VedicChart) -> Vec<(Planet, u8)> {
    let ascendant_sign = chart.ascendant_sign();
    chart
        .positions
        .iter()
        .map(|p| (p.planet, house_for_sign(p.sign, ascendant_sign)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::data::{BirthData, PlanetPosition};
    use crate::ephemeris::types::{HouseSystem, RawPosition};
    use chrono::NaiveDate;

    fn chart_with(ascendant: f64, cusps: [f64; 12], planets: &[(Planet, f64)]) -> VedicChart {
        VedicChart {
            birth: BirthData {
                name: "Composer".to_string(),
                local_datetime: NaiveDate::from_ymd_opt(2000, 1, 1)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
                timezone: "UTC".to_string(),
                latitude: 0.0,
                longitude: 0.0,
                location: String::new(),
            },
            julian_day: 2_451_545.0,
            ayanamsa: 23.85,
            ayanamsa_name: "lahiri".to_string(),
            ascendant,
            midheaven: normalize_degrees(ascendant + 270.0),
            cusps,
            house_system: HouseSystem::Placidus,
            positions: planets
                .iter()
                .map(|(planet, lon)| {
                    let raw = RawPosition { longitude: *lon, latitude: 0.0, distance: 1.0, speed: 1.0 };
                    PlanetPosition::from_raw(*planet, &raw, 1)
                })
                .collect(),
        }
    }

    fn unequal_cusps() -> [f64; 12] {
        // ascendant at 25 Aries, second cusp well into Gemini
        [25.0, 65.0, 90.0, 115.0, 150.0, 180.0, 205.0, 245.0, 270.0, 295.0, 330.0, 0.0]
    }

    #[test]
    fn test_rashi_sign_rotation() {
        let chart = chart_with(200.0, unequal_cusps(), &[]);
        let rashi = compose_rashi(&chart);
        let asc_index = chart.ascendant_sign().index();
        for house in &rashi.houses {
            assert_eq!(house.sign.index(), (asc_index + house.number as usize - 1) % 12);
            assert_eq!(house.lord, get_sign_ruler(house.sign));
        }
    }

    #[test]
    fn test_rashi_and_bhava_can_disagree() {
        // Taurus 10: second sign from an Aries ascendant, but inside cusp 1..2
        let chart = chart_with(25.0, unequal_cusps(), &[(Planet::Venus, 40.0)]);
        let rashi = compose_rashi(&chart);
        let bhava = compose_bhava(&chart).unwrap();
        assert_eq!(rashi.house_of(Planet::Venus), Some(2));
        assert_eq!(bhava.house_of(Planet::Venus), Some(1));
        assert_eq!(rashi.houses[1].sign, bhava.houses[1].sign);
    }

    #[test]
    fn test_bhava_wraparound_house() {
        // house 12 spans 0..25; house 11 spans 330..0
        let chart = chart_with(25.0, unequal_cusps(), &[(Planet::Saturn, 359.0)]);
        let bhava = compose_bhava(&chart).unwrap();
        assert_eq!(bhava.house_of(Planet::Saturn), Some(11));
    }

    #[test]
    fn test_degenerate_cusps_are_an_error() {
        let chart = chart_with(0.0, [0.0; 12], &[(Planet::Sun, 10.0)]);
        assert!(matches!(
            compose_bhava(&chart),
            Err(ChartError::HouseAssignment { .. })
        ));
    }
}
