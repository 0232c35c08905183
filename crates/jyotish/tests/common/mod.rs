//! Fixed in-memory ephemeris used by the integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::HashMap;

use jyotish::chart::BirthData;
use jyotish::ephemeris::{
    EphemerisError, EphemerisProvider, HouseCusps, HouseSystem, RawPosition, RiseTransitKind,
};
use jyotish::vedic::Planet;

pub struct StubProvider {
    pub positions: HashMap<Planet, RawPosition>,
    pub houses: HouseCusps,
    /// Days after the query instant; `None` means the event never happens.
    pub rise_offset: Option<f64>,
    pub set_offset: Option<f64>,
    pub ayanamsa: f64,
}

pub fn raw(longitude: f64, speed: f64) -> RawPosition {
    RawPosition {
        longitude,
        latitude: 0.0,
        distance: 1.0,
        speed,
    }
}

impl StubProvider {
    /// Aries rising at 15 degrees; Mercury retrograde and combust, Mars
    /// vargottama and at war with Venus, Moon on the Bharani boundary.
    pub fn sample() -> Self {
        let positions = [
            (Planet::Sun, raw(40.0, 0.98)),
            (Planet::Moon, raw(13.333333, 13.2)),
            (Planet::Mars, raw(91.0, 0.6)),
            (Planet::Mercury, raw(30.5, -0.4)),
            (Planet::Jupiter, raw(253.0, 0.1)),
            (Planet::Venus, raw(91.6, 1.1)),
            (Planet::Saturn, raw(280.0, -0.03)),
            (Planet::Rahu, raw(10.0, -0.05)),
            (Planet::Uranus, raw(250.0, -0.02)),
            (Planet::Neptune, raw(260.0, -0.01)),
            (Planet::Pluto, raw(202.0, -0.02)),
        ]
        .into_iter()
        .collect();

        Self {
            positions,
            houses: HouseCusps {
                ascendant: 15.0,
                midheaven: 278.0,
                cusps: [15.0, 45.0, 72.0, 98.0, 128.0, 162.0, 195.0, 225.0, 252.0, 278.0, 308.0, 342.0],
            },
            rise_offset: Some(0.25),
            set_offset: Some(0.75),
            ayanamsa: 23.7,
        }
    }

    pub fn without(mut self, planet: Planet) -> Self {
        self.positions.remove(&planet);
        self
    }
}

impl EphemerisProvider for StubProvider {
    fn position(&self, body: Planet, julian_day: f64) -> Result<RawPosition, EphemerisError> {
        self.positions
            .get(&body)
            .copied()
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: "not in stub".to_string(),
            })
    }

    fn house_cusps(
        &self,
        _julian_day: f64,
        _latitude: f64,
        _longitude: f64,
        _system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        Ok(self.houses)
    }

    fn rise_transit(
        &self,
        julian_day: f64,
        _body: Planet,
        _latitude: f64,
        _longitude: f64,
        kind: RiseTransitKind,
    ) -> Result<Option<f64>, EphemerisError> {
        let offset = match kind {
            RiseTransitKind::Rise => self.rise_offset,
            RiseTransitKind::Set => self.set_offset,
            RiseTransitKind::UpperTransit => Some(0.5),
        };
        Ok(offset.map(|o| julian_day + o))
    }

    fn ayanamsa(&self, _julian_day: f64) -> Result<f64, EphemerisError> {
        Ok(self.ayanamsa)
    }

    fn ayanamsa_name(&self) -> String {
        "stub".to_string()
    }
}

pub fn delhi_birth() -> BirthData {
    BirthData {
        name: "Sample".to_string(),
        local_datetime: NaiveDate::from_ymd_opt(1990, 5, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap(),
        timezone: "Asia/Kolkata".to_string(),
        latitude: 28.6139,
        longitude: 77.209,
        location: "New Delhi".to_string(),
    }
}
