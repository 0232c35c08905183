use log::debug;

use crate::chart::data::{BirthData, PlanetPosition, VedicChart};
use crate::ephemeris::provider::EphemerisProvider;
use crate::ephemeris::time::julian_day;
use crate::ephemeris::types::{EphemerisSettings, RawPosition};
use crate::error::ChartError;
use crate::vedic::conditions::{combustion_state, CombustionState};
use crate::vedic::position::{angular_distance, house_for_longitude, ketu_longitude, normalize_degrees};
use crate::vedic::types::{Planet, NAVAGRAHAS, OUTER_PLANETS};
use crate::vedic::vargas::is_vargottama;

/// Bodies requested from the provider, in chart order. Ketu is derived.
pub fn chart_bodies(settings: &EphemerisSettings) -> Vec<Planet> {
    let mut bodies: Vec<Planet> = NAVAGRAHAS.to_vec();
    if settings.include_outer_planets {
        bodies.extend(OUTER_PLANETS);
    }
    bodies
}

/// Ketu mirrors Rahu: opposite longitude and latitude, same motion.
pub fn ketu_from_rahu(rahu: &RawPosition) -> RawPosition {
    RawPosition {
        longitude: ketu_longitude(rahu.longitude),
        latitude: -rahu.latitude,
        distance: rahu.distance,
        speed: rahu.speed,
    }
}

fn validate_location(birth: &BirthData) -> Result<(), ChartError> {
    if !(-90.0..=90.0).contains(&birth.latitude) || !birth.latitude.is_finite() {
        return Err(ChartError::Configuration(format!(
            "latitude {} is outside [-90, 90]",
            birth.latitude
        )));
    }
    if !(-180.0..=180.0).contains(&birth.longitude) || !birth.longitude.is_finite() {
        return Err(ChartError::Configuration(format!(
            "longitude {} is outside [-180, 180]",
            birth.longitude
        )));
    }
    Ok(())
}

/// Cast the sidereal birth chart.
///
/// Every provider failure is propagated; no position is ever defaulted.
pub fn calculate_chart<P: EphemerisProvider + ?Sized>(
    birth: &BirthData,
    provider: &P,
    settings: &EphemerisSettings,
) -> Result<VedicChart, ChartError> {
    validate_location(birth)?;
    let utc = birth.to_utc()?;
    let jd = julian_day(utc);
    debug!("casting chart for {} at {} (JD {:.6})", birth.name, utc, jd);

    let houses = provider.house_cusps(jd, birth.latitude, birth.longitude, settings.house_system)?;
    let cusps = houses.cusps.map(normalize_degrees);

    let mut raw: Vec<(Planet, RawPosition)> = Vec::new();
    for body in chart_bodies(settings) {
        let position = if body == Planet::Ketu {
            let rahu = raw
                .iter()
                .find(|(p, _)| *p == Planet::Rahu)
                .map(|(_, r)| *r)
                .ok_or(ChartError::MissingBodyPosition(Planet::Rahu))?;
            ketu_from_rahu(&rahu)
        } else {
            provider.position(body, jd)?
        };
        raw.push((body, position));
    }
    debug!("acquired {} positions", raw.len());

    let sun_longitude = raw
        .iter()
        .find(|(p, _)| *p == Planet::Sun)
        .map(|(_, r)| normalize_degrees(r.longitude))
        .ok_or(ChartError::MissingBodyPosition(Planet::Sun))?;

    let positions = raw
        .iter()
        .map(|(planet, r)| {
            let longitude = normalize_degrees(r.longitude);
            let house = house_for_longitude(longitude, &cusps)
                .ok_or(ChartError::HouseAssignment { longitude })?;
            let base = PlanetPosition::from_raw(*planet, r, house);
            let combust = combustion_state(*planet, angular_distance(longitude, sun_longitude), base.retrograde)
                .is_some_and(CombustionState::is_combust);
            Ok(base.with_flags(combust, is_vargottama(longitude)))
        })
        .collect::<Result<Vec<_>, ChartError>>()?;

    Ok(VedicChart {
        birth: birth.clone(),
        julian_day: jd,
        ayanamsa: provider.ayanamsa(jd)?,
        ayanamsa_name: provider.ayanamsa_name(),
        ascendant: normalize_degrees(houses.ascendant),
        midheaven: normalize_degrees(houses.midheaven),
        cusps,
        house_system: settings.house_system,
        positions,
    })
}

/// Stateful wrapper that owns a provider and its settings.
pub struct ChartCalculator<P: EphemerisProvider> {
    provider: P,
    settings: EphemerisSettings,
}

impl<P: EphemerisProvider> ChartCalculator<P> {
    pub fn new(provider: P, settings: EphemerisSettings) -> Self {
        Self { provider, settings }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn settings(&self) -> &EphemerisSettings {
        &self.settings
    }

    pub fn calculate(&self, birth: &BirthData) -> Result<VedicChart, ChartError> {
        calculate_chart(birth, &self.provider, &self.settings)
    }
}
