//! The boundary between the chart pipeline and an astronomical ephemeris.

use thiserror::Error;

use crate::ephemeris::types::{HouseCusps, HouseSystem, RawPosition, RiseTransitKind};
use crate::vedic::types::Planet;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Invalid ayanamsa: {ayanamsa}. Valid ayanamsas: {valid:?}")]
    InvalidAyanamsa { ayanamsa: String, valid: Vec<String> },
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: Planet,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
    #[error("Rise/transit calculation failed for {body}: {message}")]
    RiseTransitFailed { body: Planet, message: String },
    #[error("{0} is not computed by the ephemeris")]
    UnsupportedBody(Planet),
}

/// Source of sidereal positions, house cusps and rise/set times.
///
/// Implementations apply their ayanamsa before returning; every angle
/// crossing this trait is sidereal. Failures are reported, never replaced
/// by approximate data.
pub trait EphemerisProvider {
    /// Position of `body` at Julian Day (UT).
    fn position(&self, body: Planet, julian_day: f64) -> Result<RawPosition, EphemerisError>;

    /// Ascendant, midheaven and 12 cusps for an observer.
    fn house_cusps(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError>;

    /// Next rise, set or transit of `body` after `julian_day`.
    ///
    /// `Ok(None)` means the event does not occur (polar day or night).
    fn rise_transit(
        &self,
        julian_day: f64,
        body: Planet,
        latitude: f64,
        longitude: f64,
        kind: RiseTransitKind,
    ) -> Result<Option<f64>, EphemerisError>;

    /// Ayanamsa in degrees at Julian Day (UT).
    fn ayanamsa(&self, julian_day: f64) -> Result<f64, EphemerisError>;

    /// Display name of the ayanamsa in use.
    fn ayanamsa_name(&self) -> String;
}
