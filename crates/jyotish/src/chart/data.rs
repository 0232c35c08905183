use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::ephemeris::types::{HouseSystem, RawPosition};
use crate::error::ChartError;
use crate::vedic::nakshatra::{nakshatra_placement, Nakshatra};
use crate::vedic::position::{is_retrograde, normalize_degrees, sign_of, to_dms, DegreeMinuteSecond};
use crate::vedic::types::{Planet, ZodiacSign};

/// The moment and place a chart is cast for. Never mutated after input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub name: String,
    pub local_datetime: NaiveDateTime,
    /// IANA zone name, e.g. `Asia/Kolkata`.
    pub timezone: String,
    pub latitude: f64,
    /// East-positive geographic longitude.
    pub longitude: f64,
    #[serde(default)]
    pub location: String,
}

impl BirthData {
    /// Resolve the local wall-clock time to UTC.
    ///
    /// Ambiguous times (DST fall-back) take the earlier instant. Times
    /// skipped by a DST jump are rejected.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, ChartError> {
        let tz: Tz = self.timezone.parse().map_err(|e| {
            ChartError::Configuration(format!("unknown timezone '{}': {}", self.timezone, e))
        })?;
        match tz.from_local_datetime(&self.local_datetime) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, latest) => {
                warn!(
                    "{} is ambiguous in {} ({} or {}); using the earlier instant",
                    self.local_datetime, self.timezone, earliest, latest
                );
                Ok(earliest.with_timezone(&Utc))
            }
            LocalResult::None => Err(ChartError::Configuration(format!(
                "{} does not exist in {}",
                self.local_datetime, self.timezone
            ))),
        }
    }
}

/// One body's placement within a single chart context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    /// Degrees per day.
    pub speed: f64,
    pub sign: ZodiacSign,
    pub dms: DegreeMinuteSecond,
    pub retrograde: bool,
    pub combust: bool,
    pub vargottama: bool,
    pub nakshatra: Nakshatra,
    pub pada: u8,
    /// 1..=12
    pub house: u8,
}

impl PlanetPosition {
    /// Normalise a raw provider position and place it in `house`.
    pub fn from_raw(planet: Planet, raw: &RawPosition, house: u8) -> Self {
        let longitude = normalize_degrees(raw.longitude);
        let placement = nakshatra_placement(longitude);
        Self {
            planet,
            longitude,
            latitude: raw.latitude,
            distance: raw.distance,
            speed: raw.speed,
            sign: sign_of(longitude),
            dms: to_dms(longitude),
            retrograde: is_retrograde(raw.speed),
            combust: false,
            vargottama: false,
            nakshatra: placement.nakshatra,
            pada: placement.pada,
            house,
        }
    }

    /// A new position for the same body at another longitude and house.
    ///
    /// Motion and flags carry over; sign, degrees and nakshatra are
    /// recomputed from `longitude`.
    pub fn relocated(&self, longitude: f64, house: u8) -> Self {
        let longitude = normalize_degrees(longitude);
        let placement = nakshatra_placement(longitude);
        Self {
            longitude,
            sign: sign_of(longitude),
            dms: to_dms(longitude),
            nakshatra: placement.nakshatra,
            pada: placement.pada,
            house,
            ..self.clone()
        }
    }

    /// Same placement with the condition flags replaced.
    pub fn with_flags(&self, combust: bool, vargottama: bool) -> Self {
        Self {
            combust,
            vargottama,
            ..self.clone()
        }
    }
}

/// The sidereal birth chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VedicChart {
    pub birth: BirthData,
    pub julian_day: f64,
    pub ayanamsa: f64,
    pub ayanamsa_name: String,
    pub ascendant: f64,
    pub midheaven: f64,
    /// Cusp longitudes for houses 1..=12.
    pub cusps: [f64; 12],
    pub house_system: HouseSystem,
    pub positions: Vec<PlanetPosition>,
}

impl VedicChart {
    pub fn ascendant_sign(&self) -> ZodiacSign {
        sign_of(self.ascendant)
    }

    /// Position of `planet`, or [`ChartError::MissingBodyPosition`].
    pub fn position(&self, planet: Planet) -> Result<&PlanetPosition, ChartError> {
        self.positions
            .iter()
            .find(|p| p.planet == planet)
            .ok_or(ChartError::MissingBodyPosition(planet))
    }
}
