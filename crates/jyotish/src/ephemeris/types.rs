use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ephemeris::provider::EphemerisError;

/// Raw body position as returned by the provider (sidereal).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    /// Longitude in degrees; not necessarily normalized.
    pub longitude: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    /// Distance in AU
    pub distance: f64,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
}

/// Ascendant, midheaven and the 12 house cusps (sidereal degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub ascendant: f64,
    pub midheaven: f64,
    pub cusps: [f64; 12],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    Placidus,
    Koch,
    Equal,
    WholeSign,
    Regiomontanus,
    Campanus,
    Porphyry,
    Alcabitius,
    Morinus,
}

/// House system mapping (name, Swiss Ephemeris code)
const HOUSE_SYSTEMS: &[(&str, HouseSystem, u8)] = &[
    ("placidus", HouseSystem::Placidus, b'P'),
    ("koch", HouseSystem::Koch, b'K'),
    ("equal", HouseSystem::Equal, b'E'),
    ("whole_sign", HouseSystem::WholeSign, b'W'),
    ("regiomontanus", HouseSystem::Regiomontanus, b'R'),
    ("campanus", HouseSystem::Campanus, b'C'),
    ("porphyry", HouseSystem::Porphyry, b'O'),
    ("alcabitius", HouseSystem::Alcabitius, b'B'),
    ("morinus", HouseSystem::Morinus, b'M'),
];

impl HouseSystem {
    /// Single-byte code passed opaquely to the ephemeris.
    pub fn code(self) -> u8 {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| *system == self)
            .map(|(_, _, code)| *code)
            .unwrap_or(b'P')
    }

    pub fn name(self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| *system == self)
            .map(|(name, _, _)| *name)
            .unwrap_or("placidus")
    }

    /// Resolve a single-letter house system code.
    pub fn from_code(code: u8) -> Result<Self, EphemerisError> {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, _, c)| *c == code.to_ascii_uppercase())
            .map(|(_, system, _)| *system)
            .ok_or_else(|| EphemerisError::InvalidHouseSystem {
                system: (code as char).to_string(),
                valid: HOUSE_SYSTEMS.iter().map(|(name, _, _)| name.to_string()).collect(),
            })
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if lower.len() == 1 {
            return HouseSystem::from_code(lower.as_bytes()[0]);
        }
        HOUSE_SYSTEMS
            .iter()
            .find(|(name, _, _)| *name == lower)
            .map(|(_, system, _)| *system)
            .ok_or_else(|| EphemerisError::InvalidHouseSystem {
                system: s.to_string(),
                valid: HOUSE_SYSTEMS.iter().map(|(name, _, _)| name.to_string()).collect(),
            })
    }
}

/// Sidereal reference systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ayanamsa {
    Lahiri,
    /// Lahiri anchor measured from the true (nutated) equinox.
    TrueLahiri,
    Krishnamurti,
    Raman,
    FaganBradley,
    Yukteshwar,
    DeLuce,
    DjwhalKhul,
    SuryaSiddhanta,
}

const AYANAMSAS: &[(&str, Ayanamsa)] = &[
    ("lahiri", Ayanamsa::Lahiri),
    ("chitrapaksha", Ayanamsa::Lahiri),
    ("true_lahiri", Ayanamsa::TrueLahiri),
    ("true_citra", Ayanamsa::TrueLahiri),
    ("krishnamurti", Ayanamsa::Krishnamurti),
    ("kp", Ayanamsa::Krishnamurti),
    ("raman", Ayanamsa::Raman),
    ("fagan_bradley", Ayanamsa::FaganBradley),
    ("yukteshwar", Ayanamsa::Yukteshwar),
    ("de_luce", Ayanamsa::DeLuce),
    ("djwhal_khul", Ayanamsa::DjwhalKhul),
    ("surya_siddhanta", Ayanamsa::SuryaSiddhanta),
];

impl Ayanamsa {
    pub fn name(self) -> &'static str {
        match self {
            Ayanamsa::Lahiri => "lahiri",
            Ayanamsa::TrueLahiri => "true_lahiri",
            Ayanamsa::Krishnamurti => "krishnamurti",
            Ayanamsa::Raman => "raman",
            Ayanamsa::FaganBradley => "fagan_bradley",
            Ayanamsa::Yukteshwar => "yukteshwar",
            Ayanamsa::DeLuce => "de_luce",
            Ayanamsa::DjwhalKhul => "djwhal_khul",
            Ayanamsa::SuryaSiddhanta => "surya_siddhanta",
        }
    }

    /// Ayanamsa at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Ayanamsa::Lahiri | Ayanamsa::TrueLahiri => 23.853,
            Ayanamsa::Krishnamurti => 23.850,
            Ayanamsa::Raman => 22.370,
            Ayanamsa::FaganBradley => 24.736,
            Ayanamsa::Yukteshwar => 22.376,
            Ayanamsa::DeLuce => 21.619,
            Ayanamsa::DjwhalKhul => 22.883,
            Ayanamsa::SuryaSiddhanta => 22.459,
        }
    }

    pub const fn uses_true_equinox(self) -> bool {
        matches!(self, Ayanamsa::TrueLahiri)
    }
}

impl fmt::Display for Ayanamsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ayanamsa {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        AYANAMSAS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, ayanamsa)| *ayanamsa)
            .ok_or_else(|| EphemerisError::InvalidAyanamsa {
                ayanamsa: s.to_string(),
                valid: AYANAMSAS.iter().map(|(name, _)| name.to_string()).collect(),
            })
    }
}

/// Which lunar node model supplies Rahu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Mean,
    #[default]
    True,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiseTransitKind {
    Rise,
    Set,
    UpperTransit,
}

/// Settings for ephemeris calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSettings {
    pub ayanamsa: Ayanamsa,
    pub node_type: NodeType,
    pub house_system: HouseSystem,
    /// Also compute Uranus, Neptune and Pluto.
    pub include_outer_planets: bool,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            ayanamsa: Ayanamsa::Lahiri,
            node_type: NodeType::True,
            house_system: HouseSystem::Placidus,
            include_outer_planets: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_system_parsing() {
        assert_eq!("placidus".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
        assert_eq!("Whole_Sign".parse::<HouseSystem>().unwrap(), HouseSystem::WholeSign);
        assert_eq!("w".parse::<HouseSystem>().unwrap(), HouseSystem::WholeSign);
        assert_eq!(HouseSystem::Porphyry.code(), b'O');
    }

    #[test]
    fn test_invalid_house_system() {
        let err = "topocentric_x".parse::<HouseSystem>().unwrap_err();
        assert!(matches!(err, EphemerisError::InvalidHouseSystem { .. }));
        assert!(HouseSystem::from_code(b'Z').is_err());
    }

    #[test]
    fn test_ayanamsa_aliases() {
        assert_eq!("chitrapaksha".parse::<Ayanamsa>().unwrap(), Ayanamsa::Lahiri);
        assert_eq!("KP".parse::<Ayanamsa>().unwrap(), Ayanamsa::Krishnamurti);
        assert!("galactic".parse::<Ayanamsa>().is_err());
    }
}
