//! TOML configuration.
//!
//! The file is read into loosely typed `*Toml` structs with defaults for
//! every field, then validated into [`JyotishConfig`]. Unknown house
//! systems, ayanamsas or divisional charts are rejected at load time.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::aspects::types::{AspectSettings, OrbSettings};
use crate::ephemeris::types::{Ayanamsa, EphemerisSettings, HouseSystem, NodeType};
use crate::error::ConfigError;
use crate::vedic::dashas::{DEFAULT_MAHADASHA_COUNT, MAX_MAHADASHA_COUNT};
use crate::vedic::vargas::ChartType;

#[derive(Debug, Clone, PartialEq)]
pub struct JyotishConfig {
    /// `None` defers to `SWISS_EPHEMERIS_PATH` and the system default.
    pub ephemeris_path: Option<PathBuf>,
    pub ephemeris: EphemerisSettings,
    pub divisional_charts: Vec<ChartType>,
    pub mahadasha_count: usize,
    pub aspects: AspectSettings,
}

impl Default for JyotishConfig {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            ephemeris: EphemerisSettings::default(),
            divisional_charts: vec![ChartType::D9],
            mahadasha_count: DEFAULT_MAHADASHA_COUNT,
            aspects: AspectSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    chart: ChartToml,
    #[serde(default)]
    dasha: DashaToml,
    #[serde(default)]
    aspects: AspectsToml,
}

#[derive(Debug, Clone, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default = "default_ayanamsa")]
    ayanamsa: String,
    #[serde(default)]
    node: NodeType,
}

impl Default for EphemerisToml {
    fn default() -> Self {
        Self {
            path: None,
            ayanamsa: default_ayanamsa(),
            node: NodeType::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ChartToml {
    #[serde(default = "default_house_system")]
    house_system: String,
    #[serde(default)]
    include_outer_planets: bool,
    #[serde(default = "default_divisional_charts")]
    divisional_charts: Vec<String>,
}

impl Default for ChartToml {
    fn default() -> Self {
        Self {
            house_system: default_house_system(),
            include_outer_planets: false,
            divisional_charts: default_divisional_charts(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct DashaToml {
    #[serde(default = "default_mahadasha_count")]
    mahadasha_count: usize,
}

impl Default for DashaToml {
    fn default() -> Self {
        Self {
            mahadasha_count: default_mahadasha_count(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AspectsToml {
    #[serde(flatten)]
    orbs: OrbSettings,
    #[serde(default)]
    conjunction_opposition_bonus: Option<f64>,
    #[serde(default)]
    include_special_aspects: Option<bool>,
}

fn default_ayanamsa() -> String {
    "lahiri".to_string()
}

fn default_house_system() -> String {
    "placidus".to_string()
}

fn default_divisional_charts() -> Vec<String> {
    vec!["d9".to_string()]
}

fn default_mahadasha_count() -> usize {
    DEFAULT_MAHADASHA_COUNT
}

impl JyotishConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let root: RootConfigToml = toml::from_str(text)?;
        Self::from_root(root)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn from_root(root: RootConfigToml) -> Result<Self, ConfigError> {
        let RootConfigToml {
            ephemeris,
            chart,
            dasha,
            aspects,
        } = root;

        let ayanamsa: Ayanamsa = ephemeris
            .ayanamsa
            .parse()
            .map_err(|e| ConfigError::InvalidFieldValue(format!("ephemeris.ayanamsa: {e}")))?;
        let house_system: HouseSystem = chart
            .house_system
            .parse()
            .map_err(|e| ConfigError::InvalidFieldValue(format!("chart.house_system: {e}")))?;
        let divisional_charts = chart
            .divisional_charts
            .iter()
            .map(|id| id.parse::<ChartType>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::InvalidFieldValue(format!("chart.divisional_charts: {e}")))?;
        if !(1..=MAX_MAHADASHA_COUNT).contains(&dasha.mahadasha_count) {
            return Err(ConfigError::InvalidFieldValue(format!(
                "dasha.mahadasha_count must be between 1 and {MAX_MAHADASHA_COUNT}, got {}",
                dasha.mahadasha_count
            )));
        }

        let defaults = AspectSettings::default();
        let orbs = aspects.orbs;
        for (name, value) in [
            ("luminary", orbs.luminary),
            ("personal", orbs.personal),
            ("social", orbs.social),
            ("node", orbs.node),
            ("outer", orbs.outer),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidFieldValue(format!(
                    "aspects.{name} must be a non-negative number, got {value}"
                )));
            }
        }
        let bonus = aspects
            .conjunction_opposition_bonus
            .unwrap_or(defaults.conjunction_opposition_bonus);
        if !(bonus.is_finite() && bonus >= 0.0) {
            return Err(ConfigError::InvalidFieldValue(format!(
                "aspects.conjunction_opposition_bonus must be a non-negative number, got {bonus}"
            )));
        }

        Ok(Self {
            ephemeris_path: ephemeris.path,
            ephemeris: EphemerisSettings {
                ayanamsa,
                node_type: ephemeris.node,
                house_system,
                include_outer_planets: chart.include_outer_planets,
            },
            divisional_charts,
            mahadasha_count: dasha.mahadasha_count,
            aspects: AspectSettings {
                orbs,
                conjunction_opposition_bonus: bonus,
                include_special_aspects: aspects
                    .include_special_aspects
                    .unwrap_or(defaults.include_special_aspects),
            },
        })
    }
}
