use thiserror::Error;

use crate::ephemeris::EphemerisError;
use crate::vedic::types::Planet;

/// Errors raised while assembling a chart or any analysis derived from it.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("{0} position is required but missing from the chart")]
    MissingBodyPosition(Planet),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("No house contains longitude {longitude}; cusp set is degenerate")]
    HouseAssignment { longitude: f64 },
}

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid field value: {0}")]
    InvalidFieldValue(String),
}

impl From<ConfigError> for ChartError {
    fn from(err: ConfigError) -> Self {
        ChartError::Configuration(err.to_string())
    }
}
