//! Sidereal (Vedic) chart calculations.
//!
//! A [`BirthData`] record is cast into a [`VedicChart`] through an
//! [`EphemerisProvider`]; divisional charts, the Vimshottari dasha tree,
//! the Panchanga, aspects, yogas and planetary conditions are then pure
//! functions of that chart.

pub mod aspects;
pub mod chart;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod vedic;

pub use chart::{build_report, calculate_chart, BirthData, PlanetPosition, VedicChart, VedicReport};
pub use config::JyotishConfig;
pub use ephemeris::{EphemerisError, EphemerisProvider, SwissEphemerisAdapter};
pub use error::{ChartError, ConfigError};
