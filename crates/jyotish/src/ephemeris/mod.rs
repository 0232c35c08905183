pub mod adapter;
pub mod ayanamsa;
pub mod provider;
pub mod riseset;
pub mod time;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use provider::{EphemerisError, EphemerisProvider};
pub use time::{datetime_from_julian_day, julian_day};
pub use types::{
    Ayanamsa, EphemerisSettings, HouseCusps, HouseSystem, NodeType, RawPosition,
    RiseTransitKind,
};
