pub mod calculator;
pub mod composer;
pub mod data;
pub mod report;

pub use calculator::{calculate_chart, ChartCalculator};
pub use composer::{compose_bhava, compose_rashi, BhavaChart, BhavaHouse, RashiChart, RashiHouse};
pub use data::{BirthData, PlanetPosition, VedicChart};
pub use report::{build_report, VedicReport};
