pub mod conditions;
pub mod dashas;
pub mod dignities;
pub mod nakshatra;
pub mod panchanga;
pub mod position;
pub mod rulers;
pub mod types;
pub mod vargas;
pub mod yogas;

pub use conditions::{analyze_conditions, CombustionState, MotionState, PlanetCondition, PlanetaryWar};
pub use dashas::{compute_vimshottari_dasha, DashaTimeline, Mahadasha, Antardasha, Pratyantardasha};
pub use dignities::{get_dignity, Dignity};
pub use nakshatra::{get_nakshatra_for_longitude, Nakshatra, NakshatraPlacement};
pub use panchanga::{compute_panchanga, panchanga_elements, PanchangaData};
pub use types::{Planet, ZodiacSign};
pub use vargas::{build_divisional_chart, transform_longitude, ChartType, DivisionalChartData};
pub use yogas::{identify_yogas, Yoga};
