use log::debug;
use serde::{Deserialize, Serialize};

use crate::aspects::calculator::AspectCalculator;
use crate::aspects::types::AspectData;
use crate::chart::composer::{compose_bhava, compose_rashi, BhavaChart, RashiChart};
use crate::chart::data::VedicChart;
use crate::config::JyotishConfig;
use crate::ephemeris::provider::EphemerisProvider;
use crate::error::ChartError;
use crate::vedic::conditions::{analyze_conditions, planetary_wars, PlanetCondition, PlanetaryWar};
use crate::vedic::dashas::{chart_vimshottari_dasha, DashaTimeline};
use crate::vedic::panchanga::{compute_panchanga, PanchangaData};
use crate::vedic::vargas::{build_divisional_charts, DivisionalChartData};
use crate::vedic::yogas::{identify_yogas, Yoga};

/// Everything derived from one birth chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VedicReport {
    pub chart: VedicChart,
    pub rashi: RashiChart,
    pub bhava: BhavaChart,
    pub divisional_charts: Vec<DivisionalChartData>,
    pub dasha: DashaTimeline,
    pub panchanga: PanchangaData,
    pub aspects: Vec<AspectData>,
    pub yogas: Vec<Yoga>,
    pub conditions: Vec<PlanetCondition>,
    pub planetary_wars: Vec<PlanetaryWar>,
}

impl VedicReport {
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Run every downstream analysis over a cast chart.
pub fn build_report<P: EphemerisProvider + ?Sized>(
    chart: VedicChart,
    provider: &P,
    config: &JyotishConfig,
) -> Result<VedicReport, ChartError> {
    let rashi = compose_rashi(&chart);
    let bhava = compose_bhava(&chart)?;
    let divisional_charts = build_divisional_charts(&chart, &config.divisional_charts);
    let dasha = chart_vimshottari_dasha(&chart, config.mahadasha_count)?;
    let panchanga = compute_panchanga(&chart, provider)?;
    let aspects = AspectCalculator::new(config.aspects).compute_aspects(&chart.positions);
    let yogas = identify_yogas(&aspects);
    let conditions = analyze_conditions(&chart)?;
    let planetary_wars = planetary_wars(&chart.positions);
    debug!(
        "report: {} divisional charts, {} aspects, {} yogas",
        divisional_charts.len(),
        aspects.len(),
        yogas.len()
    );

    Ok(VedicReport {
        chart,
        rashi,
        bhava,
        divisional_charts,
        dasha,
        panchanga,
        aspects,
        yogas,
        conditions,
        planetary_wars,
    })
}
