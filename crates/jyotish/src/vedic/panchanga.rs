//! Panchanga: the five limbs of the Vedic almanac.
//!
//! Tithi, Nakshatra, Yoga and Karana come from the sidereal Sun and Moon
//! longitudes; Vara from the Julian Day. Sunrise and sunset need the
//! ephemeris provider and are computed for the chart's location.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::chart::data::VedicChart;
use crate::ephemeris::provider::EphemerisProvider;
use crate::ephemeris::time::datetime_from_julian_day;
use crate::ephemeris::types::RiseTransitKind;
use crate::error::ChartError;
use crate::vedic::nakshatra::{get_nakshatra_for_longitude, NAKSHATRA_SEGMENT_SIZE};
use crate::vedic::position::{normalize_degrees, segment};
use crate::vedic::types::Planet;

pub const TITHI_SPAN: f64 = 12.0;
pub const KARANA_SPAN: f64 = 6.0;
pub const YOGA_SPAN: f64 = NAKSHATRA_SEGMENT_SIZE;

const TITHI_NAMES: [&str; 15] = [
    "Pratipada", "Dwitiya", "Tritiya", "Chaturthi", "Panchami",
    "Shashthi", "Saptami", "Ashtami", "Navami", "Dashami",
    "Ekadashi", "Dwadashi", "Trayodashi", "Chaturdashi", "Purnima",
];

const TITHI_LORDS: [Planet; 15] = [
    Planet::Sun, Planet::Moon, Planet::Mars, Planet::Mercury, Planet::Jupiter,
    Planet::Venus, Planet::Saturn, Planet::Rahu, Planet::Sun, Planet::Moon,
    Planet::Mars, Planet::Mercury, Planet::Jupiter, Planet::Venus, Planet::Saturn,
];

const YOGA_NAMES: [&str; 27] = [
    "Vishkambha", "Priti", "Ayushman", "Saubhagya", "Shobhana", "Atiganda",
    "Sukarma", "Dhriti", "Shula", "Ganda", "Vriddhi", "Dhruva", "Vyaghata",
    "Harshana", "Vajra", "Siddhi", "Vyatipata", "Variyana", "Parigha", "Shiva",
    "Siddha", "Sadhya", "Shubha", "Shukla", "Brahma", "Indra", "Vaidhriti",
];

/// The seven karanas that repeat through karanas 2..=57.
const MOVABLE_KARANAS: [&str; 7] = ["Bava", "Balava", "Kaulava", "Taitila", "Gara", "Vanija", "Vishti"];

const VARAS: [(&str, Planet); 7] = [
    ("Sunday", Planet::Sun),
    ("Monday", Planet::Moon),
    ("Tuesday", Planet::Mars),
    ("Wednesday", Planet::Mercury),
    ("Thursday", Planet::Jupiter),
    ("Friday", Planet::Venus),
    ("Saturday", Planet::Saturn),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paksha {
    Shukla,
    Krishna,
}

/// One limb: ordinal, name, ruling planet where one exists, and percent elapsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanchangaElement {
    /// 1-based ordinal for every limb.
    pub index: u8,
    pub name: String,
    pub lord: Option<Planet>,
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanchangaData {
    pub tithi: PanchangaElement,
    pub paksha: Paksha,
    pub nakshatra: PanchangaElement,
    pub yoga: PanchangaElement,
    pub karana: PanchangaElement,
    pub vara: PanchangaElement,
    /// Local `HH:MM:SS`; `None` when the Sun does not rise or set that day.
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    /// 0 at new moon, 100 at full moon.
    pub moon_phase: f64,
}

/// Moon's elongation from the Sun in [0, 360).
pub fn lunar_elongation(sun: f64, moon: f64) -> f64 {
    normalize_degrees(moon - sun)
}

pub fn tithi(sun: f64, moon: f64) -> (PanchangaElement, Paksha) {
    let (i, offset) = segment(lunar_elongation(sun, moon), TITHI_SPAN, 30);
    let index = i as u8 + 1;
    let name = if index == 30 { "Amavasya" } else { TITHI_NAMES[i % 15] };
    let paksha = if index <= 15 { Paksha::Shukla } else { Paksha::Krishna };
    let element = PanchangaElement {
        index,
        name: name.to_string(),
        lord: Some(TITHI_LORDS[i % 15]),
        progress: offset / TITHI_SPAN * 100.0,
    };
    (element, paksha)
}

pub fn nakshatra(moon: f64) -> PanchangaElement {
    let meta = get_nakshatra_for_longitude(moon);
    PanchangaElement {
        index: meta.nakshatra.index() as u8 + 1,
        name: meta.nakshatra.name().to_string(),
        lord: Some(meta.lord),
        progress: meta.progress * 100.0,
    }
}

pub fn yoga(sun: f64, moon: f64) -> PanchangaElement {
    let (i, offset) = segment(normalize_degrees(sun + moon), YOGA_SPAN, 27);
    PanchangaElement {
        index: i as u8 + 1,
        name: YOGA_NAMES[i].to_string(),
        lord: None,
        progress: offset / YOGA_SPAN * 100.0,
    }
}

/// Name of karana `index` (1..=60) within the lunar month.
pub fn karana_name(index: u8) -> &'static str {
    match index {
        1 => "Kimstughna",
        58 => "Shakuni",
        59 => "Chatushpada",
        60 => "Naga",
        k => MOVABLE_KARANAS[(k.saturating_sub(2) % 7) as usize],
    }
}

pub fn karana(sun: f64, moon: f64) -> PanchangaElement {
    let (i, offset) = segment(lunar_elongation(sun, moon), KARANA_SPAN, 60);
    let index = i as u8 + 1;
    PanchangaElement {
        index,
        name: karana_name(index).to_string(),
        lord: None,
        progress: offset / KARANA_SPAN * 100.0,
    }
}

/// Weekday of a Julian Day (UT); index 1 is Sunday, 7 is Saturday.
pub fn vara(julian_day: f64) -> PanchangaElement {
    let i = ((julian_day + 1.5).floor() as i64).rem_euclid(7) as usize;
    let (name, lord) = VARAS[i];
    PanchangaElement {
        index: i as u8 + 1,
        name: name.to_string(),
        lord: Some(lord),
        progress: (julian_day + 0.5).rem_euclid(1.0) * 100.0,
    }
}

pub fn moon_phase(sun: f64, moon: f64) -> f64 {
    let diff = lunar_elongation(sun, moon);
    if diff <= 180.0 {
        diff / 180.0 * 100.0
    } else {
        (360.0 - diff) / 180.0 * 100.0
    }
}

/// All positional limbs for given Sun and Moon longitudes; no sunrise.
pub fn panchanga_elements(sun: f64, moon: f64, julian_day: f64) -> PanchangaData {
    let (tithi, paksha) = tithi(sun, moon);
    PanchangaData {
        tithi,
        paksha,
        nakshatra: nakshatra(moon),
        yoga: yoga(sun, moon),
        karana: karana(sun, moon),
        vara: vara(julian_day),
        sunrise: None,
        sunset: None,
        moon_phase: moon_phase(sun, moon),
    }
}

fn local_clock(julian_day: f64, tz: Tz) -> Option<String> {
    datetime_from_julian_day(julian_day)
        .map(|dt: DateTime<Utc>| dt.with_timezone(&tz).format("%H:%M:%S").to_string())
}

/// Full Panchanga for a chart, with sunrise and sunset on the local birth date.
pub fn compute_panchanga<P: EphemerisProvider + ?Sized>(
    chart: &VedicChart,
    provider: &P,
) -> Result<PanchangaData, ChartError> {
    let sun = chart.position(Planet::Sun)?.longitude;
    let moon = chart.position(Planet::Moon)?.longitude;
    let mut data = panchanga_elements(sun, moon, chart.julian_day);

    let tz: Tz = chart.birth.timezone.parse().map_err(|e| {
        ChartError::Configuration(format!("unknown timezone '{}': {}", chart.birth.timezone, e))
    })?;
    let local_time = chart.birth.local_datetime.time();
    let seconds_since_midnight = f64::from(local_time.num_seconds_from_midnight())
        + f64::from(local_time.nanosecond()) / 1e9;
    let local_midnight = chart.julian_day - seconds_since_midnight / 86_400.0;

    let (lat, lon) = (chart.birth.latitude, chart.birth.longitude);
    let rise = provider.rise_transit(local_midnight, Planet::Sun, lat, lon, RiseTransitKind::Rise)?;
    let set = provider.rise_transit(local_midnight, Planet::Sun, lat, lon, RiseTransitKind::Set)?;
    data.sunrise = rise.and_then(|jd| local_clock(jd, tz));
    data.sunset = set.and_then(|jd| local_clock(jd, tz));

    debug!(
        "panchanga: tithi {} {}, yoga {}, karana {}, sunrise {:?}",
        data.tithi.index, data.tithi.name, data.yoga.name, data.karana.name, data.sunrise
    );
    Ok(data)
}
