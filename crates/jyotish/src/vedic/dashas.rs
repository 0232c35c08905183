//! Vimshottari dasha calculations for Vedic astrology.
//!
//! Dashas are time periods ruled by planets, calculated based on the Moon's
//! nakshatra. The tree has three levels: Mahadasha, Antardasha and
//! Pratyantardasha. Every level partitions its parent exactly; period
//! boundaries are computed from the parent's start so rounding never
//! accumulates across siblings.

use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::chart::data::VedicChart;
use crate::ephemeris::time::datetime_from_julian_day;
use crate::error::ChartError;
use crate::vedic::nakshatra::{get_nakshatra_for_longitude, Nakshatra};
use crate::vedic::position::normalize_degrees;
use crate::vedic::types::Planet;

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;
pub const VIMSHOTTARI_YEAR_DAYS: f64 = 365.25;
/// Mahadashas generated by default: one full cycle plus carry-over.
pub const DEFAULT_MAHADASHA_COUNT: usize = 28;
/// Upper bound accepted from configuration: thirty full cycles.
pub const MAX_MAHADASHA_COUNT: usize = 270;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub const VIMSHOTTARI_SEQUENCE: [(Planet, f64); 9] = [
    (Planet::Ketu, 7.0),
    (Planet::Venus, 20.0),
    (Planet::Sun, 6.0),
    (Planet::Moon, 10.0),
    (Planet::Mars, 7.0),
    (Planet::Rahu, 18.0),
    (Planet::Jupiter, 16.0),
    (Planet::Saturn, 19.0),
    (Planet::Mercury, 17.0),
];

lazy_static::lazy_static! {
    static ref SEQUENCE_INDEX: HashMap<Planet, usize> = VIMSHOTTARI_SEQUENCE
        .iter()
        .enumerate()
        .map(|(i, (planet, _))| (*planet, i))
        .collect();
}

/// Full Vimshottari period of a planet in years, if it rules one.
pub fn dasha_years(planet: Planet) -> Option<f64> {
    SEQUENCE_INDEX
        .get(&planet)
        .map(|i| VIMSHOTTARI_SEQUENCE[*i].1)
}

/// The nine lords in cycle order starting from `planet`.
fn cycle_from(planet: Planet) -> impl Iterator<Item = (Planet, f64)> + Clone {
    let start = SEQUENCE_INDEX.get(&planet).copied().unwrap_or(0);
    (0..VIMSHOTTARI_SEQUENCE.len()).map(move |offset| VIMSHOTTARI_SEQUENCE[(start + offset) % 9])
}

/// `None` once the result leaves chrono's representable range.
fn days_after(start: DateTime<Utc>, days: f64) -> Option<DateTime<Utc>> {
    let millis = (days * MILLIS_PER_DAY).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    start.checked_add_signed(Duration::try_milliseconds(millis as i64)?)
}

fn in_period(start: DateTime<Utc>, end: DateTime<Utc>, date: DateTime<Utc>) -> bool {
    start <= date && date < end
}

/// Split `[start, end)` into nine sub-periods proportional to the lords'
/// years, beginning with `lord`. Returns (planet, start, end, days).
fn subdivide(
    lord: Planet,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    total_days: f64,
) -> Vec<(Planet, DateTime<Utc>, DateTime<Utc>, f64)> {
    cycle_from(lord)
        .enumerate()
        .scan(0.0_f64, |elapsed, (i, (planet, years))| {
            let days = total_days * years / VIMSHOTTARI_TOTAL_YEARS;
            let child_start = days_after(start, *elapsed).map_or(end, |d| d.min(end));
            *elapsed += days;
            let child_end = if i == VIMSHOTTARI_SEQUENCE.len() - 1 {
                end
            } else {
                days_after(start, *elapsed).map_or(end, |d| d.min(end))
            };
            Some((planet, child_start, child_end, days))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pratyantardasha {
    pub planet: Planet,
    pub antardasha: Planet,
    pub mahadasha: Planet,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Antardasha {
    pub planet: Planet,
    pub parent: Planet,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_days: f64,
    pub pratyantardashas: Vec<Pratyantardasha>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mahadasha {
    pub planet: Planet,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_years: f64,
    pub antardashas: Vec<Antardasha>,
}

impl Pratyantardasha {
    pub fn is_active(&self, date: DateTime<Utc>) -> bool {
        in_period(self.start, self.end, date)
    }
}

impl Antardasha {
    pub fn is_active(&self, date: DateTime<Utc>) -> bool {
        in_period(self.start, self.end, date)
    }
}

impl Mahadasha {
    pub fn is_active(&self, date: DateTime<Utc>) -> bool {
        in_period(self.start, self.end, date)
    }

    pub fn duration_days(&self) -> f64 {
        self.duration_years * VIMSHOTTARI_YEAR_DAYS
    }
}

/// Remaining part of the first Mahadasha at birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaBalance {
    pub planet: Planet,
    pub total_years: f64,
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl DashaBalance {
    /// Break a year count into whole years, months (1/12 year) and days.
    pub fn from_years(planet: Planet, total_years: f64) -> Self {
        let years = total_years.floor();
        let months_total = (total_years - years) * 12.0;
        let months = months_total.floor();
        let days = ((months_total - months) * VIMSHOTTARI_YEAR_DAYS / 12.0).floor();
        Self {
            planet,
            total_years,
            years: years as u32,
            months: months as u32,
            days: days as u32,
        }
    }
}

/// The periods running at one instant.
#[derive(Debug, Clone, Copy)]
pub struct ActiveDasha<'a> {
    pub mahadasha: &'a Mahadasha,
    pub antardasha: &'a Antardasha,
    pub pratyantardasha: &'a Pratyantardasha,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaTimeline {
    pub birth: DateTime<Utc>,
    pub moon_longitude: f64,
    pub moon_nakshatra: Nakshatra,
    /// Fraction of the birth nakshatra already traversed.
    pub nakshatra_progress: f64,
    pub balance: DashaBalance,
    pub mahadashas: Vec<Mahadasha>,
}

impl DashaTimeline {
    /// Mahadasha, Antardasha and Pratyantardasha containing `date`.
    ///
    /// Intervals are half-open, so a boundary instant belongs to the
    /// period that starts there.
    pub fn active_at(&self, date: DateTime<Utc>) -> Option<ActiveDasha<'_>> {
        let mahadasha = self.mahadashas.iter().find(|m| m.is_active(date))?;
        let antardasha = mahadasha.antardashas.iter().find(|a| a.is_active(date))?;
        let pratyantardasha = antardasha
            .pratyantardashas
            .iter()
            .find(|p| p.is_active(date))?;
        Some(ActiveDasha {
            mahadasha,
            antardasha,
            pratyantardasha,
        })
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.mahadashas.last().map(|m| m.end)
    }
}

fn build_antardasha(mahadasha: Planet, planet: Planet, start: DateTime<Utc>, end: DateTime<Utc>, days: f64) -> Antardasha {
    let pratyantardashas = subdivide(planet, start, end, days)
        .into_iter()
        .map(|(p, s, e, d)| Pratyantardasha {
            planet: p,
            antardasha: planet,
            mahadasha,
            start: s,
            end: e,
            duration_days: d,
        })
        .collect();
    Antardasha {
        planet,
        parent: mahadasha,
        start,
        end,
        duration_days: days,
        pratyantardashas,
    }
}

fn build_mahadasha(planet: Planet, start: DateTime<Utc>, end: DateTime<Utc>, years: f64) -> Mahadasha {
    let antardashas = subdivide(planet, start, end, years * VIMSHOTTARI_YEAR_DAYS)
        .into_iter()
        .map(|(p, s, e, d)| build_antardasha(planet, p, s, e, d))
        .collect();
    Mahadasha {
        planet,
        start,
        end,
        duration_years: years,
        antardashas,
    }
}

/// Compute the Vimshottari timeline from the Moon's sidereal longitude.
///
/// The first Mahadasha carries only the unelapsed balance of its lord's
/// period; `mahadasha_count` periods are generated in total. Generation
/// stops early at the last period whose end date chrono can represent.
pub fn compute_vimshottari_dasha(
    birth: DateTime<Utc>,
    moon_longitude: f64,
    mahadasha_count: usize,
) -> DashaTimeline {
    let meta = get_nakshatra_for_longitude(moon_longitude);
    let lord = meta.lord;
    let lord_years = dasha_years(lord).unwrap_or(0.0);
    let balance_years = lord_years * (1.0 - meta.progress);

    let mahadashas: Vec<Mahadasha> = cycle_from(lord)
        .cycle()
        .take(mahadasha_count)
        .enumerate()
        .scan(0.0_f64, |elapsed_days, (i, (planet, years))| {
            let years = if i == 0 { balance_years } else { years };
            let start = days_after(birth, *elapsed_days)?;
            *elapsed_days += years * VIMSHOTTARI_YEAR_DAYS;
            let end = days_after(birth, *elapsed_days)?;
            Some(build_mahadasha(planet, start, end, years))
        })
        .collect();
    if mahadashas.len() < mahadasha_count {
        warn!(
            "vimshottari: date range exhausted after {} of {} mahadashas",
            mahadashas.len(),
            mahadasha_count
        );
    }

    debug!(
        "vimshottari: moon in {} ({:.3} elapsed), {} mahadashas from {}",
        meta.nakshatra.name(),
        meta.progress,
        mahadashas.len(),
        lord
    );

    DashaTimeline {
        birth,
        moon_longitude: normalize_degrees(moon_longitude),
        moon_nakshatra: meta.nakshatra,
        nakshatra_progress: meta.progress,
        balance: DashaBalance::from_years(lord, balance_years),
        mahadashas,
    }
}

/// Vimshottari timeline for a chart; the Moon must be present.
pub fn chart_vimshottari_dasha(
    chart: &VedicChart,
    mahadasha_count: usize,
) -> Result<DashaTimeline, ChartError> {
    let moon = chart.position(Planet::Moon)?;
    let birth = datetime_from_julian_day(chart.julian_day).ok_or_else(|| {
        ChartError::Configuration(format!("Julian Day {} is out of range", chart.julian_day))
    })?;
    Ok(compute_vimshottari_dasha(birth, moon.longitude, mahadasha_count))
}
