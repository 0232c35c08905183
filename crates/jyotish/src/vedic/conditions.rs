//! Planetary conditions: motion, combustion, planetary war and dignity.

use serde::{Deserialize, Serialize};

use crate::chart::data::{PlanetPosition, VedicChart};
use crate::error::ChartError;
use crate::vedic::dignities::{get_dignity, Dignity};
use crate::vedic::position::angular_distance;
use crate::vedic::types::Planet;

/// Below this daily motion (degrees) a planet counts as stationary.
pub const STATIONARY_SPEED: f64 = 0.05;
/// Within this distance of the Sun a planet is cazimi (17 arcminutes).
pub const CAZIMI_ORB: f64 = 0.283;
/// Added to the full combustion orb to give the partial orb.
pub const PARTIAL_COMBUSTION_MARGIN: f64 = 3.0;
/// Maximum separation for a planetary war.
pub const WAR_ORB: f64 = 1.0;

/// Natural brightness ranking used to decide a planetary war, brightest first.
const WAR_RANKING: [Planet; 5] = [
    Planet::Venus,
    Planet::Jupiter,
    Planet::Mars,
    Planet::Mercury,
    Planet::Saturn,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionState {
    Direct,
    Retrograde,
    StationaryRetrograde,
    StationaryDirect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombustionState {
    NotCombust,
    Partial,
    Full,
    Cazimi,
}

impl CombustionState {
    /// Full or partial combustion; cazimi strengthens instead.
    pub fn is_combust(self) -> bool {
        matches!(self, CombustionState::Full | CombustionState::Partial)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryWar {
    pub winner: Planet,
    pub loser: Planet,
    pub separation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetCondition {
    pub planet: Planet,
    pub motion: MotionState,
    /// `None` where combustion does not apply (Sun, nodes, outer planets).
    pub combustion: Option<CombustionState>,
    pub distance_from_sun: Option<f64>,
    pub dignity: Dignity,
    /// Opponent in a planetary war, if any.
    pub at_war_with: Option<Planet>,
}

pub fn motion_state(planet: Planet, speed: f64, retrograde: bool) -> MotionState {
    if planet.is_luminary() {
        return MotionState::Direct;
    }
    if speed.abs() < STATIONARY_SPEED {
        return if speed < 0.0 {
            MotionState::StationaryRetrograde
        } else {
            MotionState::StationaryDirect
        };
    }
    if retrograde {
        MotionState::Retrograde
    } else {
        MotionState::Direct
    }
}

/// Full combustion orb for a planet, tighter for retrograde Mercury and Venus.
pub fn combustion_orb(planet: Planet, retrograde: bool) -> Option<f64> {
    match planet {
        Planet::Moon => Some(12.0),
        Planet::Mars => Some(17.0),
        Planet::Mercury => Some(if retrograde { 12.0 } else { 14.0 }),
        Planet::Jupiter => Some(11.0),
        Planet::Venus => Some(if retrograde { 8.0 } else { 10.0 }),
        Planet::Saturn => Some(15.0),
        _ => None,
    }
}

/// Combustion state at `distance` degrees from the Sun.
///
/// A planet exactly on the full orb is still fully combust.
pub fn combustion_state(planet: Planet, distance: f64, retrograde: bool) -> Option<CombustionState> {
    let full = combustion_orb(planet, retrograde)?;
    Some(if distance <= CAZIMI_ORB {
        CombustionState::Cazimi
    } else if distance <= full {
        CombustionState::Full
    } else if distance <= full + PARTIAL_COMBUSTION_MARGIN {
        CombustionState::Partial
    } else {
        CombustionState::NotCombust
    })
}

fn war_rank(planet: Planet) -> Option<usize> {
    WAR_RANKING.iter().position(|p| *p == planet)
}

/// Every pair of war-capable planets within [`WAR_ORB`] of each other.
pub fn planetary_wars(positions: &[PlanetPosition]) -> Vec<PlanetaryWar> {
    let fighters: Vec<(&PlanetPosition, usize)> = positions
        .iter()
        .filter_map(|p| war_rank(p.planet).map(|rank| (p, rank)))
        .collect();

    let mut wars = Vec::new();
    for (i, (a, rank_a)) in fighters.iter().enumerate() {
        for (b, rank_b) in &fighters[i + 1..] {
            let separation = angular_distance(a.longitude, b.longitude);
            if separation <= WAR_ORB {
                let (winner, loser) = if rank_a < rank_b { (a, b) } else { (b, a) };
                wars.push(PlanetaryWar {
                    winner: winner.planet,
                    loser: loser.planet,
                    separation,
                });
            }
        }
    }
    wars
}

/// Conditions for every planet in the chart. The Sun must be present.
pub fn analyze_conditions(chart: &VedicChart) -> Result<Vec<PlanetCondition>, ChartError> {
    let sun = chart.position(Planet::Sun)?.longitude;
    let wars = planetary_wars(&chart.positions);

    Ok(chart
        .positions
        .iter()
        .map(|p| {
            let distance = combustion_orb(p.planet, p.retrograde).map(|_| angular_distance(p.longitude, sun));
            let at_war_with = wars.iter().find_map(|w| {
                if w.winner == p.planet {
                    Some(w.loser)
                } else if w.loser == p.planet {
                    Some(w.winner)
                } else {
                    None
                }
            });
            PlanetCondition {
                planet: p.planet,
                motion: motion_state(p.planet, p.speed, p.retrograde),
                combustion: distance.and_then(|d| combustion_state(p.planet, d, p.retrograde)),
                distance_from_sun: distance,
                dignity: get_dignity(p.planet, p.longitude),
                at_war_with,
            }
        })
        .collect())
}
