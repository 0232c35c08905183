use serde::{Deserialize, Serialize};

use crate::vedic::types::Planet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    /// One-directional graha drishti (Mars, Jupiter, Saturn, the nodes).
    VedicSpecial,
}

impl AspectKind {
    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
            AspectKind::VedicSpecial => "vedic_special",
        }
    }
}

/// Symmetric aspect angles
pub const ASPECT_ANGLES: &[(AspectKind, f64)] = &[
    (AspectKind::Conjunction, 0.0),
    (AspectKind::Sextile, 60.0),
    (AspectKind::Square, 90.0),
    (AspectKind::Trine, 120.0),
    (AspectKind::Opposition, 180.0),
];

/// Extra forward-only aspect angles cast by each planet.
pub const SPECIAL_ASPECTS: &[(Planet, &[f64])] = &[
    (Planet::Mars, &[90.0, 210.0]),
    (Planet::Jupiter, &[120.0, 240.0]),
    (Planet::Saturn, &[60.0, 270.0]),
    (Planet::Rahu, &[120.0, 240.0]),
    (Planet::Ketu, &[120.0, 240.0]),
];

/// One aspect between two planets.
///
/// For symmetric aspects `from`/`to` follow chart order; for Vedic special
/// aspects `from` is the planet casting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectData {
    pub from: Planet,
    pub to: Planet,
    pub kind: AspectKind,
    /// Exact angle for this aspect
    pub exact_angle: f64,
    /// Measured separation (forward arc for special aspects)
    pub separation: f64,
    /// Deviation from exact
    pub orb: f64,
    /// Allowed orb for this pair
    pub effective_orb: f64,
    pub applying: bool,
    /// In the closed range [0, 1]: an exact aspect scores 1.0 and the
    /// edge of the orb scores 0.
    pub strength: f64,
}

impl AspectData {
    /// True when the aspect joins exactly these two planets, in either order.
    pub fn connects(&self, a: Planet, b: Planet) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Orb by planet class, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbSettings {
    pub luminary: f64,
    pub personal: f64,
    pub social: f64,
    pub node: f64,
    pub outer: f64,
}

impl Default for OrbSettings {
    fn default() -> Self {
        Self {
            luminary: 10.0,
            personal: 8.0,
            social: 7.0,
            node: 6.0,
            outer: 5.0,
        }
    }
}

impl OrbSettings {
    pub fn for_planet(&self, planet: Planet) -> f64 {
        match planet {
            Planet::Sun | Planet::Moon => self.luminary,
            Planet::Mercury | Planet::Venus | Planet::Mars => self.personal,
            Planet::Jupiter | Planet::Saturn => self.social,
            Planet::Rahu | Planet::Ketu => self.node,
            Planet::Uranus | Planet::Neptune | Planet::Pluto => self.outer,
        }
    }
}

/// Settings for aspect calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AspectSettings {
    pub orbs: OrbSettings,
    /// Added to the pair orb for conjunctions and oppositions.
    pub conjunction_opposition_bonus: f64,
    pub include_special_aspects: bool,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            orbs: OrbSettings::default(),
            conjunction_opposition_bonus: 2.0,
            include_special_aspects: true,
        }
    }
}
