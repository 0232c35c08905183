//! Yoga detection helpers for Vedic astrology.
//!
//! Yogas are planetary combinations that indicate specific life outcomes.
//! Detection here is a fixed rule table matched against the aspect list:
//! a rule fires when an aspect of an allowed kind joins its two planets.

use serde::{Deserialize, Serialize};

use crate::aspects::types::{AspectData, AspectKind};
use crate::vedic::types::Planet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yoga {
    pub name: String,
    pub description: String,
    pub planets: Vec<Planet>,
    /// Strength of the aspect that formed it.
    pub strength: f64,
    pub auspicious: bool,
}

struct YogaRule {
    name: &'static str,
    description: &'static str,
    /// Either planet of the first set with either of the second.
    first: &'static [Planet],
    second: &'static [Planet],
    kinds: &'static [AspectKind],
    auspicious: bool,
}

const CONJUNCTION: &[AspectKind] = &[AspectKind::Conjunction];
const KENDRA: &[AspectKind] = &[AspectKind::Conjunction, AspectKind::Square, AspectKind::Opposition];
const ANY_CONTACT: &[AspectKind] = &[
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::VedicSpecial,
];

const LUMINARIES: &[Planet] = &[Planet::Sun, Planet::Moon];
const NODES: &[Planet] = &[Planet::Rahu, Planet::Ketu];

const YOGA_RULES: &[YogaRule] = &[
    YogaRule {
        name: "Budha-Aditya",
        description: "Sun and Mercury together: intellect and skill in speech",
        first: &[Planet::Sun],
        second: &[Planet::Mercury],
        kinds: CONJUNCTION,
        auspicious: true,
    },
    YogaRule {
        name: "Gajakesari",
        description: "Jupiter in a kendra from the Moon: wisdom, standing and lasting reputation",
        first: &[Planet::Moon],
        second: &[Planet::Jupiter],
        kinds: KENDRA,
        auspicious: true,
    },
    YogaRule {
        name: "Chandra-Mangala",
        description: "Moon joined with Mars: drive for wealth through enterprise",
        first: &[Planet::Moon],
        second: &[Planet::Mars],
        kinds: &[AspectKind::Conjunction, AspectKind::Opposition],
        auspicious: true,
    },
    YogaRule {
        name: "Guru-Mangala",
        description: "Jupiter with Mars: courage guided by principle",
        first: &[Planet::Jupiter],
        second: &[Planet::Mars],
        kinds: CONJUNCTION,
        auspicious: true,
    },
    YogaRule {
        name: "Guru-Chandala",
        description: "Jupiter afflicted by Rahu: unorthodox or compromised judgement",
        first: &[Planet::Jupiter],
        second: &[Planet::Rahu],
        kinds: CONJUNCTION,
        auspicious: false,
    },
    YogaRule {
        name: "Grahana",
        description: "A luminary with a lunar node: eclipse-like affliction",
        first: LUMINARIES,
        second: NODES,
        kinds: CONJUNCTION,
        auspicious: false,
    },
    YogaRule {
        name: "Angaraka",
        description: "Mars with Rahu: aggression and accidents",
        first: &[Planet::Mars],
        second: &[Planet::Rahu],
        kinds: CONJUNCTION,
        auspicious: false,
    },
    YogaRule {
        name: "Vish",
        description: "Moon with Saturn: melancholy and emotional restraint",
        first: &[Planet::Moon],
        second: &[Planet::Saturn],
        kinds: ANY_CONTACT,
        auspicious: false,
    },
    YogaRule {
        name: "Shrapit",
        description: "Saturn with Rahu: karmic obstruction and delay",
        first: &[Planet::Saturn],
        second: &[Planet::Rahu],
        kinds: CONJUNCTION,
        auspicious: false,
    },
];

impl YogaRule {
    fn matches(&self, aspect: &AspectData) -> bool {
        if !self.kinds.contains(&aspect.kind) {
            return false;
        }
        self.first.iter().any(|a| {
            self.second.iter().any(|b| aspect.connects(*a, *b))
        })
    }
}

/// Identify classic Vedic yogas from a chart's aspects.
///
/// Each rule yields at most one yoga, carrying the strength of its
/// strongest matching aspect.
pub fn identify_yogas(aspects: &[AspectData]) -> Vec<Yoga> {
    YOGA_RULES
        .iter()
        .filter_map(|rule| {
            let trigger = aspects
                .iter()
                .filter(|a| rule.matches(a))
                .max_by(|a, b| a.strength.total_cmp(&b.strength))?;
            Some(Yoga {
                name: rule.name.to_string(),
                description: rule.description.to_string(),
                planets: vec![trigger.from, trigger.to],
                strength: trigger.strength,
                auspicious: rule.auspicious,
            })
        })
        .collect()
}
