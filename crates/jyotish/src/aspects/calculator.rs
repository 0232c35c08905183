use log::debug;

use crate::aspects::types::{
    AspectData, AspectKind, AspectSettings, ASPECT_ANGLES, SPECIAL_ASPECTS,
};
use crate::chart::data::PlanetPosition;
use crate::vedic::position::{angular_distance, forward_distance};
use crate::vedic::types::Planet;

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    settings: AspectSettings,
}

/// Distance of `arc` from `angle` around the circle.
fn circular_orb(arc: f64, angle: f64) -> f64 {
    let d = (arc - angle).abs();
    d.min(360.0 - d)
}

/// Linear falloff over the orb, closed at both ends: exact is 1.0, the
/// orb edge is 0.0.
fn strength(orb: f64, effective_orb: f64) -> f64 {
    if effective_orb <= 0.0 {
        return 0.0;
    }
    (1.0 - orb / effective_orb).clamp(0.0, 1.0)
}

impl AspectCalculator {
    pub fn new(settings: AspectSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AspectSettings {
        &self.settings
    }

    /// Allowed orb for a pair: the mean of the two class orbs, widened for
    /// conjunction and opposition.
    pub fn effective_orb(&self, a: Planet, b: Planet, kind: AspectKind) -> f64 {
        let base = (self.settings.orbs.for_planet(a) + self.settings.orbs.for_planet(b)) / 2.0;
        match kind {
            AspectKind::Conjunction | AspectKind::Opposition => {
                base + self.settings.conjunction_opposition_bonus
            }
            _ => base,
        }
    }

    /// Compute every symmetric aspect and every special aspect in a chart.
    pub fn compute_aspects(&self, positions: &[PlanetPosition]) -> Vec<AspectData> {
        let mut aspects = Vec::new();
        for (i, p1) in positions.iter().enumerate() {
            for p2 in &positions[i + 1..] {
                if let Some(aspect) = self.calculate_aspect(p1, p2) {
                    aspects.push(aspect);
                }
            }
        }
        if self.settings.include_special_aspects {
            for caster in positions {
                for target in positions {
                    if caster.planet != target.planet {
                        aspects.extend(self.special_aspects(caster, target));
                    }
                }
            }
        }
        debug!("{} aspects among {} bodies", aspects.len(), positions.len());
        aspects
    }

    /// Closest symmetric aspect between two planets, if any is within orb.
    pub fn calculate_aspect(&self, p1: &PlanetPosition, p2: &PlanetPosition) -> Option<AspectData> {
        let separation = angular_distance(p1.longitude, p2.longitude);

        ASPECT_ANGLES
            .iter()
            .filter_map(|(kind, angle)| {
                let orb = (separation - angle).abs();
                let effective_orb = self.effective_orb(p1.planet, p2.planet, *kind);
                (orb <= effective_orb).then_some((*kind, *angle, orb, effective_orb))
            })
            .min_by(|a, b| a.2.total_cmp(&b.2))
            .map(|(kind, angle, orb, effective_orb)| {
                let future = angular_distance(p1.longitude + p1.speed, p2.longitude + p2.speed);
                AspectData {
                    from: p1.planet,
                    to: p2.planet,
                    kind,
                    exact_angle: angle,
                    separation,
                    orb,
                    effective_orb,
                    applying: (future - angle).abs() < orb,
                    strength: strength(orb, effective_orb),
                }
            })
    }

    /// Forward-only aspects `caster` throws onto `target`.
    pub fn special_aspects(&self, caster: &PlanetPosition, target: &PlanetPosition) -> Vec<AspectData> {
        let angles = match SPECIAL_ASPECTS.iter().find(|(p, _)| *p == caster.planet) {
            Some((_, angles)) => *angles,
            None => return Vec::new(),
        };
        let arc = forward_distance(caster.longitude, target.longitude);
        let future_arc = forward_distance(caster.longitude + caster.speed, target.longitude + target.speed);
        let effective_orb = self.effective_orb(caster.planet, target.planet, AspectKind::VedicSpecial);

        angles
            .iter()
            .filter_map(|angle| {
                let orb = circular_orb(arc, *angle);
                (orb <= effective_orb).then(|| AspectData {
                    from: caster.planet,
                    to: target.planet,
                    kind: AspectKind::VedicSpecial,
                    exact_angle: *angle,
                    separation: arc,
                    orb,
                    effective_orb,
                    applying: circular_orb(future_arc, *angle) < orb,
                    strength: strength(orb, effective_orb),
                })
            })
            .collect()
    }
}
