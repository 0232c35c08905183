mod common;

use common::{delhi_birth, StubProvider};
use jyotish::ephemeris::EphemerisSettings;
use jyotish::vedic::{CombustionState, Dignity, MotionState, Planet};
use jyotish::{build_report, calculate_chart, JyotishConfig};

fn sample_report() -> jyotish::VedicReport {
    let provider = StubProvider::sample();
    let chart = calculate_chart(&delhi_birth(), &provider, &EphemerisSettings::default()).unwrap();
    build_report(chart, &provider, &JyotishConfig::default()).unwrap()
}

#[test]
fn test_report_sections() {
    let report = sample_report();
    assert_eq!(report.rashi.houses.len(), 12);
    assert_eq!(report.bhava.houses.len(), 12);
    assert_eq!(report.divisional_charts.len(), 1);
    assert_eq!(report.dasha.mahadashas.len(), 28);
    assert!(!report.aspects.is_empty());
    assert!(report.yogas.iter().any(|y| y.name == "Budha-Aditya"));
}

#[test]
fn test_conditions_and_wars() {
    let report = sample_report();
    let condition = |planet: Planet| {
        report
            .conditions
            .iter()
            .find(|c| c.planet == planet)
            .unwrap()
            .clone()
    };

    let mercury = condition(Planet::Mercury);
    assert_eq!(mercury.motion, MotionState::Retrograde);
    assert_eq!(mercury.combustion, Some(CombustionState::Full));
    assert!((mercury.distance_from_sun.unwrap() - 9.5).abs() < 1e-9);

    assert_eq!(condition(Planet::Sun).combustion, None);
    assert_eq!(condition(Planet::Rahu).combustion, None);
    assert_eq!(condition(Planet::Saturn).motion, MotionState::StationaryRetrograde);

    let mars = condition(Planet::Mars);
    assert_eq!(mars.dignity, Dignity::Debilitated);
    assert_eq!(mars.at_war_with, Some(Planet::Venus));

    assert_eq!(report.planetary_wars.len(), 1);
    let war = &report.planetary_wars[0];
    assert_eq!((war.winner, war.loser), (Planet::Venus, Planet::Mars));
    assert!((war.separation - 0.6).abs() < 1e-9);
}

#[test]
fn test_report_serializes_to_json() {
    let report = sample_report();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["chart"]["birth"]["timezone"], "Asia/Kolkata");
    assert_eq!(json["divisional_charts"][0]["chart_type"], "D9");
    assert_eq!(json["panchanga"]["sunrise"], "06:00:00");
    assert!(json["dasha"]["mahadashas"].as_array().unwrap().len() == 28);

    let text = serde_json::to_string(&report).unwrap();
    let back: jyotish::VedicReport = serde_json::from_str(&text).unwrap();
    assert_eq!(back.chart.positions.len(), report.chart.positions.len());
    assert_eq!(back.dasha.balance.planet, Planet::Venus);
    assert!(report.to_json(true).unwrap().contains("\"Budha-Aditya\""));
}

#[test]
fn test_report_is_deterministic() {
    assert_eq!(sample_report(), sample_report());
}
