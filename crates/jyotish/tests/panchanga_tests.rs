mod common;

use common::{delhi_birth, StubProvider};
use jyotish::calculate_chart;
use jyotish::ephemeris::EphemerisSettings;
use jyotish::vedic::panchanga::Paksha;
use jyotish::vedic::{compute_panchanga, Planet};
use jyotish::ChartError;

#[test]
fn test_panchanga_for_sample_chart() {
    let provider = StubProvider::sample();
    let chart = calculate_chart(&delhi_birth(), &provider, &EphemerisSettings::default()).unwrap();
    let panchanga = compute_panchanga(&chart, &provider).unwrap();

    // elongation 333.33: Krishna Trayodashi, 56th karana
    assert_eq!(panchanga.tithi.index, 28);
    assert_eq!(panchanga.paksha, Paksha::Krishna);
    assert_eq!(panchanga.karana.index, 56);
    assert_eq!(panchanga.karana.name, "Vanija");
    assert_eq!(panchanga.karana.lord, None);
    assert_eq!(panchanga.nakshatra.name, "Bharani");
    assert_eq!(panchanga.nakshatra.lord, Some(Planet::Venus));
    // 1990-05-15 was a Tuesday
    assert_eq!(panchanga.vara.name, "Tuesday");
    assert_eq!(panchanga.vara.index, 3);
    assert_eq!(panchanga.vara.lord, Some(Planet::Mars));
    assert!(panchanga.moon_phase > 0.0 && panchanga.moon_phase < 50.0);
}

#[test]
fn test_sunrise_is_local_clock_time() {
    let provider = StubProvider::sample();
    let chart = calculate_chart(&delhi_birth(), &provider, &EphemerisSettings::default()).unwrap();
    let panchanga = compute_panchanga(&chart, &provider).unwrap();
    assert_eq!(panchanga.sunrise.as_deref(), Some("06:00:00"));
    assert_eq!(panchanga.sunset.as_deref(), Some("18:00:00"));
}

#[test]
fn test_polar_day_has_no_sunrise() {
    let mut provider = StubProvider::sample();
    provider.rise_offset = None;
    provider.set_offset = None;
    let chart = calculate_chart(&delhi_birth(), &provider, &EphemerisSettings::default()).unwrap();
    let panchanga = compute_panchanga(&chart, &provider).unwrap();
    assert_eq!(panchanga.sunrise, None);
    assert_eq!(panchanga.sunset, None);
    assert_eq!(panchanga.tithi.index, 28);
}

#[test]
fn test_missing_sun_is_reported() {
    let provider = StubProvider::sample();
    let mut chart = calculate_chart(&delhi_birth(), &provider, &EphemerisSettings::default()).unwrap();
    chart.positions.retain(|p| p.planet != Planet::Sun);
    assert!(matches!(
        compute_panchanga(&chart, &provider),
        Err(ChartError::MissingBodyPosition(Planet::Sun))
    ));
}
