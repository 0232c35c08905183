use log::{debug, info};
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, houses_ex};
use swisseph::{AscMc, Cusp};

use crate::ephemeris::ayanamsa::{ayanamsa_deg, tropical_to_sidereal};
use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::riseset;
use crate::ephemeris::types::{
    EphemerisSettings, HouseCusps, HouseSystem, NodeType, RawPosition, RiseTransitKind,
};
use crate::vedic::position::{normalize_degrees, sign_of, SIGN_SPAN};
use crate::vedic::types::Planet;

// Swiss Ephemeris flags
const FLG_SWIEPH: i32 = 2;
const FLG_SPEED: i32 = 256;

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Swiss Ephemeris body codes
const PLANET_IDS: &[(Planet, i32)] = &[
    (Planet::Sun, 0),
    (Planet::Moon, 1),
    (Planet::Mercury, 2),
    (Planet::Venus, 3),
    (Planet::Mars, 4),
    (Planet::Jupiter, 5),
    (Planet::Saturn, 6),
    (Planet::Uranus, 7),
    (Planet::Neptune, 8),
    (Planet::Pluto, 9),
];
const MEAN_NODE: i32 = 10;
const TRUE_NODE: i32 = 11;

/// Swiss Ephemeris adapter implementation
///
/// Positions and cusps are computed tropically by the Swiss Ephemeris and
/// shifted onto the sidereal zodiac with the configured ayanamsa.
#[derive(Debug, Clone)]
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    settings: EphemerisSettings,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    ///
    /// Falls back to `SWISS_EPHEMERIS_PATH`, then the system default. The
    /// path is exported once as `SE_EPHE_PATH` for the underlying library.
    pub fn new(
        ephemeris_path: Option<PathBuf>,
        settings: EphemerisSettings,
    ) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        if env::var_os("SE_EPHE_PATH").is_none() {
            env::set_var("SE_EPHE_PATH", &path);
        }
        info!(
            "Swiss Ephemeris ready at {} (ayanamsa {}, {:?} node)",
            path.display(),
            settings.ayanamsa,
            settings.node_type
        );

        Ok(Self {
            ephemeris_path: path,
            settings,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    pub fn settings(&self) -> &EphemerisSettings {
        &self.settings
    }

    fn body_code(&self, body: Planet) -> Result<i32, EphemerisError> {
        if body == Planet::Rahu {
            return Ok(match self.settings.node_type {
                NodeType::Mean => MEAN_NODE,
                NodeType::True => TRUE_NODE,
            });
        }
        PLANET_IDS
            .iter()
            .find(|(planet, _)| *planet == body)
            .map(|(_, code)| *code)
            .ok_or(EphemerisError::UnsupportedBody(body))
    }

    /// Tropical longitude, latitude, distance and speed straight from the library.
    fn tropical(&self, body: Planet, julian_day: f64) -> Result<[f64; 4], EphemerisError> {
        let code = self.body_code(body)?;
        let result = calc_ut(julian_day, code as u32, (FLG_SWIEPH | FLG_SPEED) as u32).map_err(
            |e| EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: format!("Swiss Ephemeris error: {}", e),
            },
        )?;
        let out = result.out;
        if out.iter().take(4).any(|v| !v.is_finite()) {
            return Err(EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: "non-finite result".to_string(),
            });
        }
        Ok([out[0], out[1], out[2], out[3]])
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn position(&self, body: Planet, julian_day: f64) -> Result<RawPosition, EphemerisError> {
        let [lon, lat, dist, speed] = self.tropical(body, julian_day)?;
        let ayanamsa = self.ayanamsa(julian_day)?;
        Ok(RawPosition {
            longitude: tropical_to_sidereal(lon, ayanamsa),
            latitude: lat,
            distance: dist,
            speed,
        })
    }

    fn house_cusps(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        let (c, a) = houses_ex(
            julian_day,
            FLG_SWIEPH,
            latitude,
            longitude,
            system.code() as i32,
        );
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);
        let tropical = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        if !ascmc.ascendant.is_finite() || tropical.iter().any(|c| !c.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "{} houses undefined at latitude {latitude}",
                    system.name()
                ),
            });
        }

        let ayanamsa = self.ayanamsa(julian_day)?;
        let ascendant = tropical_to_sidereal(ascmc.ascendant, ayanamsa);
        let midheaven = tropical_to_sidereal(ascmc.mc, ayanamsa);
        let cusps = if system == HouseSystem::WholeSign {
            // Sign boundaries move with the zodiac, so rebuild them sidereally.
            let first = sign_of(ascendant).index() as f64 * SIGN_SPAN;
            std::array::from_fn(|i| normalize_degrees(first + i as f64 * SIGN_SPAN))
        } else {
            tropical.map(|c| tropical_to_sidereal(c, ayanamsa))
        };
        debug!("house cusps jd={julian_day} asc={ascendant:.4} mc={midheaven:.4}");

        Ok(HouseCusps {
            ascendant,
            midheaven,
            cusps,
        })
    }

    fn rise_transit(
        &self,
        julian_day: f64,
        body: Planet,
        latitude: f64,
        longitude: f64,
        kind: RiseTransitKind,
    ) -> Result<Option<f64>, EphemerisError> {
        riseset::next_event(julian_day, latitude, longitude, kind, |jd| {
            let [lon, lat, _, _] = self.tropical(body, jd)?;
            Ok((lon, lat))
        })
        .map_err(|e| match e {
            EphemerisError::CalculationFailed { message, .. } => {
                EphemerisError::RiseTransitFailed { body, message }
            }
            other => other,
        })
    }

    fn ayanamsa(&self, julian_day: f64) -> Result<f64, EphemerisError> {
        Ok(ayanamsa_deg(self.settings.ayanamsa, julian_day))
    }

    fn ayanamsa_name(&self) -> String {
        self.settings.ayanamsa.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_is_reported() {
        let err = SwissEphemerisAdapter::new(
            Some(PathBuf::from("/nonexistent/jyotish/ephe")),
            EphemerisSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EphemerisError::FileNotFound { .. }));
    }

    #[test]
    fn test_body_codes() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = EphemerisSettings::default();
        settings.node_type = NodeType::Mean;
        let adapter = SwissEphemerisAdapter::new(Some(dir.path().to_path_buf()), settings).unwrap();
        assert_eq!(adapter.body_code(Planet::Mars).unwrap(), 4);
        assert_eq!(adapter.body_code(Planet::Rahu).unwrap(), MEAN_NODE);
        assert!(matches!(
            adapter.body_code(Planet::Ketu),
            Err(EphemerisError::UnsupportedBody(Planet::Ketu))
        ));
    }

    #[test]
    #[ignore = "requires Swiss Ephemeris data files"]
    fn test_sun_position_is_sidereal() {
        let adapter = SwissEphemerisAdapter::new(None, EphemerisSettings::default()).unwrap();
        // J2000: tropical Sun near 280.4, Lahiri 23.85
        let sun = adapter.position(Planet::Sun, 2_451_545.0).unwrap();
        assert!((sun.longitude - 256.5).abs() < 0.5, "got {}", sun.longitude);
        assert!(sun.speed > 0.9);
    }
}
