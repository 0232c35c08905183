//! Sign lordship.
//!
//! Maps zodiac signs to their classical planetary lords. Outer planets
//! never rule a sign in the Vedic scheme.

use crate::vedic::types::{Planet, ZodiacSign};

const SIGN_LORDS: [Planet; 12] = [
    Planet::Mars,    // Aries
    Planet::Venus,   // Taurus
    Planet::Mercury, // Gemini
    Planet::Moon,    // Cancer
    Planet::Sun,     // Leo
    Planet::Mercury, // Virgo
    Planet::Venus,   // Libra
    Planet::Mars,    // Scorpio
    Planet::Jupiter, // Sagittarius
    Planet::Saturn,  // Capricorn
    Planet::Saturn,  // Aquarius
    Planet::Jupiter, // Pisces
];

/// Get sign ruler.
pub fn get_sign_ruler(sign: ZodiacSign) -> Planet {
    SIGN_LORDS[sign.index()]
}
