//! Tithi (lunar day) from the Moon-Sun elongation.
//!
//! 30 tithis of 12 degrees each. Tithis 1-15 are Shukla (waxing) paksha,
//! 16-30 Krishna (waning).

use jyotish_core::Body;
use serde::{Deserialize, Serialize};

use crate::util::{normalize_360, segment_index};

/// Span of one tithi in degrees of elongation.
pub const TITHI_SPAN: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing fortnight (tithis 1-15).
    Shukla,
    /// Waning fortnight (tithis 16-30).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    pub const fn is_waxing(self) -> bool {
        matches!(self, Self::Shukla)
    }
}

const TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// Name of a tithi within its paksha (1-15).
///
/// The 15th tithi is Purnima in Shukla paksha and Amavasya in Krishna.
pub const fn tithi_name(paksha: Paksha, tithi_in_paksha: u8) -> &'static str {
    match (paksha, tithi_in_paksha) {
        (Paksha::Shukla, 15) => "Purnima",
        (Paksha::Krishna, 15) => "Amavasya",
        (_, n) if n >= 1 && n <= 14 => TITHI_NAMES[(n - 1) as usize],
        _ => "Unknown",
    }
}

/// Ruling graha of a tithi within its paksha.
///
/// Tithis 1-8 run Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu
/// and 9-14 repeat from the Sun. Purnima is ruled by Saturn, Amavasya by Rahu.
pub const fn tithi_lord(paksha: Paksha, tithi_in_paksha: u8) -> Body {
    const CYCLE: [Body; 8] = [
        Body::Sun,
        Body::Moon,
        Body::Mars,
        Body::Mercury,
        Body::Jupiter,
        Body::Venus,
        Body::Saturn,
        Body::Rahu,
    ];
    match (paksha, tithi_in_paksha) {
        (Paksha::Shukla, 15) => Body::Saturn,
        (Paksha::Krishna, 15) => Body::Rahu,
        (_, n) if n >= 1 => CYCLE[((n - 1) % 8) as usize],
        _ => Body::Sun,
    }
}

/// Rikta ("empty") tithis, inauspicious for beginnings: Chaturthi, Navami, Chaturdashi.
pub const fn is_rikta(tithi_in_paksha: u8) -> bool {
    matches!(tithi_in_paksha, 4 | 9 | 14)
}

/// Result of a tithi lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    /// 1-based tithi number in the lunar month, 1-30.
    pub number: u8,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha, 1-15.
    pub tithi_in_paksha: u8,
    pub name: &'static str,
    pub lord: Body,
    /// Moon-Sun elongation in [0, 360).
    pub elongation_deg: f64,
    /// Degrees elapsed within the current tithi, [0, 12).
    pub degrees_in_tithi: f64,
}

impl TithiInfo {
    pub const fn is_rikta(&self) -> bool {
        is_rikta(self.tithi_in_paksha)
    }

    /// New moon day.
    pub const fn is_amavasya(&self) -> bool {
        self.number == 30
    }

    /// Full moon day.
    pub const fn is_purnima(&self) -> bool {
        self.number == 15
    }
}

/// Tithi from sidereal (or tropical, the difference cancels) Sun and Moon longitudes.
///
/// `number = floor(normalize(moon - sun) / 12) + 1`.
pub fn tithi_from_longitudes(moon_lon_deg: f64, sun_lon_deg: f64) -> TithiInfo {
    let elongation_deg = normalize_360(moon_lon_deg - sun_lon_deg);
    let idx = segment_index(elongation_deg, TITHI_SPAN, 30);
    let number = idx + 1;
    let (paksha, tithi_in_paksha) = if number <= 15 {
        (Paksha::Shukla, number)
    } else {
        (Paksha::Krishna, number - 15)
    };
    TithiInfo {
        number,
        paksha,
        tithi_in_paksha,
        name: tithi_name(paksha, tithi_in_paksha),
        lord: tithi_lord(paksha, tithi_in_paksha),
        elongation_deg,
        degrees_in_tithi: (elongation_deg - idx as f64 * TITHI_SPAN).max(0.0),
    }
}
