//! Karana (half-tithi).
//!
//! 60 half-tithis per lunar month. The first is the fixed Kimstughna, the
//! next 56 cycle eight times through the 7 movable karanas, and the last
//! three are the fixed Shakuni, Chatushpada and Naga.

use jyotish_core::Body;
use serde::{Deserialize, Serialize};

use crate::util::{normalize_360, segment_index};

/// Span of one karana in degrees of elongation.
pub const KARANA_SPAN: f64 = 6.0;

/// The 11 named karanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Movable (chara) karanas recur through the month; the other four occur once.
    pub const fn is_movable(self) -> bool {
        (self as u8) < 7
    }

    /// Ruling graha. Movable karanas take Sun..Saturn in order, the fixed
    /// ones Rahu, except Kimstughna which is assigned to Ketu.
    pub const fn lord(self) -> Body {
        match self {
            Self::Bava => Body::Sun,
            Self::Balava => Body::Moon,
            Self::Kaulava => Body::Mars,
            Self::Taitila => Body::Mercury,
            Self::Garaja => Body::Jupiter,
            Self::Vanija => Body::Venus,
            Self::Vishti => Body::Saturn,
            Self::Shakuni | Self::Chatushpada | Self::Naga => Body::Rahu,
            Self::Kimstughna => Body::Ketu,
        }
    }

    /// Karana at a 0-based half-tithi index (0-59).
    pub const fn from_half_tithi(index: u8) -> Self {
        match index % 60 {
            0 => Self::Kimstughna,
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            59 => Self::Naga,
            i => MOVABLE[((i - 1) % 7) as usize],
        }
    }
}

/// Result of a karana lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 0-based half-tithi index within the lunar month, 0-59.
    pub half_tithi_index: u8,
    pub name: &'static str,
    pub lord: Body,
}

impl KaranaInfo {
    /// Vishti (Bhadra) is avoided for auspicious work.
    pub fn is_vishti(&self) -> bool {
        self.karana == Karana::Vishti
    }
}

/// Karana from Moon and Sun longitudes: `floor(normalize(moon - sun) / 6)`.
pub fn karana_from_longitudes(moon_lon_deg: f64, sun_lon_deg: f64) -> KaranaInfo {
    let elongation = normalize_360(moon_lon_deg - sun_lon_deg);
    let half_tithi_index = segment_index(elongation, KARANA_SPAN, 60);
    let karana = Karana::from_half_tithi(half_tithi_index);
    KaranaInfo {
        karana,
        half_tithi_index,
        name: karana.name(),
        lord: karana.lord(),
    }
}
