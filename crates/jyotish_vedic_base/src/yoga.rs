//! Nitya yoga from the sum of Sun and Moon longitudes.

use jyotish_core::Body;
use serde::{Deserialize, Serialize};

use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::{normalize_360, segment_index};

/// The 27 nitya yogas, Vishkambha to Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyana,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyana,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

/// Yoga lords cycle through the Vimshottari order starting from Saturn.
const YOGA_LORD_CYCLE: [Body; 9] = [
    Body::Saturn,
    Body::Mercury,
    Body::Ketu,
    Body::Venus,
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Rahu,
    Body::Jupiter,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyana => "Variyana",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn lord(self) -> Body {
        YOGA_LORD_CYCLE[(self as usize) % 9]
    }

    /// Yogas traditionally avoided for auspicious undertakings.
    pub const fn is_malefic(self) -> bool {
        matches!(
            self,
            Self::Vishkambha
                | Self::Atiganda
                | Self::Shula
                | Self::Ganda
                | Self::Vyaghata
                | Self::Vajra
                | Self::Vyatipata
                | Self::Parigha
                | Self::Vaidhriti
        )
    }
}

/// Result of a yoga lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// 1-based yoga number, 1-27.
    pub number: u8,
    pub name: &'static str,
    pub lord: Body,
    pub is_malefic: bool,
    /// Normalized Sun + Moon sum in [0, 360).
    pub sum_deg: f64,
}

/// Yoga from sidereal Sun and Moon longitudes.
///
/// `number = floor(normalize(sun + moon) / (360/27)) + 1`.
pub fn yoga_from_longitudes(sun_lon_deg: f64, moon_lon_deg: f64) -> YogaInfo {
    let sum_deg = normalize_360(sun_lon_deg + moon_lon_deg);
    let idx = segment_index(sum_deg, NAKSHATRA_SPAN, 27);
    let yoga = ALL_YOGAS[idx as usize];
    YogaInfo {
        yoga,
        number: idx + 1,
        name: yoga.name(),
        lord: yoga.lord(),
        is_malefic: yoga.is_malefic(),
        sum_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sum_is_vishkambha() {
        let y = yoga_from_longitudes(0.0, 0.0);
        assert_eq!(y.yoga, Yoga::Vishkambha);
        assert_eq!(y.number, 1);
        assert!(y.is_malefic);
        assert_eq!(y.lord, Body::Saturn);
    }

    #[test]
    fn sum_wraps_past_360() {
        // 200 + 170 = 370 -> 10 deg -> Vishkambha
        assert_eq!(yoga_from_longitudes(200.0, 170.0).yoga, Yoga::Vishkambha);
        // 14 deg -> Priti
        assert_eq!(yoga_from_longitudes(200.0, 174.0).yoga, Yoga::Priti);
    }

    #[test]
    fn last_yoga() {
        let y = yoga_from_longitudes(359.9, 0.0);
        assert_eq!(y.yoga, Yoga::Vaidhriti);
        assert_eq!(y.number, 27);
    }

    #[test]
    fn numbers_are_sequential() {
        for (i, y) in ALL_YOGAS.iter().enumerate() {
            assert_eq!(y.index() as usize, i);
        }
        assert_eq!(ALL_YOGAS.iter().filter(|y| y.is_malefic()).count(), 9);
    }
}
