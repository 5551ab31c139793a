//! Vaar (weekday) and its ruling graha.

use jyotish_core::Body;
use serde::{Deserialize, Serialize};

/// Weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaar {
    Ravivaar,
    Somavaar,
    Mangalavaar,
    Budhavaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somavaar,
    Vaar::Mangalavaar,
    Vaar::Budhavaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// From a 0-based weekday index (0 = Sunday). Wraps modulo 7.
    pub const fn from_index(index: u8) -> Self {
        ALL_VAARS[(index % 7) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somavaar => "Somavaar",
            Self::Mangalavaar => "Mangalavaar",
            Self::Budhavaar => "Budhavaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somavaar => "Monday",
            Self::Mangalavaar => "Tuesday",
            Self::Budhavaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// Ruling graha: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn.
    pub const fn lord(self) -> Body {
        match self {
            Self::Ravivaar => Body::Sun,
            Self::Somavaar => Body::Moon,
            Self::Mangalavaar => Body::Mars,
            Self::Budhavaar => Body::Mercury,
            Self::Guruvaar => Body::Jupiter,
            Self::Shukravaar => Body::Venus,
            Self::Shanivaar => Body::Saturn,
        }
    }
}
