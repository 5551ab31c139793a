//! Bodies the ephemeris boundary can be asked about.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A chart body: the nine grahas plus the outer planets.
///
/// Rahu and Ketu are the mean lunar nodes; Ketu is always Rahu + 180 deg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// The nine grahas in traditional weekday-lord order (Sun..Saturn, Rahu, Ketu).
    pub const GRAHAS: [Body; 9] = [
        Body::Sun,
        Body::Moon,
        Body::Mars,
        Body::Mercury,
        Body::Jupiter,
        Body::Venus,
        Body::Saturn,
        Body::Rahu,
        Body::Ketu,
    ];

    /// Every body in enum order.
    pub const ALL: [Body; 12] = [
        Body::Sun,
        Body::Moon,
        Body::Mars,
        Body::Mercury,
        Body::Jupiter,
        Body::Venus,
        Body::Saturn,
        Body::Rahu,
        Body::Ketu,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Sanskrit graha name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangal",
            Self::Mercury => "Budh",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Whether this is a lunar node (a computed point, not a physical body).
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Whether this is one of the nine grahas.
    pub const fn is_graha(self) -> bool {
        !matches!(self, Self::Uranus | Self::Neptune | Self::Pluto)
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|b| {
                b.name().eq_ignore_ascii_case(wanted) || b.sanskrit_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| format!("unknown body {wanted:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_and_sanskrit() {
        assert_eq!("jupiter".parse::<Body>(), Ok(Body::Jupiter));
        assert_eq!("Shani".parse::<Body>(), Ok(Body::Saturn));
        assert!("vulcan".parse::<Body>().is_err());
    }

    #[test]
    fn grahas_exclude_outer_planets() {
        assert!(Body::GRAHAS.iter().all(|b| b.is_graha()));
        assert!(!Body::Pluto.is_graha());
        assert!(Body::Ketu.is_node());
    }
}
