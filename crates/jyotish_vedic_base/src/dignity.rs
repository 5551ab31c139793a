//! Graha dignity: exaltation, moolatrikona, own sign and friendship.
//!
//! Tables follow BPHS. Rahu and Ketu have no agreed dignity and are always
//! [`Dignity::Neutral`].

use jyotish_core::Body;
use serde::{Deserialize, Serialize};

use crate::graha::rashi_lord;
use crate::rashi::rashi_from_longitude;
use crate::util::{normalize_360, separation_deg};

/// Exaltation degree (sidereal). `None` for nodes and outer planets.
///
/// Sun 10 Ari, Moon 3 Tau, Mars 28 Cap, Mercury 15 Vir, Jupiter 5 Can,
/// Venus 27 Pis, Saturn 20 Lib.
pub const fn exaltation_degree(body: Body) -> Option<f64> {
    match body {
        Body::Sun => Some(10.0),
        Body::Moon => Some(33.0),
        Body::Mars => Some(298.0),
        Body::Mercury => Some(165.0),
        Body::Jupiter => Some(95.0),
        Body::Venus => Some(357.0),
        Body::Saturn => Some(200.0),
        _ => None,
    }
}

/// Debilitation degree: exaltation + 180.
pub fn debilitation_degree(body: Body) -> Option<f64> {
    exaltation_degree(body).map(|e| normalize_360(e + 180.0))
}

/// Moolatrikona range: `(rashi_index, start_deg_in_rashi, end_deg_in_rashi)`.
pub const fn moolatrikona_range(body: Body) -> Option<(u8, f64, f64)> {
    match body {
        Body::Sun => Some((4, 0.0, 20.0)),
        Body::Moon => Some((1, 4.0, 20.0)),
        Body::Mars => Some((0, 0.0, 12.0)),
        Body::Mercury => Some((5, 16.0, 20.0)),
        Body::Jupiter => Some((8, 0.0, 10.0)),
        Body::Venus => Some((6, 0.0, 15.0)),
        Body::Saturn => Some((10, 0.0, 20.0)),
        _ => None,
    }
}

/// Own-sign rashi indices. Empty for nodes and outer planets.
pub const fn own_signs(body: Body) -> &'static [u8] {
    match body {
        Body::Sun => &[4],
        Body::Moon => &[3],
        Body::Mars => &[0, 7],
        Body::Mercury => &[2, 5],
        Body::Jupiter => &[8, 11],
        Body::Venus => &[1, 6],
        Body::Saturn => &[9, 10],
        _ => &[],
    }
}

/// Natural (naisargika) relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relationship {
    Friend,
    Neutral,
    Enemy,
}

/// Natural friendship of `body` towards `other` (BPHS table).
///
/// Pairings involving nodes or outer planets are neutral.
pub const fn natural_relationship(body: Body, other: Body) -> Relationship {
    use Body::*;
    use Relationship::*;
    match (body, other) {
        (Sun, Moon | Mars | Jupiter) => Friend,
        (Sun, Venus | Saturn) => Enemy,
        (Moon, Sun | Mercury) => Friend,
        (Mars, Sun | Moon | Jupiter) => Friend,
        (Mars, Mercury) => Enemy,
        (Mercury, Sun | Venus) => Friend,
        (Mercury, Moon) => Enemy,
        (Jupiter, Sun | Moon | Mars) => Friend,
        (Jupiter, Mercury | Venus) => Enemy,
        (Venus, Mercury | Saturn) => Friend,
        (Venus, Sun | Moon) => Enemy,
        (Saturn, Mercury | Venus) => Friend,
        (Saturn, Sun | Moon | Mars) => Enemy,
        _ => Neutral,
    }
}

/// Dignity of a graha at a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    Friendly,
    Neutral,
    Enemy,
    Debilitated,
}

impl Dignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Moolatrikona => "Moolatrikona",
            Self::OwnSign => "Own sign",
            Self::Friendly => "Friendly",
            Self::Neutral => "Neutral",
            Self::Enemy => "Enemy",
            Self::Debilitated => "Debilitated",
        }
    }

    /// Base score of the dignity class, 0-100.
    pub const fn base_score(self) -> f64 {
        match self {
            Self::Exalted => 100.0,
            Self::Moolatrikona => 85.0,
            Self::OwnSign => 75.0,
            Self::Friendly => 60.0,
            Self::Neutral => 50.0,
            Self::Enemy => 30.0,
            Self::Debilitated => 10.0,
        }
    }
}

/// Dignity of `body` at `sidereal_lon`.
///
/// Priority: exaltation > debilitation > moolatrikona > own sign >
/// natural friendship with the sign lord.
pub fn dignity_of(body: Body, sidereal_lon: f64) -> Dignity {
    if !body.is_graha() || body.is_node() {
        return Dignity::Neutral;
    }
    let info = rashi_from_longitude(sidereal_lon);
    let idx = info.rashi.index();

    if exaltation_degree(body).is_some_and(|e| (e / 30.0) as u8 == idx) {
        return Dignity::Exalted;
    }
    if debilitation_degree(body).is_some_and(|d| (d / 30.0) as u8 == idx) {
        return Dignity::Debilitated;
    }
    if let Some((mt, start, end)) = moolatrikona_range(body) {
        if mt == idx && info.degrees_in_rashi >= start && info.degrees_in_rashi < end {
            return Dignity::Moolatrikona;
        }
    }
    if own_signs(body).contains(&idx) {
        return Dignity::OwnSign;
    }
    match natural_relationship(body, rashi_lord(info.rashi)) {
        Relationship::Friend => Dignity::Friendly,
        Relationship::Neutral => Dignity::Neutral,
        Relationship::Enemy => Dignity::Enemy,
    }
}

/// Deterministic dignity strength, 0-100.
///
/// Mean of the dignity class score and the uchcha (exaltation) score,
/// which is 100 at the exaltation degree and falls linearly to 0 at the
/// debilitation degree. Bodies without an exaltation point use the class
/// score alone.
pub fn dignity_strength(body: Body, sidereal_lon: f64) -> f64 {
    let class = dignity_of(body, sidereal_lon).base_score();
    match debilitation_degree(body) {
        Some(deb) => {
            let uchcha = separation_deg(sidereal_lon, deb) / 180.0 * 100.0;
            ((class + uchcha) / 2.0).clamp(0.0, 100.0)
        }
        None => class,
    }
}
