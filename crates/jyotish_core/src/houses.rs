//! House systems and the ascendant / MC geometry behind them.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), chapters 13 and 22.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::angle::{arc_forward, normalize_deg};

/// House division system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    /// Each sign is one house; house 1 is the ascendant's sign.
    #[default]
    WholeSign,
    /// Cusps every 30 deg starting at the ascendant degree.
    Equal,
    /// Sripati / Porphyry: the four quadrants between the angles are trisected.
    Porphyry,
}

impl HouseSystem {
    pub const ALL: [HouseSystem; 3] = [Self::WholeSign, Self::Equal, Self::Porphyry];

    pub const fn name(self) -> &'static str {
        match self {
            Self::WholeSign => "whole_sign",
            Self::Equal => "equal",
            Self::Porphyry => "porphyry",
        }
    }

    /// Cusp longitudes from the ascendant and MC, cusp 1 first.
    pub fn cusps(self, ascendant_deg: f64, mc_deg: f64) -> [f64; 12] {
        match self {
            Self::WholeSign => {
                let start = (normalize_deg(ascendant_deg) / 30.0).floor() * 30.0;
                equal_from(start)
            }
            Self::Equal => equal_from(ascendant_deg),
            Self::Porphyry => porphyry(ascendant_deg, mc_deg),
        }
    }
}

impl Display for HouseSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "whole_sign" | "wholesign" | "rashi" => Ok(Self::WholeSign),
            "equal" => Ok(Self::Equal),
            "porphyry" | "sripati" => Ok(Self::Porphyry),
            _ => Err(format!("unknown house system {s:?}")),
        }
    }
}

/// Ascendant, MC and the 12 cusps, all in degrees `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    pub cusps_deg: [f64; 12],
}

impl HouseCusps {
    /// Build cusps for `system` from the two angles.
    pub fn from_angles(system: HouseSystem, ascendant_deg: f64, mc_deg: f64) -> Self {
        let ascendant_deg = normalize_deg(ascendant_deg);
        let mc_deg = normalize_deg(mc_deg);
        Self {
            ascendant_deg,
            mc_deg,
            cusps_deg: system.cusps(ascendant_deg, mc_deg),
        }
    }

    /// Same geometry shifted by `-offset_deg` (tropical to sidereal).
    pub fn shifted(&self, system: HouseSystem, offset_deg: f64) -> Self {
        Self::from_angles(
            system,
            self.ascendant_deg - offset_deg,
            self.mc_deg - offset_deg,
        )
    }
}

fn equal_from(start_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_deg(start_deg + i as f64 * 30.0);
    }
    cusps
}

/// Cusp 1 = Asc, 4 = IC, 7 = Desc, 10 = MC; the arcs between are trisected.
fn porphyry(asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    let desc_deg = normalize_deg(asc_deg + 180.0);
    let ic_deg = normalize_deg(mc_deg + 180.0);
    let angles = [asc_deg, ic_deg, desc_deg, mc_deg];

    let mut cusps = [0.0; 12];
    for (q, &from) in angles.iter().enumerate() {
        let to = angles[(q + 1) % 4];
        let arc = arc_forward(from, to);
        cusps[q * 3] = normalize_deg(from);
        cusps[q * 3 + 1] = normalize_deg(from + arc / 3.0);
        cusps[q * 3 + 2] = normalize_deg(from + 2.0 * arc / 3.0);
    }
    cusps
}

/// Mean obliquity of the ecliptic in degrees (Meeus 22.2, truncated).
pub fn mean_obliquity_deg(t_centuries: f64) -> f64 {
    23.439_291_11 - 0.013_004_2 * t_centuries - 1.64e-7 * t_centuries * t_centuries
}

/// Tropical ascendant longitude from local sidereal time and latitude.
///
/// `Asc = atan2(cos LST, -(sin LST cos eps + tan phi sin eps))`
pub fn ascendant_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(
        theta.cos(),
        -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    normalize_deg(asc.to_degrees())
}

/// Tropical MC longitude from local sidereal time.
///
/// `MC = atan2(sin LST, cos LST cos eps)`
pub fn mc_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_deg(f64::atan2(theta.sin(), theta.cos() * eps.cos()).to_degrees())
}
