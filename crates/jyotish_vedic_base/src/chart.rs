//! Chart: body positions plus ascendant and house cusps for one moment.

use jyotish_core::{Body, BodyState, HouseCusps, HouseSystem};
use serde::{Deserialize, Serialize};

use crate::rashi::{Rashi, sign_number};
use crate::util::{arc_forward, normalize_360};

/// One body's place in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub body: Body,
    /// Sidereal longitude in [0, 360).
    pub longitude_deg: f64,
    pub speed_deg_per_day: f64,
    /// 1-based sign, `floor(longitude / 30) + 1`.
    pub sign: u8,
    pub degrees_in_sign: f64,
    /// 1-based house under the chart's house system.
    pub house: u8,
    pub retrograde: bool,
}

impl Position {
    pub fn rashi(&self) -> Rashi {
        Rashi::from_index(self.sign - 1)
    }
}

/// Positions, ascendant and cusps at one Julian Day. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub jd: f64,
    pub positions: Vec<Position>,
    pub ascendant_deg: f64,
    pub cusps_deg: [f64; 12],
    pub house_system: HouseSystem,
}

impl Chart {
    /// Assemble a chart from body states and house geometry.
    pub fn new(
        jd: f64,
        states: impl IntoIterator<Item = (Body, BodyState)>,
        houses: &HouseCusps,
        house_system: HouseSystem,
    ) -> Self {
        let ascendant_deg = normalize_360(houses.ascendant_deg);
        let cusps_deg = houses.cusps_deg;
        let positions = states
            .into_iter()
            .map(|(body, state)| {
                let lon = normalize_360(state.longitude_deg);
                let sign = sign_number(lon);
                Position {
                    body,
                    longitude_deg: lon,
                    speed_deg_per_day: state.speed_deg_per_day,
                    sign,
                    degrees_in_sign: lon - (sign - 1) as f64 * 30.0,
                    house: house_of(lon, ascendant_deg, &cusps_deg, house_system),
                    retrograde: state.is_retrograde(),
                }
            })
            .collect();
        Self {
            jd,
            positions,
            ascendant_deg,
            cusps_deg,
            house_system,
        }
    }

    pub fn position(&self, body: Body) -> Option<&Position> {
        self.positions.iter().find(|p| p.body == body)
    }

    pub fn longitude(&self, body: Body) -> Option<f64> {
        self.position(body).map(|p| p.longitude_deg)
    }

    /// 1-based sign of the ascendant.
    pub fn ascendant_sign(&self) -> u8 {
        sign_number(self.ascendant_deg)
    }

    pub fn ascendant_rashi(&self) -> Rashi {
        Rashi::from_index(self.ascendant_sign() - 1)
    }

    /// Bodies whose sign equals `sign` (1-based).
    pub fn occupants(&self, sign: u8) -> impl Iterator<Item = &Position> {
        self.positions.iter().filter(move |p| p.sign == sign)
    }
}

/// 1-based house of a longitude.
///
/// Whole-sign counts signs from the ascendant's sign; other systems find
/// the cusp arc containing the longitude.
pub fn house_of(lon_deg: f64, ascendant_deg: f64, cusps_deg: &[f64; 12], system: HouseSystem) -> u8 {
    if system == HouseSystem::WholeSign {
        let diff = (sign_number(lon_deg) + 12 - sign_number(ascendant_deg)) % 12;
        return diff + 1;
    }
    for i in 0..12 {
        let start = cusps_deg[i];
        let end = cusps_deg[(i + 1) % 12];
        let span = arc_forward(start, end);
        if span > 0.0 && arc_forward(start, lon_deg) < span {
            return i as u8 + 1;
        }
    }
    1
}
