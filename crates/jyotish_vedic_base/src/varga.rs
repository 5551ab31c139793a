//! Varga (divisional) charts.
//!
//! A D-N chart multiplies every longitude, and the ascendant, by N modulo
//! 360. Houses in a divisional chart are whole signs from the divisional
//! ascendant. D1 is the base chart itself.

use std::collections::BTreeMap;

use jyotish_core::{HouseCusps, HouseSystem};
use serde::Serialize;

use crate::chart::{Chart, house_of};
use crate::error::VedicError;
use crate::rashi::sign_number;
use crate::util::normalize_360;

/// Static metadata for one divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Division {
    pub factor: u16,
    pub name: &'static str,
    pub short_name: &'static str,
    /// Life areas the division is read for.
    pub significations: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Shodashavarga table
// ---------------------------------------------------------------------------

/// The 16 traditional divisions, ordered by factor.
pub static DIVISIONS: [Division; 16] = [
    Division {
        factor: 1,
        name: "Rashi",
        short_name: "D1",
        significations: &["body", "overall life"],
    },
    Division {
        factor: 2,
        name: "Hora",
        short_name: "D2",
        significations: &["wealth", "family resources"],
    },
    Division {
        factor: 3,
        name: "Drekkana",
        short_name: "D3",
        significations: &["siblings", "courage"],
    },
    Division {
        factor: 4,
        name: "Chaturthamsha",
        short_name: "D4",
        significations: &["property", "fortune", "home"],
    },
    Division {
        factor: 7,
        name: "Saptamsha",
        short_name: "D7",
        significations: &["children", "progeny"],
    },
    Division {
        factor: 9,
        name: "Navamsha",
        short_name: "D9",
        significations: &["marriage", "dharma", "spouse"],
    },
    Division {
        factor: 10,
        name: "Dashamsha",
        short_name: "D10",
        significations: &["career", "status"],
    },
    Division {
        factor: 12,
        name: "Dwadashamsha",
        short_name: "D12",
        significations: &["parents", "ancestry"],
    },
    Division {
        factor: 16,
        name: "Shodashamsha",
        short_name: "D16",
        significations: &["vehicles", "comforts"],
    },
    Division {
        factor: 20,
        name: "Vimshamsha",
        short_name: "D20",
        significations: &["spiritual practice", "worship"],
    },
    Division {
        factor: 24,
        name: "Chaturvimshamsha",
        short_name: "D24",
        significations: &["education", "learning"],
    },
    Division {
        factor: 27,
        name: "Saptavimshamsha",
        short_name: "D27",
        significations: &["strength", "weakness"],
    },
    Division {
        factor: 30,
        name: "Trimshamsha",
        short_name: "D30",
        significations: &["misfortune", "health troubles"],
    },
    Division {
        factor: 40,
        name: "Khavedamsha",
        short_name: "D40",
        significations: &["maternal lineage", "auspicious effects"],
    },
    Division {
        factor: 45,
        name: "Akshavedamsha",
        short_name: "D45",
        significations: &["paternal lineage", "character"],
    },
    Division {
        factor: 60,
        name: "Shashtiamsha",
        short_name: "D60",
        significations: &["past karma", "general results"],
    },
];

/// Look up a division by factor.
pub fn division(factor: u16) -> Result<&'static Division, VedicError> {
    DIVISIONS
        .iter()
        .find(|d| d.factor == factor)
        .ok_or(VedicError::UnsupportedDivision(factor))
}

/// Divisional longitude: `(lon * factor) mod 360`.
pub fn varga_longitude(lon_deg: f64, factor: u16) -> f64 {
    normalize_360(normalize_360(lon_deg) * factor as f64)
}

/// 1-based sign of a longitude in the D-`factor` chart.
pub fn varga_sign(lon_deg: f64, factor: u16) -> u8 {
    sign_number(varga_longitude(lon_deg, factor))
}

// ---------------------------------------------------------------------------
// Chart transforms
// ---------------------------------------------------------------------------

/// Build the D-`factor` chart from a base chart.
pub fn divisional_chart(chart: &Chart, factor: u16) -> Result<Chart, VedicError> {
    division(factor)?;
    if factor == 1 {
        return Ok(chart.clone());
    }

    let ascendant_deg = varga_longitude(chart.ascendant_deg, factor);
    let cusps = HouseCusps::from_angles(HouseSystem::WholeSign, ascendant_deg, ascendant_deg);
    let positions = chart
        .positions
        .iter()
        .map(|p| {
            let lon = varga_longitude(p.longitude_deg, factor);
            let sign = sign_number(lon);
            crate::chart::Position {
                longitude_deg: lon,
                speed_deg_per_day: p.speed_deg_per_day * factor as f64,
                sign,
                degrees_in_sign: lon - (sign - 1) as f64 * 30.0,
                house: house_of(lon, ascendant_deg, &cusps.cusps_deg, HouseSystem::WholeSign),
                ..*p
            }
        })
        .collect();

    Ok(Chart {
        jd: chart.jd,
        positions,
        ascendant_deg,
        cusps_deg: cusps.cusps_deg,
        house_system: HouseSystem::WholeSign,
    })
}

/// Build several divisional charts. A failing factor does not affect the others.
pub fn divisional_charts(chart: &Chart, factors: &[u16]) -> BTreeMap<u16, Result<Chart, VedicError>> {
    factors
        .iter()
        .map(|&f| (f, divisional_chart(chart, f)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_core::{Body, BodyState};

    fn base_chart() -> Chart {
        let cusps = HouseCusps::from_angles(HouseSystem::Equal, 17.0, 280.0);
        Chart::new(
            2_460_000.5,
            [
                (
                    Body::Sun,
                    BodyState {
                        longitude_deg: 45.5,
                        speed_deg_per_day: 0.98,
                    },
                ),
                (
                    Body::Moon,
                    BodyState {
                        longitude_deg: 213.25,
                        speed_deg_per_day: 13.1,
                    },
                ),
            ],
            &cusps,
            HouseSystem::Equal,
        )
    }

    #[test]
    fn sixteen_divisions() {
        assert_eq!(DIVISIONS.len(), 16);
        for w in DIVISIONS.windows(2) {
            assert!(w[0].factor < w[1].factor);
        }
        assert_eq!(division(9).map(|d| d.name), Ok("Navamsha"));
    }

    #[test]
    fn unsupported_factor() {
        assert_eq!(division(5), Err(VedicError::UnsupportedDivision(5)));
    }

    #[test]
    fn d1_is_identity() {
        let chart = base_chart();
        assert_eq!(divisional_chart(&chart, 1), Ok(chart));
    }

    #[test]
    fn navamsha_longitudes() {
        let d9 = divisional_chart(&base_chart(), 9).expect("d9");
        // 45.5 * 9 = 409.5 -> 49.5
        let sun = d9.position(Body::Sun).expect("sun");
        assert!((sun.longitude_deg - 49.5).abs() < 1e-9);
        assert_eq!(sun.sign, 2);
        // asc 17 * 9 = 153 -> sign 6
        assert!((d9.ascendant_deg - 153.0).abs() < 1e-9);
        assert_eq!(d9.ascendant_sign(), 6);
        assert_eq!(sun.house, 9);
        assert_eq!(d9.house_system, HouseSystem::WholeSign);
    }

    #[test]
    fn batch_keeps_going_past_bad_factor() {
        let out = divisional_charts(&base_chart(), &[1, 5, 9]);
        assert!(out[&1].is_ok());
        assert_eq!(out[&5], Err(VedicError::UnsupportedDivision(5)));
        assert!(out[&9].is_ok());
    }
}
