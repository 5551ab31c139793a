//! Inter-chart aspects and compatibility dimension scores.
//!
//! Every body of chart A is compared with every body of chart B. The
//! separation `min(|d|, 360 - |d|)` is matched against the five major
//! aspect angles within an orb; strength falls linearly from 100 at the
//! exact angle to 0 at the edge of the orb.

use std::collections::BTreeMap;

use jyotish_core::Body;
use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::error::VedicError;
use crate::util::separation_deg;

/// Default orb tolerance in degrees.
pub const DEFAULT_ORB_DEG: f64 = 8.0;

/// Major aspect angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

pub const ALL_ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

/// Whether an aspect supports or strains the bodies involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectNature {
    Harmonious,
    Challenging,
}

impl AspectKind {
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
        }
    }

    pub const fn nature(self) -> AspectNature {
        match self {
            Self::Conjunction | Self::Sextile | Self::Trine => AspectNature::Harmonious,
            Self::Square | Self::Opposition => AspectNature::Challenging,
        }
    }

    /// Maximum contribution of one exact aspect to a dimension score.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Conjunction | Self::Trine => 10.0,
            Self::Square | Self::Opposition => 8.0,
            Self::Sextile => 6.0,
        }
    }
}

/// Closest aspect to a separation angle, with its deviation, if within `orb_deg`.
pub fn classify_angle(separation: f64, orb_deg: f64) -> Option<(AspectKind, f64)> {
    ALL_ASPECT_KINDS
        .iter()
        .map(|k| (*k, (separation - k.angle_deg()).abs()))
        .filter(|(_, dev)| *dev <= orb_deg)
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Linear strength: 100 when exact, 0 at the orb edge.
pub fn aspect_strength(deviation_deg: f64, orb_deg: f64) -> f64 {
    if orb_deg <= 0.0 {
        return 0.0;
    }
    ((1.0 - deviation_deg / orb_deg) * 100.0).clamp(0.0, 100.0)
}

/// One aspect between a body of chart A and a body of chart B.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body_a: Body,
    pub body_b: Body,
    pub kind: AspectKind,
    /// Separation between the two longitudes, [0, 180].
    pub angle_deg: f64,
    /// Deviation from the exact aspect angle.
    pub orb_deg: f64,
    pub strength: f64,
}

impl Aspect {
    /// Same aspect with the chart roles exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            body_a: self.body_b,
            body_b: self.body_a,
            ..*self
        }
    }
}

/// Compatibility dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Emotional,
    Intellectual,
    Physical,
    Spiritual,
    Communication,
}

pub const ALL_DIMENSIONS: [Dimension; 5] = [
    Dimension::Emotional,
    Dimension::Intellectual,
    Dimension::Physical,
    Dimension::Spiritual,
    Dimension::Communication,
];

impl Dimension {
    /// Bodies whose mutual aspects feed this dimension.
    pub const fn bodies(self) -> &'static [Body] {
        match self {
            Self::Emotional => &[Body::Moon, Body::Venus, Body::Sun],
            Self::Intellectual => &[Body::Mercury, Body::Jupiter, Body::Saturn],
            Self::Physical => &[Body::Mars, Body::Venus, Body::Sun],
            Self::Spiritual => &[Body::Jupiter, Body::Ketu, Body::Saturn, Body::Moon],
            Self::Communication => &[Body::Mercury, Body::Moon, Body::Jupiter],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Emotional => "emotional",
            Self::Intellectual => "intellectual",
            Self::Physical => "physical",
            Self::Spiritual => "spiritual",
            Self::Communication => "communication",
        }
    }

    fn includes(self, a: Body, b: Body) -> bool {
        self.bodies().contains(&a) && self.bodies().contains(&b)
    }
}

/// Result of [`analyze_aspects`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectAnalysis {
    pub aspects: Vec<Aspect>,
    /// 0-100 per dimension, 50 when no relevant aspect exists.
    pub dimension_scores: BTreeMap<Dimension, f64>,
    /// Orb the analysis was run with.
    pub orb_deg: f64,
}

/// Aspects between two charts plus dimension scores.
pub fn analyze_aspects(chart_a: &Chart, chart_b: &Chart, orb_deg: f64) -> Result<AspectAnalysis, VedicError> {
    if !orb_deg.is_finite() || orb_deg <= 0.0 || orb_deg > 30.0 {
        return Err(VedicError::invalid("orb_deg", format!("{orb_deg} is not in (0, 30]")));
    }

    let mut aspects = Vec::new();
    for pa in &chart_a.positions {
        for pb in &chart_b.positions {
            let angle = separation_deg(pa.longitude_deg, pb.longitude_deg);
            if let Some((kind, dev)) = classify_angle(angle, orb_deg) {
                aspects.push(Aspect {
                    body_a: pa.body,
                    body_b: pb.body,
                    kind,
                    angle_deg: angle,
                    orb_deg: dev,
                    strength: aspect_strength(dev, orb_deg),
                });
            }
        }
    }

    let dimension_scores = ALL_DIMENSIONS
        .iter()
        .map(|&d| (d, dimension_score(d, &aspects)))
        .collect();

    tracing::debug!(count = aspects.len(), orb_deg, "aspects analyzed");
    Ok(AspectAnalysis {
        aspects,
        dimension_scores,
        orb_deg,
    })
}

/// 50 plus the signed, weighted contribution of each relevant aspect, clamped to [0, 100].
pub fn dimension_score(dimension: Dimension, aspects: &[Aspect]) -> f64 {
    let sum: f64 = aspects
        .iter()
        .filter(|a| dimension.includes(a.body_a, a.body_b))
        .map(|a| {
            let magnitude = a.kind.weight() * a.strength / 100.0;
            match a.kind.nature() {
                AspectNature::Harmonious => magnitude,
                AspectNature::Challenging => -magnitude,
            }
        })
        .sum();
    (50.0 + sum).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_core::{BodyState, HouseCusps, HouseSystem};

    fn chart(bodies: &[(Body, f64)]) -> Chart {
        let cusps = HouseCusps::from_angles(HouseSystem::WholeSign, 0.0, 270.0);
        Chart::new(
            2_451_545.0,
            bodies.iter().map(|&(b, lon)| {
                (
                    b,
                    BodyState {
                        longitude_deg: lon,
                        speed_deg_per_day: 1.0,
                    },
                )
            }),
            &cusps,
            HouseSystem::WholeSign,
        )
    }

    #[test]
    fn classify_picks_nearest_within_orb() {
        assert_eq!(classify_angle(3.0, 8.0), Some((AspectKind::Conjunction, 3.0)));
        assert_eq!(classify_angle(116.0, 8.0).map(|x| x.0), Some(AspectKind::Trine));
        assert_eq!(classify_angle(45.0, 8.0), None);
    }

    #[test]
    fn strength_is_linear_and_clamped() {
        assert_eq!(aspect_strength(0.0, 8.0), 100.0);
        assert_eq!(aspect_strength(4.0, 8.0), 50.0);
        assert_eq!(aspect_strength(9.0, 8.0), 0.0);
    }

    #[test]
    fn wraparound_conjunction() {
        let a = chart(&[(Body::Sun, 358.0)]);
        let b = chart(&[(Body::Moon, 2.0)]);
        let r = analyze_aspects(&a, &b, DEFAULT_ORB_DEG).expect("analysis");
        assert_eq!(r.aspects.len(), 1);
        assert_eq!(r.aspects[0].kind, AspectKind::Conjunction);
        assert!((r.aspects[0].orb_deg - 4.0).abs() < 1e-9);
        assert!((r.aspects[0].strength - 50.0).abs() < 1e-9);
    }

    #[test]
    fn dimension_scores_respond_to_nature() {
        let a = chart(&[(Body::Moon, 10.0), (Body::Mars, 0.0)]);
        let b = chart(&[(Body::Venus, 130.0), (Body::Sun, 90.0)]);
        let r = analyze_aspects(&a, &b, DEFAULT_ORB_DEG).expect("analysis");
        // Moon-Venus exact trine (+10), Moon-Sun 80 deg: no aspect.
        assert!((r.dimension_scores[&Dimension::Emotional] - 60.0).abs() < 1e-9);
        // Mars-Sun exact square (-8).
        assert!((r.dimension_scores[&Dimension::Physical] - 42.0).abs() < 1e-9);
        assert_eq!(r.dimension_scores[&Dimension::Intellectual], 50.0);
    }

    #[test]
    fn swapping_charts_swaps_roles() {
        let a = chart(&[(Body::Sun, 12.0), (Body::Moon, 200.0), (Body::Venus, 75.0)]);
        let b = chart(&[(Body::Mars, 130.0), (Body::Jupiter, 18.0), (Body::Mercury, 290.0)]);
        let ab = analyze_aspects(&a, &b, 8.0).expect("ab");
        let ba = analyze_aspects(&b, &a, 8.0).expect("ba");
        assert_eq!(ab.aspects.len(), ba.aspects.len());
        for asp in &ab.aspects {
            assert!(ba.aspects.contains(&asp.swapped()));
        }
        for d in ALL_DIMENSIONS {
            assert!((ab.dimension_scores[&d] - ba.dimension_scores[&d]).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_bad_orb() {
        let a = chart(&[(Body::Sun, 0.0)]);
        assert!(analyze_aspects(&a, &a, 0.0).is_err());
        assert!(analyze_aspects(&a, &a, f64::NAN).is_err());
    }
}
