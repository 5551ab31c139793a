//! Core types for dasha (planetary period) calculations.
//!
//! Dashas are hierarchical time-period systems. A hierarchy is stored level
//! by level: `levels[0]` holds the mahadashas, `levels[1]` every antardasha
//! of every mahadasha, and so on, each child pointing at its parent by index.

use jyotish_core::Body;
use serde::{Deserialize, Serialize};

/// Year length constant for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Maximum dasha depth. Levels 0-4 supported.
pub const MAX_DASHA_LEVEL: u8 = 4;

/// Default max level for queries (mahadasha, antardasha, pratyantardasha).
pub const DEFAULT_DASHA_LEVEL: u8 = 2;

/// Hard cap on periods per level to prevent combinatorial explosion.
pub const MAX_PERIODS_PER_LEVEL: usize = 100_000;

/// 5 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl DashaLevel {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sookshmadasha),
            4 => Some(Self::Pranadasha),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }
}

/// What rules a dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashaEntity {
    /// Graha-ruled systems (Vimshottari).
    Graha(Body),
    /// Rashi-ruled systems (0-based index, 0=Mesha..11=Meena).
    Rashi(u8),
}

impl DashaEntity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Graha(b) => b.name(),
            Self::Rashi(r) => crate::rashi::Rashi::from_index(*r).name(),
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub entity: DashaEntity,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Index into parent level's array (0 for level 0).
    pub parent_idx: u32,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Half-open containment: `start <= jd < end`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// Supported dasha systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashaSystem {
    /// 120-year nakshatra-based graha cycle.
    Vimshottari,
    /// Jaimini sign dasha with sign-to-lord distance periods.
    Chara,
    /// Jaimini sign dasha with fixed 7/8/9-year periods.
    Sthira,
}

pub const ALL_DASHA_SYSTEMS: [DashaSystem; 3] =
    [DashaSystem::Vimshottari, DashaSystem::Chara, DashaSystem::Sthira];

impl DashaSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "Vimshottari",
            Self::Chara => "Chara",
            Self::Sthira => "Sthira",
        }
    }
}

impl std::str::FromStr for DashaSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vimshottari" | "vimsottari" => Ok(Self::Vimshottari),
            "chara" => Ok(Self::Chara),
            "sthira" => Ok(Self::Sthira),
            _ => Err(format!("unknown dasha system {s:?}")),
        }
    }
}

/// Complete hierarchy for a dasha system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaHierarchy {
    pub system: DashaSystem,
    /// Birth JD UTC.
    pub birth_jd: f64,
    /// Levels: levels[0]=mahadasha, levels[1]=antardasha, etc.
    pub levels: Vec<Vec<DashaPeriod>>,
}

impl DashaHierarchy {
    /// Children at `level + 1` of the period at `levels[level][parent_idx]`.
    pub fn children_of(&self, level: usize, parent_idx: usize) -> impl Iterator<Item = &DashaPeriod> {
        self.levels
            .get(level + 1)
            .into_iter()
            .flatten()
            .filter(move |p| p.parent_idx as usize == parent_idx)
    }
}

/// Active periods at a specific date (one per requested level).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaSnapshot {
    pub system: DashaSystem,
    /// The queried JD UTC.
    pub query_jd: f64,
    /// Active periods: periods[0]=active mahadasha, [1]=active antardasha, etc.
    pub periods: Vec<DashaPeriod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dasha_level_from_u8() {
        assert_eq!(DashaLevel::from_u8(0), Some(DashaLevel::Mahadasha));
        assert_eq!(DashaLevel::from_u8(4), Some(DashaLevel::Pranadasha));
        assert_eq!(DashaLevel::from_u8(5), None);
    }

    #[test]
    fn dasha_level_child() {
        assert_eq!(
            DashaLevel::Mahadasha.child_level(),
            Some(DashaLevel::Antardasha)
        );
        assert_eq!(DashaLevel::Pranadasha.child_level(), None);
    }

    #[test]
    fn entity_names() {
        assert_eq!(DashaEntity::Graha(Body::Venus).name(), "Venus");
        assert_eq!(DashaEntity::Rashi(0).name(), "Mesha");
    }

    #[test]
    fn system_parse() {
        assert_eq!("Chara".parse::<DashaSystem>(), Ok(DashaSystem::Chara));
        assert!("yogini".parse::<DashaSystem>().is_err());
    }

    #[test]
    fn period_containment_is_half_open() {
        let p = DashaPeriod {
            entity: DashaEntity::Rashi(3),
            start_jd: 10.0,
            end_jd: 20.0,
            level: DashaLevel::Mahadasha,
            order: 1,
            parent_idx: 0,
        };
        assert!(p.contains(10.0));
        assert!(!p.contains(20.0));
        assert!((p.duration_years() - 10.0 / DAYS_PER_YEAR).abs() < 1e-15);
    }
}
