//! Dasha (planetary period) calculations.
//!
//! Three systems:
//! - Vimshottari: nakshatra-based, 120-year graha cycle
//! - Chara: Jaimini sign dasha, periods from sign-to-lord distance
//! - Sthira: Jaimini sign dasha, fixed 7/8/9-year periods
//!
//! Each supports up to 5 hierarchical levels (Mahadasha through Pranadasha),
//! full hierarchy generation and a snapshot path that only materializes
//! the active chain.

pub mod balance;
pub mod chara;
pub mod query;
pub mod rashi_dasha;
pub mod rashi_util;
pub mod sthira;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{nakshatra_birth_balance, rashi_birth_balance};
pub use chara::{chara_hierarchy, chara_level0, chara_period_years, chara_snapshot};
pub use query::{find_active_period, snapshot_from_hierarchy};
pub use rashi_dasha::{RashiDashaInputs, rashi_children, rashi_complete_level};
pub use rashi_util::{count_signs_forward, count_signs_reverse, is_odd_sign, rashi_sequence};
pub use sthira::{STHIRA_TOTAL_YEARS, sthira_hierarchy, sthira_level0, sthira_period_years, sthira_snapshot};
pub use subperiod::{equal_children, proportional_children};
pub use types::{
    ALL_DASHA_SYSTEMS, DAYS_PER_YEAR, DEFAULT_DASHA_LEVEL, DashaEntity, DashaHierarchy, DashaLevel,
    DashaPeriod, DashaSnapshot, DashaSystem, MAX_DASHA_LEVEL, MAX_PERIODS_PER_LEVEL,
};
pub use vimshottari::{
    Antardasha, Mahadasha, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, VimshottariBalance,
    vimshottari_balance, vimshottari_children, vimshottari_complete_level, vimshottari_hierarchy,
    vimshottari_level0, vimshottari_mahadashas, vimshottari_snapshot, vimshottari_years,
};

use crate::error::VedicError;

/// Birth data needed by any supported dasha system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaBirthData {
    pub birth_jd: f64,
    pub moon_sidereal_lon: f64,
    pub rashi_inputs: RashiDashaInputs,
}

/// Hierarchy for any system.
pub fn dasha_hierarchy(
    system: DashaSystem,
    birth: &DashaBirthData,
    max_level: u8,
) -> Result<DashaHierarchy, VedicError> {
    match system {
        DashaSystem::Vimshottari => {
            vimshottari_hierarchy(birth.birth_jd, birth.moon_sidereal_lon, max_level)
        }
        DashaSystem::Chara => chara_hierarchy(birth.birth_jd, &birth.rashi_inputs, max_level),
        DashaSystem::Sthira => sthira_hierarchy(birth.birth_jd, &birth.rashi_inputs, max_level),
    }
}

/// Snapshot for any system.
pub fn dasha_snapshot(
    system: DashaSystem,
    birth: &DashaBirthData,
    query_jd: f64,
    max_level: u8,
) -> DashaSnapshot {
    match system {
        DashaSystem::Vimshottari => {
            vimshottari_snapshot(birth.birth_jd, birth.moon_sidereal_lon, query_jd, max_level)
        }
        DashaSystem::Chara => chara_snapshot(birth.birth_jd, &birth.rashi_inputs, query_jd, max_level),
        DashaSystem::Sthira => {
            sthira_snapshot(birth.birth_jd, &birth.rashi_inputs, query_jd, max_level)
        }
    }
}
