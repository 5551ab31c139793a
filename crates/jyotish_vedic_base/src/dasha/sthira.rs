//! Sthira dasha: rashi-based, fixed periods by sign type.
//!
//! Periods: movable 7y, fixed 8y, dual 9y; 96 years over all twelve.
//!
//! The classical start is the sign of the Brahma Graha. This implementation
//! starts from the lagna sign instead and is an approximation of the
//! classical scheme. Direction: odd start forward, even start reverse.

use crate::error::VedicError;
use crate::rashi::{Rashi, SignType};

use super::rashi_dasha::{RashiDashaInputs, rashi_hierarchy, rashi_level0, rashi_snapshot};
use super::rashi_util::is_odd_sign;
use super::types::{DashaHierarchy, DashaPeriod, DashaSnapshot, DashaSystem};

/// Total Sthira dasha cycle: 4x7 + 4x8 + 4x9 = 96 years.
pub const STHIRA_TOTAL_YEARS: f64 = 96.0;

/// Fixed period (years) by sign type.
pub fn sthira_period_years(rashi_index: u8) -> f64 {
    match Rashi::from_index(rashi_index).sign_type() {
        SignType::Chara => 7.0,
        SignType::Sthira => 8.0,
        SignType::Dvisvabhava => 9.0,
    }
}

/// Generate level-0 periods for Sthira dasha, starting at the lagna sign.
pub fn sthira_level0(birth_jd: f64, inputs: &RashiDashaInputs) -> Vec<DashaPeriod> {
    let start = inputs.lagna_rashi_index;
    rashi_level0(birth_jd, inputs, start, is_odd_sign(start), &sthira_period_years)
}

/// Full hierarchy for Sthira dasha.
pub fn sthira_hierarchy(
    birth_jd: f64,
    inputs: &RashiDashaInputs,
    max_level: u8,
) -> Result<DashaHierarchy, VedicError> {
    rashi_hierarchy(
        DashaSystem::Sthira,
        birth_jd,
        sthira_level0(birth_jd, inputs),
        max_level,
    )
}

/// Snapshot for Sthira dasha.
pub fn sthira_snapshot(
    birth_jd: f64,
    inputs: &RashiDashaInputs,
    query_jd: f64,
    max_level: u8,
) -> DashaSnapshot {
    rashi_snapshot(
        DashaSystem::Sthira,
        &sthira_level0(birth_jd, inputs),
        query_jd,
        max_level,
    )
}
