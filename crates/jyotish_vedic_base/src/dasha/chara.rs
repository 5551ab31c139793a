//! Chara (Jaimini) dasha: rashi-based, variable periods.
//!
//! Period = distance from a rashi to its lord, in signs, minus one.
//! Odd signs count forward, even signs count reverse, and a lord in its
//! own sign gives 12 years. Vrischika and Kumbha resolve their co-lords
//! through [`RashiDashaInputs::lord_rashi`].
//!
//! Starting rashi: lagna rashi. Direction: odd lagna forward, even reverse.

use crate::error::VedicError;

use super::rashi_dasha::{RashiDashaInputs, rashi_hierarchy, rashi_level0, rashi_snapshot};
use super::rashi_util::{count_signs_forward, count_signs_reverse, is_odd_sign};
use super::types::{DashaHierarchy, DashaPeriod, DashaSnapshot, DashaSystem};

/// Chara dasha period in years for a rashi, 1-12.
pub fn chara_period_years(rashi_index: u8, inputs: &RashiDashaInputs) -> f64 {
    let r = rashi_index % 12;
    let lord_rashi = inputs.lord_rashi(r);
    let distance = if is_odd_sign(r) {
        count_signs_forward(r, lord_rashi)
    } else {
        count_signs_reverse(r, lord_rashi)
    };
    let period = distance - 1;
    if period == 0 { 12.0 } else { period as f64 }
}

/// Generate level-0 (mahadasha) periods for Chara dasha.
pub fn chara_level0(birth_jd: f64, inputs: &RashiDashaInputs) -> Vec<DashaPeriod> {
    let start = inputs.lagna_rashi_index;
    let period_fn = |r: u8| chara_period_years(r, inputs);
    rashi_level0(birth_jd, inputs, start, is_odd_sign(start), &period_fn)
}

/// Full hierarchy for Chara dasha.
pub fn chara_hierarchy(
    birth_jd: f64,
    inputs: &RashiDashaInputs,
    max_level: u8,
) -> Result<DashaHierarchy, VedicError> {
    rashi_hierarchy(
        DashaSystem::Chara,
        birth_jd,
        chara_level0(birth_jd, inputs),
        max_level,
    )
}

/// Snapshot for Chara dasha.
pub fn chara_snapshot(
    birth_jd: f64,
    inputs: &RashiDashaInputs,
    query_jd: f64,
    max_level: u8,
) -> DashaSnapshot {
    rashi_snapshot(
        DashaSystem::Chara,
        &chara_level0(birth_jd, inputs),
        query_jd,
        max_level,
    )
}
