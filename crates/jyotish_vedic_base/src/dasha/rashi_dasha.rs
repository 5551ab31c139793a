//! Generic rashi-based dasha engine shared by Chara and Sthira.
//!
//! Each system provides its own level-0 generator (starting rashi,
//! direction, period years) and reuses these tiers. Sub-periods of a rashi
//! period are twelve equal parts, starting from the sign after the parent
//! in the parent's own direction (odd signs forward, even signs reverse).

use jyotish_core::Body;

use crate::chart::Chart;
use crate::error::VedicError;
use crate::graha::{rashi_co_lord, rashi_lord};
use crate::rashi::Rashi;
use crate::util::segment_index;

use super::balance::rashi_birth_balance;
use super::query::find_active_period;
use super::rashi_util::{is_odd_sign, rashi_sequence};
use super::subperiod::equal_children;
use super::types::{
    DAYS_PER_YEAR, DashaEntity, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot,
    DashaSystem, MAX_DASHA_LEVEL, MAX_PERIODS_PER_LEVEL,
};

/// Chart data needed by rashi-based dashas.
///
/// Assembled by the orchestration layer; the pure-math layer never calls
/// the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiDashaInputs {
    /// Sidereal longitudes of the 9 grahas, in `Body::GRAHAS` order.
    pub graha_sidereal_lons: [f64; 9],
    /// Sidereal longitude of the lagna (ascendant).
    pub lagna_sidereal_lon: f64,
    /// 0-based rashi index of the lagna.
    pub lagna_rashi_index: u8,
}

impl RashiDashaInputs {
    pub fn new(graha_sidereal_lons: [f64; 9], lagna_sidereal_lon: f64) -> Self {
        Self {
            graha_sidereal_lons,
            lagna_sidereal_lon,
            lagna_rashi_index: segment_index(lagna_sidereal_lon, 30.0, 12),
        }
    }

    /// Pull the 9 graha longitudes and the ascendant out of a chart.
    pub fn from_chart(chart: &Chart) -> Result<Self, VedicError> {
        let mut lons = [0.0; 9];
        for (slot, body) in lons.iter_mut().zip(Body::GRAHAS) {
            *slot = chart.longitude(body).ok_or_else(|| {
                VedicError::invalid("chart", format!("{body} is missing from the chart"))
            })?;
        }
        Ok(Self::new(lons, chart.ascendant_deg))
    }

    /// Rashi index (0-11) occupied by a graha. Non-grahas fall back to the lagna.
    pub fn graha_rashi(&self, body: Body) -> u8 {
        Body::GRAHAS
            .iter()
            .position(|g| *g == body)
            .map(|i| segment_index(self.graha_sidereal_lons[i], 30.0, 12))
            .unwrap_or(self.lagna_rashi_index)
    }

    /// How many of the 9 grahas occupy a rashi.
    pub fn count_occupants(&self, rashi_index: u8) -> usize {
        Body::GRAHAS
            .iter()
            .filter(|g| self.graha_rashi(**g) == rashi_index % 12)
            .count()
    }

    /// Rashi occupied by the lord of `rashi_index`, resolving dual lordship
    /// of Vrischika (Mars/Ketu) and Kumbha (Saturn/Rahu).
    ///
    /// If exactly one co-lord sits in the sign itself, the other is used.
    /// Otherwise the co-lord with more grahas in its sign wins, and ties go
    /// to the primary lord.
    pub fn lord_rashi(&self, rashi_index: u8) -> u8 {
        let rashi = Rashi::from_index(rashi_index);
        let primary = rashi_lord(rashi);
        let primary_rashi = self.graha_rashi(primary);
        let Some(co) = rashi_co_lord(rashi) else {
            return primary_rashi;
        };
        let co_rashi = self.graha_rashi(co);
        let r = rashi.index();
        match (primary_rashi == r, co_rashi == r) {
            (true, false) => co_rashi,
            (false, true) => primary_rashi,
            (true, true) => primary_rashi,
            (false, false) => {
                if self.count_occupants(co_rashi) > self.count_occupants(primary_rashi) {
                    co_rashi
                } else {
                    primary_rashi
                }
            }
        }
    }
}

/// Level-0 periods from a start sign, direction and per-sign years.
///
/// The first period is shortened by the lagna's progress through its sign.
pub fn rashi_level0(
    birth_jd: f64,
    inputs: &RashiDashaInputs,
    start: u8,
    forward: bool,
    period_years_fn: &dyn Fn(u8) -> f64,
) -> Vec<DashaPeriod> {
    let first_period_days = period_years_fn(start) * DAYS_PER_YEAR;
    let (balance_days, _frac) = rashi_birth_balance(inputs.lagna_sidereal_lon, first_period_days);

    let mut periods = Vec::with_capacity(12);
    let mut cursor = birth_jd;
    for (i, rashi) in rashi_sequence(start, forward).into_iter().enumerate() {
        let duration = if i == 0 {
            balance_days
        } else {
            period_years_fn(rashi) * DAYS_PER_YEAR
        };
        let end = cursor + duration;
        periods.push(DashaPeriod {
            entity: DashaEntity::Rashi(rashi),
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: (i as u16) + 1,
            parent_idx: 0,
        });
        cursor = end;
    }
    periods
}

/// Twelve equal children of a rashi period.
pub fn rashi_children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let DashaEntity::Rashi(parent_rashi) = parent.entity else {
        return Vec::new();
    };
    let forward = is_odd_sign(parent_rashi);
    let first = if forward {
        (parent_rashi + 1) % 12
    } else {
        (parent_rashi + 11) % 12
    };
    let seq: Vec<DashaEntity> = rashi_sequence(first, forward)
        .into_iter()
        .map(DashaEntity::Rashi)
        .collect();
    equal_children(parent, &seq, child_level, parent_idx)
}

/// Complete a level from its parent level.
pub fn rashi_complete_level(parent_level: &[DashaPeriod]) -> Result<Vec<DashaPeriod>, VedicError> {
    let estimated = parent_level.len() * 12;
    if estimated > MAX_PERIODS_PER_LEVEL {
        return Err(VedicError::TooManyPeriods);
    }
    let mut result = Vec::with_capacity(estimated);
    for (pidx, parent) in parent_level.iter().enumerate() {
        result.extend(rashi_children(parent, pidx as u32));
    }
    Ok(result)
}

/// Build the full hierarchy from a level-0 sequence.
pub fn rashi_hierarchy(
    system: DashaSystem,
    birth_jd: f64,
    level0: Vec<DashaPeriod>,
    max_level: u8,
) -> Result<DashaHierarchy, VedicError> {
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let mut levels = vec![level0];
    for depth in 1..=max_level as usize {
        let children = rashi_complete_level(&levels[depth - 1])?;
        levels.push(children);
    }
    Ok(DashaHierarchy {
        system,
        birth_jd,
        levels,
    })
}

/// Active chain at `query_jd` without materializing the hierarchy.
pub fn rashi_snapshot(
    system: DashaSystem,
    level0: &[DashaPeriod],
    query_jd: f64,
    max_level: u8,
) -> DashaSnapshot {
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let mut periods = Vec::with_capacity(max_level as usize + 1);
    if let Some(idx) = find_active_period(level0, query_jd) {
        let mut current = level0[idx];
        periods.push(current);
        for _ in 0..max_level {
            let children = rashi_children(&current, 0);
            match find_active_period(&children, query_jd) {
                Some(i) => {
                    current = children[i];
                    periods.push(current);
                }
                None => break,
            }
        }
    }
    DashaSnapshot {
        system,
        query_jd,
        periods,
    }
}
