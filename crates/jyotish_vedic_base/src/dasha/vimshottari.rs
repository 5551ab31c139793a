//! Vimshottari dasha: the 120-year nakshatra-based graha cycle.
//!
//! Computation tiers:
//! - Tier 0: Level-0 (mahadasha) generation
//! - Tier 1: All children of one parent
//! - Tier 2: Complete level from parent level
//! - Tier 3: Full hierarchy (levels 0..N)
//! - Tier 4: Snapshot-only path (no full materialization)

use jyotish_core::Body;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::nakshatra::NAKSHATRA_LORD_CYCLE;

use super::balance::nakshatra_birth_balance;
use super::query::find_active_period;
use super::subperiod::proportional_children;
use super::types::{
    DAYS_PER_YEAR, DashaEntity, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot,
    DashaSystem, MAX_DASHA_LEVEL, MAX_PERIODS_PER_LEVEL,
};

/// Full mahadasha years in cycle order, starting from Ketu.
pub const VIMSHOTTARI_YEARS: [(Body, f64); 9] = [
    (Body::Ketu, 7.0),
    (Body::Venus, 20.0),
    (Body::Sun, 6.0),
    (Body::Moon, 10.0),
    (Body::Mars, 7.0),
    (Body::Rahu, 18.0),
    (Body::Jupiter, 16.0),
    (Body::Saturn, 19.0),
    (Body::Mercury, 17.0),
];

/// Length of one full cycle.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Full mahadasha years of a graha. `None` for bodies outside the cycle.
pub fn vimshottari_years(body: Body) -> Option<f64> {
    VIMSHOTTARI_YEARS
        .iter()
        .find(|(b, _)| *b == body)
        .map(|&(_, y)| y)
}

fn cycle_position(body: Body) -> usize {
    VIMSHOTTARI_YEARS
        .iter()
        .position(|(b, _)| *b == body)
        .unwrap_or(0)
}

/// Cyclic `(entity, full_days)` sequence starting at `start`.
/// The nine lords from `start` onward, with their full-cycle years.
fn sequence_from(start: Body) -> [(DashaEntity, f64); 9] {
    let offset = cycle_position(start);
    std::array::from_fn(|i| {
        let (body, years) = VIMSHOTTARI_YEARS[(offset + i) % 9];
        (DashaEntity::Graha(body), years)
    })
}

/// Birth balance of the first mahadasha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VimshottariBalance {
    /// Lord of the Moon's nakshatra; rules the first mahadasha.
    pub lord: Body,
    /// 0-based nakshatra index of the Moon.
    pub nakshatra_index: u8,
    /// Fraction of the nakshatra already traversed at birth.
    pub elapsed_fraction: f64,
    /// Remaining years of the first mahadasha: `(1 - elapsed) * full_years`.
    pub remaining_years: f64,
}

/// First-mahadasha balance from the Moon's sidereal longitude.
pub fn vimshottari_balance(moon_sidereal_lon: f64) -> VimshottariBalance {
    let (nakshatra_index, _, _) = nakshatra_birth_balance(moon_sidereal_lon, 0.0);
    let lord = NAKSHATRA_LORD_CYCLE[(nakshatra_index % 9) as usize];
    let full_years = vimshottari_years(lord).unwrap_or(0.0);
    let (_, remaining_years, elapsed_fraction) =
        nakshatra_birth_balance(moon_sidereal_lon, full_years);
    VimshottariBalance {
        lord,
        nakshatra_index,
        elapsed_fraction,
        remaining_years,
    }
}

// ── Tier 0: Level-0 (Mahadasha) generation ───────────────────────────

/// Generate the mahadashas covering exactly one 120-year cycle from birth.
///
/// The first lord runs for its balance, the other eight for their full
/// years, and the cycle closes with the first lord's elapsed portion so
/// the total is 120 years. The closing period is omitted when empty.
pub fn vimshottari_level0(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let balance = vimshottari_balance(moon_sidereal_lon);
    let seq = sequence_from(balance.lord);
    let first_full_days = seq[0].1 * DAYS_PER_YEAR;
    let balance_days = balance.remaining_years * DAYS_PER_YEAR;
    let closing_days = first_full_days - balance_days;

    let mut durations: Vec<(DashaEntity, f64)> = Vec::with_capacity(10);
    durations.push((seq[0].0, balance_days));
    durations.extend(seq[1..].iter().map(|&(lord, years)| (lord, years * DAYS_PER_YEAR)));
    if closing_days > 0.0 {
        durations.push((seq[0].0, closing_days));
    }
    durations.retain(|(_, d)| *d > 0.0);

    let cycle_end = birth_jd + VIMSHOTTARI_TOTAL_YEARS * DAYS_PER_YEAR;
    let mut periods = Vec::with_capacity(durations.len());
    let mut cursor = birth_jd;
    for (i, (entity, days)) in durations.into_iter().enumerate() {
        let end = cursor + days;
        periods.push(DashaPeriod {
            entity,
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: (i as u16) + 1,
            parent_idx: 0,
        });
        cursor = end;
    }
    if let Some(last) = periods.last_mut() {
        last.end_jd = cycle_end;
    }
    tracing::debug!(
        lord = %balance.lord,
        remaining_years = balance.remaining_years,
        count = periods.len(),
        "vimshottari mahadashas"
    );
    periods
}

// ── Tier 1: All children of one parent ───────────────────────────────

/// Sub-periods of a Vimshottari period: the 9 lords from the parent's own
/// lord onward, each `parent_length * lord_years / 120`.
pub fn vimshottari_children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let DashaEntity::Graha(lord) = parent.entity else {
        return Vec::new();
    };
    let seq = sequence_from(lord);
    proportional_children(parent, &seq, VIMSHOTTARI_TOTAL_YEARS, child_level, parent_idx)
}

// ── Tier 2: Complete level from parent level ─────────────────────────

/// Calculate complete level N given all periods at level N-1.
pub fn vimshottari_complete_level(parent_level: &[DashaPeriod]) -> Result<Vec<DashaPeriod>, VedicError> {
    let estimated = parent_level.len() * 9;
    if estimated > MAX_PERIODS_PER_LEVEL {
        return Err(VedicError::TooManyPeriods);
    }
    let mut result = Vec::with_capacity(estimated);
    for (pidx, parent) in parent_level.iter().enumerate() {
        result.extend(vimshottari_children(parent, pidx as u32));
    }
    Ok(result)
}

// ── Tier 3: Full hierarchy ───────────────────────────────────────────

/// Birth balance, then all levels from 0 to `max_level` (capped at 4).
pub fn vimshottari_hierarchy(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    max_level: u8,
) -> Result<DashaHierarchy, VedicError> {
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let mut levels = vec![vimshottari_level0(birth_jd, moon_sidereal_lon)];
    for depth in 1..=max_level as usize {
        let children = vimshottari_complete_level(&levels[depth - 1])?;
        levels.push(children);
    }
    Ok(DashaHierarchy {
        system: DashaSystem::Vimshottari,
        birth_jd,
        levels,
    })
}

// ── Tier 4: Snapshot-only path ───────────────────────────────────────

/// Active chain at `query_jd`, generating only the periods on the path.
pub fn vimshottari_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
    max_level: u8,
) -> DashaSnapshot {
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let level0 = vimshottari_level0(birth_jd, moon_sidereal_lon);
    let mut periods = Vec::with_capacity(max_level as usize + 1);

    if let Some(idx) = find_active_period(&level0, query_jd) {
        let mut current = level0[idx];
        periods.push(current);
        for _ in 0..max_level {
            let children = vimshottari_children(&current, 0);
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
        system: DashaSystem::Vimshottari,
        query_jd,
        periods,
    }
}

// ── Nested view ──────────────────────────────────────────────────────

/// An antardasha inside a [`Mahadasha`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Antardasha {
    pub lord: Body,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// A mahadasha with its nine antardashas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mahadasha {
    pub lord: Body,
    pub start_jd: f64,
    pub end_jd: f64,
    pub antardashas: Vec<Antardasha>,
}

impl Mahadasha {
    pub fn duration_years(&self) -> f64 {
        (self.end_jd - self.start_jd) / DAYS_PER_YEAR
    }
}

/// Mahadashas of one cycle, each carrying its antardashas.
pub fn vimshottari_mahadashas(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<Mahadasha> {
    vimshottari_level0(birth_jd, moon_sidereal_lon)
        .iter()
        .filter_map(|md| {
            let DashaEntity::Graha(lord) = md.entity else {
                return None;
            };
            let antardashas = vimshottari_children(md, 0)
                .iter()
                .filter_map(|ad| match ad.entity {
                    DashaEntity::Graha(sub) => Some(Antardasha {
                        lord: sub,
                        start_jd: ad.start_jd,
                        end_jd: ad.end_jd,
                    }),
                    DashaEntity::Rashi(_) => None,
                })
                .collect();
            Some(Mahadasha {
                lord,
                start_jd: md.start_jd,
                end_jd: md.end_jd,
                antardashas,
            })
        })
        .collect()
}
