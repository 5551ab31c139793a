//! Active-period lookup.

use super::types::{DashaHierarchy, DashaPeriod, DashaSnapshot};

/// Index of the period containing `jd` in a contiguous, sorted slice.
///
/// Periods are half-open `[start, end)`. Returns `None` before the first
/// start or at/after the last end.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods.get(idx).filter(|p| p.contains(jd)).map(|_| idx)
}

/// Extract the active chain from an already materialized hierarchy.
pub fn snapshot_from_hierarchy(hierarchy: &DashaHierarchy, query_jd: f64) -> DashaSnapshot {
    let mut periods: Vec<(usize, DashaPeriod)> = Vec::with_capacity(hierarchy.levels.len());
    for level in &hierarchy.levels {
        let candidates = match periods.last() {
            // Children of one parent are contiguous, so narrow the search to them.
            Some(&(parent_idx, _)) => {
                let lo = level.partition_point(|p: &DashaPeriod| (p.parent_idx as usize) < parent_idx);
                let hi = level.partition_point(|p: &DashaPeriod| (p.parent_idx as usize) <= parent_idx);
                (lo, &level[lo..hi])
            }
            None => (0, &level[..]),
        };
        match find_active_period(candidates.1, query_jd) {
            Some(i) => {
                let idx = candidates.0 + i;
                periods.push((idx, level[idx]));
            }
            None => break,
        }
    }
    DashaSnapshot {
        system: hierarchy.system,
        query_jd,
        periods: periods.into_iter().map(|(_, p)| p).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::{DashaEntity, DashaLevel};

    fn run(bounds: &[f64]) -> Vec<DashaPeriod> {
        bounds
            .windows(2)
            .enumerate()
            .map(|(i, w)| DashaPeriod {
                entity: DashaEntity::Rashi(i as u8),
                start_jd: w[0],
                end_jd: w[1],
                level: DashaLevel::Mahadasha,
                order: i as u16 + 1,
                parent_idx: 0,
            })
            .collect()
    }

    #[test]
    fn finds_containing_period() {
        let periods = run(&[0.0, 10.0, 25.0, 30.0]);
        assert_eq!(find_active_period(&periods, 0.0), Some(0));
        assert_eq!(find_active_period(&periods, 10.0), Some(1));
        assert_eq!(find_active_period(&periods, 29.9), Some(2));
    }

    #[test]
    fn outside_range_is_none() {
        let periods = run(&[0.0, 10.0, 25.0]);
        assert_eq!(find_active_period(&periods, -1.0), None);
        assert_eq!(find_active_period(&periods, 25.0), None);
        assert_eq!(find_active_period(&[], 5.0), None);
    }
}
