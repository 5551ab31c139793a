//! Splitting one dasha period into its sub-periods.
//!
//! Graha systems weight each sub-lord by its full-cycle years: a parent of
//! `Y` years gives a sub-lord of `L` years a span of `Y * L / cycle_years`
//! (Vimshottari: `Y * L / 120`). Rashi systems give every sign an equal
//! share.

use super::types::{DashaEntity, DashaLevel, DashaPeriod};

/// Lay sub-periods end to end across `parent`.
///
/// `shares` are fractions of the parent that sum to 1. Each boundary is
/// placed from the running share rather than by chaining durations, and the
/// final boundary is the parent's own end, so the children tile the parent
/// exactly.
fn tile(
    parent: &DashaPeriod,
    shares: impl ExactSizeIterator<Item = (DashaEntity, f64)>,
    child_level: DashaLevel,
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    let count = shares.len();
    let span = parent.duration_days();
    let mut children = Vec::with_capacity(count);
    let mut elapsed = 0.0;
    let mut start_jd = parent.start_jd;

    for (i, (entity, share)) in shares.enumerate() {
        elapsed += share;
        let end_jd = if i + 1 == count {
            parent.end_jd
        } else {
            parent.start_jd + elapsed * span
        };
        children.push(DashaPeriod {
            entity,
            start_jd,
            end_jd,
            level: child_level,
            order: (i + 1) as u16,
            parent_idx,
        });
        start_jd = end_jd;
    }
    children
}

/// Sub-periods weighted by each lord's full-cycle years.
///
/// `lords` lists the sub-lords in running order with their full years;
/// `cycle_years` is the length of the whole cycle.
pub fn proportional_children(
    parent: &DashaPeriod,
    lords: &[(DashaEntity, f64)],
    cycle_years: f64,
    child_level: DashaLevel,
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    if lords.is_empty() || !cycle_years.is_finite() || cycle_years <= 0.0 {
        return Vec::new();
    }
    let shares = lords.iter().map(|&(entity, years)| (entity, years / cycle_years));
    tile(parent, shares, child_level, parent_idx)
}

/// Sub-periods of equal length, one per entity.
pub fn equal_children(
    parent: &DashaPeriod,
    entities: &[DashaEntity],
    child_level: DashaLevel,
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    if entities.is_empty() {
        return Vec::new();
    }
    let share = 1.0 / entities.len() as f64;
    tile(
        parent,
        entities.iter().map(|&entity| (entity, share)),
        child_level,
        parent_idx,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::DAYS_PER_YEAR;
    use jyotish_core::Body;

    /// A 20-year Venus mahadasha.
    fn venus_20y() -> DashaPeriod {
        DashaPeriod {
            entity: DashaEntity::Graha(Body::Venus),
            start_jd: 2_451_545.0,
            end_jd: 2_451_545.0 + 20.0 * DAYS_PER_YEAR,
            level: DashaLevel::Mahadasha,
            order: 1,
            parent_idx: 0,
        }
    }

    #[test]
    fn sub_lord_gets_parent_years_times_its_years_over_cycle() {
        let lords = [
            (DashaEntity::Graha(Body::Venus), 20.0),
            (DashaEntity::Graha(Body::Sun), 6.0),
            (DashaEntity::Graha(Body::Moon), 10.0),
        ];
        let p = venus_20y();
        let kids = proportional_children(&p, &lords, 36.0, DashaLevel::Antardasha, 4);
        assert_eq!(kids.len(), 3);
        // Sun: 20 * 6 / 36 years.
        assert!((kids[1].duration_years() - 20.0 * 6.0 / 36.0).abs() < 1e-9);
        assert_eq!(kids[0].start_jd, p.start_jd);
        assert_eq!(kids[2].end_jd, p.end_jd);
        assert!(kids.iter().all(|k| k.parent_idx == 4 && k.level == DashaLevel::Antardasha));
        for pair in kids.windows(2) {
            assert_eq!(pair[0].end_jd, pair[1].start_jd);
        }
    }

    #[test]
    fn equal_children_split_evenly() {
        let signs: Vec<DashaEntity> = (0..12).map(DashaEntity::Rashi).collect();
        let p = venus_20y();
        let kids = equal_children(&p, &signs, DashaLevel::Antardasha, 0);
        assert_eq!(kids.len(), 12);
        assert!((kids[5].duration_years() - 20.0 / 12.0).abs() < 1e-9);
        assert_eq!(kids[11].end_jd, p.end_jd);
        assert_eq!(kids[11].order, 12);
    }

    #[test]
    fn empty_inputs_give_no_children() {
        let p = venus_20y();
        assert!(equal_children(&p, &[], DashaLevel::Antardasha, 0).is_empty());
        assert!(proportional_children(&p, &[], 120.0, DashaLevel::Antardasha, 0).is_empty());
        let lords = [(DashaEntity::Graha(Body::Sun), 6.0)];
        assert!(proportional_children(&p, &lords, 0.0, DashaLevel::Antardasha, 0).is_empty());
    }
}
