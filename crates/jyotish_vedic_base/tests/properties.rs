//! Property tests for the universally quantified invariants.

use jyotish_core::{Body, BodyState, HouseCusps, HouseSystem};
use jyotish_vedic_base::dasha::{DAYS_PER_YEAR, vimshottari_level0};
use jyotish_vedic_base::{
    Chart, analyze_aspects, divisional_chart, nakshatra_from_longitude, normalize_360, sign_number,
    tithi_from_longitudes, vimshottari_mahadashas, yoga_from_longitudes,
};
use proptest::prelude::*;

fn chart_from(lons: &[f64], asc: f64) -> Chart {
    let cusps = HouseCusps::from_angles(HouseSystem::Equal, asc, asc + 270.0);
    Chart::new(
        2_460_000.5,
        Body::GRAHAS.iter().zip(lons).map(|(b, lon)| {
            (
                *b,
                BodyState {
                    longitude_deg: *lon,
                    speed_deg_per_day: 1.0,
                },
            )
        }),
        &cusps,
        HouseSystem::Equal,
    )
}

proptest! {
    #[test]
    fn normalize_is_in_range(x in -1.0e7f64..1.0e7) {
        let n = normalize_360(x);
        prop_assert!((0.0..360.0).contains(&n));
    }

    #[test]
    fn sign_in_range_and_periodic(lon in -720.0f64..720.0, k in -5i32..5) {
        let s = sign_number(lon);
        prop_assert!((1..=12).contains(&s));
        // Keep away from sign edges where the shifted value can round across.
        let frac = normalize_360(lon) % 30.0;
        prop_assume!(frac > 1e-6 && frac < 30.0 - 1e-6);
        prop_assert_eq!(s, sign_number(lon + 360.0 * k as f64));
    }

    #[test]
    fn panchang_indices_in_range(sun in 0.0f64..360.0, moon in 0.0f64..360.0) {
        let t = tithi_from_longitudes(moon, sun);
        prop_assert!((1..=30).contains(&t.number));
        prop_assert_eq!(t.paksha.is_waxing(), t.number <= 15);
        let n = nakshatra_from_longitude(moon);
        prop_assert!((1..=27).contains(&n.number));
        prop_assert!((1..=4).contains(&n.pada));
        let y = yoga_from_longitudes(sun, moon);
        prop_assert!((1..=27).contains(&y.number));
    }

    #[test]
    fn vimshottari_cycle_is_120_years(moon in 0.0f64..360.0) {
        let level0 = vimshottari_level0(2_451_545.0, moon);
        let span = level0.last().map(|p| p.end_jd).unwrap_or(0.0) - level0[0].start_jd;
        prop_assert!((span / DAYS_PER_YEAR - 120.0).abs() < 1e-6);
    }

    #[test]
    fn antardashas_sum_to_mahadasha(moon in 0.0f64..360.0) {
        for md in vimshottari_mahadashas(2_451_545.0, moon) {
            let sum: f64 = md.antardashas.iter().map(|a| a.end_jd - a.start_jd).sum();
            prop_assert!(((sum - (md.end_jd - md.start_jd)) / DAYS_PER_YEAR).abs() < 1e-6);
        }
    }

    #[test]
    fn varga_d1_is_identity(lons in prop::collection::vec(0.0f64..360.0, 9), asc in 0.0f64..360.0) {
        let chart = chart_from(&lons, asc);
        prop_assert_eq!(divisional_chart(&chart, 1), Ok(chart));
    }

    #[test]
    fn aspects_are_symmetric(
        a in prop::collection::vec(0.0f64..360.0, 9),
        b in prop::collection::vec(0.0f64..360.0, 9),
        orb in 1.0f64..10.0,
    ) {
        let ca = chart_from(&a, 0.0);
        let cb = chart_from(&b, 0.0);
        let ab = analyze_aspects(&ca, &cb, orb).expect("ab");
        let ba = analyze_aspects(&cb, &ca, orb).expect("ba");
        let mut left: Vec<_> = ab.aspects.iter().map(|x| (x.body_a, x.body_b, x.kind)).collect();
        let mut right: Vec<_> = ba.aspects.iter().map(|x| (x.body_b, x.body_a, x.kind)).collect();
        left.sort();
        right.sort();
        prop_assert_eq!(left, right);
    }
}
