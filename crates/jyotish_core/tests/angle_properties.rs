//! Properties of the shared degree arithmetic.

use jyotish_core::{arc_forward, normalize_deg, separation_deg};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_lands_in_half_open_circle(x in -1.0e6f64..1.0e6) {
        let r = normalize_deg(x);
        prop_assert!((0.0..360.0).contains(&r), "{x} -> {r}");
    }

    #[test]
    fn normalize_ignores_whole_turns(x in -720.0f64..720.0, k in -50i32..50) {
        let a = normalize_deg(x);
        let b = normalize_deg(x + 360.0 * f64::from(k));
        prop_assert!(separation_deg(a, b) < 1e-9, "{a} vs {b}");
    }

    #[test]
    fn separation_is_symmetric_and_bounded(a in -1.0e4f64..1.0e4, b in -1.0e4f64..1.0e4) {
        let ab = separation_deg(a, b);
        let ba = separation_deg(b, a);
        prop_assert!((0.0..=180.0).contains(&ab));
        prop_assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn forward_arcs_close_the_circle(a in 0.0f64..360.0, b in 0.0f64..360.0) {
        let sum = arc_forward(a, b) + arc_forward(b, a);
        prop_assert!(sum < 1e-9 || (sum - 360.0).abs() < 1e-9, "{a}, {b}: {sum}");
    }
}
