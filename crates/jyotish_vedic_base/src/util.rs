//! Shared utility functions for vedic calculations.

pub use jyotish_core::angle::{arc_forward, normalize_deg as normalize_360, separation_deg};

/// Index of the equal arc of width `span` that contains `lon`, capped at `count - 1`.
///
/// The cap absorbs floating-point edges where `lon / span` rounds up to `count`.
pub(crate) fn segment_index(lon: f64, span: f64, count: u8) -> u8 {
    let idx = (normalize_360(lon) / span).floor();
    if idx < 0.0 { 0 } else { (idx as u8).min(count - 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn segment_index_caps_at_last() {
        assert_eq!(segment_index(359.999_999_999_999_9, 30.0, 12), 11);
        assert_eq!(segment_index(0.0, 30.0, 12), 0);
        assert_eq!(segment_index(-0.5, 30.0, 12), 11);
    }
}
