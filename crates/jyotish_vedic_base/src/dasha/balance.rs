//! Birth balance calculation for dasha systems.
//!
//! - Nakshatra-based: computed from Moon's position within its nakshatra.
//! - Rashi-based: computed from lagna's position within its rashi.

use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::{normalize_360, segment_index};

/// Compute nakshatra birth balance.
///
/// Returns `(nakshatra_index, balance_days, elapsed_fraction)`:
/// - `nakshatra_index`: 0-based index (0=Ashwini..26=Revati) of the Moon's nakshatra
/// - `balance_days`: remaining days in the starting graha's period
/// - `elapsed_fraction`: fraction of nakshatra already traversed [0, 1)
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, entry_period_days: f64) -> (u8, f64, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = segment_index(lon, NAKSHATRA_SPAN, 27);
    let position_in_nak = (lon - nak_idx as f64 * NAKSHATRA_SPAN).max(0.0);
    let elapsed_fraction = (position_in_nak / NAKSHATRA_SPAN).min(1.0);
    let balance_days = entry_period_days * (1.0 - elapsed_fraction);
    (nak_idx, balance_days, elapsed_fraction)
}

/// Compute rashi birth balance.
///
/// Returns `(balance_days, elapsed_fraction)`. The lagna's position within
/// its rashi determines how much of the first period has elapsed.
pub fn rashi_birth_balance(lagna_sidereal_lon: f64, entry_period_days: f64) -> (f64, f64) {
    let lon = normalize_360(lagna_sidereal_lon);
    let rashi_idx = segment_index(lon, 30.0, 12);
    let position_in_rashi = lon - rashi_idx as f64 * 30.0;
    let elapsed_fraction = (position_in_rashi / 30.0).min(1.0);
    let balance_days = entry_period_days * (1.0 - elapsed_fraction);
    (balance_days, elapsed_fraction)
}
