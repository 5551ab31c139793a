//! Degree arithmetic shared by every layer.

/// Normalize an angle to `[0, 360)` degrees.
///
/// `rem_euclid` alone can return exactly `360.0` for tiny negative inputs,
/// so that case is folded back to zero.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Forward arc from `a` to `b` in degrees, in `[0, 360)`.
pub fn arc_forward(a: f64, b: f64) -> f64 {
    normalize_deg(b - a)
}

/// Shortest angular separation between two longitudes, in `[0, 180]`.
pub fn separation_deg(a: f64, b: f64) -> f64 {
    let d = normalize_deg(a - b);
    d.min(360.0 - d)
}
