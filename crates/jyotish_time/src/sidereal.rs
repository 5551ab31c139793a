//! Mean sidereal time, used to place the ascendant.
//!
//! Meeus, "Astronomical Algorithms" (2nd ed), eq. 12.4. Input is a UT
//! Julian Day; the UT1-UTC difference is below the precision this engine
//! needs and is ignored.

use crate::julian::{J2000_JD, jd_to_centuries};

/// Greenwich Mean Sidereal Time in degrees, `[0, 360)`.
///
/// `GMST = 280.46061837 + 360.98564736629 (JD - 2451545) + 0.000387933 T^2 - T^3 / 38710000`
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let gmst = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    gmst.rem_euclid(360.0)
}

/// Local Mean Sidereal Time in degrees for an east-positive longitude.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd_ut) + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987 April 10, 0h UT -> 13h10m46.3668s = 197.693195 deg
        let g = gmst_deg(2_446_895.5);
        assert!((g - 197.693_195).abs() < 1e-4, "GMST = {g}");
    }

    #[test]
    fn gmst_in_range() {
        for jd in [2_451_545.0, 2_460_311.25, 2_299_160.5, 2_488_069.5] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "GMST out of range: {g}");
        }
    }

    #[test]
    fn lst_adds_east_longitude() {
        let jd = 2_460_311.0;
        let lst = local_sidereal_time_deg(jd, 90.0);
        let expected = (gmst_deg(jd) + 90.0).rem_euclid(360.0);
        assert!((lst - expected).abs() < 1e-12);
    }
}
