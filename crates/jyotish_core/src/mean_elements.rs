//! Built-in low-precision ephemeris.
//!
//! Accuracy is of the order of 0.01 deg for the Sun, 0.3 deg for the Moon
//! and a fraction of a degree for the planets: enough to place bodies in
//! signs and nakshatras for demos and tests, not for precise timing work.
//! A precise adapter plugs in through the same [`Ephemeris`] trait.
//!
//! Sources:
//! - Sun, Moon, mean node: Meeus, "Astronomical Algorithms" (2nd ed),
//!   chapters 25 and 47 (leading terms only).
//! - Planets: Standish, "Keplerian Elements for Approximate Positions of
//!   the Major Planets" (JPL), table 1, J2000 ecliptic.

use jyotish_time::{jd_to_centuries, local_sidereal_time_deg};

use crate::angle::normalize_deg;
use crate::ayanamsa::general_precession_longitude_deg;
use crate::body::Body;
use crate::ephemeris::{BodyState, CalcFlags, Ephemeris, check_jd};
use crate::error::EphemerisError;
use crate::houses::{HouseCusps, HouseSystem, ascendant_deg, mc_deg, mean_obliquity_deg};

/// First Julian Day served (1582-10-15 0h).
pub const MIN_JD: f64 = 2_299_160.5;
/// Last Julian Day served (2500-01-01 0h).
pub const MAX_JD: f64 = 2_634_166.5;

/// Half-width of the central difference used for speeds, in days.
const SPEED_STEP_DAYS: f64 = 0.05;

/// Keplerian elements at J2000 and their rates per Julian century.
#[derive(Debug, Clone, Copy)]
struct Elements {
    a: (f64, f64),
    e: (f64, f64),
    i: (f64, f64),
    l: (f64, f64),
    peri: (f64, f64),
    node: (f64, f64),
}

const MERCURY: Elements = Elements {
    a: (0.387_099_27, 0.000_000_37),
    e: (0.205_635_93, 0.000_019_06),
    i: (7.004_979_02, -0.005_947_49),
    l: (252.250_323_50, 149_472.674_111_75),
    peri: (77.457_796_28, 0.160_476_89),
    node: (48.330_765_93, -0.125_340_81),
};

const VENUS: Elements = Elements {
    a: (0.723_335_66, 0.000_003_90),
    e: (0.006_776_72, -0.000_041_07),
    i: (3.394_676_05, -0.000_788_90),
    l: (181.979_099_50, 58_517.815_387_29),
    peri: (131.602_467_18, 0.002_683_29),
    node: (76.679_842_55, -0.277_694_18),
};

const EARTH_MOON: Elements = Elements {
    a: (1.000_002_61, 0.000_005_62),
    e: (0.016_711_23, -0.000_043_92),
    i: (-0.000_015_31, -0.012_946_68),
    l: (100.464_571_66, 35_999.372_449_81),
    peri: (102.937_681_93, 0.323_273_64),
    node: (0.0, 0.0),
};

const MARS: Elements = Elements {
    a: (1.523_710_34, 0.000_018_47),
    e: (0.093_394_10, 0.000_078_82),
    i: (1.849_691_42, -0.008_131_31),
    l: (-4.553_432_05, 19_140.302_684_99),
    peri: (-23.943_629_59, 0.444_410_88),
    node: (49.559_538_91, -0.292_573_43),
};

const JUPITER: Elements = Elements {
    a: (5.202_887_00, -0.000_116_07),
    e: (0.048_386_24, -0.000_132_53),
    i: (1.304_396_95, -0.001_837_14),
    l: (34.396_440_51, 3_034.746_127_75),
    peri: (14.728_479_83, 0.212_526_68),
    node: (100.473_909_09, 0.204_691_06),
};

const SATURN: Elements = Elements {
    a: (9.536_675_94, -0.001_250_60),
    e: (0.053_861_79, -0.000_509_91),
    i: (2.485_991_87, 0.001_936_09),
    l: (49.954_244_23, 1_222.493_622_01),
    peri: (92.598_878_31, -0.418_972_16),
    node: (113.662_424_48, -0.288_677_94),
};

const URANUS: Elements = Elements {
    a: (19.189_164_64, -0.001_961_76),
    e: (0.047_257_44, -0.000_043_97),
    i: (0.772_637_83, -0.002_429_39),
    l: (313.238_104_51, 428.482_027_85),
    peri: (170.954_276_30, 0.408_052_81),
    node: (74.016_925_03, 0.042_405_89),
};

const NEPTUNE: Elements = Elements {
    a: (30.069_922_76, 0.000_262_91),
    e: (0.008_590_48, 0.000_051_05),
    i: (1.770_043_47, 0.000_353_72),
    l: (-55.120_029_69, 218.459_453_25),
    peri: (44.964_762_27, -0.322_414_64),
    node: (131.784_225_74, -0.005_086_64),
};

const PLUTO: Elements = Elements {
    a: (39.482_116_75, -0.000_315_96),
    e: (0.248_827_30, 0.000_051_70),
    i: (17.140_012_06, 0.000_048_18),
    l: (238.929_038_33, 145.207_805_15),
    peri: (224.068_916_29, -0.040_629_42),
    node: (110.303_936_84, -0.011_834_82),
};

impl Elements {
    /// Heliocentric J2000-ecliptic position in AU.
    fn heliocentric(&self, t: f64) -> [f64; 3] {
        let at = |(v0, rate): (f64, f64)| v0 + rate * t;
        let a = at(self.a);
        let e = at(self.e);
        let i = at(self.i).to_radians();
        let l = at(self.l);
        let peri = at(self.peri);
        let node = at(self.node);

        let omega = (peri - node).to_radians();
        let node = node.to_radians();
        let m = normalize_deg(l - peri).to_radians();
        let ecc_anomaly = solve_kepler(m, e);

        let xp = a * (ecc_anomaly.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

        let (so, co) = omega.sin_cos();
        let (sn, cn) = node.sin_cos();
        let (si, ci) = i.sin_cos();
        [
            (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
            (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
            (so * si) * xp + (co * si) * yp,
        ]
    }
}

/// Eccentric anomaly from mean anomaly (radians) by Newton iteration.
fn solve_kepler(m: f64, e: f64) -> f64 {
    let mut ea = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..30 {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ea
}

/// Apparent geocentric longitude of the Sun, mean equinox of date (Meeus 25).
fn sun_longitude_of_date(t: f64) -> f64 {
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1_934.136 * t).to_radians();
    normalize_deg(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}

/// Geocentric longitude of the Moon, mean equinox of date (Meeus 47, leading terms).
fn moon_longitude_of_date(t: f64) -> f64 {
    let lp = 218.316_447_7 + 481_267.881_234_21 * t;
    let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t).to_radians();

    let sum = 6.288_774 * mp.sin()
        + 1.274_027 * (2.0 * d - mp).sin()
        + 0.658_314 * (2.0 * d).sin()
        + 0.213_618 * (2.0 * mp).sin()
        - 0.185_116 * m.sin()
        - 0.114_332 * (2.0 * f).sin()
        + 0.058_793 * (2.0 * d - 2.0 * mp).sin()
        + 0.057_066 * (2.0 * d - m - mp).sin()
        + 0.053_322 * (2.0 * d + mp).sin()
        + 0.045_758 * (2.0 * d - m).sin()
        - 0.040_923 * (m - mp).sin()
        - 0.034_720 * d.sin()
        - 0.030_383 * (m + mp).sin();
    normalize_deg(lp + sum)
}

/// Mean ascending lunar node, mean equinox of date (Meeus 47.7).
fn mean_node_of_date(t: f64) -> f64 {
    normalize_deg(125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t * t)
}

/// Geocentric longitude of a planet, mean equinox of date.
fn planet_longitude_of_date(elements: &Elements, t: f64) -> f64 {
    let planet = elements.heliocentric(t);
    let earth = EARTH_MOON.heliocentric(t);
    let x = planet[0] - earth[0];
    let y = planet[1] - earth[1];
    // J2000 ecliptic -> ecliptic of date is, to this precision, a shift in longitude.
    normalize_deg(y.atan2(x).to_degrees() + general_precession_longitude_deg(t))
}

/// Tropical longitude of date for any body.
fn tropical_longitude(jd: f64, body: Body) -> f64 {
    let t = jd_to_centuries(jd);
    match body {
        Body::Sun => sun_longitude_of_date(t),
        Body::Moon => moon_longitude_of_date(t),
        Body::Rahu => mean_node_of_date(t),
        Body::Ketu => normalize_deg(mean_node_of_date(t) + 180.0),
        Body::Mercury => planet_longitude_of_date(&MERCURY, t),
        Body::Venus => planet_longitude_of_date(&VENUS, t),
        Body::Mars => planet_longitude_of_date(&MARS, t),
        Body::Jupiter => planet_longitude_of_date(&JUPITER, t),
        Body::Saturn => planet_longitude_of_date(&SATURN, t),
        Body::Uranus => planet_longitude_of_date(&URANUS, t),
        Body::Neptune => planet_longitude_of_date(&NEPTUNE, t),
        Body::Pluto => planet_longitude_of_date(&PLUTO, t),
    }
}

/// Approximate ephemeris from mean orbital elements and truncated series.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanElementsEphemeris;

impl MeanElementsEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn check_range(jd: f64) -> Result<(), EphemerisError> {
        check_jd(jd)?;
        if !(MIN_JD..=MAX_JD).contains(&jd) {
            return Err(EphemerisError::OutOfRange { jd });
        }
        Ok(())
    }
}

impl Ephemeris for MeanElementsEphemeris {
    fn calc(&self, jd: f64, body: Body, flags: CalcFlags) -> Result<BodyState, EphemerisError> {
        Self::check_range(jd)?;
        let longitude = normalize_deg(tropical_longitude(jd, body) - flags.offset_deg(jd));

        // Central difference; the ayanamsa rate (~50"/yr) is folded in.
        let before = tropical_longitude(jd - SPEED_STEP_DAYS, body)
            - flags.offset_deg(jd - SPEED_STEP_DAYS);
        let after =
            tropical_longitude(jd + SPEED_STEP_DAYS, body) - flags.offset_deg(jd + SPEED_STEP_DAYS);
        let mut delta = normalize_deg(after - before);
        if delta > 180.0 {
            delta -= 360.0;
        }
        let speed = delta / (2.0 * SPEED_STEP_DAYS);

        tracing::trace!(jd, %body, longitude, speed, "mean-elements calc");
        Ok(BodyState {
            longitude_deg: longitude,
            speed_deg_per_day: speed,
        })
    }

    fn houses(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
        flags: CalcFlags,
    ) -> Result<HouseCusps, EphemerisError> {
        Self::check_range(jd)?;
        if !(-90.0..=90.0).contains(&latitude_deg) || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(EphemerisError::InvalidQuery("observer coordinates out of range"));
        }
        // Ascendant is undefined where the ecliptic can coincide with the horizon.
        if latitude_deg.abs() >= 90.0 - mean_obliquity_deg(0.0) {
            return Err(EphemerisError::InvalidQuery(
                "ascendant undefined inside the polar circles",
            ));
        }
        let t = jd_to_centuries(jd);
        let eps = mean_obliquity_deg(t);
        let lst = local_sidereal_time_deg(jd, longitude_deg);
        let tropical = HouseCusps::from_angles(
            system,
            ascendant_deg(lst, latitude_deg, eps),
            mc_deg(lst, eps),
        );
        Ok(tropical.shifted(system, flags.offset_deg(jd)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::separation_deg;
    use crate::ayanamsa::Ayanamsa;

    const JD_2024: f64 = 2_460_311.0;

    fn tropical(jd: f64, body: Body) -> f64 {
        MeanElementsEphemeris
            .calc(jd, body, CalcFlags::tropical())
            .unwrap()
            .longitude_deg
    }

    #[test]
    fn kepler_circular_orbit_is_identity() {
        assert!((solve_kepler(1.234, 0.0) - 1.234).abs() < 1e-12);
    }

    #[test]
    fn sun_meeus_example_25a() {
        // 1992 Oct 13 0h TD: apparent longitude 199.90895 deg
        let lon = tropical(2_448_908.5, Body::Sun);
        assert!((lon - 199.909).abs() < 0.01, "sun = {lon}");
    }

    #[test]
    fn moon_meeus_example_47a() {
        // 1992 Apr 12 0h TD: longitude 133.16 deg
        let lon = tropical(2_448_724.5, Body::Moon);
        assert!(separation_deg(lon, 133.167) < 0.3, "moon = {lon}");
    }

    #[test]
    fn sun_near_capricorn_ingress_2024() {
        // Tropical Sun ~280.5 deg on 2024-01-01
        let lon = tropical(JD_2024, Body::Sun);
        assert!((lon - 280.5).abs() < 0.3, "sun = {lon}");
    }

    #[test]
    fn ketu_opposes_rahu() {
        let rahu = tropical(JD_2024, Body::Rahu);
        let ketu = tropical(JD_2024, Body::Ketu);
        assert!((separation_deg(rahu, ketu) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn nodes_move_backward() {
        let rahu = MeanElementsEphemeris
            .calc(JD_2024, Body::Rahu, CalcFlags::tropical())
            .unwrap();
        assert!(rahu.is_retrograde());
        assert!((rahu.speed_deg_per_day + 0.053).abs() < 0.002);
    }

    #[test]
    fn moon_speed_is_plausible() {
        let moon = MeanElementsEphemeris
            .calc(JD_2024, Body::Moon, CalcFlags::default())
            .unwrap();
        assert!((11.5..15.5).contains(&moon.speed_deg_per_day));
    }

    #[test]
    fn jupiter_in_taurus_early_2024() {
        // Tropical Jupiter ~35.5 deg (Taurus) at the start of 2024.
        let lon = tropical(JD_2024, Body::Jupiter);
        assert!(separation_deg(lon, 35.5) < 1.5, "jupiter = {lon}");
    }

    #[test]
    fn sidereal_subtracts_ayanamsa() {
        let flags = CalcFlags::sidereal(Ayanamsa::Lahiri);
        let sid = MeanElementsEphemeris.calc(JD_2024, Body::Sun, flags).unwrap();
        let expected = normalize_deg(tropical(JD_2024, Body::Sun) - Ayanamsa::Lahiri.value_at(JD_2024));
        assert!((sid.longitude_deg - expected).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_rejected() {
        let err = MeanElementsEphemeris
            .calc(1_000_000.0, Body::Sun, CalcFlags::default())
            .unwrap_err();
        assert_eq!(err, EphemerisError::OutOfRange { jd: 1_000_000.0 });
    }

    #[test]
    fn houses_reject_polar_latitudes() {
        let err = MeanElementsEphemeris
            .houses(JD_2024, 80.0, 0.0, HouseSystem::Equal, CalcFlags::default())
            .unwrap_err();
        assert!(matches!(err, EphemerisError::InvalidQuery(_)));
    }

    #[test]
    fn houses_are_sidereal_when_asked() {
        let trop = MeanElementsEphemeris
            .houses(JD_2024, 28.6, 77.2, HouseSystem::Equal, CalcFlags::tropical())
            .unwrap();
        let sid = MeanElementsEphemeris
            .houses(JD_2024, 28.6, 77.2, HouseSystem::Equal, CalcFlags::default())
            .unwrap();
        let shift = normalize_deg(trop.ascendant_deg - sid.ascendant_deg);
        assert!((shift - Ayanamsa::Lahiri.value_at(JD_2024)).abs() < 1e-9);
    }
}
