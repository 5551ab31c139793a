//! Panchang at a moment.

use jyotish_core::{Body, CalcFlags, Ephemeris};
use jyotish_time::Moment;
use jyotish_vedic_base::{Panchang, derive_panchang};

use crate::error::SearchError;

/// Panchang for the local civil date and time of `moment`.
///
/// Only a malformed moment is an error. A failed Sun or Moon lookup leaves
/// the affected limbs [`Element::Unavailable`](jyotish_vedic_base::Element).
pub fn panchang_for_moment<E: Ephemeris + ?Sized>(
    eph: &E,
    moment: &Moment,
    flags: CalcFlags,
) -> Result<Panchang, SearchError> {
    let jd = moment.julian_day()?;
    Ok(panchang_at_jd(eph, jd, moment.weekday(), flags))
}

/// Panchang at a Julian Day (UT) with the local weekday already known.
pub fn panchang_at_jd<E: Ephemeris + ?Sized>(
    eph: &E,
    jd: f64,
    weekday: u8,
    flags: CalcFlags,
) -> Panchang {
    let sun = eph.calc(jd, Body::Sun, flags).map(|s| s.longitude_deg);
    let moon = eph.calc(jd, Body::Moon, flags).map(|s| s.longitude_deg);
    tracing::debug!(jd, weekday, "deriving panchang");
    derive_panchang(sun, moon, weekday)
}

/// Moon's sidereal longitude at a moment.
pub fn moon_sidereal_longitude<E: Ephemeris + ?Sized>(
    eph: &E,
    moment: &Moment,
    flags: CalcFlags,
) -> Result<f64, SearchError> {
    let jd = moment.julian_day()?;
    Ok(eph.calc(jd, Body::Moon, flags)?.longitude_deg)
}
