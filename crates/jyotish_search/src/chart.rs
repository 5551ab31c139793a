//! Chart assembly: binds the ephemeris adapter to the pure chart model.

use std::collections::BTreeMap;

use jyotish_core::{Body, CalcFlags, Ephemeris, HouseSystem};
use jyotish_time::{GeoLocation, Moment};
use jyotish_vedic_base::{Chart, VedicError, divisional_charts};

use crate::error::SearchError;

/// Sidereal longitudes of the nine grahas at `jd`, in [`Body::GRAHAS`] order.
pub fn graha_sidereal_longitudes<E: Ephemeris + ?Sized>(
    eph: &E,
    jd: f64,
    flags: CalcFlags,
) -> Result<[f64; 9], SearchError> {
    let mut lons = [0.0; 9];
    for (slot, body) in lons.iter_mut().zip(Body::GRAHAS) {
        *slot = eph.calc(jd, body, flags)?.longitude_deg;
    }
    Ok(lons)
}

/// Chart of `bodies` at a Julian Day (UT) for an observer.
pub fn chart_at_jd<E: Ephemeris + ?Sized>(
    eph: &E,
    jd: f64,
    location: &GeoLocation,
    bodies: &[Body],
    system: HouseSystem,
    flags: CalcFlags,
) -> Result<Chart, SearchError> {
    let states = bodies
        .iter()
        .map(|&body| eph.calc(jd, body, flags).map(|state| (body, state)))
        .collect::<Result<Vec<_>, _>>()?;
    let houses = eph.houses(
        jd,
        location.latitude_deg,
        location.longitude_deg,
        system,
        flags,
    )?;
    tracing::debug!(jd, bodies = bodies.len(), %system, "chart computed");
    Ok(Chart::new(jd, states, &houses, system))
}

/// Chart of the nine grahas at a moment.
pub fn compute_chart<E: Ephemeris + ?Sized>(
    eph: &E,
    moment: &Moment,
    system: HouseSystem,
    flags: CalcFlags,
) -> Result<Chart, SearchError> {
    compute_chart_with_bodies(eph, moment, &Body::GRAHAS, system, flags)
}

/// Chart of an explicit body set at a moment.
pub fn compute_chart_with_bodies<E: Ephemeris + ?Sized>(
    eph: &E,
    moment: &Moment,
    bodies: &[Body],
    system: HouseSystem,
    flags: CalcFlags,
) -> Result<Chart, SearchError> {
    if bodies.is_empty() {
        return Err(SearchError::input("bodies", "at least one body is required"));
    }
    let jd = moment.julian_day()?;
    chart_at_jd(eph, jd, moment.location(), bodies, system, flags)
}

/// Divisional charts for each requested factor.
///
/// An unsupported factor fails only its own entry.
pub fn compute_varga(chart: &Chart, divisions: &[u16]) -> BTreeMap<u16, Result<Chart, VedicError>> {
    let out = divisional_charts(chart, divisions);
    let failed = out.values().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, requested = divisions.len(), "some divisional charts failed");
    }
    out
}
