//! Dasha orchestration: bridges the ephemeris with the pure dasha engines.
//!
//! - `compute_vimshottari_dasha`: nested mahadasha / antardasha view
//! - `dasha_hierarchy_for_birth`: all levels 0..=N for any system
//! - `dasha_snapshot_at`: the active chain at one instant

use jyotish_core::{CalcFlags, Ephemeris, HouseSystem};
use jyotish_time::Moment;
use jyotish_vedic_base::dasha::{
    DashaBirthData, DashaHierarchy, DashaSnapshot, DashaSystem, MAX_DASHA_LEVEL, Mahadasha,
    RashiDashaInputs, dasha_hierarchy, dasha_snapshot, vimshottari_mahadashas,
};

use crate::chart::compute_chart;
use crate::error::SearchError;
use crate::panchang::moon_sidereal_longitude;

/// Everything the dasha engines need from a birth moment.
///
/// Rashi systems read graha signs and the lagna from a whole-sign chart.
pub fn dasha_birth_data<E: Ephemeris + ?Sized>(
    eph: &E,
    birth: &Moment,
    flags: CalcFlags,
) -> Result<DashaBirthData, SearchError> {
    let chart = compute_chart(eph, birth, HouseSystem::WholeSign, flags)?;
    let rashi_inputs = RashiDashaInputs::from_chart(&chart)?;
    Ok(DashaBirthData {
        birth_jd: chart.jd,
        moon_sidereal_lon: rashi_inputs.graha_sidereal_lons[1],
        rashi_inputs,
    })
}

/// Vimshottari mahadashas with their antardashas, from the birth Moon.
pub fn compute_vimshottari_dasha<E: Ephemeris + ?Sized>(
    eph: &E,
    birth: &Moment,
    flags: CalcFlags,
) -> Result<Vec<Mahadasha>, SearchError> {
    let birth_jd = birth.julian_day()?;
    let moon = moon_sidereal_longitude(eph, birth, flags)?;
    tracing::debug!(birth_jd, moon, "vimshottari from birth moon");
    Ok(vimshottari_mahadashas(birth_jd, moon))
}

fn check_level(max_level: u8) -> Result<(), SearchError> {
    if max_level > MAX_DASHA_LEVEL {
        return Err(SearchError::input(
            "max_level",
            format!("{max_level} exceeds {MAX_DASHA_LEVEL}"),
        ));
    }
    Ok(())
}

/// Full hierarchy for `system`, levels 0 through `max_level`.
pub fn dasha_hierarchy_for_birth<E: Ephemeris + ?Sized>(
    eph: &E,
    birth: &Moment,
    system: DashaSystem,
    max_level: u8,
    flags: CalcFlags,
) -> Result<DashaHierarchy, SearchError> {
    check_level(max_level)?;
    let data = dasha_birth_data(eph, birth, flags)?;
    Ok(dasha_hierarchy(system, &data, max_level)?)
}

/// Active periods at `query_jd`, outermost first.
pub fn dasha_snapshot_at<E: Ephemeris + ?Sized>(
    eph: &E,
    birth: &Moment,
    system: DashaSystem,
    query_jd: f64,
    max_level: u8,
    flags: CalcFlags,
) -> Result<DashaSnapshot, SearchError> {
    check_level(max_level)?;
    if !query_jd.is_finite() {
        return Err(SearchError::input("query_jd", "must be finite"));
    }
    let data = dasha_birth_data(eph, birth, flags)?;
    Ok(dasha_snapshot(system, &data, query_jd, max_level))
}
