//! Integration tests for chart, panchang and dasha orchestration.
//!
//! Uses an in-test ephemeris with fixed longitudes, so results are exact.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use jyotish_core::{
    Body, BodyState, CalcFlags, Ephemeris, EphemerisError, FixedUtcOffset, Geocoder, HouseCusps,
    HouseSystem, LookupError,
};
use jyotish_search::{
    SearchError, analyze_aspects, compute_chart, compute_varga, compute_vimshottari_dasha,
    dasha_hierarchy_for_birth, dasha_snapshot_at, moment_for_place, panchang_for_moment,
};
use jyotish_time::{CivilDateTime, GeoLocation, Moment};
use jyotish_vedic_base::dasha::{DAYS_PER_YEAR, DashaSystem};
use jyotish_vedic_base::{Element, VedicError};

const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

struct FixedEphemeris {
    lons: Vec<(Body, f64)>,
    ascendant_deg: f64,
}

impl FixedEphemeris {
    fn new(lons: &[(Body, f64)], ascendant_deg: f64) -> Self {
        Self {
            lons: lons.to_vec(),
            ascendant_deg,
        }
    }
}

impl Ephemeris for FixedEphemeris {
    fn calc(&self, _jd: f64, body: Body, _flags: CalcFlags) -> Result<BodyState, EphemerisError> {
        self.lons
            .iter()
            .find(|(b, _)| *b == body)
            .map(|&(_, lon)| BodyState {
                longitude_deg: lon,
                speed_deg_per_day: 1.0,
            })
            .ok_or(EphemerisError::NotAvailable { body })
    }

    fn houses(
        &self,
        _jd: f64,
        _latitude_deg: f64,
        _longitude_deg: f64,
        system: HouseSystem,
        _flags: CalcFlags,
    ) -> Result<HouseCusps, EphemerisError> {
        Ok(HouseCusps::from_angles(
            system,
            self.ascendant_deg,
            self.ascendant_deg + 270.0,
        ))
    }
}

fn grahas(moon: f64) -> Vec<(Body, f64)> {
    vec![
        (Body::Sun, 280.1),
        (Body::Moon, moon),
        (Body::Mars, 15.0),
        (Body::Mercury, 265.0),
        (Body::Jupiter, 25.4),
        (Body::Venus, 230.0),
        (Body::Saturn, 310.0),
        (Body::Rahu, 100.0),
        (Body::Ketu, 280.0),
    ]
}

fn birth() -> Moment {
    Moment::new(
        CivilDateTime::new(1990, 5, 17, 6, 30, 0.0).unwrap(),
        GeoLocation::new(28.6139, 77.2090).unwrap(),
        5.5,
    )
    .unwrap()
}

fn flags() -> CalcFlags {
    CalcFlags::default()
}

#[test]
fn chart_places_grahas_in_whole_sign_houses() {
    let eph = FixedEphemeris::new(&grahas(77.7), 200.0);
    let chart = compute_chart(&eph, &birth(), HouseSystem::WholeSign, flags()).unwrap();
    assert_eq!(chart.positions.len(), 9);
    assert_eq!(chart.ascendant_sign(), 7);
    let sun = chart.position(Body::Sun).unwrap();
    assert_eq!(sun.sign, 10);
    assert_eq!(sun.house, 4);
    assert_relative_eq!(chart.jd, birth().julian_day().unwrap());
}

#[test]
fn chart_fails_when_a_body_is_missing() {
    let mut lons = grahas(77.7);
    lons.retain(|(b, _)| *b != Body::Rahu);
    let eph = FixedEphemeris::new(&lons, 200.0);
    let err = compute_chart(&eph, &birth(), HouseSystem::WholeSign, flags()).unwrap_err();
    assert_eq!(
        err,
        SearchError::ComputationFailed {
            cause: EphemerisError::NotAvailable { body: Body::Rahu }
        }
    );
}

#[test]
fn varga_failures_are_per_division() {
    let eph = FixedEphemeris::new(&grahas(77.7), 200.0);
    let chart = compute_chart(&eph, &birth(), HouseSystem::WholeSign, flags()).unwrap();
    let out = compute_varga(&chart, &[1, 9, 5]);
    assert_eq!(out[&1], Ok(chart.clone()));
    assert!(out[&9].is_ok());
    assert_eq!(out[&5], Err(VedicError::UnsupportedDivision(5)));
}

#[test]
fn panchang_from_fixed_longitudes() {
    let mut lons = grahas(130.0);
    lons[0] = (Body::Sun, 10.0);
    let eph = FixedEphemeris::new(&lons, 200.0);
    let p = panchang_for_moment(&eph, &birth(), flags()).unwrap();
    assert_eq!(p.tithi.available().unwrap().number, 11);
    assert!(p.is_complete());
    // 1990-05-17 was a Thursday.
    assert_eq!(p.vaar_lord, Body::Jupiter);
}

#[test]
fn panchang_marks_missing_moon_unavailable() {
    let lons: Vec<_> = grahas(130.0).into_iter().filter(|(b, _)| *b != Body::Moon).collect();
    let eph = FixedEphemeris::new(&lons, 200.0);
    let p = panchang_for_moment(&eph, &birth(), flags()).unwrap();
    assert!(matches!(p.nakshatra, Element::Unavailable { .. }));
    assert!(matches!(p.tithi, Element::Unavailable { .. }));
    assert_eq!(p.vaar_lord, Body::Jupiter);
}

#[test]
fn vimshottari_from_birth_moon() {
    // Chitra (Mars) with 0.4 of the mansion elapsed.
    let moon = 13.4 * NAKSHATRA_SPAN;
    let eph = FixedEphemeris::new(&grahas(moon), 200.0);
    let mds = compute_vimshottari_dasha(&eph, &birth(), flags()).unwrap();
    assert_eq!(mds[0].lord, Body::Mars);
    assert_relative_eq!(mds[0].duration_years(), 4.2, epsilon = 1e-9);
    let total: f64 = mds.iter().map(|m| m.end_jd - m.start_jd).sum();
    assert_relative_eq!(total / DAYS_PER_YEAR, 120.0, epsilon = 1e-6);
}

#[test]
fn rashi_dasha_hierarchy_and_snapshot_agree() {
    let eph = FixedEphemeris::new(&grahas(77.7), 200.0);
    let b = birth();
    let birth_jd = b.julian_day().unwrap();
    for system in [DashaSystem::Vimshottari, DashaSystem::Chara, DashaSystem::Sthira] {
        let h = dasha_hierarchy_for_birth(&eph, &b, system, 1, flags()).unwrap();
        assert_eq!(h.levels.len(), 2);
        assert_relative_eq!(h.levels[0][0].start_jd, birth_jd);

        let q = birth_jd + 20.0 * DAYS_PER_YEAR;
        let snap = dasha_snapshot_at(&eph, &b, system, q, 1, flags()).unwrap();
        assert_eq!(snap.periods.len(), 2);
        assert!(snap.periods.iter().all(|p| p.contains(q)));
        let top = h.levels[0].iter().find(|p| p.contains(q)).unwrap();
        assert_eq!(top.entity, snap.periods[0].entity);
    }
}

#[test]
fn dasha_level_is_checked_before_work() {
    let eph = FixedEphemeris::new(&[], 0.0);
    let err = dasha_hierarchy_for_birth(&eph, &birth(), DashaSystem::Chara, 9, flags()).unwrap_err();
    assert!(matches!(err, SearchError::Input { field: "max_level", .. }));
}

#[test]
fn aspects_between_computed_charts() {
    let a = FixedEphemeris::new(&grahas(77.7), 200.0);
    let mut other = grahas(77.7);
    other[0] = (Body::Sun, 100.1);
    let b = FixedEphemeris::new(&other, 10.0);
    let ca = compute_chart(&a, &birth(), HouseSystem::WholeSign, flags()).unwrap();
    let cb = compute_chart(&b, &birth(), HouseSystem::WholeSign, flags()).unwrap();
    let analysis = analyze_aspects(&ca, &cb, 8.0).unwrap();
    // Sun 280.1 opposes Sun 100.1 exactly.
    assert!(analysis.aspects.iter().any(|x| {
        x.body_a == Body::Sun && x.body_b == Body::Sun && x.strength > 99.0
    }));
    assert_eq!(analysis.dimension_scores.len(), 5);
}

struct OneCity;

impl Geocoder for OneCity {
    fn geocode(&self, place_name: &str) -> Result<GeoLocation, LookupError> {
        if place_name.eq_ignore_ascii_case("delhi") {
            Ok(GeoLocation::new(28.6139, 77.2090).unwrap())
        } else {
            Err(LookupError::NotFound(place_name.to_string()))
        }
    }
}

#[test]
fn moment_for_known_place() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let m = moment_for_place(&OneCity, &FixedUtcOffset(5.5), "Delhi", date, 17.5).unwrap();
    assert_eq!(m.utc_offset_hours(), 5.5);
    // 17:30 IST is 12:00 UT.
    assert_relative_eq!(m.julian_day().unwrap(), 2_460_311.0, epsilon = 1e-9);
}

#[test]
fn moment_for_unknown_place() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let err = moment_for_place(&OneCity, &FixedUtcOffset(5.5), "Atlantis", date, 12.0).unwrap_err();
    assert!(matches!(err, SearchError::Lookup(LookupError::NotFound(_))));
    let err = moment_for_place(&OneCity, &FixedUtcOffset(5.5), "  ", date, 12.0).unwrap_err();
    assert!(matches!(err, SearchError::Input { field: "place", .. }));
}
