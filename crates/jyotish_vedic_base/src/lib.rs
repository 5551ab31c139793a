//! Vedic derived calculations over sidereal longitudes.
//!
//! This crate provides:
//! - Rashi, nakshatra, tithi, yoga, karana and vaar lookups and the
//!   aggregate panchang
//! - Graha dignity and a deterministic dignity strength
//! - Charts, houses and varga (divisional) charts
//! - Vimshottari, Chara and Sthira dasha hierarchies
//! - Muhurta scoring rules and inter-chart aspects
//!
//! Everything here is pure math: longitudes come in, values come out. The
//! ephemeris is queried by the orchestration layer.

pub mod aspect;
pub mod chart;
pub mod dasha;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod karana;
pub mod muhurta;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod varga;
pub mod yoga;

pub use aspect::{
    ALL_ASPECT_KINDS, ALL_DIMENSIONS, Aspect, AspectAnalysis, AspectKind, AspectNature,
    DEFAULT_ORB_DEG, Dimension, analyze_aspects, aspect_strength, classify_angle, dimension_score,
};
pub use chart::{Chart, Position, house_of};
pub use dasha::{
    DashaBirthData, DashaEntity, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot,
    DashaSystem, Mahadasha, Antardasha, RashiDashaInputs, VimshottariBalance, dasha_hierarchy,
    dasha_snapshot, vimshottari_balance, vimshottari_mahadashas,
};
pub use dignity::{Dignity, Relationship, dignity_of, dignity_strength, natural_relationship};
pub use error::VedicError;
pub use graha::{BeneficNature, SAPTA_GRAHAS, natural_nature, nth_rashi_from, rashi_co_lord, rashi_lord};
pub use karana::{ALL_KARANAS, Karana, KaranaInfo, karana_from_longitudes};
pub use muhurta::{
    ALL_ACTIVITY_CATEGORIES, ActivityCategory, DayPreference, MAX_ALTERNATIVE_DAYS,
    MAX_SLOT_HOURS, MIN_SLOT_HOURS, MUHURTA_RULES, MuhurtaRules, MuhurtaScore, Rating,
    ScoredWindow, TimeWindow, daily_rating, is_daytime, partition_slots, rank_windows,
    score_window,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use panchang::{Element, Panchang, derive_panchang};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, SignElement, SignType, deg_to_dms, dms_to_deg,
    rashi_from_longitude, sign_number,
};
pub use tithi::{Paksha, TithiInfo, tithi_from_longitudes};
pub use util::normalize_360;
pub use vaar::{ALL_VAARS, Vaar};
pub use varga::{DIVISIONS, Division, divisional_chart, divisional_charts, division, varga_longitude};
pub use yoga::{ALL_YOGAS, Yoga, YogaInfo, yoga_from_longitudes};
