//! Engine operations over an ephemeris adapter.
//!
//! This crate provides:
//! - Charts and divisional charts for a moment
//! - Panchang for a moment
//! - Vimshottari, Chara and Sthira dasha timelines from a birth moment
//! - Multi-day muhurta scans with a skipped-day ledger
//! - Inter-chart aspect analysis
//!
//! Every function takes the adapter as `&E` where `E: Ephemeris`, so callers
//! choose the decorators (cache, timeout) that suit them.

pub mod chart;
pub mod dasha;
pub mod error;
pub mod muhurta;
pub mod muhurta_types;
pub mod panchang;
pub mod place;

pub use chart::{
    chart_at_jd, compute_chart, compute_chart_with_bodies, compute_varga,
    graha_sidereal_longitudes,
};
pub use dasha::{
    compute_vimshottari_dasha, dasha_birth_data, dasha_hierarchy_for_birth, dasha_snapshot_at,
};
pub use error::SearchError;
pub use jyotish_vedic_base::{AspectAnalysis, analyze_aspects};
pub use muhurta::score_muhurta;
pub use muhurta_types::{
    DailyWindow, DayScan, MAX_SCAN_DAYS, MuhurtaRequest, MuhurtaResult, MuhurtaScanConfig,
    SkippedDay,
};
pub use panchang::{moon_sidereal_longitude, panchang_at_jd, panchang_for_moment};
pub use place::moment_for_place;
