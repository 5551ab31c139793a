//! Request, configuration and result types for muhurta scans.

use chrono::NaiveDate;
use jyotish_core::{CalcFlags, HouseSystem};
use jyotish_time::GeoLocation;
use jyotish_vedic_base::{ActivityCategory, MuhurtaScore, Rating, ScoredWindow};
use serde::Serialize;

/// Longest date range one scan accepts, in days.
pub const MAX_SCAN_DAYS: i64 = 366;

/// Local-time window scanned on each day, hours in `[0, 24]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyWindow {
    pub start_hour: f64,
    pub end_hour: f64,
}

impl DailyWindow {
    pub const WHOLE_DAY: Self = Self {
        start_hour: 0.0,
        end_hour: 24.0,
    };

    pub fn new(start_hour: f64, end_hour: f64) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }
}

impl Default for DailyWindow {
    fn default() -> Self {
        Self::WHOLE_DAY
    }
}

/// What to scan: dates, hours, place and activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MuhurtaRequest {
    /// First local date, inclusive.
    pub start_date: NaiveDate,
    /// Last local date, inclusive.
    pub end_date: NaiveDate,
    pub daily_window: DailyWindow,
    pub location: GeoLocation,
    pub utc_offset_hours: f64,
    pub category: ActivityCategory,
}

/// How to scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuhurtaScanConfig {
    pub slot_hours: f64,
    /// Days searched after `end_date` when no slot reaches `min_rating`.
    pub alternative_days: u32,
    pub max_results: usize,
    pub min_rating: Rating,
    pub house_system: HouseSystem,
    pub flags: CalcFlags,
}

impl Default for MuhurtaScanConfig {
    fn default() -> Self {
        Self {
            slot_hours: 2.0,
            alternative_days: 7,
            max_results: 10,
            min_rating: Rating::Good,
            house_system: HouseSystem::WholeSign,
            flags: CalcFlags::default(),
        }
    }
}

/// A day left out of a scan, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedDay {
    pub date: NaiveDate,
    pub reason: String,
}

/// Slots of one scanned day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayScan {
    pub date: NaiveDate,
    /// Panchang-based rating of the whole day.
    pub daily: MuhurtaScore,
    pub windows: Vec<ScoredWindow>,
}

/// Outcome of a scan.
///
/// Days whose adapter calls failed, or whose daily rating is Poor, are in
/// `skipped` and contribute no slots; `best` is only the best of the days
/// that were scanned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuhurtaResult {
    /// Slots at or above the minimum rating, best first.
    pub ranked: Vec<ScoredWindow>,
    /// Highest-scoring slot seen, whatever its rating.
    pub best: Option<ScoredWindow>,
    pub skipped: Vec<SkippedDay>,
    pub days_scanned: usize,
    /// Dates past the requested range that were searched.
    pub alternative_dates: Vec<NaiveDate>,
}

impl MuhurtaResult {
    pub fn has_acceptable(&self) -> bool {
        !self.ranked.is_empty()
    }

    /// Whether the ranked slots include any from the alternative search.
    pub fn used_alternatives(&self) -> bool {
        !self.alternative_dates.is_empty()
    }
}
