//! Multi-day muhurta scans.
//!
//! Each candidate day is rated from its panchang first; Poor days are
//! skipped without slot scoring. Remaining days are cut into fixed-width
//! slots, and each slot is scored from the chart at its midpoint. Days are
//! independent, so they are evaluated in parallel.

use chrono::{Datelike, Duration, NaiveDate};
use jyotish_core::{Body, Ephemeris, EphemerisError};
use jyotish_time::{CivilDateTime, julian_day, validate_utc_offset};
use jyotish_vedic_base::{
    MAX_ALTERNATIVE_DAYS, MAX_SLOT_HOURS, MIN_SLOT_HOURS, Rating, ScoredWindow, daily_rating,
    derive_panchang, partition_slots, rank_windows, score_window,
};
use rayon::prelude::*;

use crate::chart::chart_at_jd;
use crate::error::SearchError;
use crate::muhurta_types::{
    DayScan, MAX_SCAN_DAYS, MuhurtaRequest, MuhurtaResult, MuhurtaScanConfig, SkippedDay,
};

enum DayOutcome {
    Scanned(DayScan),
    Skipped(SkippedDay),
}

fn validate(request: &MuhurtaRequest, config: &MuhurtaScanConfig) -> Result<(), SearchError> {
    let span = (request.end_date - request.start_date).num_days();
    if span < 0 {
        return Err(SearchError::input("date_range", "end date precedes start date"));
    }
    if span >= MAX_SCAN_DAYS {
        return Err(SearchError::input(
            "date_range",
            format!("{} days exceeds {MAX_SCAN_DAYS}", span + 1),
        ));
    }
    let w = request.daily_window;
    if !(w.start_hour.is_finite() && w.end_hour.is_finite())
        || w.start_hour < 0.0
        || w.end_hour > 24.0
        || w.end_hour <= w.start_hour
    {
        return Err(SearchError::input(
            "daily_window",
            format!("{}..{} is not a window inside [0, 24]", w.start_hour, w.end_hour),
        ));
    }
    let slot = config.slot_hours;
    if !(slot.is_finite() && (MIN_SLOT_HOURS..=MAX_SLOT_HOURS).contains(&slot)) {
        return Err(SearchError::input(
            "slot_hours",
            format!("{slot} is not in [{MIN_SLOT_HOURS}, {MAX_SLOT_HOURS}]"),
        ));
    }
    if config.alternative_days > MAX_ALTERNATIVE_DAYS {
        return Err(SearchError::input(
            "alternative_days",
            format!("{} exceeds {MAX_ALTERNATIVE_DAYS}", config.alternative_days),
        ));
    }
    if config.max_results == 0 {
        return Err(SearchError::input("max_results", "must be positive"));
    }
    validate_utc_offset(request.utc_offset_hours)?;
    // Out-of-calendar dates fail here rather than inside a worker.
    julian_day(
        request.start_date.year(),
        request.start_date.month(),
        request.start_date.day(),
        0.0,
        request.utc_offset_hours,
    )?;
    Ok(())
}

fn dates_from(start: NaiveDate, count: i64) -> Vec<NaiveDate> {
    (0..count)
        .filter_map(|i| start.checked_add_signed(Duration::days(i)))
        .collect()
}

fn scan_day<E: Ephemeris + ?Sized>(
    eph: &E,
    date: NaiveDate,
    request: &MuhurtaRequest,
    config: &MuhurtaScanConfig,
) -> Result<DayOutcome, SearchError> {
    let offset = request.utc_offset_hours;
    let w = request.daily_window;
    let (y, m, d) = (date.year(), date.month(), date.day());
    let start_jd = julian_day(y, m, d, w.start_hour, offset)?;
    let end_jd = julian_day(y, m, d, w.end_hour, offset)?;
    let weekday = CivilDateTime::from_date(date)?.weekday();

    // Daily rating at the middle of the window. Adapter failures skip the day.
    let mid = 0.5 * (start_jd + end_jd);
    let sun = eph.calc(mid, Body::Sun, config.flags)?.longitude_deg;
    let moon = eph.calc(mid, Body::Moon, config.flags)?.longitude_deg;
    let panchang = derive_panchang(Ok::<_, EphemerisError>(sun), Ok(moon), weekday);
    let daily = daily_rating(&panchang);
    if daily.rating == Rating::Poor {
        return Ok(DayOutcome::Skipped(SkippedDay {
            date,
            reason: format!("daily rating poor ({})", daily.reasons.join(", ")),
        }));
    }

    let slots = partition_slots(start_jd, end_jd, config.slot_hours)?;
    let mut windows = Vec::with_capacity(slots.len());
    for window in slots {
        let at = window.midpoint_jd();
        let chart = chart_at_jd(
            eph,
            at,
            &request.location,
            &Body::GRAHAS,
            config.house_system,
            config.flags,
        )?;
        let slot_weekday = CivilDateTime::from_julian_day(at, offset)?.weekday();
        let score = score_window(request.category, &chart, slot_weekday);
        windows.push(ScoredWindow { window, score });
    }
    Ok(DayOutcome::Scanned(DayScan {
        date,
        daily,
        windows,
    }))
}

fn scan_days<E: Ephemeris + ?Sized>(
    eph: &E,
    dates: &[NaiveDate],
    request: &MuhurtaRequest,
    config: &MuhurtaScanConfig,
) -> (Vec<DayScan>, Vec<SkippedDay>) {
    let outcomes: Vec<DayOutcome> = dates
        .par_iter()
        .map(|&date| match scan_day(eph, date, request, config) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(%date, error = %e, "muhurta day skipped");
                DayOutcome::Skipped(SkippedDay {
                    date,
                    reason: e.to_string(),
                })
            }
        })
        .collect();

    let mut scanned = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            DayOutcome::Scanned(day) => scanned.push(day),
            DayOutcome::Skipped(day) => skipped.push(day),
        }
    }
    (scanned, skipped)
}

fn acceptable(days: &[DayScan], min_rating: Rating) -> impl Iterator<Item = &ScoredWindow> {
    days.iter()
        .flat_map(|d| d.windows.iter())
        .filter(move |w| w.score.rating >= min_rating)
}

/// Scan a date range for the best windows for an activity.
///
/// Partial-result policy: a day whose ephemeris calls fail is recorded in
/// [`MuhurtaResult::skipped`] and the scan carries on, so `best` is only the
/// best among days that could be computed. When no slot in the range
/// reaches `min_rating`, up to `alternative_days` further days are searched
/// in parallel chunks, stopping after the first chunk that yields one.
pub fn score_muhurta<E: Ephemeris + ?Sized>(
    eph: &E,
    request: &MuhurtaRequest,
    config: &MuhurtaScanConfig,
) -> Result<MuhurtaResult, SearchError> {
    validate(request, config)?;
    let span = tracing::info_span!(
        "muhurta_scan",
        category = %request.category,
        start = %request.start_date,
        end = %request.end_date,
    );
    let _guard = span.enter();

    let range_days = (request.end_date - request.start_date).num_days() + 1;
    let dates = dates_from(request.start_date, range_days);
    let (mut scanned, mut skipped) = scan_days(eph, &dates, request, config);

    let mut alternative_dates = Vec::new();
    if acceptable(&scanned, config.min_rating).next().is_none() && config.alternative_days > 0 {
        let chunk = i64::try_from(rayon::current_num_threads()).unwrap_or(1).max(1);
        let total = i64::from(config.alternative_days);
        let mut offset = 0;
        while offset < total {
            let Some(first) = request
                .end_date
                .checked_add_signed(Duration::days(offset + 1))
            else {
                break;
            };
            let batch = dates_from(first, chunk.min(total - offset));
            if batch.is_empty() {
                break;
            }
            offset += chunk;
            let (more, more_skipped) = scan_days(eph, &batch, request, config);
            alternative_dates.extend_from_slice(&batch);
            let found = acceptable(&more, config.min_rating).next().is_some();
            scanned.extend(more);
            skipped.extend(more_skipped);
            if found {
                break;
            }
        }
        tracing::info!(
            searched = alternative_dates.len(),
            "no acceptable slot in range; searched alternative dates"
        );
    }

    let best = scanned
        .iter()
        .flat_map(|d| d.windows.iter())
        .max_by(|a, b| {
            a.score
                .value
                .total_cmp(&b.score.value)
                .then(b.window.start_jd.total_cmp(&a.window.start_jd))
        })
        .cloned();
    let candidates: Vec<ScoredWindow> = acceptable(&scanned, config.min_rating).cloned().collect();
    let ranked = rank_windows(candidates, config.max_results);

    skipped.sort_by_key(|s| s.date);
    tracing::info!(
        days_scanned = scanned.len(),
        days_skipped = skipped.len(),
        ranked = ranked.len(),
        "muhurta scan finished"
    );
    Ok(MuhurtaResult {
        ranked,
        best,
        skipped,
        days_scanned: scanned.len(),
        alternative_dates,
    })
}
