//! Moments from place names, through the geocoding and timezone boundaries.

use chrono::{Datelike, NaiveDate};
use jyotish_core::{Geocoder, UtcOffsetResolver};
use jyotish_time::{Moment, julian_day};

use crate::error::SearchError;

/// Resolve a place name and local time into a [`Moment`].
///
/// The offset is looked up at the instant the local time names when read
/// as UTC; that is within a day of the true instant, which is as close as
/// an offset lookup needs.
pub fn moment_for_place<G, R>(
    geocoder: &G,
    resolver: &R,
    place_name: &str,
    date: NaiveDate,
    hour: f64,
) -> Result<Moment, SearchError>
where
    G: Geocoder + ?Sized,
    R: UtcOffsetResolver + ?Sized,
{
    let place = place_name.trim();
    if place.is_empty() {
        return Err(SearchError::input("place", "must not be empty"));
    }
    let location = geocoder.geocode(place)?;
    let lookup_hour = hour.clamp(0.0, 24.0);
    let lookup_jd = julian_day(date.year(), date.month(), date.day(), lookup_hour, 0.0)?;
    let offset = resolver.resolve_utc_offset(&location, lookup_jd)?;
    tracing::debug!(place, offset, "resolved place");
    Ok(Moment::from_hour_fraction(date, hour, location, offset)?)
}
