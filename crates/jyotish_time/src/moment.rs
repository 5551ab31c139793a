//! The instant-and-place every computation starts from.

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::civil::CivilDateTime;
use crate::error::TimeError;
use crate::julian::validate_utc_offset;

/// Largest whole-day rollover `Moment::from_hour_fraction` accepts. Beyond
/// this the date leaves chrono's calendar range anyway.
const MAX_DAY_SHIFT: f64 = 100_000_000.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoLocation")]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a validated location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, TimeError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(TimeError::invalid(
                "latitude",
                format!("{latitude_deg} is not in [-90, 90]"),
            ));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(TimeError::invalid(
                "longitude",
                format!("{longitude_deg} is not in [-180, 180]"),
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

#[derive(Deserialize)]
struct RawGeoLocation {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl TryFrom<RawGeoLocation> for GeoLocation {
    type Error = TimeError;

    fn try_from(raw: RawGeoLocation) -> Result<Self, Self::Error> {
        Self::new(raw.latitude_deg, raw.longitude_deg)
    }
}

/// Civil date/time at a place, with the UTC offset in force there.
///
/// Construction validates every field, deserialization included, so a
/// `Moment` always resolves to a Julian Day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMoment")]
pub struct Moment {
    civil: CivilDateTime,
    location: GeoLocation,
    utc_offset_hours: f64,
}

#[derive(Deserialize)]
struct RawMoment {
    civil: CivilDateTime,
    location: GeoLocation,
    utc_offset_hours: f64,
}

impl TryFrom<RawMoment> for Moment {
    type Error = TimeError;

    fn try_from(raw: RawMoment) -> Result<Self, Self::Error> {
        Self::new(raw.civil, raw.location, raw.utc_offset_hours)
    }
}

impl Moment {
    pub fn new(
        civil: CivilDateTime,
        location: GeoLocation,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        validate_utc_offset(utc_offset_hours)?;
        // Re-check in case the caller built the struct literally.
        let civil = CivilDateTime::new(
            civil.year,
            civil.month,
            civil.day,
            civil.hour,
            civil.minute,
            civil.second,
        )?;
        Ok(Self {
            civil,
            location,
            utc_offset_hours,
        })
    }

    /// Build from a date and an hour-fraction that may fall outside `[0, 24)`.
    ///
    /// The hour is normalized into `[0, 24)` and the date rolls forward or
    /// back by whole days accordingly (`25.5` on Jan 1 is 01:30 on Jan 2).
    pub fn from_hour_fraction(
        date: NaiveDate,
        hour: f64,
        location: GeoLocation,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        if !hour.is_finite() {
            return Err(TimeError::invalid("hour", "must be finite"));
        }
        let day_shift = hour.div_euclid(24.0);
        let hour_in_day = hour.rem_euclid(24.0);
        let overflow = || TimeError::invalid("hour", format!("{hour} overflows the calendar"));
        if day_shift.abs() > MAX_DAY_SHIFT {
            return Err(overflow());
        }
        let date = TimeDelta::try_days(day_shift as i64)
            .and_then(|delta| date.checked_add_signed(delta))
            .ok_or_else(overflow)?;
        let civil = CivilDateTime::from_date_and_hour(date, hour_in_day)?;
        Self::new(civil, location, utc_offset_hours)
    }

    /// Same place and offset, at another Julian Day (UT).
    pub fn at_julian_day(&self, jd: f64) -> Result<Self, TimeError> {
        let civil = CivilDateTime::from_julian_day(jd, self.utc_offset_hours)?;
        Self::new(civil, self.location, self.utc_offset_hours)
    }

    pub fn civil(&self) -> &CivilDateTime {
        &self.civil
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// Local hour of day, in `[0, 24)`.
    pub fn hour_of_day(&self) -> f64 {
        self.civil.hour_fraction()
    }

    /// Local weekday index, `0 = Sunday .. 6 = Saturday`.
    pub fn weekday(&self) -> u8 {
        self.civil.weekday()
    }

    /// Julian Day (UT).
    pub fn julian_day(&self) -> Result<f64, TimeError> {
        self.civil.to_julian_day(self.utc_offset_hours)
    }
}
