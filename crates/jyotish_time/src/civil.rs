//! Local civil date/time with validation.
//!
//! `CivilDateTime` is wall-clock time in some UTC offset; the offset itself
//! lives on [`crate::Moment`]. Conversion to a Julian Day always goes
//! through [`crate::julian_day`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{jd_to_calendar, julian_day, validate_date, validate_utc_offset, weekday_index};

/// Civil calendar date and wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCivilDateTime")]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

#[derive(Deserialize)]
struct RawCivilDateTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl TryFrom<RawCivilDateTime> for CivilDateTime {
    type Error = TimeError;

    fn try_from(raw: RawCivilDateTime) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second)
    }
}

impl CivilDateTime {
    /// Build a validated civil date/time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        validate_date(year, month, day)?;
        if hour > 23 {
            return Err(TimeError::invalid("hour", format!("{hour} is not in 0..=23")));
        }
        if minute > 59 {
            return Err(TimeError::invalid(
                "minute",
                format!("{minute} is not in 0..=59"),
            ));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::invalid(
                "second",
                format!("{second} is not in [0, 60)"),
            ));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Midnight at the start of a date.
    pub fn from_date(date: NaiveDate) -> Result<Self, TimeError> {
        Self::new(date.year(), date.month(), date.day(), 0, 0, 0.0)
    }

    /// Date plus an hour-of-day fraction in `[0, 24)`.
    pub fn from_date_and_hour(date: NaiveDate, hour: f64) -> Result<Self, TimeError> {
        if !hour.is_finite() || !(0.0..24.0).contains(&hour) {
            return Err(TimeError::invalid("hour", format!("{hour} is not in [0, 24)")));
        }
        let total_seconds = hour * 3600.0;
        let h = (total_seconds / 3600.0).floor() as u32;
        let m = ((total_seconds - h as f64 * 3600.0) / 60.0).floor() as u32;
        let s = (total_seconds - h as f64 * 3600.0 - m as f64 * 60.0).clamp(0.0, 59.999_999);
        Self::new(date.year(), date.month(), date.day(), h.min(23), m.min(59), s)
    }

    /// Hour of day as a fraction, in `[0, 24)`.
    pub fn hour_fraction(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// The calendar date component.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Weekday index, `0 = Sunday .. 6 = Saturday`.
    pub fn weekday(&self) -> u8 {
        weekday_index(self.year, self.month, self.day)
    }

    /// Julian Day (UT) of this wall-clock time in the given offset.
    pub fn to_julian_day(&self, utc_offset_hours: f64) -> Result<f64, TimeError> {
        julian_day(
            self.year,
            self.month,
            self.day,
            self.hour_fraction(),
            utc_offset_hours,
        )
    }

    /// Wall-clock time of a Julian Day (UT) seen from a UTC offset.
    pub fn from_julian_day(jd: f64, utc_offset_hours: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::invalid("jd", "must be finite"));
        }
        validate_utc_offset(utc_offset_hours)?;
        let (year, month, day_frac) = jd_to_calendar(jd + utc_offset_hours / 24.0);
        let day = day_frac.floor() as u32;
        let total_seconds = (day_frac - day as f64) * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = (total_seconds % 60.0).clamp(0.0, 59.999_999);
        Self::new(year, month, day, hour.min(23), minute.min(59), second)
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DDThh:mm[:ss]`, `YYYY-MM-DD hh:mm[:ss]`, or `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        const FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%d %H:%M",
        ];
        for fmt in FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Self::new(
                    dt.year(),
                    dt.month(),
                    dt.day(),
                    dt.hour(),
                    dt.minute(),
                    dt.second() as f64,
                );
            }
        }
        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Self::from_date(date),
            Err(e) => Err(TimeError::invalid("datetime", format!("'{s}': {e}"))),
        }
    }
}
