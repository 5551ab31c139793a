//! Gregorian calendar <-> Julian Day conversion.
//!
//! The forward direction uses the integer day-number algorithm (valid for
//! all proleptic Gregorian dates from 1582 onward); the inverse follows
//! Meeus, "Astronomical Algorithms", chapter 7.

use crate::error::TimeError;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// First year accepted by [`julian_day`].
pub const GREGORIAN_START_YEAR: i32 = 1582;

/// Maximum magnitude of a civil UTC offset, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Julian Day Number (the integer day beginning at noon) of a Gregorian date.
///
/// ```text
/// a = (14 - month) / 12
/// y = year + 4800 - a
/// m = month + 12a - 3
/// JDN = day + (153m + 2)/5 + 365y + y/4 - y/100 + y/400 - 32045
/// ```
///
/// Inputs are assumed valid; see [`julian_day`] for the checked entry point.
pub fn day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64).div_euclid(12);
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Validate a Gregorian calendar date.
pub fn validate_date(year: i32, month: u32, day: u32) -> Result<(), TimeError> {
    if year < GREGORIAN_START_YEAR {
        return Err(TimeError::PreGregorian { year });
    }
    if !(1..=12).contains(&month) {
        return Err(TimeError::invalid("month", format!("{month} is not in 1..=12")));
    }
    if chrono::NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(TimeError::invalid(
            "day",
            format!("{year:04}-{month:02} has no day {day}"),
        ));
    }
    Ok(())
}

/// Validate a UTC offset in hours.
pub fn validate_utc_offset(utc_offset_hours: f64) -> Result<(), TimeError> {
    if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS {
        return Err(TimeError::invalid(
            "utc_offset",
            format!("{utc_offset_hours} h is outside +/-{MAX_UTC_OFFSET_HOURS} h"),
        ));
    }
    Ok(())
}

/// Julian Day (UT) of a local civil date and hour-fraction.
///
/// `hour` is the local hour of day as a fraction (`13.5` = 13:30) and
/// must lie in `[0, 24]`. `utc_offset_hours` is east-positive (IST = +5.5).
///
/// `JD = JDN + (hour - 12)/24 - utc_offset/24`
pub fn julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: f64,
    utc_offset_hours: f64,
) -> Result<f64, TimeError> {
    validate_date(year, month, day)?;
    if !hour.is_finite() || !(0.0..=24.0).contains(&hour) {
        return Err(TimeError::invalid("hour", format!("{hour} is not in [0, 24]")));
    }
    validate_utc_offset(utc_offset_hours)?;

    let jdn = day_number(year, month, day) as f64;
    let jd = jdn + (hour - 12.0) / 24.0 - utc_offset_hours / 24.0;
    tracing::trace!(year, month, day, hour, utc_offset_hours, jd, "resolved julian day");
    Ok(jd)
}

/// Convert a Julian Day to a Gregorian `(year, month, day_with_fraction)`.
///
/// The day fraction counts from midnight, so `(2024, 1, 1.5)` is noon.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Weekday index of a Gregorian date, `0 = Sunday .. 6 = Saturday`.
pub fn weekday_index(year: i32, month: u32, day: u32) -> u8 {
    (day_number(year, month, day) + 1).rem_euclid(7) as u8
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_2024_new_year_noon_utc() {
        let jd = julian_day(2024, 1, 1, 12.0, 0.0).unwrap();
        assert_eq!(jd, 2_460_311.0);
    }

    #[test]
    fn j2000_epoch() {
        let jd = julian_day(2000, 1, 1, 12.0, 0.0).unwrap();
        assert_eq!(jd, J2000_JD);
    }

    #[test]
    fn midnight_is_half_day_earlier() {
        let jd = julian_day(2024, 1, 1, 0.0, 0.0).unwrap();
        assert_eq!(jd, 2_460_310.5);
    }

    #[test]
    fn utc_offset_is_subtracted() {
        // 17:30 IST == 12:00 UTC
        let jd = julian_day(2024, 1, 1, 17.5, 5.5).unwrap();
        assert!((jd - 2_460_311.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_pre_gregorian_year() {
        assert_eq!(
            julian_day(1581, 12, 31, 12.0, 0.0),
            Err(TimeError::PreGregorian { year: 1581 })
        );
    }

    #[test]
    fn rejects_bad_month_and_day() {
        assert_eq!(julian_day(2024, 13, 1, 0.0, 0.0).unwrap_err().field(), "month");
        assert_eq!(julian_day(2023, 2, 29, 0.0, 0.0).unwrap_err().field(), "day");
        assert!(julian_day(2024, 2, 29, 0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_bad_hour_and_offset() {
        assert_eq!(julian_day(2024, 1, 1, 24.5, 0.0).unwrap_err().field(), "hour");
        assert_eq!(julian_day(2024, 1, 1, f64::NAN, 0.0).unwrap_err().field(), "hour");
        assert_eq!(
            julian_day(2024, 1, 1, 12.0, 15.0).unwrap_err().field(),
            "utc_offset"
        );
    }

    #[test]
    fn inverse_conversion() {
        let (y, m, d) = jd_to_calendar(2_460_311.0);
        assert_eq!((y, m), (2024, 1));
        assert!((d - 1.5).abs() < 1e-9);

        let (y, m, d) = jd_to_calendar(2_451_544.5);
        assert_eq!((y, m), (2000, 1));
        assert!((d - 1.0).abs() < 1e-9);
    }

    #[test]
    fn weekday_known_dates() {
        assert_eq!(weekday_index(2024, 1, 1), 1); // Monday
        assert_eq!(weekday_index(2000, 1, 1), 6); // Saturday
        assert_eq!(weekday_index(1582, 10, 15), 5); // Friday
    }

    #[test]
    fn centuries_at_j2000() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-15);
    }
}
