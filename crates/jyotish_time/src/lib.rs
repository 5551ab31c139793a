//! Calendar and time resolution for the jyotish engine.
//!
//! This crate provides:
//! - Gregorian calendar <-> Julian Day conversion (years from 1582)
//! - `CivilDateTime` and `Moment` (civil time + place + UTC offset)
//! - Mean sidereal time for ascendant placement

pub mod civil;
pub mod error;
pub mod julian;
pub mod moment;
pub mod sidereal;

pub use civil::CivilDateTime;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, GREGORIAN_START_YEAR, J2000_JD, MAX_UTC_OFFSET_HOURS, day_number,
    jd_to_calendar, jd_to_centuries, julian_day, validate_date, validate_utc_offset,
    weekday_index,
};
pub use moment::{GeoLocation, Moment};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
