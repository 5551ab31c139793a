//! Boundaries to place and timezone collaborators.
//!
//! The engine only consumes these; concrete services live outside it.

use jyotish_time::GeoLocation;

use crate::error::LookupError;

/// Resolves a free-text place name to coordinates.
pub trait Geocoder: Send + Sync {
    fn geocode(&self, place_name: &str) -> Result<GeoLocation, LookupError>;
}

/// Resolves the civil UTC offset in force at a place and instant.
pub trait UtcOffsetResolver: Send + Sync {
    /// `jd_ut` is the instant of interest; the result is in hours, east positive.
    fn resolve_utc_offset(&self, location: &GeoLocation, jd_ut: f64) -> Result<f64, LookupError>;
}

/// A resolver that always answers with one offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedUtcOffset(pub f64);

impl UtcOffsetResolver for FixedUtcOffset {
    fn resolve_utc_offset(&self, _location: &GeoLocation, _jd_ut: f64) -> Result<f64, LookupError> {
        Ok(self.0)
    }
}
