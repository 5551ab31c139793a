//! Errors raised at the ephemeris and lookup boundaries.

use thiserror::Error;

use crate::body::Body;

/// Failure of an ephemeris adapter call.
///
/// All variants are deterministic for a given input; callers do not retry.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    #[error("no ephemeris data for {body}")]
    NotAvailable { body: Body },
    #[error("julian day {jd} is outside the ephemeris range")]
    OutOfRange { jd: f64 },
    #[error("ephemeris call exceeded {millis} ms")]
    Timeout { millis: u64 },
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),
    #[error("internal ephemeris error: {0}")]
    Internal(String),
}

/// Failure of a geocoding or UTC-offset collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LookupError {
    #[error("no match for {0:?}")]
    NotFound(String),
    #[error("lookup service unavailable: {0}")]
    Unavailable(String),
}
