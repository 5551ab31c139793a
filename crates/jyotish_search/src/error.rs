//! Error type for the orchestration layer.

use jyotish_core::{EphemerisError, LookupError};
use jyotish_time::TimeError;
use jyotish_vedic_base::VedicError;
use thiserror::Error;

/// Errors from the exposed engine operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Malformed request, rejected before any numeric work.
    #[error("invalid {field}: {reason}")]
    Input { field: &'static str, reason: String },
    /// The ephemeris adapter failed; never retried.
    #[error("computation failed: {cause}")]
    ComputationFailed { cause: EphemerisError },
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error("place lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

impl SearchError {
    pub(crate) fn input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Input {
            field,
            reason: reason.into(),
        }
    }
}

impl From<EphemerisError> for SearchError {
    fn from(cause: EphemerisError) -> Self {
        Self::ComputationFailed { cause }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Input {
            field: e.field(),
            reason: e.to_string(),
        }
    }
}
