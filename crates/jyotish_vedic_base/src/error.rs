//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from the pure Vedic math layer.
///
/// Each is fatal to the single call that raised it; batch callers keep
/// going with the other items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VedicError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("unsupported divisional chart D{0}")]
    UnsupportedDivision(u16),
    #[error("nakshatra number {0} is not in 1..=27")]
    InvalidNakshatra(u8),
    #[error("dasha level would exceed the period limit")]
    TooManyPeriods,
}

impl VedicError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
