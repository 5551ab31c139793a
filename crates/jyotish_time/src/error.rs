//! Error types for calendar and time resolution.

/// Errors from civil-time validation and Julian Day resolution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar, clock, coordinate, or offset field is malformed.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    /// Year precedes Gregorian calendar adoption.
    #[error("year {year} precedes Gregorian adoption (1582)")]
    PreGregorian { year: i32 },
}

impl TimeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } => field,
            Self::PreGregorian { .. } => "year",
        }
    }
}
