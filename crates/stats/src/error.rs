//! Statistical test error types.

use thiserror::Error;

/// Reasons a unit-root test could not produce a statistic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatTestError {
    /// Series too short for the regression
    #[error("insufficient observations: need {required}, got {actual}")]
    InsufficientObservations {
        /// Minimum number of observations.
        required: usize,
        /// Observations supplied.
        actual: usize,
    },

    /// Non-finite observation in the input
    #[error("non-finite observation at index {index}")]
    NonFinite {
        /// Position of the first offending value.
        index: usize,
    },

    /// Constant differences, singular design or zero standard error
    #[error("degenerate regression: {0}")]
    Degenerate(String),
}

impl StatTestError {
    /// Creates a `Degenerate` error with a message.
    #[must_use]
    pub fn degenerate(msg: impl Into<String>) -> Self {
        StatTestError::Degenerate(msg.into())
    }

    /// Returns true for the insufficient-observations case.
    #[must_use]
    pub fn is_insufficient(&self) -> bool {
        matches!(self, StatTestError::InsufficientObservations { .. })
    }
}
