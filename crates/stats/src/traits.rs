//! Stationarity test trait.

use crate::error::StatTestError;
use crate::mackinnon::CriticalValues;

/// Outcome of a unit-root test on one series.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct UnitRootResult {
    /// Test statistic (t-value of the lagged level)
    pub statistic: f64,
    /// Approximate p-value of the unit-root null
    pub p_value: f64,
    /// Augmentation lag used in the regression
    pub used_lag: usize,
    /// Observations entering the regression
    pub n_obs: usize,
    /// Finite-sample critical values at 1%, 5% and 10%
    pub critical_values: CriticalValues,
}

impl UnitRootResult {
    /// Returns true when the unit-root null is rejected at `significance`.
    #[must_use]
    pub fn is_stationary(&self, significance: f64) -> bool {
        self.p_value < significance
    }
}

/// A test whose null hypothesis is a unit root.
///
/// Implementations must be thread-safe; the order search calls them from
/// rayon workers.
pub trait StationarityTest: Send + Sync {
    /// Name of the test (e.g., "ADF").
    fn name(&self) -> &str;

    /// Minimum series length accepted by [`evaluate`](Self::evaluate).
    fn min_observations(&self) -> usize;

    /// Runs the test on a gap-free series.
    ///
    /// # Errors
    /// Returns [`StatTestError`] when the series is too short, contains a
    /// non-finite value, or yields a degenerate regression.
    fn evaluate(&self, series: &[f64]) -> Result<UnitRootResult, StatTestError>;
}
