//! Single-column minimum-order search.

use fracdiff_stats::{AdfTest, StatTestError, StationarityTest};
use fracdiff_transform::{WeightCache, frac_diff_ffd};
use fracdiff_types::{Column, OrderResolution, ScanMode, StationarityConfig, UnresolvedReason};
use rayon::prelude::*;

use crate::error::SearchError;
use crate::grid::candidate_grid;

/// Verdict for one candidate order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOutcome {
    /// p-value below the significance level
    Pass,
    /// Valid test result that did not reject the unit root
    Fail,
    /// Test failed numerically
    Degenerate,
    /// Too few defined values after filtering
    Insufficient,
}

/// One evaluated candidate order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CandidateReport {
    /// Differencing order
    pub d: f64,
    /// Filter width (`None` for an empty weight vector)
    pub width: Option<usize>,
    /// Defined values handed to the test
    pub defined: usize,
    /// Test statistic, when the test produced one
    pub statistic: Option<f64>,
    /// p-value, when the test produced one
    pub p_value: Option<f64>,
    /// Verdict
    pub outcome: CandidateOutcome,
}

/// Search result for one column.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ColumnSearch {
    /// Column name
    pub name: String,
    /// Minimum order or failure reason
    pub resolution: OrderResolution,
    /// Evaluated candidates, ascending in `d`, raw series first
    pub candidates: Vec<CandidateReport>,
    /// Number of filter applications (0 when the raw series passed)
    pub filter_evaluations: usize,
}

impl ColumnSearch {
    /// Returns true when the raw series passed and no filter ran.
    #[must_use]
    pub fn short_circuited(&self) -> bool {
        self.filter_evaluations == 0 && self.resolution.order() == Some(0.0)
    }
}

/// Minimum-order search over a fixed grid with a pluggable stationarity test.
#[derive(Debug, Clone)]
pub struct OrderSearch<T = AdfTest> {
    oracle: T,
    grid: Vec<f64>,
    threshold: f64,
    significance: f64,
    scan_mode: ScanMode,
    parallel_columns: bool,
    log_candidates: bool,
}

impl OrderSearch<AdfTest> {
    /// Creates a search using the ADF test with the configured lag.
    ///
    /// # Errors
    /// Returns [`SearchError::Config`] when the configuration is invalid.
    pub fn from_config(config: &StationarityConfig) -> Result<Self, SearchError> {
        Self::with_oracle(config, AdfTest::new(config.adf_max_lag))
    }
}

impl<T: StationarityTest> OrderSearch<T> {
    /// Creates a search using `oracle` as the stationarity test.
    ///
    /// # Errors
    /// Returns [`SearchError::Config`] when the configuration is invalid.
    pub fn with_oracle(config: &StationarityConfig, oracle: T) -> Result<Self, SearchError> {
        config
            .validate()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        Ok(Self {
            oracle,
            grid: candidate_grid(config.grid_points),
            threshold: config.weight_threshold,
            significance: config.significance,
            scan_mode: config.scan_mode,
            parallel_columns: config.parallel_columns,
            log_candidates: false,
        })
    }

    /// Enables a debug event per evaluated candidate.
    #[must_use]
    pub fn with_candidate_logging(mut self, enabled: bool) -> Self {
        self.log_candidates = enabled;
        self
    }

    /// Candidate orders, ascending.
    #[must_use]
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// Weight truncation threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// p-value cut-off.
    #[must_use]
    pub fn significance(&self) -> f64 {
        self.significance
    }

    /// Grid scan strategy.
    #[must_use]
    pub fn scan_mode(&self) -> ScanMode {
        self.scan_mode
    }

    /// Whether columns are searched on the rayon pool.
    #[must_use]
    pub fn parallel_columns(&self) -> bool {
        self.parallel_columns
    }

    /// The stationarity test.
    #[must_use]
    pub fn oracle(&self) -> &T {
        &self.oracle
    }

    /// Weights for every grid order at series length `len`.
    #[must_use]
    pub fn weight_cache(&self, len: usize) -> WeightCache {
        WeightCache::precompute(self.threshold, len, &self.grid)
    }

    /// Searches one column, generating weights on the fly.
    #[must_use]
    pub fn search_column(&self, column: &Column) -> ColumnSearch {
        let cache = self.weight_cache(column.values.len());
        self.search_column_with_cache(column, &cache)
    }

    /// Searches one column using precomputed weights.
    ///
    /// The raw series is tested first; if it passes, the column resolves to
    /// `d = 0` without running the filter. Otherwise the positive grid
    /// orders are scanned according to the scan mode.
    #[must_use]
    pub fn search_column_with_cache(&self, column: &Column, cache: &WeightCache) -> ColumnSearch {
        let raw: Vec<f64> = column.values.iter().copied().filter(|v| v.is_finite()).collect();
        let baseline = self.evaluate(0.0, Some(0), &raw);
        self.log_candidate(&column.name, &baseline);

        if baseline.outcome == CandidateOutcome::Pass {
            return ColumnSearch {
                name: column.name.clone(),
                resolution: OrderResolution::resolved(0.0),
                candidates: vec![baseline],
                filter_evaluations: 0,
            };
        }

        let orders: Vec<f64> = self.grid.iter().copied().filter(|d| *d > 0.0).collect();
        let filtered = match self.scan_mode {
            ScanMode::EarlyExit => {
                let mut candidates = Vec::with_capacity(orders.len());
                for &d in &orders {
                    let candidate = self.evaluate_order(column, d, cache);
                    self.log_candidate(&column.name, &candidate);
                    let passed = candidate.outcome == CandidateOutcome::Pass;
                    candidates.push(candidate);
                    if passed {
                        break;
                    }
                }
                candidates
            }
            ScanMode::FullGrid => {
                let candidates: Vec<CandidateReport> = orders
                    .par_iter()
                    .map(|&d| self.evaluate_order(column, d, cache))
                    .collect();
                for candidate in &candidates {
                    self.log_candidate(&column.name, candidate);
                }
                candidates
            }
        };

        let filter_evaluations = filtered.len();
        let mut candidates = Vec::with_capacity(filter_evaluations + 1);
        candidates.push(baseline);
        candidates.extend(filtered);

        ColumnSearch {
            name: column.name.clone(),
            resolution: resolve(&candidates),
            candidates,
            filter_evaluations,
        }
    }

    fn evaluate_order(&self, column: &Column, d: f64, cache: &WeightCache) -> CandidateReport {
        let weights = cache.weights_for(d, column.values.len());
        let defined: Vec<f64> = frac_diff_ffd(&column.values, &weights)
            .into_iter()
            .filter(|v| v.is_finite())
            .collect();
        self.evaluate(d, weights.width(), &defined)
    }

    fn evaluate(&self, d: f64, width: Option<usize>, series: &[f64]) -> CandidateReport {
        let mut report = CandidateReport {
            d,
            width,
            defined: series.len(),
            statistic: None,
            p_value: None,
            outcome: CandidateOutcome::Insufficient,
        };

        match self.oracle.evaluate(series) {
            Ok(result) => {
                report.statistic = Some(result.statistic);
                report.p_value = Some(result.p_value);
                report.outcome = if result.is_stationary(self.significance) {
                    CandidateOutcome::Pass
                } else {
                    CandidateOutcome::Fail
                };
            }
            Err(StatTestError::InsufficientObservations { .. }) => {}
            Err(_) => report.outcome = CandidateOutcome::Degenerate,
        }
        report
    }

    fn log_candidate(&self, name: &str, candidate: &CandidateReport) {
        if self.log_candidates {
            tracing::debug!(
                "{}: d={:.4} width={:?} defined={} p={:?} -> {:?}",
                name,
                candidate.d,
                candidate.width,
                candidate.defined,
                candidate.p_value,
                candidate.outcome
            );
        }
    }
}

/// Smallest passing order, or the failure reason when none passed.
///
/// `candidates[0]` is the raw series; the reason is taken from the filtered
/// candidates after it. A valid-but-failing test outranks a numerical
/// failure, which outranks missing history.
fn resolve(candidates: &[CandidateReport]) -> OrderResolution {
    if let Some(best) = candidates
        .iter()
        .filter(|c| c.outcome == CandidateOutcome::Pass)
        .min_by(|a, b| a.d.total_cmp(&b.d))
    {
        return OrderResolution::resolved(best.d);
    }

    let scanned = match candidates.get(1..) {
        Some(filtered) if !filtered.is_empty() => filtered,
        _ => candidates,
    };
    let has = |outcome: CandidateOutcome| scanned.iter().any(|c| c.outcome == outcome);
    let reason = if has(CandidateOutcome::Fail) {
        UnresolvedReason::NoStationaryOrderFound
    } else if has(CandidateOutcome::Degenerate) {
        UnresolvedReason::DegenerateSeries
    } else {
        UnresolvedReason::InsufficientHistory
    };
    OrderResolution::unresolved(reason)
}
