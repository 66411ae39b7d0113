//! Fixed-width-window fractional differencing filter.

use crate::error::TransformError;
use crate::traits::SeriesTransform;
use crate::weights::FfdWeights;

/// Weights together with the filtered series they produced.
#[derive(Debug, Clone)]
pub struct FfdOutput {
    /// Weights used by the filter
    pub weights: FfdWeights,
    /// Filtered series, same length as the input, `NaN` during warmup
    pub values: Vec<f64>,
}

impl FfdOutput {
    /// Filtered values with the undefined entries removed.
    #[must_use]
    pub fn defined_values(&self) -> Vec<f64> {
        self.values.iter().copied().filter(|v| v.is_finite()).collect()
    }
}

/// Applies precomputed weights as a causal convolution.
///
/// `out[i] = sum_{k=0}^{width} w[k] * x[i-k]` for `i >= width`; earlier
/// entries are `NaN`. A non-finite observation inside a window makes that
/// output non-finite, so gaps propagate instead of being filled.
#[must_use]
pub fn frac_diff_ffd(x: &[f64], weights: &FfdWeights) -> Vec<f64> {
    let len = x.len();
    let mut result = vec![f64::NAN; len];

    let Some(width) = weights.width() else {
        return result;
    };
    if width >= len {
        return result;
    }

    // Oldest lag first so each window is a plain dot product.
    let kernel: Vec<f64> = weights.coefficients().iter().rev().copied().collect();

    for (out, window) in result[width..].iter_mut().zip(x.windows(width + 1)) {
        *out = kernel.iter().zip(window).map(|(w, v)| w * v).sum();
    }

    result
}

/// Fractional differencing of order `d` with weight truncation `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FracDiff {
    /// Differencing order
    pub d: f64,
    /// Weight truncation threshold
    pub threshold: f64,
}

impl FracDiff {
    /// Creates a new transform.
    ///
    /// # Errors
    /// - [`TransformError::InvalidParams`] when `d` is not finite.
    /// - [`TransformError::ParamOutOfRange`] when `threshold` is not in `(0, 1]`.
    pub fn new(d: f64, threshold: f64) -> Result<Self, TransformError> {
        if !d.is_finite() {
            return Err(TransformError::invalid_params(format!(
                "differencing order must be finite, got {d}"
            )));
        }
        if threshold.is_nan() || threshold <= 0.0 || threshold > 1.0 {
            return Err(TransformError::param_out_of_range(
                "threshold",
                threshold,
                0.0,
                1.0,
            ));
        }
        Ok(Self { d, threshold })
    }

    /// Weights for a series of length `lim`.
    #[must_use]
    pub fn weights(&self, lim: usize) -> FfdWeights {
        FfdWeights::generate(self.d, self.threshold, lim)
    }

    /// Filters `x` with `lim = x.len()`, returning weights and output.
    #[must_use]
    pub fn compute(&self, x: &[f64]) -> FfdOutput {
        let weights = self.weights(x.len());
        let values = frac_diff_ffd(x, &weights);
        FfdOutput { weights, values }
    }
}

impl SeriesTransform for FracDiff {
    fn apply(&self, values: &[f64]) -> Vec<f64> {
        self.compute(values).values
    }

    fn name(&self) -> &str {
        "FFD"
    }

    fn warmup_periods(&self, len: usize) -> usize {
        self.weights(len).width().map_or(len, |w| w.min(len))
    }
}
