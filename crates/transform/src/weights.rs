//! Fixed-width fractional differencing weights.

/// Truncated binomial-series weights of `(1 - B)^d`.
///
/// `coefficients()[0]` applies to the most recent observation,
/// `coefficients()[k]` to the observation `k` steps back.
#[derive(Debug, Clone, PartialEq)]
pub struct FfdWeights {
    d: f64,
    threshold: f64,
    coefficients: Vec<f64>,
}

impl FfdWeights {
    /// Generates weights for order `d`.
    ///
    /// Starts from `w[0] = 1` and applies `w[k] = -w[k-1] / k * (d - k + 1)`.
    /// Generation stops at the first weight whose magnitude is below
    /// `threshold` (that weight is not kept) or once `lim` weights exist.
    /// `lim == 0` yields an empty vector.
    #[must_use]
    pub fn generate(d: f64, threshold: f64, lim: usize) -> Self {
        let mut coefficients = Vec::new();
        if lim > 0 {
            coefficients.push(1.0);
        }

        let mut k = 1usize;
        while k < lim {
            let k_f = k as f64;
            let next = -coefficients[k - 1] / k_f * (d - k_f + 1.0);
            if next.abs() < threshold {
                break;
            }
            coefficients.push(next);
            k += 1;
        }

        Self {
            d,
            threshold,
            coefficients,
        }
    }

    /// Differencing order.
    #[must_use]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Truncation threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Weights, most recent lag first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of weights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns true when no weight was generated (`lim == 0`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Lookback width: number of leading outputs the filter leaves undefined.
    ///
    /// `None` for an empty weight vector.
    #[must_use]
    pub fn width(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }
}
