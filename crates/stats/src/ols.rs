//! Ordinary least squares with coefficient standard errors.

use nalgebra::{DMatrix, DVector};

use crate::error::StatTestError;

// Smallest singular value relative to the largest below which the design
// is treated as rank deficient.
const RANK_TOLERANCE: f64 = 1e-10;

/// Fitted regression.
#[derive(Debug, Clone)]
pub struct OlsFit {
    /// Estimated coefficients, one per design column
    pub coefficients: DVector<f64>,
    /// Standard errors of the coefficients
    pub std_errors: DVector<f64>,
    /// Residual variance `SSE / (n - k)`
    pub residual_variance: f64,
}

impl OlsFit {
    /// t-value of coefficient `i`.
    #[must_use]
    pub fn t_value(&self, i: usize) -> f64 {
        self.coefficients[i] / self.std_errors[i]
    }
}

/// Fits `y = X b + e` by least squares.
///
/// # Errors
/// Returns [`StatTestError::Degenerate`] when there are no residual degrees
/// of freedom or the design matrix is (numerically) rank deficient.
pub fn fit(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<OlsFit, StatTestError> {
    let (n, k) = x.shape();
    if n <= k {
        return Err(StatTestError::degenerate(format!(
            "{n} observations for {k} regressors"
        )));
    }

    let singular_values = x.clone().svd(false, false).singular_values;
    let max_sv = singular_values.max();
    let min_sv = singular_values.min();
    if !max_sv.is_finite() || max_sv <= 0.0 || min_sv <= max_sv * RANK_TOLERANCE {
        return Err(StatTestError::degenerate("design matrix is rank deficient"));
    }

    let xt = x.transpose();
    let xtx_inv = (&xt * x)
        .cholesky()
        .ok_or_else(|| StatTestError::degenerate("normal equations are singular"))?
        .inverse();
    let coefficients = &xtx_inv * (&xt * y);

    let residuals = y - x * &coefficients;
    let residual_variance = residuals.norm_squared() / (n - k) as f64;
    let std_errors = xtx_inv
        .diagonal()
        .map(|v| (residual_variance * v).sqrt());

    Ok(OlsFit {
        coefficients,
        std_errors,
        residual_variance,
    })
}
