//! Augmented Dickey-Fuller test with a constant term.
//!
//! Regression: `dy_t = a + g * y_{t-1} + sum_{i=1..p} b_i * dy_{t-i} + e_t`
//! with a fixed augmentation lag `p`. The statistic is the t-value of `g`.

use nalgebra::{DMatrix, DVector};

use crate::error::StatTestError;
use crate::mackinnon::{critical_values, mackinnon_p_value};
use crate::ols;
use crate::traits::{StationarityTest, UnitRootResult};

// Differences whose spread is below this fraction of the level scale are
// treated as constant.
const CONSTANT_DIFF_TOLERANCE: f64 = 1e-9;

/// ADF test with constant, no trend and a fixed lag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdfTest {
    max_lag: usize,
}

impl Default for AdfTest {
    fn default() -> Self {
        Self { max_lag: 1 }
    }
}

impl AdfTest {
    /// Creates a test with augmentation lag `max_lag`.
    #[must_use]
    pub fn new(max_lag: usize) -> Self {
        Self { max_lag }
    }

    /// Augmentation lag.
    #[must_use]
    pub fn max_lag(&self) -> usize {
        self.max_lag
    }

    fn check_constant_differences(x: &[f64], dx: &[f64]) -> Result<(), StatTestError> {
        let mean = dx.iter().sum::<f64>() / dx.len() as f64;
        let spread = dx.iter().fold(0.0_f64, |acc, v| acc.max((v - mean).abs()));
        let scale = x.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        if spread <= CONSTANT_DIFF_TOLERANCE * scale {
            return Err(StatTestError::degenerate(
                "first differences are constant",
            ));
        }
        Ok(())
    }
}

impl StationarityTest for AdfTest {
    fn name(&self) -> &str {
        "ADF"
    }

    fn min_observations(&self) -> usize {
        (2 * self.max_lag + 5).max(10)
    }

    fn evaluate(&self, series: &[f64]) -> Result<UnitRootResult, StatTestError> {
        let required = self.min_observations();
        if series.len() < required {
            return Err(StatTestError::InsufficientObservations {
                required,
                actual: series.len(),
            });
        }
        if let Some(index) = series.iter().position(|v| !v.is_finite()) {
            return Err(StatTestError::NonFinite { index });
        }

        let lag = self.max_lag;
        let dx: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
        Self::check_constant_differences(series, &dx)?;

        // Columns: constant, lagged level, lagged differences
        let n_obs = dx.len() - lag;
        let n_regressors = 2 + lag;
        let x = DMatrix::from_fn(n_obs, n_regressors, |r, c| {
            let t = r + lag;
            match c {
                0 => 1.0,
                1 => series[t],
                i => dx[t + 1 - i],
            }
        });
        let y = DVector::from_fn(n_obs, |r, _| dx[r + lag]);

        let fit = ols::fit(&x, &y)?;
        let se = fit.std_errors[1];
        if !se.is_finite() || se <= 0.0 {
            return Err(StatTestError::degenerate(format!(
                "standard error of the lagged level is {se}"
            )));
        }
        let statistic = fit.coefficients[1] / se;
        if !statistic.is_finite() {
            return Err(StatTestError::degenerate("non-finite test statistic"));
        }

        Ok(UnitRootResult {
            statistic,
            p_value: mackinnon_p_value(statistic),
            used_lag: lag,
            n_obs,
            critical_values: critical_values(n_obs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcg_noise(n: usize, seed: u64) -> Vec<f64> {
        let mut seed = seed;
        (0..n)
            .map(|_| {
                seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                (seed >> 33) as f64 / f64::from(u32::MAX) - 0.5
            })
            .collect()
    }

    #[test]
    fn test_white_noise_is_stationary() {
        let result = AdfTest::default().evaluate(&lcg_noise(300, 7)).unwrap();
        assert!(result.statistic < result.critical_values.one_pct);
        assert!(result.p_value < 0.01);
        assert!(result.is_stationary(0.05));
        assert_eq!(result.used_lag, 1);
        assert_eq!(result.n_obs, 298);
    }

    #[test]
    fn test_random_walk_with_drift_is_not_stationary() {
        let mut level = 100.0;
        let walk: Vec<f64> = lcg_noise(500, 11)
            .into_iter()
            .map(|u| {
                level += 0.6 + u;
                level
            })
            .collect();

        let result = AdfTest::default().evaluate(&walk).unwrap();
        assert!(result.p_value > 0.5);
        assert!(!result.is_stationary(0.05));
    }

    #[test]
    fn test_constant_series_is_degenerate() {
        let err = AdfTest::default().evaluate(&[5.0; 200]).unwrap_err();
        assert!(matches!(err, StatTestError::Degenerate(_)));
    }

    #[test]
    fn test_linear_trend_is_degenerate() {
        let ramp: Vec<f64> = (1..=100).map(f64::from).collect();
        let err = AdfTest::default().evaluate(&ramp).unwrap_err();
        assert!(matches!(err, StatTestError::Degenerate(_)));
    }

    #[test]
    fn test_short_series_is_insufficient() {
        let err = AdfTest::default().evaluate(&lcg_noise(9, 1)).unwrap_err();
        assert_eq!(
            err,
            StatTestError::InsufficientObservations {
                required: 10,
                actual: 9
            }
        );
        assert_eq!(AdfTest::new(4).min_observations(), 13);
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let mut x = lcg_noise(50, 3);
        x[17] = f64::NAN;
        let err = AdfTest::default().evaluate(&x).unwrap_err();
        assert_eq!(err, StatTestError::NonFinite { index: 17 });
    }

    #[test]
    fn test_higher_lag_reduces_observations() {
        let result = AdfTest::new(3).evaluate(&lcg_noise(120, 99)).unwrap();
        assert_eq!(result.n_obs, 116);
        assert_eq!(result.used_lag, 3);
        assert!(result.p_value.is_finite());
    }
}
