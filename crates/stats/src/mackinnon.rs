//! MacKinnon response-surface approximations for the Dickey-Fuller
//! distribution with a constant and no trend.
//!
//! p-values follow MacKinnon (1994), critical values MacKinnon (2010).

use std::f64::consts::SQRT_2;

use statrs::function::erf::erfc;

// Statistics at or above this are assigned p = 1.
const TAU_MAX: f64 = 2.74;
// Statistics at or below this are assigned p = 0.
const TAU_MIN: f64 = -18.83;
// Switch point between the small-p and large-p polynomials.
const TAU_STAR: f64 = -1.61;

// Polynomial coefficients in increasing powers of the statistic.
const TAU_SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038_269];
const TAU_LARGE_P: [f64; 4] = [1.7339, 0.932_02, -0.127_45, -0.010_368];

// Response surface b0 + b1/T + b2/T^2 + b3/T^3.
const CRIT_1PCT: [f64; 4] = [-3.430_35, -6.5393, -16.786, -79.433];
const CRIT_5PCT: [f64; 4] = [-2.861_54, -2.8903, -4.234, -40.040];
const CRIT_10PCT: [f64; 4] = [-2.566_77, -1.5384, -2.809, 0.0];

/// Critical values of the test statistic for a given sample size.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CriticalValues {
    /// 1% critical value
    pub one_pct: f64,
    /// 5% critical value
    pub five_pct: f64,
    /// 10% critical value
    pub ten_pct: f64,
}

fn polyval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// Approximate p-value of a Dickey-Fuller statistic (constant, no trend).
///
/// Returns `NaN` for a `NaN` statistic.
#[must_use]
pub fn mackinnon_p_value(statistic: f64) -> f64 {
    if statistic.is_nan() {
        return f64::NAN;
    }
    if statistic > TAU_MAX {
        return 1.0;
    }
    if statistic < TAU_MIN {
        return 0.0;
    }
    let z = if statistic <= TAU_STAR {
        polyval(&TAU_SMALL_P, statistic)
    } else {
        polyval(&TAU_LARGE_P, statistic)
    };
    standard_normal_cdf(z)
}

/// Finite-sample critical values for `n_obs` regression observations.
#[must_use]
pub fn critical_values(n_obs: usize) -> CriticalValues {
    let inv = 1.0 / n_obs.max(1) as f64;
    CriticalValues {
        one_pct: polyval(&CRIT_1PCT, inv),
        five_pct: polyval(&CRIT_5PCT, inv),
        ten_pct: polyval(&CRIT_10PCT, inv),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_p_value_at_known_points() {
        assert_abs_diff_eq!(mackinnon_p_value(-2.86), 0.0502, epsilon = 1e-3);
        assert_abs_diff_eq!(mackinnon_p_value(-3.43), 0.01, epsilon = 1e-3);
        assert_abs_diff_eq!(mackinnon_p_value(-2.57), 0.10, epsilon = 5e-3);
    }

    #[test]
    fn test_p_value_clamped_outside_support() {
        assert_eq!(mackinnon_p_value(3.0), 1.0);
        assert_eq!(mackinnon_p_value(-25.0), 0.0);
        assert!(mackinnon_p_value(f64::NAN).is_nan());
    }

    #[test]
    fn test_p_value_continuous_at_switch_point() {
        let below = mackinnon_p_value(TAU_STAR);
        let above = mackinnon_p_value(TAU_STAR + 1e-9);
        assert_abs_diff_eq!(below, above, epsilon = 1e-3);
    }

    #[test]
    fn test_p_value_non_decreasing() {
        let mut previous = 0.0;
        let mut t = TAU_MIN;
        while t <= TAU_MAX {
            let p = mackinnon_p_value(t);
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= previous - 1e-3, "p-value dropped at {t}");
            previous = p;
            t += 0.01;
        }
    }

    #[test]
    fn test_critical_values_for_hundred_observations() {
        let cv = critical_values(100);
        assert_abs_diff_eq!(cv.one_pct, -3.4977, epsilon = 1e-3);
        assert_abs_diff_eq!(cv.five_pct, -2.8909, epsilon = 1e-3);
        assert_abs_diff_eq!(cv.ten_pct, -2.5825, epsilon = 1e-3);
        assert!(cv.one_pct < cv.five_pct && cv.five_pct < cv.ten_pct);
    }
}
