//! Two-sample t-statistic with a pooled variance estimate.

use crate::error::{Result, StatsError};
use crate::math::{mean, sample_variance};

/// The t-statistic together with the quantities it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TStatistic {
    pub t: f64,
    /// Degrees of freedom, `a + b - 2`.
    pub df: f64,
    pub pooled_sd: f64,
}

/// Pooled standard deviation of two samples, assuming a common variance.
///
/// Non-finite when either sample has fewer than two values.
pub fn pooled_sd(x1: &[f64], x2: &[f64]) -> f64 {
    let a = x1.len() as f64;
    let b = x2.len() as f64;
    let ss = (a - 1.) * sample_variance(x1) + (b - 1.) * sample_variance(x2);
    (ss / (a + b - 2.)).sqrt()
}

pub fn tstat_summary(x1: &[f64], x2: &[f64]) -> TStatistic {
    let a = x1.len() as f64;
    let b = x2.len() as f64;
    let sp = pooled_sd(x1, x2);
    let t = (mean(x1) - mean(x2)) / (sp * (1. / a + 1. / b).sqrt());
    TStatistic {
        t,
        df: a + b - 2.,
        pooled_sd: sp,
    }
}

/// Two-sample pooled-variance t-statistic.
///
/// Degenerate samples (a single value, all values equal) give NaN or an
/// infinite value instead of an error. Use [`try_compute_tstat`] to have
/// them reported.
pub fn compute_tstat(x1: &[f64], x2: &[f64]) -> f64 {
    tstat_summary(x1, x2).t
}

/// Like [`compute_tstat`], but degenerate input is an error.
pub fn try_compute_tstat(x1: &[f64], x2: &[f64]) -> Result<f64> {
    if x1.len() + x2.len() <= 2 {
        return Err(StatsError::DegenerateDegreesOfFreedom);
    }
    for x in [x1, x2] {
        if x.len() < 2 {
            return Err(StatsError::TooFewObservations { len: x.len() });
        }
    }
    for (sample, x) in [(1, x1), (2, x2)] {
        if let Some((index, &value)) = x.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(StatsError::NonFiniteSample {
                sample,
                index,
                value,
            });
        }
    }

    let summary = tstat_summary(x1, x2);
    if !(summary.pooled_sd > 0.) {
        return Err(StatsError::NonPositiveVariance);
    }
    Ok(summary.t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn check_antisymmetric(
            x1 in prop::collection::vec(-50f64..50f64, 2..30),
            x2 in prop::collection::vec(-50f64..50f64, 2..30),
        ) {
            let t12 = compute_tstat(&x1, &x2);
            let t21 = compute_tstat(&x2, &x1);
            if t12.is_finite() {
                prop_assert!((t12 + t21).abs() <= 1e-10 * (1. + t12.abs()));
            }
        }

        #[test]
        fn check_identical_samples(x in prop::collection::vec(-50f64..50f64, 2..30)) {
            let t = compute_tstat(&x, &x);
            prop_assume!(sample_variance(&x) > 0.);
            prop_assert_eq!(t, 0.);
        }
    }

    #[test]
    fn check_known_value() {
        let x1 = [1., 2., 3., 4., 5.];
        let x2 = [2., 4., 6.];
        // var(x1) = 2.5, var(x2) = 4, sp^2 = (4 * 2.5 + 2 * 4) / 6 = 3
        let summary = tstat_summary(&x1, &x2);
        assert_eq!(summary.df, 6.);
        assert_relative_eq!(summary.pooled_sd, 3f64.sqrt());
        let expected = -1. / (3f64.sqrt() * (1. / 5. + 1. / 3f64).sqrt());
        assert_relative_eq!(summary.t, expected, epsilon = 1e-12);
    }

    #[test]
    fn check_degenerate_is_not_finite() {
        assert!(!compute_tstat(&[1.], &[2.]).is_finite());
        assert!(!compute_tstat(&[1.], &[2., 3., 4.]).is_finite());
        assert!(!compute_tstat(&[1., 1.], &[2., 2.]).is_finite());
        assert!(compute_tstat(&[1., 1.], &[1., 1.]).is_nan());
    }

    #[test]
    fn check_strict_errors() {
        assert_eq!(
            try_compute_tstat(&[1.], &[2.]),
            Err(StatsError::DegenerateDegreesOfFreedom)
        );
        assert_eq!(
            try_compute_tstat(&[1.], &[2., 3.]),
            Err(StatsError::TooFewObservations { len: 1 })
        );
        assert_eq!(
            try_compute_tstat(&[1., 1.], &[2., 2.]),
            Err(StatsError::NonPositiveVariance)
        );
        assert_eq!(
            try_compute_tstat(&[1., 2.], &[2., f64::INFINITY]),
            Err(StatsError::NonFiniteSample {
                sample: 2,
                index: 1,
                value: f64::INFINITY
            })
        );
        assert!(matches!(
            try_compute_tstat(&[f64::NAN, 2.], &[2., 3.]),
            Err(StatsError::NonFiniteSample {
                sample: 1,
                index: 0,
                ..
            })
        ));
        let t = try_compute_tstat(&[1., 2., 3.], &[2., 3., 5.]).unwrap();
        assert_eq!(t, compute_tstat(&[1., 2., 3.], &[2., 3., 5.]));
    }
}
