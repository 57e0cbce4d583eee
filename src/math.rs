use itertools::izip;

#[inline]
pub(crate) fn mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

/// Unbiased sample variance (denominator `n - 1`).
///
/// Returns NaN for fewer than two values.
pub(crate) fn sample_variance(x: &[f64]) -> f64 {
    let n = x.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(x);
    let ss: f64 = x.iter().map(|&v| (v - m) * (v - m)).sum();
    ss / (n - 1) as f64
}

#[inline]
pub(crate) fn vector_dot(a: &[f64], b: &[f64]) -> f64 {
    assert!(a.len() == b.len());
    izip!(a, b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn check_variance_shift_invariant(
            x in prop::collection::vec(-100f64..100f64, 2..50),
            shift in -10f64..10f64,
        ) {
            let shifted: Vec<f64> = x.iter().map(|v| v + shift).collect();
            let a = sample_variance(&x);
            let b = sample_variance(&shifted);
            prop_assert!((a - b).abs() < 1e-8 * (1. + a.abs()));
            prop_assert!(a >= 0.);
        }
    }

    #[test]
    fn check_variance() {
        assert_relative_eq!(sample_variance(&[1., 2., 3., 4.]), 5. / 3.);
        assert_eq!(sample_variance(&[2., 2., 2.]), 0.);
        assert!(sample_variance(&[1.]).is_nan());
        assert_eq!(mean(&[1., 2., 6.]), 3.);
    }

    #[test]
    fn check_dot() {
        assert_eq!(vector_dot(&[1., 2., 3.], &[4., 5., 6.]), 32.);
        assert_eq!(vector_dot(&[], &[]), 0.);
    }
}
