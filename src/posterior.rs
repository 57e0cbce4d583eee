use faer::{Col, MatRef};
use rayon::prelude::*;
use tracing::warn;

use crate::error::{Result, StatsError};

/// An unnormalized log posterior density over a fixed number of parameters.
///
/// Implementations hold their data and evaluate one parameter vector at a
/// time. Samplers and mode finders call [`evaluate`] with a matrix of
/// draws, one draw per row.
pub trait LogPosterior: Sync {
    /// Number of parameters in a single draw.
    fn dim(&self) -> usize;

    /// Log posterior of a single draw, up to an additive constant.
    ///
    /// `params.len()` is always `self.dim()`. Numeric problems such as the
    /// logarithm of a non-positive value show up as NaN or infinite values.
    fn log_density(&self, params: &[f64]) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalOptions {
    /// Evaluate draws on the rayon thread pool.
    pub parallel: bool,
    /// Report the first non-finite value as [`StatsError::NonFinite`].
    pub strict: bool,
}

impl EvalOptions {
    pub fn parallel() -> Self {
        EvalOptions {
            parallel: true,
            ..Default::default()
        }
    }

    pub fn strict() -> Self {
        EvalOptions {
            strict: true,
            ..Default::default()
        }
    }
}

/// Read a 0/1 indicator from a dataset matrix.
pub(crate) fn read_indicator(data: MatRef<'_, f64>, row: usize, column: usize) -> Result<bool> {
    let value = data[(row, column)];
    if value == 0. {
        Ok(false)
    } else if value == 1. {
        Ok(true)
    } else {
        Err(StatsError::InvalidIndicator { row, column, value })
    }
}

fn read_row(theta: MatRef<'_, f64>, row: usize, out: &mut [f64]) {
    for (col, val) in out.iter_mut().enumerate() {
        *val = theta[(row, col)];
    }
}

/// Evaluate `post` for every row of `theta`.
///
/// The result has one value per row, in row order. Each value depends
/// only on its own row.
pub fn evaluate<P: LogPosterior + ?Sized>(
    post: &P,
    theta: MatRef<'_, f64>,
    options: &EvalOptions,
) -> Result<Col<f64>> {
    let dim = post.dim();
    if theta.ncols() != dim {
        return Err(StatsError::DimensionMismatch {
            expected: dim,
            found: theta.ncols(),
        });
    }

    let n = theta.nrows();
    let values: Vec<f64> = if options.parallel {
        (0..n)
            .into_par_iter()
            .map_init(
                || vec![0f64; dim],
                |buffer, row| {
                    read_row(theta, row, buffer);
                    post.log_density(buffer)
                },
            )
            .collect()
    } else {
        let mut buffer = vec![0f64; dim];
        (0..n)
            .map(|row| {
                read_row(theta, row, &mut buffer);
                post.log_density(&buffer)
            })
            .collect()
    };

    if options.strict {
        if let Some((row, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            warn!(row, value, "non-finite log posterior");
            return Err(StatsError::NonFinite { row, value });
        }
    }

    Ok(Col::from_fn(n, |i| values[i]))
}


#[cfg(test)]
mod tests {
    use super::test_posteriors::{values, NormalPosterior};
    use super::*;
    use faer::Mat;
    use pretty_assertions::assert_eq;

    #[test]
    fn check_rows_in_order() {
        let post = NormalPosterior { dim: 2 };
        let theta = Mat::from_fn(5, 2, |i, j| (i + j) as f64);
        let out = evaluate(&post, theta.as_ref(), &EvalOptions::default()).unwrap();
        let expected: Vec<f64> = (0..5)
            .map(|i| {
                let (a, b) = (i as f64, (i + 1) as f64);
                -(a * a + b * b) / 2.
            })
            .collect();
        assert_eq!(values(&out), expected.as_slice());
    }

    #[test]
    fn check_parallel_matches_serial() {
        let post = NormalPosterior { dim: 3 };
        let theta = Mat::from_fn(257, 3, |i, j| ((i * 7 + j * 3) % 11) as f64 / 3. - 1.);
        let serial = evaluate(&post, theta.as_ref(), &EvalOptions::default()).unwrap();
        let parallel = evaluate(&post, theta.as_ref(), &EvalOptions::parallel()).unwrap();
        assert_eq!(values(&serial), values(&parallel));
    }

    #[test]
    fn check_dimension_mismatch() {
        let post = NormalPosterior { dim: 3 };
        let theta = Mat::<f64>::zeros(4, 2);
        let err = evaluate(&post, theta.as_ref(), &EvalOptions::default()).unwrap_err();
        assert_eq!(
            err,
            StatsError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn check_empty_theta() {
        let post = NormalPosterior { dim: 2 };
        let theta = Mat::<f64>::zeros(0, 2);
        let out = evaluate(&post, theta.as_ref(), &EvalOptions::default()).unwrap();
        assert_eq!(out.nrows(), 0);
    }

    #[test]
    fn check_strict_reports_row() {
        let post = NormalPosterior { dim: 1 };
        let theta = Mat::from_fn(3, 1, |i, _| if i == 1 { f64::NAN } else { 1. });
        let loose = evaluate(&post, theta.as_ref(), &EvalOptions::default()).unwrap();
        assert!(values(&loose)[1].is_nan());
        let err = evaluate(&post, theta.as_ref(), &EvalOptions::strict()).unwrap_err();
        assert!(matches!(err, StatsError::NonFinite { row: 1, .. }));
    }
}
