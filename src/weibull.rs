//! Posterior of a Weibull proportional-hazards regression.
//!
//! On the log-time scale the model is `log T = mu + x'beta + sigma * W`
//! with `W` following the standard minimum extreme-value distribution.
//! Parameters are `(log sigma, mu, beta_1, ..., beta_p)`.

use faer::{Col, MatRef};
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::math::vector_dot;
use crate::posterior::{evaluate, read_indicator, EvalOptions, LogPosterior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Status code 1, contributes the density.
    Event,
    /// Status code 0, contributes the survival function.
    Censored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeibullObservation {
    pub time: f64,
    pub status: Status,
    pub covariates: Box<[f64]>,
}

#[derive(Debug, Clone)]
pub struct WeibullRegPosterior {
    observations: Vec<WeibullObservation>,
    n_covariates: usize,
}

impl WeibullRegPosterior {
    pub fn new(observations: Vec<WeibullObservation>, n_covariates: usize) -> Result<Self> {
        if let Some(obs) = observations
            .iter()
            .find(|obs| obs.covariates.len() != n_covariates)
        {
            return Err(StatsError::DimensionMismatch {
                expected: n_covariates,
                found: obs.covariates.len(),
            });
        }
        Ok(WeibullRegPosterior {
            observations,
            n_covariates,
        })
    }

    /// Read the dataset from a matrix with columns
    /// `[time, status, covariate_1, ..., covariate_p]`.
    pub fn from_matrix(data: MatRef<'_, f64>) -> Result<Self> {
        // TODO: status 1 is taken as an observed failure. Confirm this against
        // the callers' censoring convention before relying on it.
        if data.ncols() < 2 {
            return Err(StatsError::DimensionMismatch {
                expected: 2,
                found: data.ncols(),
            });
        }
        let n_covariates = data.ncols() - 2;
        let observations = (0..data.nrows())
            .map(|row| -> Result<WeibullObservation> {
                let status = if read_indicator(data, row, 1)? {
                    Status::Event
                } else {
                    Status::Censored
                };
                let covariates = (0..n_covariates).map(|j| data[(row, j + 2)]).collect();
                Ok(WeibullObservation {
                    time: data[(row, 0)],
                    status,
                    covariates,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            observations = observations.len(),
            n_covariates, "loaded weibull regression data"
        );
        Ok(WeibullRegPosterior {
            observations,
            n_covariates,
        })
    }

    pub fn n_covariates(&self) -> usize {
        self.n_covariates
    }
}

impl LogPosterior for WeibullRegPosterior {
    fn dim(&self) -> usize {
        self.n_covariates + 2
    }

    /// Densities and survival probabilities are formed before taking logs,
    /// so a term whose probability underflows to zero contributes `-inf`.
    fn log_density(&self, params: &[f64]) -> f64 {
        let sigma = params[0].exp();
        let mu = params[1];
        let beta = &params[2..];

        self.observations
            .iter()
            .map(|obs| {
                let lp = vector_dot(beta, &obs.covariates);
                let z = (obs.time.ln() - mu - lp) / sigma;
                match obs.status {
                    Status::Event => ((z - z.exp()).exp() / sigma).ln(),
                    Status::Censored => (-z.exp()).exp().ln(),
                }
            })
            .sum()
    }
}

/// Log posterior of the Weibull regression for every row of `theta`.
pub fn weibull_reg_post(theta: MatRef<'_, f64>, data: MatRef<'_, f64>) -> Result<Col<f64>> {
    let post = WeibullRegPosterior::from_matrix(data)?;
    evaluate(&post, theta, &EvalOptions::default())
}
