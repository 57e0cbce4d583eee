use faer::{Col, MatRef};
use statrs::distribution::{Continuous, StudentsT};

use crate::error::{Result, StatsError};
use crate::posterior::{evaluate, EvalOptions, LogPosterior};

/// Posterior of a Cauchy location-scale model with parameters
/// `(mu, log sigma)` and a flat prior on that scale.
#[derive(Debug, Clone)]
pub struct CauchyPosterior {
    y: Vec<f64>,
    standard: StudentsT,
}

impl CauchyPosterior {
    pub fn new(y: Vec<f64>) -> Result<Self> {
        let standard =
            StudentsT::new(0., 1., 1.).map_err(|e| StatsError::Distribution(e.to_string()))?;
        Ok(CauchyPosterior { y, standard })
    }

    pub fn observations(&self) -> &[f64] {
        &self.y
    }
}

impl LogPosterior for CauchyPosterior {
    fn dim(&self) -> usize {
        2
    }

    fn log_density(&self, params: &[f64]) -> f64 {
        let mu = params[0];
        let log_sigma = params[1];
        let sigma = log_sigma.exp();
        self.y
            .iter()
            .map(|&y| self.standard.ln_pdf((y - mu) / sigma) - log_sigma)
            .sum()
    }
}

/// Log posterior of the Cauchy model for every row of `theta`.
pub fn cauchy_error_post(theta: MatRef<'_, f64>, y: &[f64]) -> Result<Col<f64>> {
    let post = CauchyPosterior::new(y.to_vec())?;
    evaluate(&post, theta, &EvalOptions::default())
}
