//! Posterior of the Stanford heart-transplant survival model.
//!
//! Parameters are `(log tau, log lambda, log p)`. Survival without a
//! transplant follows a Pareto type-II distribution with scale `lambda`
//! and shape `p`. A transplant after waiting `z` days shifts the time origin
//! by `tau * z`. The prior is flat on the log scale, which adds the
//! log-Jacobian `log tau + log lambda + log p`.

use faer::{Col, MatRef};
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::posterior::{evaluate, read_indicator, EvalOptions, LogPosterior};

const DATA_COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Died,
    Censored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transplant {
    No,
    /// Transplant received after waiting this long.
    After(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransplantRecord {
    /// Survival time, measured after the transplant for transplanted patients.
    pub survival: f64,
    pub transplant: Transplant,
    pub outcome: Outcome,
}

#[derive(Debug, Clone)]
pub struct TransplantPosterior {
    records: Vec<TransplantRecord>,
}

impl TransplantPosterior {
    pub fn new(records: Vec<TransplantRecord>) -> Self {
        TransplantPosterior { records }
    }

    /// Read the dataset from a matrix with columns
    /// `[survival time, transplant indicator, time to transplant, censoring indicator]`.
    ///
    /// A censoring indicator of 0 means the patient died, 1 means the
    /// observation is censored.
    pub fn from_matrix(data: MatRef<'_, f64>) -> Result<Self> {
        if data.ncols() != DATA_COLUMNS {
            return Err(StatsError::DimensionMismatch {
                expected: DATA_COLUMNS,
                found: data.ncols(),
            });
        }
        let records = (0..data.nrows())
            .map(|row| -> Result<TransplantRecord> {
                let transplant = if read_indicator(data, row, 1)? {
                    Transplant::After(data[(row, 2)])
                } else {
                    Transplant::No
                };
                let outcome = if read_indicator(data, row, 3)? {
                    Outcome::Censored
                } else {
                    Outcome::Died
                };
                Ok(TransplantRecord {
                    survival: data[(row, 0)],
                    transplant,
                    outcome,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(records = records.len(), "loaded transplant data");
        Ok(TransplantPosterior { records })
    }

    pub fn records(&self) -> &[TransplantRecord] {
        &self.records
    }
}

impl LogPosterior for TransplantPosterior {
    fn dim(&self) -> usize {
        3
    }

    fn log_density(&self, params: &[f64]) -> f64 {
        let tau = params[0].exp();
        let lambda = params[1].exp();
        let p = params[2].exp();

        let mut val = 0f64;
        for record in self.records.iter() {
            let (shifted, log_p) = match record.transplant {
                Transplant::No => (lambda + record.survival, p.ln()),
                Transplant::After(wait) => {
                    (lambda + record.survival + tau * wait, (p * tau).ln())
                }
            };
            val += match record.outcome {
                Outcome::Died => p * lambda.ln() + log_p - (p + 1.) * shifted.ln(),
                Outcome::Censored => p * (lambda / shifted).ln(),
            };
        }
        val + params[0] + params[1] + params[2]
    }
}

/// Log posterior of the transplant model for every row of `theta`.
pub fn transplant_post(theta: MatRef<'_, f64>, data: MatRef<'_, f64>) -> Result<Col<f64>> {
    let post = TransplantPosterior::from_matrix(data)?;
    evaluate(&post, theta, &EvalOptions::default())
}
