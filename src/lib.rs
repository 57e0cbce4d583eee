//! Posterior densities and t-test simulations from a Bayesian statistics course.
//!
//! The posterior functions take a matrix of parameter draws (one draw per
//! row) and return one unnormalized log posterior value per draw, which is
//! the shape expected by mode finders and random-walk Metropolis samplers.

pub(crate) mod cauchy;
pub(crate) mod error;
pub(crate) mod math;
pub(crate) mod posterior;
pub(crate) mod simulate;
pub(crate) mod transplant;
pub(crate) mod tstat;
pub(crate) mod weibull;

pub use cauchy::{cauchy_error_post, CauchyPosterior};
pub use error::{Result, StatsError};
pub use posterior::{evaluate, EvalOptions, LogPosterior};
pub use simulate::{
    estimate_significance, estimate_significance_seeded, estimate_significance_with,
    SignificanceEstimate, SignificanceSettings,
};
pub use transplant::{transplant_post, Outcome, Transplant, TransplantPosterior, TransplantRecord};
pub use tstat::{compute_tstat, pooled_sd, try_compute_tstat, tstat_summary, TStatistic};
pub use weibull::{weibull_reg_post, Status, WeibullObservation, WeibullRegPosterior};
