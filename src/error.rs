use thiserror::Error;

/// Errors raised by input validation and by the strict evaluation paths.
///
/// Numeric degeneracies in the default paths never end up here, they
/// propagate as NaN or infinite values instead.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Expected {expected} columns but found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Invalid indicator {value} in row {row}, column {column} (must be 0 or 1)")]
    InvalidIndicator {
        row: usize,
        column: usize,
        value: f64,
    },
    #[error("A sample needs at least two observations, got {len}")]
    TooFewObservations { len: usize },
    #[error("Degenerate degrees of freedom")]
    DegenerateDegreesOfFreedom,
    #[error("Non-positive pooled variance")]
    NonPositiveVariance,
    #[error("Non-finite value {value} at index {index} of sample {sample}")]
    NonFiniteSample {
        /// 1 for the first sample, 2 for the second.
        sample: usize,
        index: usize,
        value: f64,
    },
    #[error("Non-finite value {value} in row {row}")]
    NonFinite { row: usize, value: f64 },
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
    #[error("Could not construct distribution: {0}")]
    Distribution(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;
