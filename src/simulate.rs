//! Monte Carlo estimate of the true significance level of the two-sample t-test.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::tstat::compute_tstat;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificanceSettings {
    /// Size of the first sample.
    pub a: usize,
    /// Size of the second sample.
    pub b: usize,
    /// Nominal significance level of the two-sided test.
    pub alpha: f64,
    /// Number of simulated data sets.
    pub trials: u64,
}

impl Default for SignificanceSettings {
    fn default() -> SignificanceSettings {
        SignificanceSettings {
            a: 10,
            b: 10,
            alpha: 0.1,
            trials: 1000,
        }
    }
}

impl SignificanceSettings {
    pub fn validate(&self) -> Result<()> {
        if self.a < 2 || self.b < 2 {
            return Err(StatsError::InvalidSettings(format!(
                "sample sizes must be at least 2, got a={} b={}",
                self.a, self.b
            )));
        }
        if !(self.alpha > 0. && self.alpha < 1.) {
            return Err(StatsError::InvalidSettings(format!(
                "alpha must lie in (0, 1), got {}",
                self.alpha
            )));
        }
        if self.trials == 0 {
            return Err(StatsError::InvalidSettings(
                "number of trials must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Degrees of freedom of the reference t distribution.
    ///
    /// Zero when the sample sizes are too small to estimate a variance.
    pub fn df(&self) -> f64 {
        (self.a + self.b).saturating_sub(2) as f64
    }

    /// Two-sided critical value `t*` with `P(T <= t*) = 1 - alpha / 2`.
    pub fn critical_value(&self) -> Result<f64> {
        self.validate()?;
        let dist = StudentsT::new(0., 1., self.df())
            .map_err(|e| StatsError::Distribution(e.to_string()))?;
        Ok(dist.inverse_cdf(1. - self.alpha / 2.))
    }
}

/// Outcome of a significance simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificanceEstimate {
    pub rejections: u64,
    pub trials: u64,
    /// Proportion of trials that rejected the (true) null hypothesis.
    pub rate: f64,
    /// Binomial standard error of `rate`.
    pub std_error: f64,
}

impl SignificanceEstimate {
    fn new(rejections: u64, trials: u64) -> Self {
        let rate = rejections as f64 / trials as f64;
        SignificanceEstimate {
            rejections,
            trials,
            rate,
            std_error: (rate * (1. - rate) / trials as f64).sqrt(),
        }
    }
}

/// Estimate the realized Type-I error rate of the t-test when both
/// samples come from a standard normal population.
pub fn estimate_significance<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &SignificanceSettings,
) -> Result<SignificanceEstimate> {
    estimate_significance_with(rng, settings, &StandardNormal, &StandardNormal)
}

/// Same as [`estimate_significance`] with a generator seeded from `seed`.
///
/// Two calls with the same seed and settings return the same estimate.
pub fn estimate_significance_seeded(
    settings: &SignificanceSettings,
    seed: u64,
) -> Result<SignificanceEstimate> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    estimate_significance(&mut rng, settings)
}

/// Estimate the realized Type-I error rate with samples drawn from
/// arbitrary populations.
///
/// The populations should share a mean, otherwise the result is the power
/// of the test rather than its significance level.
pub fn estimate_significance_with<R, D1, D2>(
    rng: &mut R,
    settings: &SignificanceSettings,
    population1: &D1,
    population2: &D2,
) -> Result<SignificanceEstimate>
where
    R: Rng + ?Sized,
    D1: Distribution<f64> + ?Sized,
    D2: Distribution<f64> + ?Sized,
{
    settings.validate()?;
    let tcrit = settings.critical_value()?;
    debug!(
        a = settings.a,
        b = settings.b,
        alpha = settings.alpha,
        trials = settings.trials,
        tcrit,
        "starting significance simulation"
    );

    let mut x1 = vec![0f64; settings.a];
    let mut x2 = vec![0f64; settings.b];
    let mut rejections = 0u64;
    for _ in 0..settings.trials {
        for v in x1.iter_mut() {
            *v = population1.sample(&mut *rng);
        }
        for v in x2.iter_mut() {
            *v = population2.sample(&mut *rng);
        }
        let t = compute_tstat(&x1, &x2);
        if t.abs() > tcrit {
            rejections += 1;
        }
    }

    let estimate = SignificanceEstimate::new(rejections, settings.trials);
    debug!(
        rejections,
        rate = estimate.rate,
        std_error = estimate.std_error,
        "finished significance simulation"
    );
    Ok(estimate)
}
