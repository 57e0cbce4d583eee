//! Realized significance level of the t-test for a few sample sizes.

use anyhow::Result;
use learnbayes_rs::{estimate_significance_with, SignificanceSettings};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Exp, Normal, StandardNormal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let wide = Normal::new(0., 10.)?;
    let skewed = Exp::new(1.)?;

    for (a, b) in [(10, 10), (5, 20), (2, 2)] {
        let settings = SignificanceSettings {
            a,
            b,
            alpha: 0.1,
            trials: 10_000,
        };
        let normal =
            estimate_significance_with(&mut rng, &settings, &StandardNormal, &StandardNormal)?;
        let unequal = estimate_significance_with(&mut rng, &settings, &StandardNormal, &wide)?;
        let exp = estimate_significance_with(&mut rng, &settings, &skewed, &skewed)?;
        println!(
            "a={a:>2} b={b:>2}  normal {:.4}  unequal variance {:.4}  exponential {:.4}",
            normal.rate, unequal.rate, exp.rate
        );
    }
    Ok(())
}
