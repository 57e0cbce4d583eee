//! Log posterior of the heart-transplant model on a grid of `log p`.

use anyhow::Result;
use faer::Mat;
use learnbayes_rs::{evaluate, EvalOptions, TransplantPosterior};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // survival, transplanted, wait, censored
    let rows = [
        [15., 0., 0., 0.],
        [3., 0., 0., 0.],
        [624., 0., 0., 0.],
        [46., 0., 0., 0.],
        [127., 0., 0., 0.],
        [1400., 0., 0., 1.],
        [50., 1., 11., 0.],
        [1030., 1., 5., 1.],
        [312., 1., 27., 0.],
        [24., 1., 19., 0.],
    ];
    let data = Mat::from_fn(rows.len(), 4, |i, j| rows[i][j]);
    let post = TransplantPosterior::from_matrix(data.as_ref())?;

    let grid: Vec<f64> = (0..21).map(|i| -2. + 0.2 * i as f64).collect();
    let theta = Mat::from_fn(grid.len(), 3, |i, j| match j {
        0 => -0.5,
        1 => 3.0,
        _ => grid[i],
    });
    let values = evaluate(&post, theta.as_ref(), &EvalOptions::strict())?;
    for (i, log_p) in grid.iter().enumerate() {
        let value = values.as_ref()[i];
        println!("log p = {log_p:>5.2}  log posterior = {value:.4}");
    }
    Ok(())
}
