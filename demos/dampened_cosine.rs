//! Prints the dampened cosine on a regular grid and at seeded random draws.
//!
//! Output columns are `source,x,y`, where `source` is `grid` for the
//! 100-point grid over `[0, 1]` and `sample` for the random draws.
//! Run with `cargo run --example dampened_cosine > cosine.csv`.

use tracing::info;
use tracing_subscriber::EnvFilter;
use twine_core::Model;
use twine_test_functions::{
    models::analytic::dampened_cosine::{self, DampenedCosine},
    support::sampling::SamplingConfig,
};

const N_GRID: u32 = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let grid: Vec<f64> = (0..N_GRID)
        .map(|i| f64::from(i) / f64::from(N_GRID - 1))
        .collect();
    let y_grid = DampenedCosine.call(&grid)?;

    let config = SamplingConfig::default();
    let unit = config.sampler().sample::<{ dampened_cosine::N_INPUTS }>(config.n_samples);
    let xx = dampened_cosine::rescale_input(&unit)?;
    let y_samples = dampened_cosine::eval_samples(&xx);

    let mean = y_samples.mean().unwrap_or(f64::NAN);
    info!(n_samples = xx.n_samples(), mean, "dampened cosine sampled");

    println!("source,x,y");
    for (x, y) in grid.iter().zip(y_grid.iter()) {
        println!("grid,{x},{y}");
    }
    for (x, y) in xx.column(0).zip(y_samples.iter()) {
        println!("sample,{x},{y}");
    }

    Ok(())
}
