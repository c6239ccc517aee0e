//! Prints borehole inputs and flow rates as CSV.
//!
//! Run with `cargo run --example borehole_io > borehole.csv`.
//! Set `RUST_LOG=debug` to see sampling diagnostics on stderr.

use tracing_subscriber::EnvFilter;
use twine_core::Model;
use twine_test_functions::{
    models::hydrology::borehole::{self, Borehole},
    support::sampling::SamplingConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = SamplingConfig::default();
    let unit = config.sampler().sample::<{ borehole::N_INPUTS }>(config.n_samples);
    let xx = borehole::rescale_input(&unit)?;
    let flow = Borehole.call(&xx)?;

    println!("rw,r,Tu,Hu,Tl,Hl,L,Kw,flow_rate");
    for (row, y) in xx.rows().iter().zip(flow.iter()) {
        let inputs: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("{},{y}", inputs.join(","));
    }

    Ok(())
}
