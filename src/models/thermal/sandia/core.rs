//! Truncated series solution for a slab heated at one face.
//!
//! The slab starts at a uniform temperature and receives a constant heat flux
//! `q` at `x = 0`; the opposite face at `x = L` is adiabatic.
//! With `α = k / ρc`, `Fo = α·t / L²`, and `ξ = x / L` the exact solution is
//!
//! ```text
//! T = T₀ + q·L/k · [Fo + 1/3 − ξ + ξ²/2 − (2/π²)·Σ exp(−j²π²·Fo)·cos(jπξ) / j²]
//! ```
//!
//! The sum is truncated after [`SERIES_TERMS`] terms.
//! Below [`EARLY_TIME_THRESHOLD`] the slab is still at its initial temperature
//! and the series is not evaluated.

mod error;

pub use error::ThermalError;

use std::f64::consts::PI;

use ndarray::Array2;

use crate::support::{constraint::NonNegative, matrix::ParameterMatrix, time_grid::TimeGrid};

/// Number of terms kept from the infinite series.
pub const SERIES_TERMS: u32 = 6;

/// Times below this value (in seconds) return the initial temperature.
pub const EARLY_TIME_THRESHOLD: f64 = 1e-6;

/// Evaluates the temperature of every sample at every time.
///
/// Rows of `xx` are `(q, L, k, rho_cp)`.
/// The result has shape `(xx.n_samples(), times.len())`.
///
/// # Errors
///
/// Returns [`ThermalError::NegativeTime`] for the first negative time.
/// No output is produced in that case.
pub(super) fn evaluate(
    xx: &ParameterMatrix<4>,
    times: &TimeGrid,
    x: f64,
    temp_init: f64,
) -> Result<Array2<f64>, ThermalError> {
    check_times(times)?;

    Ok(Array2::from_shape_fn(
        (xx.n_samples(), times.len()),
        |(i, j)| temperature(&xx[i], times[j], x, temp_init),
    ))
}

/// Temperature of one sample at one time and position.
///
/// The time must already be known to be non-negative.
pub(super) fn temperature(row: &[f64; 4], time: f64, x: f64, temp_init: f64) -> f64 {
    if time < EARLY_TIME_THRESHOLD {
        return temp_init;
    }

    let [q, l, k, rho_cp] = *row;
    let fourier = k / rho_cp * time / l.powi(2);
    let xi = x / l;

    let steady = fourier + 1.0 / 3.0 - xi + 0.5 * xi.powi(2);
    temp_init + q * l / k * (steady - series_sum(fourier, xi))
}

/// Truncated transient series, including the `2/π²` prefactor.
fn series_sum(fourier: f64, xi: f64) -> f64 {
    let sum = (1..=SERIES_TERMS).map(f64::from).fold(0.0, |acc, j| {
        let j2 = j * j;
        acc + (-j2 * PI * PI * fourier).exp() * (j * PI * xi).cos() / j2
    });

    2.0 / (PI * PI) * sum
}

fn check_times(times: &TimeGrid) -> Result<(), ThermalError> {
    times.iter().enumerate().try_for_each(|(index, &time)| {
        NonNegative::new(time)
            .map(|_| ())
            .map_err(|_| ThermalError::NegativeTime { index, time })
    })
}
