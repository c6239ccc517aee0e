//! One-dimensional dampened cosine.
//!
//! `y(x) = exp(-1.4·x)·cos(3.5·π·x)`, from Santner, Williams, and Notz,
//! *The Design and Analysis of Computer Experiments* (2003), p. 56.
//!
//! The nominal domain is `[0, 1]`, but any real input is accepted.
//! Unit-cube samples already lie on that domain, so [`rescale_input`] is the
//! identity on in-range values.
//!
//! # Example
//!
//! ```
//! use twine_test_functions::models::analytic::dampened_cosine;
//! use twine_test_functions::support::sampling::UnitCubeSampler;
//!
//! let unit = UnitCubeSampler::seeded(97752).sample::<1>(500);
//! let xx = dampened_cosine::rescale_input(&unit).unwrap();
//! let y = dampened_cosine::eval_samples(&xx);
//!
//! assert_eq!(y.len(), 500);
//! ```

use std::{convert::Infallible, f64::consts::PI};

use ndarray::Array1;
use twine_core::Model;

use crate::support::{
    matrix::{MatrixError, ParameterMatrix},
    rescale::{Bounds, rescale},
};

/// Number of input parameters.
pub const N_INPUTS: usize = 1;

/// Nominal domain of `x`.
pub const BOUNDS: [Bounds; N_INPUTS] = [Bounds::new(0.0, 1.0)];

const DECAY_RATE: f64 = 1.4;
const ANGULAR_FREQUENCY: f64 = 3.5 * PI;

/// Evaluates the function at a single point.
///
/// ```
/// use twine_test_functions::models::analytic::dampened_cosine;
///
/// assert_eq!(dampened_cosine::value(0.0), 1.0);
/// ```
#[must_use]
pub fn value(x: f64) -> f64 {
    (-DECAY_RATE * x).exp() * (ANGULAR_FREQUENCY * x).cos()
}

/// Evaluates the function at each point of `x`.
#[must_use]
pub fn eval(x: &[f64]) -> Array1<f64> {
    x.iter().copied().map(value).collect()
}

/// Rescales normalized inputs onto [`BOUNDS`].
///
/// # Errors
///
/// Returns [`MatrixError::NonFinite`] if an out-of-range input overflows.
pub fn rescale_input(
    xx: &ParameterMatrix<N_INPUTS>,
) -> Result<ParameterMatrix<N_INPUTS>, MatrixError> {
    rescale(xx, &BOUNDS)
}

/// Evaluates the function at each sample of a one-column matrix.
#[must_use]
pub fn eval_samples(xx: &ParameterMatrix<N_INPUTS>) -> Array1<f64> {
    xx.column(0).map(value).collect()
}

/// [`Model`] adapter for the dampened cosine.
#[derive(Debug, Clone, Copy, Default)]
pub struct DampenedCosine;

impl Model for DampenedCosine {
    type Input = Vec<f64>;
    type Output = Array1<f64>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(eval(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use crate::support::sampling::UnitCubeSampler;

    #[test]
    fn origin_is_exactly_one() {
        assert_eq!(value(0.0), 1.0);
        assert_eq!(eval(&[0.0])[0], 1.0);
    }

    #[test]
    fn known_values() {
        let y = eval(&[0.5, 1.0]);

        assert_abs_diff_eq!(y[0], 0.351_138_835_748_487_4, epsilon = 1e-14);
        // cos(3.5π) vanishes at the right end of the domain.
        assert_abs_diff_eq!(y[1], 0.0, epsilon = 1e-14);
    }

    #[test]
    fn output_length_matches_input() {
        assert!(eval(&[]).is_empty());

        let x: Vec<f64> = (0..=100).map(|i| f64::from(i) / 100.0).collect();
        let y = DampenedCosine.call(&x).unwrap();
        assert_eq!(y.len(), x.len());
    }

    #[test]
    fn samples_match_pointwise_eval() {
        let unit = UnitCubeSampler::seeded(97752).sample::<1>(500);
        let xx = rescale_input(&unit).unwrap();
        assert_eq!(xx, unit);

        let x: Vec<f64> = xx.column(0).collect();
        assert_eq!(eval_samples(&xx), eval(&x));
        assert!(eval_samples(&xx).iter().all(|y| y.abs() <= 1.0));
    }

    #[test]
    fn envelope_bounds_magnitude() {
        for i in -50..=150 {
            let x = f64::from(i) / 100.0;
            assert!(value(x).abs() <= (-DECAY_RATE * x).exp() + 1e-15);
        }
    }
}
