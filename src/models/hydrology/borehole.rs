//! Borehole flow function.
//!
//! Water flow through a borehole that connects two aquifers, from
//! Morris, Mitchell, and Ylvisaker (1993):
//!
//! ```text
//! y = 2π·Tu·(Hu − Hl) / ln(r/rw) / (1 + 2·L·Tu / (ln(r/rw)·rw²·Kw) + Tu/Tl)
//! ```
//!
//! The output is a flow rate in m³/year.
//!
//! The bounds on `Kw` are the widened range from Morris et al., which
//! introduces more non-linearity and interaction than the original range.
//!
//! # Example
//!
//! ```
//! use twine_test_functions::models::hydrology::borehole;
//! use twine_test_functions::support::sampling::UnitCubeSampler;
//!
//! let unit = UnitCubeSampler::seeded(97752).sample::<8>(500);
//! let xx = borehole::rescale_input(&unit).unwrap();
//! let y = borehole::eval(&xx);
//!
//! assert_eq!(y.len(), 500);
//! assert!(y.iter().all(|flow| *flow > 0.0));
//! ```

use std::{convert::Infallible, f64::consts::PI};

use ndarray::Array1;
use twine_core::Model;

use crate::support::{
    matrix::{MatrixError, ParameterMatrix},
    rescale::{Bounds, rescale},
};

/// Number of input parameters.
pub const N_INPUTS: usize = 8;

/// Physical bounds of each column, in order `rw, r, Tu, Hu, Tl, Hl, L, Kw`.
pub const BOUNDS: [Bounds; N_INPUTS] = [
    Bounds::new(0.05, 0.15),          // rw [m]
    Bounds::new(100.0, 50_000.0),     // r [m]
    Bounds::new(63_070.0, 115_600.0), // Tu [m²/year]
    Bounds::new(990.0, 1_110.0),      // Hu [m]
    Bounds::new(63.1, 116.0),         // Tl [m²/year]
    Bounds::new(700.0, 820.0),        // Hl [m]
    Bounds::new(1_120.0, 1_680.0),    // L [m]
    Bounds::new(1_500.0, 15_000.0),   // Kw [m/year]
];

/// Borehole parameters for a single sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoreholeInput {
    /// Radius of the borehole [m].
    pub rw: f64,
    /// Radius of influence [m].
    pub r: f64,
    /// Transmissivity of the upper aquifer [m²/year].
    pub tu: f64,
    /// Potentiometric head of the upper aquifer [m].
    pub hu: f64,
    /// Transmissivity of the lower aquifer [m²/year].
    pub tl: f64,
    /// Potentiometric head of the lower aquifer [m].
    pub hl: f64,
    /// Length of the borehole [m].
    pub l: f64,
    /// Hydraulic conductivity of the borehole [m/year].
    pub kw: f64,
}

impl BoreholeInput {
    /// Reads a matrix row in column order.
    #[must_use]
    pub fn from_row(row: &[f64; N_INPUTS]) -> Self {
        let [rw, r, tu, hu, tl, hl, l, kw] = *row;
        Self {
            rw,
            r,
            tu,
            hu,
            tl,
            hl,
            l,
            kw,
        }
    }

    /// Writes the parameters as a matrix row in column order.
    #[must_use]
    pub fn to_row(&self) -> [f64; N_INPUTS] {
        [
            self.rw, self.r, self.tu, self.hu, self.tl, self.hl, self.l, self.kw,
        ]
    }

    /// Flow rate through the borehole [m³/year].
    ///
    /// `r == rw` yields a non-finite result and `tl == 0` drives the flow to
    /// zero. Neither is reported as an error.
    #[must_use]
    pub fn flow_rate(&self) -> f64 {
        let log_ratio = (self.r / self.rw).ln();
        let resistance = 1.0
            + 2.0 * self.l * self.tu / (log_ratio * self.rw.powi(2) * self.kw)
            + self.tu / self.tl;

        2.0 * PI * self.tu * (self.hu - self.hl) / log_ratio / resistance
    }
}

/// Rescales normalized inputs onto the borehole parameter [`BOUNDS`].
///
/// # Errors
///
/// Returns [`MatrixError::NonFinite`] if an out-of-range input overflows.
pub fn rescale_input(
    xx: &ParameterMatrix<N_INPUTS>,
) -> Result<ParameterMatrix<N_INPUTS>, MatrixError> {
    rescale(xx, &BOUNDS)
}

/// Evaluates the flow rate for each sample of rescaled inputs.
#[must_use]
pub fn eval(xx: &ParameterMatrix<N_INPUTS>) -> Array1<f64> {
    xx.rows()
        .iter()
        .map(|row| BoreholeInput::from_row(row).flow_rate())
        .collect()
}

/// [`Model`] adapter for the borehole function.
///
/// Takes rescaled inputs and returns one flow rate per sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct Borehole;

impl Model for Borehole {
    type Input = ParameterMatrix<N_INPUTS>;
    type Output = Array1<f64>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(eval(input))
    }
}
