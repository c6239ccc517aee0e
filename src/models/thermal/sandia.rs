//! Sandia thermal challenge problem.
//!
//! Transient temperature of a slab heated by a constant flux at one face, from
//! Dowding, Pilch, and Hills, "Formulation of the Thermal Problem" (2008).
//!
//! The model has four inputs, in column order:
//!
//! 1. `q`, heat flux at the slab surface [W/m²]
//! 2. `L`, slab thickness [m]
//! 3. `k`, thermal conductivity [W/(m·K)]
//! 4. `rho_cp`, volumetric heat capacity [J/(m³·K)]
//!
//! `q` and `L` are control variables; `k` and `rho_cp` are the uncertain
//! material properties.
//! The temperature is read at a fixed lateral position `x` over a grid of times.
//!
//! # Example
//!
//! ```
//! use twine_test_functions::models::thermal::sandia;
//! use twine_test_functions::support::{matrix::ParameterMatrix, time_grid::TimeGrid};
//!
//! let xx = ParameterMatrix::new(vec![[3000.0, 0.0127, 0.05, 0.4e6]]).unwrap();
//! let t = TimeGrid::linspace(0.0, 1000.0, 11).unwrap();
//!
//! let field = sandia::eval(&xx, &t, 0.0, 25.0).unwrap();
//! assert_eq!(field.dim(), (1, 11));
//! assert_eq!(field[[0, 0]], 25.0);
//! ```

mod configuration;
mod core;
mod slab;

pub use configuration::{Configuration, REGULATORY_TEMPERATURE_K};
pub use self::core::{EARLY_TIME_THRESHOLD, SERIES_TERMS, ThermalError};
pub use slab::SlabProperties;

use ndarray::Array2;
use twine_core::Model;
use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::meter,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    matrix::{MatrixError, ParameterMatrix},
    rescale::{Bounds, rescale},
    time_grid::TimeGrid,
};

/// Number of input parameters.
pub const N_INPUTS: usize = 4;

/// Physical bounds of each column, in order `q, L, k, rho_cp`.
pub const BOUNDS: [Bounds; N_INPUTS] = [
    Bounds::new(1_000.0, 3_500.0), // q [W/m²]
    Bounds::new(1.27e-2, 2.54e-2), // L [m]
    Bounds::new(0.0455, 0.0811),   // k [W/(m·K)]
    Bounds::new(3.38e5, 4.69e5),   // rho_cp [J/(m³·K)]
];

/// Rescales normalized inputs onto the thermal parameter [`BOUNDS`].
///
/// # Errors
///
/// Returns [`MatrixError::NonFinite`] if an out-of-range input overflows.
pub fn rescale_input(
    xx: &ParameterMatrix<N_INPUTS>,
) -> Result<ParameterMatrix<N_INPUTS>, MatrixError> {
    rescale(xx, &BOUNDS)
}

/// Evaluates the temperature for each sample at each time.
///
/// `x` is the lateral position in meters and `temp_init` the initial
/// temperature in kelvin.
/// Row `i`, column `j` of the result is the temperature of sample `i` at `t[j]`.
///
/// # Errors
///
/// Returns [`ThermalError::NegativeTime`] if any time is negative.
/// The whole grid is checked before anything is evaluated.
pub fn eval(
    xx: &ParameterMatrix<N_INPUTS>,
    t: &TimeGrid,
    x: f64,
    temp_init: f64,
) -> Result<Array2<f64>, ThermalError> {
    self::core::evaluate(xx, t, x, temp_init)
}

/// Where and from what temperature the slab is observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SandiaThermalConfig {
    /// Lateral position, measured from the heated face.
    pub position: Length,

    /// Uniform initial temperature of the slab.
    pub initial_temperature: ThermodynamicTemperature,
}

impl Default for SandiaThermalConfig {
    /// The heated face, starting from 25 °C.
    fn default() -> Self {
        Self {
            position: Length::new::<meter>(0.0),
            initial_temperature: ThermodynamicTemperature::new::<kelvin>(298.15),
        }
    }
}

/// Input to the [`SandiaThermal`] model.
#[derive(Debug, Clone, PartialEq)]
pub struct SandiaThermalInput {
    /// Rescaled `(q, L, k, rho_cp)` samples.
    pub samples: ParameterMatrix<N_INPUTS>,

    /// Times at which to evaluate each sample.
    pub times: TimeGrid,
}

impl SandiaThermalInput {
    /// Builds an input from typed slab properties.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NonFinite`] if a property is infinite.
    pub fn from_slabs(slabs: &[SlabProperties], times: TimeGrid) -> Result<Self, MatrixError> {
        let rows = slabs.iter().map(SlabProperties::to_row).collect();
        Ok(Self {
            samples: ParameterMatrix::new(rows)?,
            times,
        })
    }
}

/// [`Model`] adapter for the Sandia thermal problem.
///
/// Produces a temperature field in kelvin with one row per sample and one
/// column per time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SandiaThermal {
    pub config: SandiaThermalConfig,
}

impl SandiaThermal {
    #[must_use]
    pub fn new(config: SandiaThermalConfig) -> Self {
        Self { config }
    }
}

impl Model for SandiaThermal {
    type Input = SandiaThermalInput;
    type Output = Array2<f64>;
    type Error = ThermalError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        eval(
            &input.samples,
            &input.times,
            self.config.position.get::<meter>(),
            self.config.initial_temperature.get::<kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BOUNDS, MatrixError, Model, ParameterMatrix, SandiaThermal, SandiaThermalConfig,
        SandiaThermalInput, SlabProperties, ThermalError, TimeGrid, eval, rescale_input,
    };

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn rescale_corners() {
        let unit = ParameterMatrix::new(vec![[0.0; 4], [1.0; 4], [0.5; 4]]).unwrap();
        let xx = rescale_input(&unit).unwrap();

        for (j, bounds) in BOUNDS.iter().enumerate() {
            assert_relative_eq!(xx[0][j], bounds.min, max_relative = 1e-12);
            assert_relative_eq!(xx[1][j], bounds.max, max_relative = 1e-12);
            assert_relative_eq!(
                xx[2][j],
                0.5 * (bounds.min + bounds.max),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn overflowing_heat_capacity_is_rejected() {
        let unit = ParameterMatrix::new(vec![[0.5, 0.5, 0.5, -1e306]]).unwrap();

        assert_eq!(
            rescale_input(&unit),
            Err(MatrixError::NonFinite { row: 0, column: 3 })
        );
    }

    #[test]
    fn model_uses_config() {
        let model = SandiaThermal::new(SandiaThermalConfig::default());
        let slab = SlabProperties::from_row(&[3000.0, 0.0127, 0.05, 0.4e6]).unwrap();
        let times = TimeGrid::new(vec![0.0, 50.0]).unwrap();
        let input = SandiaThermalInput::from_slabs(&[slab, slab], times).unwrap();

        let field = model.call(&input).unwrap();

        assert_eq!(field.dim(), (2, 2));
        assert_eq!(field[[1, 0]], 298.15);
        assert_relative_eq!(field[[0, 1]] - 298.15, field[[1, 1]] - 298.15);
        assert!(field[[0, 1]] > 298.15);
    }

    #[test]
    fn infinite_slab_is_rejected() {
        let slab = SlabProperties::from_row(&[f64::INFINITY, 0.0127, 0.05, 0.4e6]).unwrap();
        let times = TimeGrid::new(vec![0.0]).unwrap();

        assert_eq!(
            SandiaThermalInput::from_slabs(&[slab], times),
            Err(MatrixError::NonFinite { row: 0, column: 0 })
        );
    }

    #[test]
    fn model_reports_negative_time() {
        let input = SandiaThermalInput {
            samples: ParameterMatrix::repeat([3000.0, 0.0127, 0.05, 0.4e6], 2).unwrap(),
            times: TimeGrid::new(vec![-1e-3, 0.0]).unwrap(),
        };

        assert!(matches!(
            SandiaThermal::default().call(&input),
            Err(ThermalError::NegativeTime { index: 0, .. })
        ));
    }

    proptest! {
        #[test]
        fn field_shape_and_initial_column(
            rows in prop::collection::vec(prop::array::uniform4(0.0f64..=1.0), 0..8),
            n_times in 0usize..12,
            temp_init in 200.0f64..400.0
        ) {
            let xx = rescale_input(&ParameterMatrix::new(rows.clone()).unwrap()).unwrap();
            let t = TimeGrid::linspace(0.0, 1000.0, n_times).unwrap();

            let field = eval(&xx, &t, 0.0, temp_init).unwrap();
            prop_assert_eq!(field.dim(), (rows.len(), n_times));

            if n_times > 0 {
                prop_assert!(field.column(0).iter().all(|v| *v == temp_init));
            }
        }

        #[test]
        fn heated_face_warms_monotonically(
            row in prop::array::uniform4(0.0f64..=1.0)
        ) {
            let xx = rescale_input(&ParameterMatrix::new(vec![row]).unwrap()).unwrap();
            let t = TimeGrid::linspace(0.0, 1000.0, 21).unwrap();

            let field = eval(&xx, &t, 0.0, 298.15).unwrap();
            let temps: Vec<f64> = field.row(0).to_vec();
            prop_assert!(temps.windows(2).all(|w| w[1] > w[0]));
        }
    }
}
