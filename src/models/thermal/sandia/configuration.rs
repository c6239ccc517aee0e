use ndarray::Array2;
use rand::Rng;
use tracing::debug;
use uom::si::{length::meter, thermodynamic_temperature::kelvin};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    matrix::ParameterMatrix,
    sampling::UnitCubeSampler,
    time_grid::TimeGrid,
};

use super::{N_INPUTS, SandiaThermalConfig, ThermalError, eval, rescale_input};

/// Surface temperature threshold of the challenge problem, in kelvin (900 °C).
pub const REGULATORY_TEMPERATURE_K: f64 = 1173.15;

/// One of the six published (q, L) configurations of the challenge problem.
///
/// Each configuration pins the heat flux and thickness at a normalized value
/// and leaves the material properties `k` and `rho_cp` uncertain.
///
/// # Example
///
/// ```
/// use twine_test_functions::models::thermal::sandia::{Configuration, SandiaThermalConfig};
/// use twine_test_functions::support::{sampling::UnitCubeSampler, time_grid::TimeGrid};
///
/// let mut sampler = UnitCubeSampler::seeded(97752);
/// let materials = sampler.sample::<2>(50);
/// let t = TimeGrid::linspace(0.0, 1000.0, 11).unwrap();
///
/// for configuration in Configuration::ALL {
///     let field = configuration
///         .evaluate(&materials, &t, &SandiaThermalConfig::default())
///         .unwrap();
///     assert_eq!(field.dim(), (50, 11));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Configuration {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl Configuration {
    /// All configurations in published order.
    pub const ALL: [Configuration; 6] = [
        Configuration::One,
        Configuration::Two,
        Configuration::Three,
        Configuration::Four,
        Configuration::Five,
        Configuration::Six,
    ];

    /// Published configuration number, starting at 1.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Configuration::One => 1,
            Configuration::Two => 2,
            Configuration::Three => 3,
            Configuration::Four => 4,
            Configuration::Five => 5,
            Configuration::Six => 6,
        }
    }

    /// Normalized `(q, L)` values of this configuration.
    #[must_use]
    pub fn normalized_q_l(self) -> [Constrained<f64, UnitInterval>; 2] {
        let (q, l) = match self {
            Configuration::One => (0.0, 0.0),
            Configuration::Two => (0.0, 1.0),
            Configuration::Three => (0.4, 0.0),
            Configuration::Four => (0.4, 1.0),
            Configuration::Five => (0.8, 0.5),
            Configuration::Six => (1.0, 0.5),
        };
        [q, l].map(|v| UnitInterval::new(v).expect("configuration values lie in [0, 1]"))
    }

    /// Pinned columns for sampling this configuration directly.
    ///
    /// Pass the result to [`UnitCubeSampler::sample_pinned`] to draw `k` and
    /// `rho_cp` while holding `q` and `L` fixed.
    #[must_use]
    pub fn pinned(self) -> [Option<Constrained<f64, UnitInterval>>; N_INPUTS] {
        let [q, l] = self.normalized_q_l();
        [Some(q), Some(l), None, None]
    }

    /// Builds normalized inputs from normalized `(k, rho_cp)` draws.
    ///
    /// Every row shares this configuration's `(q, L)`, so the same material
    /// draws can be reused across configurations.
    #[must_use]
    pub fn unit_inputs(self, materials: &ParameterMatrix<2>) -> ParameterMatrix<N_INPUTS> {
        let [q, l] = self.normalized_q_l().map(Constrained::into_inner);
        let rows = materials
            .rows()
            .iter()
            .map(|&[k, rho_cp]| [q, l, k, rho_cp])
            .collect();

        // Built from finite draws and values in [0, 1].
        ParameterMatrix::from_rows_unchecked(rows)
    }

    /// Draws `n_samples` normalized inputs with this configuration's `(q, L)`.
    pub fn sample<R: Rng>(
        self,
        sampler: &mut UnitCubeSampler<R>,
        n_samples: usize,
    ) -> ParameterMatrix<N_INPUTS> {
        sampler.sample_pinned(n_samples, self.pinned())
    }

    /// Rescales and evaluates this configuration for the given material draws.
    ///
    /// # Errors
    ///
    /// Returns [`ThermalError::NegativeTime`] if any time is negative, or
    /// [`ThermalError::Rescale`] if a material draw far outside `[0, 1]`
    /// overflows when rescaled.
    pub fn evaluate(
        self,
        materials: &ParameterMatrix<2>,
        times: &TimeGrid,
        config: &SandiaThermalConfig,
    ) -> Result<Array2<f64>, ThermalError> {
        let xx = rescale_input(&self.unit_inputs(materials))?;

        debug!(
            configuration = self.number(),
            n_samples = xx.n_samples(),
            n_times = times.len(),
            "evaluating thermal configuration"
        );

        eval(
            &xx,
            times,
            config.position.get::<meter>(),
            config.initial_temperature.get::<kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{models::thermal::sandia::BOUNDS, support::matrix::MatrixError};

    #[test]
    fn published_values() {
        let pairs: Vec<[f64; 2]> = Configuration::ALL
            .iter()
            .map(|c| c.normalized_q_l().map(Constrained::into_inner))
            .collect();

        assert_eq!(
            pairs,
            vec![
                [0.0, 0.0],
                [0.0, 1.0],
                [0.4, 0.0],
                [0.4, 1.0],
                [0.8, 0.5],
                [1.0, 0.5]
            ]
        );
        assert_eq!(
            Configuration::ALL.map(Configuration::number),
            [1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn unit_inputs_pin_q_and_l() {
        let materials = ParameterMatrix::new(vec![[0.1, 0.2], [0.9, 0.8]]).unwrap();
        let xx = Configuration::Four.unit_inputs(&materials);

        assert_eq!(xx.rows(), &[[0.4, 1.0, 0.1, 0.2], [0.4, 1.0, 0.9, 0.8]]);

        let scaled = rescale_input(&xx).unwrap();
        assert!(scaled.column(1).all(|l| l == BOUNDS[1].at(1.0)));
    }

    #[test]
    fn sampled_inputs_match_reused_draws() {
        let configuration = Configuration::Five;

        let sampled = configuration.sample(&mut UnitCubeSampler::seeded(3), 20);
        let materials = UnitCubeSampler::seeded(3).sample::<2>(20);

        assert_eq!(sampled, configuration.unit_inputs(&materials));
    }

    #[test]
    fn thicker_slabs_stay_cooler() {
        let materials = UnitCubeSampler::seeded(97752).sample::<2>(50);
        let times = TimeGrid::linspace(0.0, 1000.0, 11).unwrap();
        let config = SandiaThermalConfig::default();

        let thin = Configuration::Three.evaluate(&materials, &times, &config).unwrap();
        let thick = Configuration::Four.evaluate(&materials, &times, &config).unwrap();

        let last = times.len() - 1;
        for i in 0..materials.n_samples() {
            assert!(thick[[i, last]] < thin[[i, last]]);
        }
    }

    #[test]
    fn overflowing_materials_are_reported() {
        let materials = ParameterMatrix::new(vec![[0.5, 0.5], [0.5, 1e306]]).unwrap();
        let times = TimeGrid::linspace(0.0, 1000.0, 11).unwrap();

        assert_eq!(
            Configuration::One.evaluate(&materials, &times, &SandiaThermalConfig::default()),
            Err(ThermalError::Rescale(MatrixError::NonFinite { row: 1, column: 3 }))
        );
    }

    #[test]
    fn harshest_configuration_exceeds_the_threshold() {
        let materials = UnitCubeSampler::seeded(97752).sample::<2>(50);
        let times = TimeGrid::linspace(0.0, 1000.0, 11).unwrap();

        let field = Configuration::Six
            .evaluate(&materials, &times, &SandiaThermalConfig::default())
            .unwrap();

        assert!(field.iter().any(|t| *t > REGULATORY_TEMPERATURE_K));
    }
}
