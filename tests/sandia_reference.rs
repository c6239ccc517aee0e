//! Verification of the Sandia thermal problem against published values.

use approx::assert_abs_diff_eq;
use twine_core::Model;
use twine_test_functions::{
    models::thermal::sandia::{
        self, SandiaThermal, SandiaThermalConfig, SandiaThermalInput, ThermalError,
    },
    support::{matrix::ParameterMatrix, time_grid::TimeGrid},
};
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

/// Surface temperatures from Dowding, Pilch, and Hills (2008).
const REFERENCE: [f64; 11] = [
    25.0, 264.365410, 363.582289, 440.597591, 507.977177, 570.904767, 631.761990, 691.655773,
    751.101191, 810.337947, 869.477597,
];

fn verification_input() -> (ParameterMatrix<4>, TimeGrid) {
    let xx = ParameterMatrix::new(vec![[3000.0, 0.0127, 0.05, 0.4e6]]).unwrap();
    let t = TimeGrid::linspace(0.0, 1000.0, 11).unwrap();
    (xx, t)
}

#[test]
fn matches_published_surface_temperatures() {
    let (xx, t) = verification_input();
    let field = sandia::eval(&xx, &t, 0.0, 25.0).unwrap();

    assert_eq!(field.dim(), (1, 11));
    for (actual, expected) in field.row(0).iter().zip(REFERENCE) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 5e-7);
    }
}

#[test]
fn model_adapter_matches_published_values() {
    let (samples, times) = verification_input();
    let model = SandiaThermal::new(SandiaThermalConfig {
        initial_temperature: ThermodynamicTemperature::new::<kelvin>(25.0),
        ..SandiaThermalConfig::default()
    });

    let field = model.call(&SandiaThermalInput { samples, times }).unwrap();
    for (actual, expected) in field.row(0).iter().zip(REFERENCE) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 5e-7);
    }
}

#[test]
fn negative_times_fail_without_output() {
    let (xx, _) = verification_input();
    let t = TimeGrid::new(vec![-10.0, -0.5, 0.0, 100.0]).unwrap();

    let err = sandia::eval(&xx, &t, 0.0, 25.0).unwrap_err();
    assert_eq!(err, ThermalError::NegativeTime { index: 0, time: -10.0 });
    assert_eq!(err.to_string(), "time at index 0 is negative: -10 s");
}
