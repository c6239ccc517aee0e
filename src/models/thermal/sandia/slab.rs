use uom::si::{
    f64::{
        HeatFluxDensity, Length, ThermalConductivity, ThermodynamicTemperature, Time,
        VolumetricHeatCapacity,
    },
    heat_flux_density::watt_per_square_meter,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    time::second,
    volumetric_heat_capacity::joule_per_cubic_meter_kelvin,
};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive};

use super::{
    SandiaThermalConfig,
    core::{ThermalError, temperature},
};

/// Physical properties of one slab sample.
///
/// This is the typed counterpart of a `(q, L, k, rho_cp)` matrix row.
/// Unlike the matrix path, every property is checked to be strictly positive
/// at construction.
///
/// # Example
///
/// ```
/// use twine_test_functions::models::thermal::sandia::{SandiaThermalConfig, SlabProperties};
/// use uom::si::{f64::Time, thermodynamic_temperature::kelvin, time::second};
///
/// let slab = SlabProperties::from_row(&[3000.0, 0.0127, 0.05, 0.4e6]).unwrap();
/// let config = SandiaThermalConfig::default();
///
/// let t = slab.temperature(Time::new::<second>(0.0), &config).unwrap();
/// assert_eq!(t.get::<kelvin>(), 298.15);
///
/// assert!(SlabProperties::from_row(&[3000.0, 0.0, 0.05, 0.4e6]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabProperties {
    /// Heat flux applied at the heated face.
    pub heat_flux: Constrained<HeatFluxDensity, StrictlyPositive>,

    /// Slab thickness.
    pub thickness: Constrained<Length, StrictlyPositive>,

    /// Thermal conductivity.
    pub conductivity: Constrained<ThermalConductivity, StrictlyPositive>,

    /// Volumetric heat capacity (`ρ·c`).
    pub volumetric_heat_capacity: Constrained<VolumetricHeatCapacity, StrictlyPositive>,
}

impl SlabProperties {
    /// Creates slab properties from physical quantities.
    ///
    /// # Errors
    ///
    /// Returns an error if any property is not strictly positive.
    pub fn new(
        heat_flux: HeatFluxDensity,
        thickness: Length,
        conductivity: ThermalConductivity,
        volumetric_heat_capacity: VolumetricHeatCapacity,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            heat_flux: StrictlyPositive::new(heat_flux)?,
            thickness: StrictlyPositive::new(thickness)?,
            conductivity: StrictlyPositive::new(conductivity)?,
            volumetric_heat_capacity: StrictlyPositive::new(volumetric_heat_capacity)?,
        })
    }

    /// Reads a `(q, L, k, rho_cp)` row in SI units.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not strictly positive.
    pub fn from_row(row: &[f64; 4]) -> ConstraintResult<Self> {
        let [q, l, k, rho_cp] = *row;
        Self::new(
            HeatFluxDensity::new::<watt_per_square_meter>(q),
            Length::new::<meter>(l),
            ThermalConductivity::new::<watt_per_meter_kelvin>(k),
            VolumetricHeatCapacity::new::<joule_per_cubic_meter_kelvin>(rho_cp),
        )
    }

    /// Writes the properties as a `(q, L, k, rho_cp)` row in SI units.
    #[must_use]
    pub fn to_row(&self) -> [f64; 4] {
        [
            self.heat_flux.as_ref().get::<watt_per_square_meter>(),
            self.thickness.as_ref().get::<meter>(),
            self.conductivity.as_ref().get::<watt_per_meter_kelvin>(),
            self.volumetric_heat_capacity
                .as_ref()
                .get::<joule_per_cubic_meter_kelvin>(),
        ]
    }

    /// Temperature at the configured position after `time` has elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`ThermalError::NegativeTime`] if `time` is negative or `NaN`.
    /// A single time is treated as a one-point grid, so `index` is always 0.
    pub fn temperature(
        &self,
        time: Time,
        config: &SandiaThermalConfig,
    ) -> Result<ThermodynamicTemperature, ThermalError> {
        let seconds = time.get::<second>();
        let time = NonNegative::new(seconds).map_err(|_| ThermalError::NegativeTime {
            index: 0,
            time: seconds,
        })?;

        Ok(ThermodynamicTemperature::new::<kelvin>(temperature(
            &self.to_row(),
            time.into_inner(),
            config.position.get::<meter>(),
            config.initial_temperature.get::<kelvin>(),
        )))
    }
}
