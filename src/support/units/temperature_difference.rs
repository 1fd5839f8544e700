use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Arithmetic between absolute temperatures and temperature rises.
///
/// [`uom`] does not subtract two [`ThermodynamicTemperature`] values into a
/// [`TemperatureInterval`], and does not add a rise back onto an ambient
/// temperature. Hot gas layer correlations need both.
///
/// ```
/// use fire_models::support::units::TemperatureDifference;
/// use uom::si::{
///     f64::{TemperatureInterval, ThermodynamicTemperature},
///     temperature_interval::kelvin as delta_kelvin,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let ambient = ThermodynamicTemperature::new::<degree_celsius>(20.0);
/// let layer = ambient.plus(TemperatureInterval::new::<delta_kelvin>(480.0));
///
/// assert!((layer.get::<degree_celsius>() - 500.0).abs() < 1e-9);
/// assert!((layer.minus(ambient).get::<delta_kelvin>() - 480.0).abs() < 1e-9);
/// ```
pub trait TemperatureDifference {
    /// Returns the rise `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;

    /// Returns this temperature raised by `rise`.
    #[must_use]
    fn plus(self, rise: TemperatureInterval) -> Self;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(self.get::<kelvin>() - other.get::<kelvin>())
    }

    fn plus(self, rise: TemperatureInterval) -> Self {
        ThermodynamicTemperature::new::<kelvin>(self.get::<kelvin>() + rise.get::<delta_kelvin>())
    }
}
