//! MQH hot gas temperature rise in a naturally ventilated compartment.

use uom::si::{
    area::square_meter,
    f64::{Power, TemperatureInterval, ThermodynamicTemperature, Time},
    power::kilowatt,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
    time::second,
};

use crate::support::units::TemperatureDifference;

use super::{CompartmentGeometry, ValidationError, finite_result, strictly_positive};

pub const MQH_TEMPERATURE_COEFFICIENT: f64 = 6.85;

/// Steady-state upper layer temperature rise.
///
/// `ΔT = 6.85·(Q² / (A0·√H0·At·hk))^(1/3)`
///
/// # Errors
///
/// Returns a [`ValidationError`] unless `Q > 0` and `hk > 0`.
pub fn mqh_temperature_rise(
    heat_release_rate: Power,
    geometry: &CompartmentGeometry,
    hk: f64,
) -> Result<TemperatureInterval, ValidationError> {
    let q = strictly_positive("heat_release_rate", heat_release_rate)?.get::<kilowatt>();
    let hk = strictly_positive("hk", hk)?;
    let rise = steady_state_rise(q, geometry, hk);
    finite_result("temperature_rise", TemperatureInterval::new::<delta_kelvin>(rise))
}

/// Time for the upper layer to reach `target` starting from `ambient`.
///
/// With `ΔT = target − ambient` and `ΔTss` the steady-state rise,
/// `t = (ΔT/ΔTss)³·(At·hk)² / (Q·A0·√H0)`.
///
/// # Errors
///
/// Returns a [`ValidationError`] unless `Q > 0`, `hk > 0`, the temperatures
/// are above absolute zero, and `0 < ΔT ≤ ΔTss`.
pub fn time_to_temperature(
    heat_release_rate: Power,
    geometry: &CompartmentGeometry,
    hk: f64,
    target: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
) -> Result<Time, ValidationError> {
    let q = strictly_positive("heat_release_rate", heat_release_rate)?.get::<kilowatt>();
    let hk = strictly_positive("hk", hk)?;
    let target_k = strictly_positive("target_temperature", target.get::<kelvin>())?;
    let ambient_k = strictly_positive("ambient_temperature", ambient.get::<kelvin>())?;

    let rise = target.minus(ambient).get::<delta_kelvin>();
    if rise <= 0.0 {
        return Err(ValidationError::TargetBelowAmbient {
            target: target_k,
            ambient: ambient_k,
        });
    }

    let steady_state = finite_result("temperature_rise", steady_state_rise(q, geometry, hk))?;
    if rise > steady_state {
        return Err(ValidationError::TargetExceedsSteadyState {
            target: rise,
            steady_state,
        });
    }

    let at = geometry.total_surface_area().get::<square_meter>();
    let seconds =
        (rise / steady_state).powi(3) * (at * hk).powi(2) / (q * geometry.ventilation_factor());
    finite_result("time", Time::new::<second>(seconds))
}

fn steady_state_rise(q: f64, geometry: &CompartmentGeometry, hk: f64) -> f64 {
    let at = geometry.total_surface_area().get::<square_meter>();
    MQH_TEMPERATURE_COEFFICIENT * (q * q / (geometry.ventilation_factor() * at * hk)).cbrt()
}
