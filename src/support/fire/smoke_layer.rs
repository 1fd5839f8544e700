//! Smoke filling of an enclosure under a steady fire.

use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Power, TemperatureInterval, ThermodynamicTemperature, Time},
    length::meter,
    power::kilowatt,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
    time::second,
};

use crate::support::units::TemperatureDifference;

use super::{ValidationError, finite_result, strictly_positive};

/// Plume entrainment constant.
pub const ENTRAINMENT_COEFFICIENT: f64 = 0.21;
/// Ambient air density, kg/m³.
pub const AMBIENT_AIR_DENSITY: f64 = 1.2;
/// Specific heat of air, kJ/kg·K.
pub const AIR_SPECIFIC_HEAT: f64 = 1.0;
/// Ambient temperature assumed by the filling correlation, K.
pub const FILLING_AMBIENT_TEMPERATURE: f64 = 293.0;

/// Time for the smoke layer interface to descend to `layer_height`.
///
/// `t = (A·ρ·cp·T / (γ·Q))·(H^(4/3) − y^(4/3)) / H^(1/3)`
///
/// # Errors
///
/// Returns a [`ValidationError`] if an input is not strictly positive or the
/// layer height is not below the room height.
pub fn smoke_filling_time(
    heat_release_rate: Power,
    room_height: Length,
    floor_area: Area,
    layer_height: Length,
) -> Result<Time, ValidationError> {
    let q = strictly_positive("heat_release_rate", heat_release_rate)?.get::<kilowatt>();
    let a = strictly_positive("floor_area", floor_area)?.get::<square_meter>();
    let (h, y) = layer_below_ceiling(room_height, layer_height)?;

    let scale = a * AMBIENT_AIR_DENSITY * AIR_SPECIFIC_HEAT * FILLING_AMBIENT_TEMPERATURE
        / (ENTRAINMENT_COEFFICIENT * q);
    let seconds = scale * (h.powf(4.0 / 3.0) - y.powf(4.0 / 3.0)) / h.cbrt();
    finite_result("time", Time::new::<second>(seconds))
}

/// Average hot layer temperature with the interface at `layer_height`.
///
/// `T = T_amb + (Q/(cp·π))·((H − y)/(H·y²))^(1/3)`
///
/// # Errors
///
/// Returns a [`ValidationError`] if an input is not strictly positive, the
/// ambient temperature is not above absolute zero, or the layer height is not
/// below the room height.
pub fn smoke_layer_temperature(
    heat_release_rate: Power,
    room_height: Length,
    layer_height: Length,
    ambient: ThermodynamicTemperature,
) -> Result<ThermodynamicTemperature, ValidationError> {
    let q = strictly_positive("heat_release_rate", heat_release_rate)?.get::<kilowatt>();
    strictly_positive("ambient_temperature", ambient.get::<kelvin>())?;
    let (h, y) = layer_below_ceiling(room_height, layer_height)?;

    let rise = (q / (AIR_SPECIFIC_HEAT * PI)) * ((h - y) / (h * y * y)).cbrt();
    finite_result("temperature", ambient.plus(TemperatureInterval::new::<delta_kelvin>(rise)))
}

/// Validates `0 < y < H` and returns both in meters.
fn layer_below_ceiling(
    room_height: Length,
    layer_height: Length,
) -> Result<(f64, f64), ValidationError> {
    let h = strictly_positive("room_height", room_height)?.get::<meter>();
    let y = strictly_positive("layer_height", layer_height)?.get::<meter>();
    if y >= h {
        return Err(ValidationError::LayerNotBelowCeiling {
            layer: y,
            ceiling: h,
        });
    }
    Ok((h, y))
}
