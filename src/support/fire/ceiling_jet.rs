//! Alpert's ceiling jet correlations.

use uom::si::{
    f64::{Length, Power, TemperatureInterval, Velocity},
    length::meter,
    power::kilowatt,
    temperature_interval::kelvin as delta_kelvin,
    velocity::meter_per_second,
};

use super::{ValidationError, finite_result, strictly_positive};

/// Largest `r/H` treated as the plume turning region for temperature.
pub const TEMPERATURE_TURNING_REGION: f64 = 0.18;
/// Largest `r/H` treated as the plume turning region for velocity.
pub const VELOCITY_TURNING_REGION: f64 = 0.15;

/// Maximum ceiling jet temperature rise and velocity at one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CeilingJet {
    pub temperature_rise: TemperatureInterval,
    pub velocity: Velocity,
}

/// Evaluates both ceiling jet correlations at radial distance `r` below a
/// ceiling of height `H` above the fire.
///
/// # Errors
///
/// Returns a [`ValidationError`] unless `Q`, `H` and `r` are all strictly
/// positive.
pub fn ceiling_jet(
    heat_release_rate: Power,
    ceiling_height: Length,
    radial_distance: Length,
) -> Result<CeilingJet, ValidationError> {
    Ok(CeilingJet {
        temperature_rise: ceiling_jet_temperature_rise(
            heat_release_rate,
            ceiling_height,
            radial_distance,
        )?,
        velocity: ceiling_jet_velocity(heat_release_rate, ceiling_height, radial_distance)?,
    })
}

/// Ceiling jet temperature rise above ambient.
///
/// - `r/H ≤ 0.18`: `ΔT = 16.9·Q^(2/3) / H^(5/3)`
/// - `r/H > 0.18`: `ΔT = 5.38·(Q/r)^(2/3) / H`
///
/// # Errors
///
/// Returns a [`ValidationError`] unless all inputs are strictly positive.
pub fn ceiling_jet_temperature_rise(
    heat_release_rate: Power,
    ceiling_height: Length,
    radial_distance: Length,
) -> Result<TemperatureInterval, ValidationError> {
    let (q, h, r) = validate(heat_release_rate, ceiling_height, radial_distance)?;

    let rise = if r / h <= TEMPERATURE_TURNING_REGION {
        16.9 * q.powf(2.0 / 3.0) / h.powf(5.0 / 3.0)
    } else {
        5.38 * (q / r).powf(2.0 / 3.0) / h
    };
    finite_result("temperature_rise", TemperatureInterval::new::<delta_kelvin>(rise))
}

/// Maximum ceiling jet velocity.
///
/// - `r/H ≤ 0.15`: `U = 0.96·(Q/H)^(1/3)`
/// - `r/H > 0.15`: `U = 0.195·Q^(1/3)·H^(1/2) / r^(5/6)`
///
/// # Errors
///
/// Returns a [`ValidationError`] unless all inputs are strictly positive.
pub fn ceiling_jet_velocity(
    heat_release_rate: Power,
    ceiling_height: Length,
    radial_distance: Length,
) -> Result<Velocity, ValidationError> {
    let (q, h, r) = validate(heat_release_rate, ceiling_height, radial_distance)?;

    let speed = if r / h <= VELOCITY_TURNING_REGION {
        0.96 * (q / h).cbrt()
    } else {
        0.195 * q.cbrt() * h.sqrt() / r.powf(5.0 / 6.0)
    };
    finite_result("velocity", Velocity::new::<meter_per_second>(speed))
}

fn validate(
    heat_release_rate: Power,
    ceiling_height: Length,
    radial_distance: Length,
) -> Result<(f64, f64, f64), ValidationError> {
    Ok((
        strictly_positive("heat_release_rate", heat_release_rate)?.get::<kilowatt>(),
        strictly_positive("ceiling_height", ceiling_height)?.get::<meter>(),
        strictly_positive("radial_distance", radial_distance)?.get::<meter>(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn jet(q: f64, h: f64, r: f64) -> CeilingJet {
        ceiling_jet(
            Power::new::<kilowatt>(q),
            Length::new::<meter>(h),
            Length::new::<meter>(r),
        )
        .unwrap()
    }

    #[test]
    fn near_the_plume_axis() {
        // r/H = 0.1 selects the turning region branch of both correlations.
        let j = jet(1000.0, 5.0, 0.5);
        assert_relative_eq!(
            j.temperature_rise.get::<delta_kelvin>(),
            16.9 * 1000.0_f64.powf(2.0 / 3.0) / 5.0_f64.powf(5.0 / 3.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            j.velocity.get::<meter_per_second>(),
            0.96 * 200.0_f64.cbrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn away_from_the_plume_axis() {
        let j = jet(1000.0, 5.0, 3.0);
        assert_relative_eq!(
            j.temperature_rise.get::<delta_kelvin>(),
            5.38 * (1000.0_f64 / 3.0).powf(2.0 / 3.0) / 5.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            j.velocity.get::<meter_per_second>(),
            0.195 * 1000.0_f64.cbrt() * 5.0_f64.sqrt() / 3.0_f64.powf(5.0 / 6.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn branches_differ_between_thresholds() {
        // r/H = 0.16 is past the velocity threshold but not the temperature one.
        let j = jet(500.0, 10.0, 1.6);
        assert_relative_eq!(
            j.temperature_rise.get::<delta_kelvin>(),
            16.9 * 500.0_f64.powf(2.0 / 3.0) / 10.0_f64.powf(5.0 / 3.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            j.velocity.get::<meter_per_second>(),
            0.195 * 500.0_f64.cbrt() * 10.0_f64.sqrt() / 1.6_f64.powf(5.0 / 6.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let kw = |v| Power::new::<kilowatt>(v);
        let m = |v| Length::new::<meter>(v);
        assert!(ceiling_jet(kw(0.0), m(5.0), m(1.0)).is_err());
        assert!(ceiling_jet(kw(100.0), m(0.0), m(1.0)).is_err());
        assert!(ceiling_jet(kw(100.0), m(5.0), m(0.0)).is_err());
    }
}
