//! Buoyancy-driven mass flow through a single vertical vent.

use uom::si::{
    f64::{Length, MassRate, ThermodynamicTemperature},
    length::meter,
    mass_rate::kilogram_per_second,
    thermodynamic_temperature::kelvin,
};

use super::{ValidationError, finite_result, strictly_positive};

/// Standard gravitational acceleration, m/s².
pub const GRAVITY: f64 = 9.81;
/// Ideal-gas air density constant, kg·K/m³ (`ρ = 353/T`).
pub const AIR_DENSITY_CONSTANT: f64 = 353.0;

/// Mass flow into and out of a compartment through one vent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VentFlow {
    pub mass_flow_in: MassRate,
    pub mass_flow_out: MassRate,
}

/// Natural vent flow split at the neutral plane.
///
/// With `ρ = 353/T`, cold air enters below the neutral plane `N`:
///
/// `ṁ_in = ⅔·W·N·√(2g·ρa·(ρa − ρh)·N/ρh)`
///
/// and hot gas leaves above it:
///
/// `ṁ_out = ⅔·W·(Hv − N)·√(2g·(ρa − ρh)·(Hv − N))`
///
/// # Errors
///
/// Returns a [`ValidationError`] if the vent dimensions or absolute
/// temperatures are not strictly positive, if the neutral plane is not
/// strictly inside the vent, or if the hot gas is not hotter than ambient.
pub fn natural_vent_flow(
    vent_height: Length,
    vent_width: Length,
    neutral_plane: Length,
    hot_gas: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
) -> Result<VentFlow, ValidationError> {
    let hv = strictly_positive("vent_height", vent_height)?.get::<meter>();
    let w = strictly_positive("vent_width", vent_width)?.get::<meter>();
    let n = strictly_positive("neutral_plane", neutral_plane)?.get::<meter>();
    let t_hot = strictly_positive("hot_gas_temperature", hot_gas.get::<kelvin>())?;
    let t_amb = strictly_positive("ambient_temperature", ambient.get::<kelvin>())?;

    if n >= hv {
        return Err(ValidationError::NeutralPlaneOutsideVent {
            neutral_plane: n,
            vent: hv,
        });
    }
    if t_hot <= t_amb {
        return Err(ValidationError::NoBuoyancy {
            hot: t_hot,
            ambient: t_amb,
        });
    }

    let rho_amb = AIR_DENSITY_CONSTANT / t_amb;
    let rho_hot = AIR_DENSITY_CONSTANT / t_hot;
    let above = hv - n;

    let inflow = 2.0 / 3.0
        * w
        * n
        * (2.0 * GRAVITY * rho_amb * (rho_amb - rho_hot) * n / rho_hot).sqrt();
    let outflow = 2.0 / 3.0 * w * above * (2.0 * GRAVITY * (rho_amb - rho_hot) * above).sqrt();

    Ok(VentFlow {
        mass_flow_in: finite_result("mass_flow_in", MassRate::new::<kilogram_per_second>(inflow))?,

        mass_flow_out: finite_result(
            "mass_flow_out",
            MassRate::new::<kilogram_per_second>(outflow),
        )?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn doorway_flow() {
        let flow = natural_vent_flow(m(2.0), m(1.0), m(1.0), celsius(500.0), celsius(20.0))
            .unwrap();

        let rho_a: f64 = 353.0 / 293.15;
        let rho_h: f64 = 353.0 / 773.15;
        let inflow = 2.0 / 3.0 * (2.0 * 9.81 * rho_a * (rho_a - rho_h) / rho_h).sqrt();
        let outflow = 2.0 / 3.0 * (2.0 * 9.81 * (rho_a - rho_h)).sqrt();

        assert_relative_eq!(
            flow.mass_flow_in.get::<kilogram_per_second>(),
            inflow,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            flow.mass_flow_out.get::<kilogram_per_second>(),
            outflow,
            max_relative = 1e-9
        );
    }

    #[test]
    fn neutral_plane_must_be_inside_vent() {
        assert!(matches!(
            natural_vent_flow(m(2.0), m(1.0), m(2.0), celsius(500.0), celsius(20.0)),
            Err(ValidationError::NeutralPlaneOutsideVent { .. })
        ));
        assert!(matches!(
            natural_vent_flow(m(2.0), m(1.0), m(0.0), celsius(500.0), celsius(20.0)),
            Err(ValidationError::Constraint { input: "neutral_plane", .. })
        ));
    }

    #[test]
    fn requires_a_hot_layer() {
        assert!(matches!(
            natural_vent_flow(m(2.0), m(1.0), m(1.0), celsius(20.0), celsius(20.0)),
            Err(ValidationError::NoBuoyancy { .. })
        ));
        assert!(natural_vent_flow(m(2.0), m(1.0), m(1.0), celsius(-300.0), celsius(20.0)).is_err());
    }
}
