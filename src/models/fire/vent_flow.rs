use twine_core::Model;
use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};

use crate::support::{
    fire::natural_vent_flow,
    units::{MassUnit, UnitSystem},
};

use super::{Error, from_si, length, temperature};

/// Buoyancy-driven flow through a single vertical vent.
#[derive(Debug, Clone, Copy, Default)]
pub struct VentFlow;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VentFlowInput {
    pub vent_height: f64,
    pub vent_width: f64,
    pub neutral_plane: f64,
    pub hot_gas_temperature: f64,
    pub ambient_temperature: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitSystem,
}

/// Mass flows in kg/s (SI) or lb/s (imperial).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VentFlowOutput {
    pub mass_flow_in: f64,
    pub mass_flow_out: f64,
}

impl Model for VentFlow {
    type Input = VentFlowInput;
    type Output = VentFlowOutput;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let units = input.units;
        let flow = natural_vent_flow(
            length(input.vent_height, units),
            length(input.vent_width, units),
            length(input.neutral_plane, units),
            temperature(input.hot_gas_temperature, units),
            temperature(input.ambient_temperature, units),
        )?;

        let per_second =
            |rate: MassRate| from_si::<MassUnit>(rate.get::<kilogram_per_second>(), units);
        Ok(VentFlowOutput {
            mass_flow_in: per_second(flow.mass_flow_in),
            mass_flow_out: per_second(flow.mass_flow_out),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::fire::ValidationError;

    fn doorway(units: UnitSystem) -> VentFlowInput {
        VentFlowInput {
            vent_height: 2.0,
            vent_width: 1.0,
            neutral_plane: 1.0,
            hot_gas_temperature: 500.0,
            ambient_temperature: 20.0,
            units,
        }
    }

    #[test]
    fn doorway_in_both_systems() {
        let si = VentFlow.call(&doorway(UnitSystem::Si)).unwrap();
        assert!(si.mass_flow_in > 0.0);
        assert!(si.mass_flow_out > 0.0);

        let imperial = VentFlow
            .call(&VentFlowInput {
                vent_height: 2.0 * 3.28084,
                vent_width: 3.28084,
                neutral_plane: 3.28084,
                hot_gas_temperature: 932.0,
                ambient_temperature: 68.0,
                units: UnitSystem::Imperial,
            })
            .unwrap();
        assert_relative_eq!(imperial.mass_flow_in, si.mass_flow_in * 2.205, max_relative = 1e-9);
        assert_relative_eq!(imperial.mass_flow_out, si.mass_flow_out * 2.205, max_relative = 1e-9);
    }

    #[test]
    fn neutral_plane_above_the_vent() {
        let mut input = doorway(UnitSystem::Si);
        input.neutral_plane = 2.5;
        assert!(matches!(
            VentFlow.call(&input),
            Err(Error::Validation(ValidationError::NeutralPlaneOutsideVent { .. }))
        ));
    }

    #[test]
    fn cold_layer_has_no_flow() {
        let mut input = doorway(UnitSystem::Si);
        input.hot_gas_temperature = 15.0;
        assert!(matches!(
            VentFlow.call(&input),
            Err(Error::Validation(ValidationError::NoBuoyancy { .. }))
        ));
    }
}
