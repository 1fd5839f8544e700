use twine_core::Model;
use uom::si::{length::meter, power::kilowatt};

use crate::support::{
    fire::{diameter_for_flame_height, flame_height, heat_release_for_flame_height},
    units::{HeatReleaseRateUnit, LengthUnit, UnitSystem},
};

use super::{Error, from_si, length, power};

/// Heskestad flame height, solvable for any one of its three variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlameHeight;

/// The unknown to solve for, with the two known values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "solve_for", rename_all = "snake_case")
)]
pub enum FlameHeightSolve {
    FlameHeight {
        heat_release_rate: f64,
        diameter: f64,
    },
    HeatReleaseRate {
        flame_height: f64,
        diameter: f64,
    },
    Diameter {
        flame_height: f64,
        heat_release_rate: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlameHeightInput {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub solve: FlameHeightSolve,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitSystem,
}

impl Model for FlameHeight {
    type Input = FlameHeightInput;
    /// The solved value in the caller's length or heat release rate unit.
    type Output = f64;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let units = input.units;
        match input.solve {
            FlameHeightSolve::FlameHeight {
                heat_release_rate,
                diameter,
            } => {
                let height =
                    flame_height(power(heat_release_rate, units), length(diameter, units))?;
                Ok(from_si::<LengthUnit>(height.get::<meter>(), units))
            }
            FlameHeightSolve::HeatReleaseRate {
                flame_height,
                diameter,
            } => {
                let q = heat_release_for_flame_height(
                    length(flame_height, units),
                    length(diameter, units),
                )?;
                Ok(from_si::<HeatReleaseRateUnit>(q.get::<kilowatt>(), units))
            }
            FlameHeightSolve::Diameter {
                flame_height,
                heat_release_rate,
            } => {
                let d = diameter_for_flame_height(
                    length(flame_height, units),
                    power(heat_release_rate, units),
                )?;
                Ok(from_si::<LengthUnit>(d.get::<meter>(), units))
            }
        }
    }
}
