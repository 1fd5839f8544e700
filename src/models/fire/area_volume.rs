use twine_core::Model;

use crate::support::fire::{Measures, cylindrical, rectangular};

use super::Error;

/// Surface areas and volume of a compartment.
///
/// The formulas are unit-agnostic, so the result is in whatever length unit
/// the dimensions were given in.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaVolume;

/// Compartment shape and its dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "shape", rename_all = "snake_case")
)]
pub enum Shape {
    Rectangular { length: f64, width: f64, height: f64 },
    Cylindrical { diameter: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaVolumeInput {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub shape: Shape,
}

impl Model for AreaVolume {
    type Input = AreaVolumeInput;
    type Output = Measures;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let measures = match input.shape {
            Shape::Rectangular {
                length,
                width,
                height,
            } => rectangular(length, width, height)?,
            Shape::Cylindrical { diameter, height } => cylindrical(diameter, height)?,
        };
        Ok(measures)
    }
}
