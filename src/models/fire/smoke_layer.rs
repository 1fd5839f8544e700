use twine_core::Model;
use uom::si::{thermodynamic_temperature::degree_celsius, time::second};

use crate::support::{
    fire::{smoke_filling_time, smoke_layer_temperature},
    units::{TemperatureUnit, UnitSystem},
};

use super::{Error, area, from_si, length, power, temperature};

/// Time for a steady fire's smoke layer to descend to a given height.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmokeFilling;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmokeFillingInput {
    pub heat_release_rate: f64,
    pub room_height: f64,
    pub floor_area: f64,
    pub layer_height: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitSystem,
}

impl Model for SmokeFilling {
    type Input = SmokeFillingInput;
    /// Filling time in seconds.
    type Output = f64;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let units = input.units;
        let t = smoke_filling_time(
            power(input.heat_release_rate, units),
            length(input.room_height, units),
            area(input.floor_area, units),
            length(input.layer_height, units),
        )?;
        Ok(t.get::<second>())
    }
}

/// Average hot layer temperature with the interface at a given height.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmokeLayerTemperature;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmokeLayerTemperatureInput {
    pub heat_release_rate: f64,
    pub room_height: f64,
    pub layer_height: f64,
    pub ambient_temperature: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitSystem,
}

impl Model for SmokeLayerTemperature {
    type Input = SmokeLayerTemperatureInput;
    /// Layer temperature in °C (SI) or °F (imperial).
    type Output = f64;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let units = input.units;
        let t = smoke_layer_temperature(
            power(input.heat_release_rate, units),
            length(input.room_height, units),
            length(input.layer_height, units),
            temperature(input.ambient_temperature, units),
        )?;
        Ok(from_si::<TemperatureUnit>(t.get::<degree_celsius>(), units))
    }
}
