use twine_core::Model;
use uom::si::{area::square_meter, f64::Power, power::kilowatt};

use crate::support::{
    fire::{CompartmentGeometry, flashover},
    units::{AreaUnit, HeatReleaseRateUnit, UnitSystem},
};

use super::{Error, from_si, length};

/// Minimum heat release rate for flashover in a room with one opening.
///
/// Evaluates the MQH, Babrauskas, and Thomas correlations together. MQH uses
/// the thermal conductivity of the named lining material.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flashover;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlashoverInput {
    pub room_length: f64,
    pub room_width: f64,
    pub room_height: f64,
    pub opening_width: f64,
    pub opening_height: f64,
    pub lining: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitSystem,
}

/// Flashover thresholds in the caller's heat release rate unit, with the
/// derived areas in the caller's area unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlashoverOutput {
    pub mqh: f64,
    pub babrauskas: f64,
    pub thomas: f64,
    pub total_surface_area: f64,
    pub opening_area: f64,
}

impl Model for Flashover {
    type Input = FlashoverInput;
    type Output = FlashoverOutput;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let units = input.units;
        let geometry = CompartmentGeometry::from_dimensions(
            length(input.room_length, units),
            length(input.room_width, units),
            length(input.room_height, units),
            length(input.opening_width, units),
            length(input.opening_height, units),
        )?;
        let thresholds = flashover(&geometry, &input.lining)?;

        let hrr = |q: Power| from_si::<HeatReleaseRateUnit>(q.get::<kilowatt>(), units);
        Ok(FlashoverOutput {
            mqh: hrr(thresholds.mqh),
            babrauskas: hrr(thresholds.babrauskas),
            thomas: hrr(thresholds.thomas),
            total_surface_area: from_si::<AreaUnit>(
                geometry.total_surface_area().get::<square_meter>(),
                units,
            ),
            opening_area: from_si::<AreaUnit>(geometry.opening_area().get::<square_meter>(), units),
        })
    }
}
