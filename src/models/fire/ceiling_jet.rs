use twine_core::Model;
use uom::si::{
    temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::{
    fire::ceiling_jet,
    units::{
        TemperatureDifference, TemperatureDifferenceUnit, TemperatureUnit, UnitSystem, VelocityUnit,
    },
};

use super::{Error, ambient_temperature, from_si, length, power};

/// Alpert ceiling jet temperature rise and velocity.
///
/// When an ambient temperature is given, the absolute ceiling jet
/// temperature is reported as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct CeilingJet;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CeilingJetInput {
    pub heat_release_rate: f64,
    pub ceiling_height: f64,
    pub radial_distance: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ambient_temperature: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitSystem,
}

/// Temperature rise in K (SI) or °F (imperial), velocity in m/s or ft/s.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CeilingJetOutput {
    pub temperature_rise: f64,
    pub velocity: f64,
    pub temperature: Option<f64>,
}

impl Model for CeilingJet {
    type Input = CeilingJetInput;
    type Output = CeilingJetOutput;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let units = input.units;
        let jet = ceiling_jet(
            power(input.heat_release_rate, units),
            length(input.ceiling_height, units),
            length(input.radial_distance, units),
        )?;

        let ambient = input
            .ambient_temperature
            .map(|ambient| ambient_temperature(ambient, units))
            .transpose()?;
        let temperature = ambient.map(|ambient| {
            let t = ambient.plus(jet.temperature_rise);
            from_si::<TemperatureUnit>(t.get::<degree_celsius>(), units)
        });

        Ok(CeilingJetOutput {
            temperature_rise: from_si::<TemperatureDifferenceUnit>(
                jet.temperature_rise.get::<delta_kelvin>(),
                units,
            ),
            velocity: from_si::<VelocityUnit>(jet.velocity.get::<meter_per_second>(), units),
            temperature,
        })
    }
}
