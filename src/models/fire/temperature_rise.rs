use twine_core::Model;
use uom::si::{
    temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::degree_celsius,
    time::second,
};

use crate::support::{
    fire::{CompartmentGeometry, effective_hk, mqh_temperature_rise, time_to_temperature},
    units::{TemperatureDifference, TemperatureDifferenceUnit, TemperatureUnit, UnitSystem},
};

use super::{Error, ambient_temperature, area, from_si, length, power, temperature};

/// Steady-state upper layer temperature rise by the MQH correlation.
///
/// The effective heat transfer coefficient `hk` is the named lining's thermal
/// conductivity, as in [`Flashover`](super::Flashover), unless `hk` is given
/// directly in kW/m²·K. A given `hk` is never converted and makes `lining`
/// optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct MqhTemperatureRise;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MqhTemperatureRiseInput {
    pub heat_release_rate: f64,
    pub total_surface_area: f64,
    pub opening_area: f64,
    pub opening_height: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lining: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hk: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ambient_temperature: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitSystem,
}

/// Rise in K (SI) or °F (imperial); the upper layer temperature in °C or °F
/// when an ambient temperature was given.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MqhTemperatureRiseOutput {
    pub temperature_rise: f64,
    pub temperature: Option<f64>,
}

impl Model for MqhTemperatureRise {
    type Input = MqhTemperatureRiseInput;
    type Output = MqhTemperatureRiseOutput;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let units = input.units;
        let geometry = geometry(
            input.total_surface_area,
            input.opening_area,
            input.opening_height,
            units,
        )?;
        let hk = effective_coefficient(input.hk, &input.lining)?;
        let rise = mqh_temperature_rise(power(input.heat_release_rate, units), &geometry, hk)?;

        let ambient = input
            .ambient_temperature
            .map(|ambient| ambient_temperature(ambient, units))
            .transpose()?;
        let temperature = ambient.map(|ambient| {
            let t = ambient.plus(rise);
            from_si::<TemperatureUnit>(t.get::<degree_celsius>(), units)
        });

        Ok(MqhTemperatureRiseOutput {
            temperature_rise: from_si::<TemperatureDifferenceUnit>(
                rise.get::<delta_kelvin>(),
                units,
            ),
            temperature,
        })
    }
}

/// Time for the upper layer to climb from ambient to a target temperature.
///
/// `lining` and `hk` work as in [`MqhTemperatureRise`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeToTemperature;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeToTemperatureInput {
    pub heat_release_rate: f64,
    pub total_surface_area: f64,
    pub opening_area: f64,
    pub opening_height: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lining: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hk: Option<f64>,
    pub target_temperature: f64,
    pub ambient_temperature: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitSystem,
}

impl Model for TimeToTemperature {
    type Input = TimeToTemperatureInput;
    /// Time in seconds.
    type Output = f64;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let units = input.units;
        let geometry = geometry(
            input.total_surface_area,
            input.opening_area,
            input.opening_height,
            units,
        )?;
        let hk = effective_coefficient(input.hk, &input.lining)?;
        let t = time_to_temperature(
            power(input.heat_release_rate, units),
            &geometry,
            hk,
            temperature(input.target_temperature, units),
            temperature(input.ambient_temperature, units),
        )?;
        Ok(t.get::<second>())
    }
}

/// The given `hk`, or the lining's when none is given.
fn effective_coefficient(hk: Option<f64>, lining: &str) -> Result<f64, Error> {
    match hk {
        Some(hk) => Ok(hk),
        None => Ok(effective_hk(lining)?),
    }
}

fn geometry(
    total_surface_area: f64,
    opening_area: f64,
    opening_height: f64,
    units: UnitSystem,
) -> Result<CompartmentGeometry, Error> {
    Ok(CompartmentGeometry::new(
        area(total_surface_area, units),
        area(opening_area, units),
        length(opening_height, units),
    )?)
}
