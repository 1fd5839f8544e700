use std::convert::Infallible;

use twine_core::Model;

use crate::support::{
    materials::{self, Fuel},
    units::{HeatOfCombustionUnit, TemperatureUnit, UnitSystem},
};

use super::from_si;

/// Lists every tabulated fuel with its properties in one unit system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuelListing;

/// A fuel record in the requested units.
///
/// Heat of combustion is MJ/kg or BTU/lb, mass burning flux g/m²·s or
/// lb/ft²·s, and ignition temperature °C or °F. A flux passed back to
/// [`HeatRelease`](super::HeatRelease) as an override is always g/m²·s.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FuelSummary {
    pub key: &'static str,
    pub name: &'static str,
    pub heat_of_combustion: f64,
    pub mass_burning_flux: Option<f64>,
    pub ignition_temperature: Option<f64>,
}

impl FuelSummary {
    fn new(fuel: &Fuel, units: UnitSystem) -> Self {
        Self {
            key: fuel.key(),
            name: fuel.name(),
            heat_of_combustion: from_si::<HeatOfCombustionUnit>(
                fuel.heat_of_combustion_mj_per_kg(),
                units,
            ),
            // The key comes from the table, so only a missing flux can fail.
            mass_burning_flux: materials::mass_burning_flux(fuel.key(), units).ok(),
            ignition_temperature: fuel
                .ignition_temperature_celsius()
                .map(|celsius| from_si::<TemperatureUnit>(celsius, units)),
        }
    }
}

impl Model for FuelListing {
    type Input = UnitSystem;
    type Output = Vec<FuelSummary>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(materials::fuels()
            .iter()
            .map(|fuel| FuelSummary::new(fuel, *input))
            .collect())
    }
}
