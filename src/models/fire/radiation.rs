use twine_core::Model;
use uom::si::{f64::HeatFluxDensity, heat_flux_density::watt_per_square_meter, power::kilowatt};

use crate::support::{
    fire::{RadiativeFraction, fuel_point_source_heat_flux, point_source_heat_flux},
    units::{HeatFluxUnit, HeatReleaseRateUnit, UnitSystem, mass_flux_from_grams},
};

use super::{Error, area, from_si, length, power};

/// Point source radiant heat flux at a distance from a fire.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointSourceRadiation;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointSourceRadiationInput {
    pub heat_release_rate: f64,
    pub distance: f64,
    pub radiative_fraction: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitSystem,
}

impl Model for PointSourceRadiation {
    type Input = PointSourceRadiationInput;
    /// Heat flux in kW/m² (SI) or BTU/ft²·s (imperial).
    type Output = f64;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let units = input.units;
        let flux = point_source_heat_flux(
            power(input.heat_release_rate, units),
            length(input.distance, units),
            radiative_fraction(input.radiative_fraction)?,
        )?;
        Ok(heat_flux(flux, units))
    }
}

/// Point source radiation from a burning fuel bed.
///
/// The heat release rate is computed as in [`HeatRelease`](super::HeatRelease),
/// including its g/m²·s `mass_flux` override, and reported alongside the flux.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuelRadiation;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuelRadiationInput {
    pub fuel: String,
    pub burning_area: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mass_flux: Option<f64>,
    pub distance: f64,
    pub radiative_fraction: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitSystem,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuelRadiationOutput {
    pub heat_release_rate: f64,
    pub heat_flux: f64,
}

impl Model for FuelRadiation {
    type Input = FuelRadiationInput;
    type Output = FuelRadiationOutput;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let units = input.units;
        let radiation = fuel_point_source_heat_flux(
            &input.fuel,
            area(input.burning_area, units),
            input.mass_flux.map(mass_flux_from_grams),
            length(input.distance, units),
            radiative_fraction(input.radiative_fraction)?,
        )?;
        Ok(FuelRadiationOutput {
            heat_release_rate: from_si::<HeatReleaseRateUnit>(
                radiation.heat_release_rate.get::<kilowatt>(),
                units,
            ),
            heat_flux: heat_flux(radiation.heat_flux, units),
        })
    }
}

fn radiative_fraction(value: f64) -> Result<RadiativeFraction, Error> {
    RadiativeFraction::new(value).map_err(|source| Error::constraint("radiative_fraction", source))
}

fn heat_flux(flux: HeatFluxDensity, units: UnitSystem) -> f64 {
    from_si::<HeatFluxUnit>(flux.get::<watt_per_square_meter>() / 1000.0, units)
}
