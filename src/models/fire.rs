//! Per-correlation fire models.
//!
//! Each model takes a flat set of named values in the caller's
//! [`UnitSystem`], converts them to SI exactly once, runs the matching
//! calculator from [`crate::support::fire`], and converts the result back to
//! the caller's system. Every model that can fail does so with [`Error`].
//!
//! | Model                       | Result                                        |
//! |-----------------------------|-----------------------------------------------|
//! | [`AreaVolume`]              | floor, wall, and total area, volume           |
//! | [`Flashover`]               | MQH, Babrauskas, and Thomas thresholds        |
//! | [`FlameHeight`]             | flame height, or the HRR or diameter for one  |
//! | [`HeatRelease`]             | heat release rate of a burning fuel           |
//! | [`PointSourceRadiation`]    | radiant heat flux                             |
//! | [`FuelRadiation`]           | heat release rate and radiant heat flux       |
//! | [`TSquaredGrowth`]          | heat release rate at a time, or the reverse   |
//! | [`SmokeFilling`]            | smoke filling time                            |
//! | [`SmokeLayerTemperature`]   | hot layer temperature                         |
//! | [`CeilingJet`]              | ceiling jet temperature and velocity          |
//! | [`VentFlow`]                | vent mass flow in and out                     |
//! | [`MqhTemperatureRise`]      | steady-state compartment temperature          |
//! | [`TimeToTemperature`]       | time to reach a compartment temperature       |
//! | [`FireLoad`]                | total fire load and fire load density         |
//! | [`FuelListing`]             | every tabulated fuel                          |
//! | [`UnitConversion`]          | a value converted between two unit tokens     |

mod area_volume;
mod ceiling_jet;
mod conversion;
mod fire_load;
mod flame_height;
mod flashover;
mod fuels;
mod growth;
mod heat_release;
mod radiation;
mod smoke_layer;
mod temperature_rise;
mod vent_flow;

pub use area_volume::{AreaVolume, AreaVolumeInput, Shape};
pub use ceiling_jet::{CeilingJet, CeilingJetInput, CeilingJetOutput};
pub use conversion::{UnitConversion, UnitConversionInput};
pub use fire_load::{FireLoad, FireLoadInput, FireLoadOutput, FuelPackageInput, PackageFuel};
pub use flame_height::{FlameHeight, FlameHeightInput, FlameHeightSolve};
pub use flashover::{Flashover, FlashoverInput, FlashoverOutput};
pub use fuels::{FuelListing, FuelSummary};
pub use growth::{TSquaredGrowth, TSquaredInput, TSquaredSolve};
pub use heat_release::{HeatRelease, HeatReleaseInput};
pub use radiation::{
    FuelRadiation, FuelRadiationInput, FuelRadiationOutput, PointSourceRadiation,
    PointSourceRadiationInput,
};
pub use smoke_layer::{
    SmokeFilling, SmokeFillingInput, SmokeLayerTemperature, SmokeLayerTemperatureInput,
};
pub use temperature_rise::{
    MqhTemperatureRise, MqhTemperatureRiseInput, MqhTemperatureRiseOutput, TimeToTemperature,
    TimeToTemperatureInput,
};
pub use vent_flow::{VentFlow, VentFlowInput, VentFlowOutput};

use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Power, ThermodynamicTemperature},
    length::meter,
    power::kilowatt,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::{
    constraint::ConstraintError,
    fire::{CalculationError, ValidationError, strictly_positive},
    materials::MaterialError,
    units::{
        AreaUnit, HeatReleaseRateUnit, LengthUnit, TemperatureUnit, Unit, UnitError, UnitSystem,
    },
};

/// The error returned by every fire model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Material(#[from] MaterialError),

    #[error(transparent)]
    Unit(#[from] UnitError),
}

impl From<CalculationError> for Error {
    fn from(error: CalculationError) -> Self {
        match error {
            CalculationError::Validation(error) => Self::Validation(error),
            CalculationError::Material(error) => Self::Material(error),
        }
    }
}

impl Error {
    /// Wraps a raw constraint violation on a named input.
    fn constraint(input: &'static str, source: ConstraintError) -> Self {
        Self::Validation(ValidationError::Constraint { input, source })
    }
}

/// Converts `value` from the caller's unit for `U` into the SI unit.
fn to_si<U: Unit>(value: f64, units: UnitSystem) -> f64 {
    U::convert(value, U::for_system(units), U::for_system(UnitSystem::Si))
}

/// Converts `value` from the SI unit for `U` into the caller's unit.
fn from_si<U: Unit>(value: f64, units: UnitSystem) -> f64 {
    U::convert(value, U::for_system(UnitSystem::Si), U::for_system(units))
}

fn length(value: f64, units: UnitSystem) -> Length {
    Length::new::<meter>(to_si::<LengthUnit>(value, units))
}

fn area(value: f64, units: UnitSystem) -> Area {
    Area::new::<square_meter>(to_si::<AreaUnit>(value, units))
}

fn power(value: f64, units: UnitSystem) -> Power {
    Power::new::<kilowatt>(to_si::<HeatReleaseRateUnit>(value, units))
}

fn temperature(value: f64, units: UnitSystem) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(to_si::<TemperatureUnit>(value, units))
}

/// An ambient temperature, which must lie above absolute zero.
fn ambient_temperature(value: f64, units: UnitSystem) -> Result<ThermodynamicTemperature, Error> {
    let ambient = temperature(value, units);
    strictly_positive("ambient_temperature", ambient.get::<kelvin>())?;
    Ok(ambient)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::materials::Property;

    #[test]
    fn si_values_pass_through_unchanged() {
        assert_eq!(to_si::<LengthUnit>(3.7, UnitSystem::Si), 3.7);
        assert_eq!(from_si::<TemperatureUnit>(21.3, UnitSystem::Si), 21.3);
        assert_eq!(length(3.7, UnitSystem::Si).get::<meter>(), 3.7);
    }

    #[test]
    fn imperial_values_convert_both_ways() {
        assert_relative_eq!(
            length(3.28084, UnitSystem::Imperial).get::<meter>(),
            1.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            temperature(212.0, UnitSystem::Imperial).get::<degree_celsius>(),
            100.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            from_si::<HeatReleaseRateUnit>(1.0, UnitSystem::Imperial),
            0.947817,
            max_relative = 1e-12
        );
    }

    #[test]
    fn ambient_must_be_above_absolute_zero() {
        assert_relative_eq!(
            ambient_temperature(-40.0, UnitSystem::Imperial)
                .unwrap()
                .get::<degree_celsius>(),
            -40.0,
            max_relative = 1e-12
        );
        assert!(matches!(
            ambient_temperature(-500.0, UnitSystem::Imperial),
            Err(Error::Validation(ValidationError::Constraint {
                input: "ambient_temperature",
                ..
            }))
        ));
        assert!(ambient_temperature(-273.15, UnitSystem::Si).is_err());
    }

    #[test]
    fn calculation_errors_flatten() {
        let material = MaterialError::MissingData {
            key: "kerosene".into(),
            property: Property::MassBurningFlux,
        };
        assert_eq!(
            Error::from(CalculationError::Material(material.clone())),
            Error::Material(material)
        );
        assert_eq!(
            Error::from(CalculationError::Validation(ValidationError::NoFuelPackages)),
            Error::Validation(ValidationError::NoFuelPackages)
        );
    }
}
