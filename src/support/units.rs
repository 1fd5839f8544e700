//! Unit conversion between SI and imperial, plus extensions to [`uom`].
//!
//! Fire correlations are empirical and always evaluated in SI. Callers may
//! declare either [`UnitSystem`], so every value crossing the boundary passes
//! through the conversions in this module exactly once on the way in and once
//! on the way out.
//!
//! ## Conversions
//!
//! Each supported dimension has its own unit enum, and conversions are only
//! defined between units of the same enum:
//!
//! ```
//! use fire_models::support::units::{convert_heat_release_rate, HeatReleaseRateUnit};
//!
//! let btu_s = convert_heat_release_rate(
//!     1000.0,
//!     HeatReleaseRateUnit::Kilowatt,
//!     HeatReleaseRateUnit::BtuPerSecond,
//! );
//! assert!((btu_s - 947.817).abs() < 1e-9);
//! ```
//!
//! String unit tokens are parsed per dimension with [`convert`], which fails
//! with [`UnitError::InvalidUnit`] for a token outside that dimension.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait fills a gap in [`uom`] by subtracting
//! absolute temperatures into a [`TemperatureInterval`](uom::si::f64::TemperatureInterval)
//! and adding an interval back onto an absolute temperature.

mod convert;
pub mod factors;
mod quantities;
mod quantity;
mod system;
mod temperature_difference;

use std::fmt;

use thiserror::Error;

pub use convert::{
    AreaUnit, EnergyUnit, GrowthCoefficientUnit, HeatFluxUnit, HeatOfCombustionUnit,
    HeatReleaseRateUnit, LengthUnit, MassUnit, TemperatureDifferenceUnit, TemperatureUnit, Unit,
    VelocityUnit, convert, convert_area, convert_energy, convert_growth_coefficient,
    convert_heat_flux, convert_heat_of_combustion, convert_heat_release_rate, convert_length,
    convert_mass, convert_temperature, convert_temperature_difference, convert_velocity,
    from_kelvin, to_kelvin,
};
pub use quantities::{
    FireGrowthCoefficient, FireLoadDensity, MassFlux, fire_load_density_in_megajoules,
    growth_coefficient_from_kilowatts, growth_coefficient_in_kilowatts, mass_flux_from_grams,
};
pub use quantity::PhysicalQuantity;
pub use system::UnitSystem;
pub use temperature_difference::TemperatureDifference;

/// Physical dimensions supported by the conversion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    Length,
    Temperature,
    TemperatureDifference,
    HeatReleaseRate,
    HeatFlux,
    Area,
    GrowthCoefficient,
    Velocity,
    Mass,
    Energy,
    HeatOfCombustion,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Length => "length",
            Self::Temperature => "temperature",
            Self::TemperatureDifference => "temperature difference",
            Self::HeatReleaseRate => "heat release rate",
            Self::HeatFlux => "heat flux",
            Self::Area => "area",
            Self::GrowthCoefficient => "growth coefficient",
            Self::Velocity => "velocity",
            Self::Mass => "mass",
            Self::Energy => "energy",
            Self::HeatOfCombustion => "heat of combustion",
        };
        f.write_str(name)
    }
}

/// Errors raised while parsing units or unit systems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("`{unit}` is not a recognized {dimension} unit")]
    InvalidUnit { dimension: Dimension, unit: String },

    #[error("`{system}` is not a recognized unit system (expected `SI` or `imperial`)")]
    UnknownSystem { system: String },
}
