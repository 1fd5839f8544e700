//! Read-only material property tables.
//!
//! Fuels and lining (construction) materials live in two separate static
//! tables, so a fuel key can never resolve to a lining or the reverse.
//! Keys are matched case-insensitively.
//!
//! The free functions in this module return plain numbers in the units of a
//! declared [`UnitSystem`]. The [`Fuel`] and [`Lining`] records expose the same
//! data as [`uom`] quantities for calculators.
//!
//! ```
//! use fire_models::support::{materials, units::UnitSystem};
//!
//! assert_eq!(materials::heat_of_combustion("Heptane", UnitSystem::Si).unwrap(), 44.6);
//! assert!(materials::mass_burning_flux("kerosene", UnitSystem::Si).is_err());
//! assert!(materials::fuel("unobtainium").is_err());
//! ```

mod fuels;
mod linings;

use std::fmt;

use thiserror::Error;

use crate::support::units::{
    TemperatureUnit, Unit, UnitSystem, convert_temperature,
    factors::{
        HEAT_OF_COMBUSTION_IMPERIAL_PER_SI, POUNDS_PER_KILOGRAM, SQUARE_FEET_PER_SQUARE_METER,
    },
};

pub use fuels::Fuel;
pub use linings::{Lining, ThermalProperties};

/// A property a material record may lack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    MassBurningFlux,
    IgnitionTemperature,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MassBurningFlux => f.write_str("mass burning flux"),
            Self::IgnitionTemperature => f.write_str("ignition temperature"),
        }
    }
}

/// Errors raised by material lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterialError {
    #[error("material `{key}` not found")]
    NotFound { key: String },

    #[error("{property} is not available for material `{key}`")]
    MissingData { key: String, property: Property },
}

/// Returns every fuel record, in table order.
#[must_use]
pub fn fuels() -> &'static [Fuel] {
    fuels::FUELS
}

/// Returns every lining material record, in table order.
#[must_use]
pub fn linings() -> &'static [Lining] {
    linings::LININGS
}

/// Looks up a fuel by key.
///
/// # Errors
///
/// Returns [`MaterialError::NotFound`] if no fuel has this key.
pub fn fuel(key: &str) -> Result<&'static Fuel, MaterialError> {
    fuels::FUELS
        .iter()
        .find(|fuel| fuel.key().eq_ignore_ascii_case(key))
        .ok_or_else(|| not_found(key))
}

/// Looks up a lining material by key.
///
/// # Errors
///
/// Returns [`MaterialError::NotFound`] if no lining has this key.
pub fn lining(key: &str) -> Result<&'static Lining, MaterialError> {
    linings::LININGS
        .iter()
        .find(|lining| lining.key().eq_ignore_ascii_case(key))
        .ok_or_else(|| not_found(key))
}

/// Returns a fuel's heat of combustion in MJ/kg (SI) or BTU/lb (imperial).
///
/// # Errors
///
/// Returns [`MaterialError::NotFound`] for an unknown key.
pub fn heat_of_combustion(key: &str, system: UnitSystem) -> Result<f64, MaterialError> {
    let mj_per_kg = fuel(key)?.heat_of_combustion_mj_per_kg();
    Ok(match system {
        UnitSystem::Si => mj_per_kg,
        UnitSystem::Imperial => mj_per_kg * HEAT_OF_COMBUSTION_IMPERIAL_PER_SI,
    })
}

/// Returns a fuel's mass burning flux in g/m²·s (SI) or lb/ft²·s (imperial).
///
/// # Errors
///
/// Returns [`MaterialError::NotFound`] for an unknown key, or
/// [`MaterialError::MissingData`] if the fuel has no flux entry.
pub fn mass_burning_flux(key: &str, system: UnitSystem) -> Result<f64, MaterialError> {
    let fuel = fuel(key)?;
    let grams = fuel
        .mass_flux_g_per_m2_s()
        .ok_or_else(|| missing(fuel.key(), Property::MassBurningFlux))?;
    Ok(match system {
        UnitSystem::Si => grams,
        UnitSystem::Imperial => {
            grams / 1000.0 * POUNDS_PER_KILOGRAM / SQUARE_FEET_PER_SQUARE_METER
        }
    })
}

/// Returns a fuel's piloted ignition temperature in °C (SI) or °F (imperial).
///
/// # Errors
///
/// Returns [`MaterialError::NotFound`] for an unknown key, or
/// [`MaterialError::MissingData`] if no ignition temperature is tabulated.
pub fn ignition_temperature(key: &str, system: UnitSystem) -> Result<f64, MaterialError> {
    let fuel = fuel(key)?;
    let celsius = fuel
        .ignition_temperature_celsius()
        .ok_or_else(|| missing(fuel.key(), Property::IgnitionTemperature))?;
    Ok(convert_temperature(
        celsius,
        TemperatureUnit::Celsius,
        TemperatureUnit::for_system(system),
    ))
}

/// Returns the thermal properties of a lining material.
///
/// # Errors
///
/// Returns [`MaterialError::NotFound`] for an unknown lining key.
pub fn thermal_properties(key: &str) -> Result<ThermalProperties, MaterialError> {
    Ok(lining(key)?.thermal_properties())
}

fn not_found(key: &str) -> MaterialError {
    MaterialError::NotFound {
        key: key.to_owned(),
    }
}

fn missing(key: &str, property: Property) -> MaterialError {
    MaterialError::MissingData {
        key: key.to_owned(),
        property,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn tables_are_disjoint() {
        for fuel in fuels() {
            assert!(lining(fuel.key()).is_err(), "{} is also a lining", fuel.key());
        }
        for lining in linings() {
            assert!(fuel(lining.key()).is_err(), "{} is also a fuel", lining.key());
        }
    }

    #[test]
    fn keys_are_unique_ignoring_case() {
        let keys: Vec<_> = fuels().iter().map(|f| f.key().to_ascii_lowercase()).collect();
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key), "duplicate key {key}");
        }
    }

    #[test]
    fn fuel_table_contents() {
        assert_eq!(fuels().len(), 39);
        assert_eq!(fuels()[0].key(), "liquefied_propane");
        assert_eq!(fuel("LIQUEFIED_NATURAL_GAS").unwrap().name(), "Liquefied Natural Gas (LNG)");
    }

    #[test]
    fn unknown_keys_fail_with_the_key() {
        assert_eq!(
            heat_of_combustion("napalm", UnitSystem::Si),
            Err(MaterialError::NotFound {
                key: "napalm".to_owned()
            })
        );
        assert!(matches!(
            thermal_properties("heptane"),
            Err(MaterialError::NotFound { .. })
        ));
    }

    #[test]
    fn heat_of_combustion_in_both_systems() {
        assert_relative_eq!(heat_of_combustion("methanol", UnitSystem::Si).unwrap(), 19.8);
        assert_relative_eq!(
            heat_of_combustion("methanol", UnitSystem::Imperial).unwrap(),
            19.8 * 430.0
        );
    }

    #[test]
    fn mass_burning_flux_presence() {
        assert_relative_eq!(mass_burning_flux("gasoline", UnitSystem::Si).unwrap(), 55.0);
        assert_relative_eq!(
            mass_burning_flux("gasoline", UnitSystem::Imperial).unwrap(),
            0.055 * 2.205 / 10.7639,
            max_relative = 1e-12
        );
        assert_eq!(
            mass_burning_flux("Kerosene", UnitSystem::Si),
            Err(MaterialError::MissingData {
                key: "kerosene".to_owned(),
                property: Property::MassBurningFlux,
            })
        );
    }

    #[test]
    fn ignition_temperature_lookup() {
        assert_relative_eq!(ignition_temperature("pmma", UnitSystem::Si).unwrap(), 378.0);
        assert_relative_eq!(
            ignition_temperature("pmma", UnitSystem::Imperial).unwrap(),
            712.4,
            max_relative = 1e-12
        );
        assert!(matches!(
            ignition_temperature("gasoline", UnitSystem::Si),
            Err(MaterialError::MissingData {
                property: Property::IgnitionTemperature,
                ..
            })
        ));
    }

    #[test]
    fn lining_thermal_properties() {
        let gypsum = thermal_properties("Gypsum_Board").unwrap();
        assert_relative_eq!(gypsum.conductivity_kw_per_m_k(), 0.16, max_relative = 1e-12);

        let concrete = lining("concrete").unwrap();
        assert_eq!(concrete.name(), "Concrete");
    }
}
