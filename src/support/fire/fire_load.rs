use uom::si::f64::{Area, AvailableEnergy, Energy, Mass};

use crate::support::{materials, units::FireLoadDensity};

use super::{CalculationError, ValidationError, finite_result, strictly_positive};

/// A quantity of one combustible material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelPackage {
    mass: Mass,
    heat_of_combustion: AvailableEnergy,
}

impl FuelPackage {
    /// Creates a package from a mass and an explicit heat of combustion.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] unless both values are strictly positive.
    pub fn new(mass: Mass, heat_of_combustion: AvailableEnergy) -> Result<Self, ValidationError> {
        Ok(Self {
            mass: strictly_positive("mass", mass)?,
            heat_of_combustion: strictly_positive("heat_of_combustion", heat_of_combustion)?,
        })
    }

    /// Creates a package of a tabulated fuel.
    ///
    /// # Errors
    ///
    /// Returns a [`CalculationError`] if the mass is not strictly positive or
    /// the fuel is unknown.
    pub fn of_fuel(fuel_key: &str, mass: Mass) -> Result<Self, CalculationError> {
        let fuel = materials::fuel(fuel_key)?;
        Ok(Self::new(mass, fuel.heat_of_combustion())?)
    }

    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    #[must_use]
    pub fn heat_of_combustion(&self) -> AvailableEnergy {
        self.heat_of_combustion
    }

    /// Energy released by burning the whole package, `m·ΔHc`.
    #[must_use]
    pub fn energy(&self) -> Energy {
        self.mass * self.heat_of_combustion
    }
}

/// Total fire load of a compartment's contents, `E = Σ mᵢ·ΔHcᵢ`.
///
/// # Errors
///
/// Returns [`ValidationError::NoFuelPackages`] if `packages` is empty.
pub fn total_fire_load(packages: &[FuelPackage]) -> Result<Energy, ValidationError> {
    let (first, rest) = packages
        .split_first()
        .ok_or(ValidationError::NoFuelPackages)?;
    let total = rest
        .iter()
        .fold(first.energy(), |total, package| total + package.energy());
    finite_result("total_fire_load", total)
}

/// Fire load per unit floor area, `E/A`.
///
/// # Errors
///
/// Returns a [`ValidationError`] unless both values are strictly positive.
pub fn fire_load_density(
    total_fire_load: Energy,
    floor_area: Area,
) -> Result<FireLoadDensity, ValidationError> {
    let total = strictly_positive("total_fire_load", total_fire_load)?;
    let area = strictly_positive("floor_area", floor_area)?;
    finite_result("fire_load_density", total / area)
}
