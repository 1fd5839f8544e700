use twine_core::Model;
use uom::si::{
    available_energy::joule_per_kilogram,
    energy::megajoule,
    f64::{AvailableEnergy, Mass},
    mass::kilogram,
};

use crate::support::{
    fire::{FuelPackage, fire_load_density, total_fire_load},
    units::{
        AreaUnit, EnergyUnit, HeatOfCombustionUnit, MassUnit, UnitSystem,
        fire_load_density_in_megajoules,
    },
};

use super::{Error, area, from_si, to_si};

/// Total fire load of a compartment's contents, and its density over the
/// floor area when one is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct FireLoad;

/// Where a package's heat of combustion comes from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum PackageFuel {
    /// A fuel key in the material store.
    Tabulated { fuel: String },
    /// MJ/kg (SI) or BTU/lb (imperial).
    Explicit { heat_of_combustion: f64 },
}

/// One package: a mass in kg (SI) or lb (imperial) and its fuel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuelPackageInput {
    pub mass: f64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub fuel: PackageFuel,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireLoadInput {
    pub packages: Vec<FuelPackageInput>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub floor_area: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitSystem,
}

/// Fire load in MJ (SI) or BTU (imperial); density in MJ/m² or BTU/ft².
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireLoadOutput {
    pub total_fire_load: f64,
    pub fire_load_density: Option<f64>,
}

impl Model for FireLoad {
    type Input = FireLoadInput;
    type Output = FireLoadOutput;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let units = input.units;
        let packages = input
            .packages
            .iter()
            .map(|package| package.to_si(units))
            .collect::<Result<Vec<_>, _>>()?;

        let total = total_fire_load(&packages)?;
        let density = input
            .floor_area
            .map(|floor_area| fire_load_density(total, area(floor_area, units)))
            .transpose()?;

        Ok(FireLoadOutput {
            total_fire_load: from_si::<EnergyUnit>(total.get::<megajoule>(), units),
            fire_load_density: density.map(|density| {
                from_si::<EnergyUnit>(fire_load_density_in_megajoules(density), units)
                    / from_si::<AreaUnit>(1.0, units)
            }),
        })
    }
}

impl FuelPackageInput {
    fn to_si(&self, units: UnitSystem) -> Result<FuelPackage, Error> {
        let mass = Mass::new::<kilogram>(to_si::<MassUnit>(self.mass, units));
        match &self.fuel {
            PackageFuel::Tabulated { fuel } => Ok(FuelPackage::of_fuel(fuel, mass)?),
            PackageFuel::Explicit { heat_of_combustion } => {
                let mj_per_kg = to_si::<HeatOfCombustionUnit>(*heat_of_combustion, units);
                let hoc = AvailableEnergy::new::<joule_per_kilogram>(mj_per_kg * 1.0e6);
                Ok(FuelPackage::new(mass, hoc)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{fire::ValidationError, materials::MaterialError};

    fn explicit(mass: f64, heat_of_combustion: f64) -> FuelPackageInput {
        FuelPackageInput {
            mass,
            fuel: PackageFuel::Explicit { heat_of_combustion },
        }
    }

    fn tabulated(mass: f64, fuel: &str) -> FuelPackageInput {
        FuelPackageInput {
            mass,
            fuel: PackageFuel::Tabulated {
                fuel: fuel.to_owned(),
            },
        }
    }

    #[test]
    fn office_contents() {
        let output = FireLoad
            .call(&FireLoadInput {
                packages: vec![explicit(100.0, 18.0), tabulated(50.0, "plywood")],
                floor_area: Some(20.0),
                units: UnitSystem::Si,
            })
            .unwrap();

        assert_relative_eq!(output.total_fire_load, 1800.0 + 595.0, max_relative = 1e-12);
        assert_relative_eq!(
            output.fire_load_density.unwrap(),
            2395.0 / 20.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn imperial_packages() {
        // 220.5 lb at 7740 BTU/lb is 100 kg at 18 MJ/kg.
        let output = FireLoad
            .call(&FireLoadInput {
                packages: vec![explicit(220.5, 7740.0)],
                floor_area: Some(10.7639),
                units: UnitSystem::Imperial,
            })
            .unwrap();

        let btu = 1800.0 * 947.817;
        assert_relative_eq!(output.total_fire_load, btu, max_relative = 1e-9);
        assert_relative_eq!(
            output.fire_load_density.unwrap(),
            btu / 10.7639,
            max_relative = 1e-9
        );
    }

    #[test]
    fn density_is_optional() {
        let output = FireLoad
            .call(&FireLoadInput {
                packages: vec![explicit(1.0, 10.0)],
                floor_area: None,
                units: UnitSystem::Si,
            })
            .unwrap();
        assert_eq!(output.fire_load_density, None);
    }

    #[test]
    fn failures_propagate() {
        let empty = FireLoadInput {
            packages: Vec::new(),
            floor_area: None,
            units: UnitSystem::Si,
        };
        assert_eq!(
            FireLoad.call(&empty),
            Err(Error::Validation(ValidationError::NoFuelPackages))
        );

        let unknown = FireLoadInput {
            packages: vec![tabulated(1.0, "adamantium")],
            ..empty.clone()
        };
        assert!(matches!(
            FireLoad.call(&unknown),
            Err(Error::Material(MaterialError::NotFound { .. }))
        ));

        let weightless = FireLoadInput {
            packages: vec![explicit(0.0, 18.0)],
            ..empty
        };
        assert!(FireLoad.call(&weightless).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parses_mixed_packages() {
        let input: FireLoadInput = serde_json::from_str(
            r#"{
                "packages": [
                    { "mass": 10.0, "fuel": "plywood" },
                    { "mass": 5.0, "heat_of_combustion": 20.0 }
                ],
                "floor_area": 12.0
            }"#,
        )
        .unwrap();

        assert_eq!(input.packages, vec![tabulated(10.0, "plywood"), explicit(5.0, 20.0)]);
        assert_eq!(input.units, UnitSystem::Si);
    }
}
