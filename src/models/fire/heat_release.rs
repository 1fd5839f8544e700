use twine_core::Model;
use uom::si::power::kilowatt;

use crate::support::{
    fire::heat_release_rate,
    units::{HeatReleaseRateUnit, UnitSystem, mass_flux_from_grams},
};

use super::{Error, area, from_si};

/// Heat release rate of a burning fuel bed.
///
/// `mass_flux` overrides the fuel's tabulated burning flux. It is always
/// given in g/m²·s, whatever the unit system.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeatRelease;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatReleaseInput {
    pub fuel: String,
    pub burning_area: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mass_flux: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitSystem,
}

impl Model for HeatRelease {
    type Input = HeatReleaseInput;
    /// Heat release rate in kW (SI) or BTU/s (imperial).
    type Output = f64;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let units = input.units;
        let q = heat_release_rate(
            &input.fuel,
            area(input.burning_area, units),
            input.mass_flux.map(mass_flux_from_grams),
        )?;
        Ok(from_si::<HeatReleaseRateUnit>(q.get::<kilowatt>(), units))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::materials::MaterialError;

    fn input(
        fuel: &str,
        burning_area: f64,
        mass_flux: Option<f64>,
        units: UnitSystem,
    ) -> HeatReleaseInput {
        HeatReleaseInput {
            fuel: fuel.to_owned(),
            burning_area,
            mass_flux,
            units,
        }
    }

    #[test]
    fn tabulated_flux() {
        let q = HeatRelease
            .call(&input("heptane", 2.0, None, UnitSystem::Si))
            .unwrap();
        assert_relative_eq!(q, 0.070 * 2.0 * 44_600.0, max_relative = 1e-12);
    }

    #[test]
    fn manual_flux_overrides_the_table() {
        let q = HeatRelease
            .call(&input("heptane", 2.0, Some(35.0), UnitSystem::Si))
            .unwrap();
        assert_relative_eq!(q, 0.035 * 2.0 * 44_600.0, max_relative = 1e-12);
    }

    #[test]
    fn manual_flux_stays_in_grams_for_imperial_callers() {
        // One square meter of heptane burning at its tabulated 70 g/m²·s.
        let imperial = HeatRelease
            .call(&input("heptane", 10.7639, Some(70.0), UnitSystem::Imperial))
            .unwrap();
        assert_relative_eq!(imperial, 3122.0 * 0.947817, max_relative = 1e-9);
        assert_relative_eq!(imperial, 2959.08, epsilon = 0.01);

        let tabulated = HeatRelease
            .call(&input("heptane", 10.7639, None, UnitSystem::Imperial))
            .unwrap();
        assert_relative_eq!(imperial, tabulated, max_relative = 1e-12);
    }

    #[test]
    fn fuel_without_flux_needs_an_override() {
        assert!(matches!(
            HeatRelease.call(&input("kerosene", 1.0, None, UnitSystem::Si)),
            Err(Error::Material(MaterialError::MissingData { .. }))
        ));
        assert!(HeatRelease
            .call(&input("kerosene", 1.0, Some(39.0), UnitSystem::Si))
            .is_ok());
    }

    #[test]
    fn zero_area_is_allowed() {
        let q = HeatRelease
            .call(&input("heptane", 0.0, None, UnitSystem::Si))
            .unwrap();
        assert_eq!(q, 0.0);
    }
}
