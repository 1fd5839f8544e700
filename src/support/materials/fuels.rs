use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{AvailableEnergy, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::{MassFlux, mass_flux_from_grams};

/// A fuel record.
///
/// Values are stored in the units of the published tables: heat of
/// combustion in MJ/kg, mass burning flux in g/m²·s, and piloted ignition
/// temperature in °C. Flux and ignition temperature are not tabulated for
/// every fuel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fuel {
    key: &'static str,
    name: &'static str,
    heat_of_combustion: f64,
    mass_flux: Option<f64>,
    ignition_temperature: Option<f64>,
}

impl Fuel {
    const fn new(
        key: &'static str,
        name: &'static str,
        heat_of_combustion: f64,
        mass_flux: Option<f64>,
        ignition_temperature: Option<f64>,
    ) -> Self {
        Self {
            key,
            name,
            heat_of_combustion,
            mass_flux,
            ignition_temperature,
        }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn heat_of_combustion_mj_per_kg(&self) -> f64 {
        self.heat_of_combustion
    }

    #[must_use]
    pub fn mass_flux_g_per_m2_s(&self) -> Option<f64> {
        self.mass_flux
    }

    #[must_use]
    pub fn ignition_temperature_celsius(&self) -> Option<f64> {
        self.ignition_temperature
    }

    /// Effective heat of combustion.
    #[must_use]
    pub fn heat_of_combustion(&self) -> AvailableEnergy {
        AvailableEnergy::new::<kilojoule_per_kilogram>(self.heat_of_combustion * 1000.0)
    }

    /// Mass burning flux, if tabulated.
    #[must_use]
    pub fn mass_flux(&self) -> Option<MassFlux> {
        self.mass_flux.map(mass_flux_from_grams)
    }

    /// Piloted ignition temperature, if tabulated.
    #[must_use]
    pub fn ignition_temperature(&self) -> Option<ThermodynamicTemperature> {
        self.ignition_temperature
            .map(ThermodynamicTemperature::new::<degree_celsius>)
    }
}

// Piloted ignition temperatures are Tewarson's values from the SFPE Handbook
// of Fire Protection Engineering (flammability properties of solids).
pub(super) const FUELS: &[Fuel] = &[
    // Liquids and liquefied gases.
    Fuel::new("liquefied_propane", "Liquefied Propane", 46.5, Some(115.0), None),
    Fuel::new("liquefied_natural_gas", "Liquefied Natural Gas (LNG)", 50.0, Some(90.0), None),
    Fuel::new("benzene", "Benzene", 40.0, Some(90.0), None),
    Fuel::new("butane", "Butane", 45.7, Some(80.0), None),
    Fuel::new("n-butane", "n-Butane", 45.7, None, None),
    Fuel::new("hexane", "Hexane", 43.8, Some(75.0), None),
    Fuel::new("n-hexane", "n-Hexane", 43.8, None, None),
    Fuel::new("xylene", "Xylene", 40.0, Some(70.0), None),
    Fuel::new("jp-4", "JP-4", 43.2, Some(60.0), None),
    Fuel::new("heptane", "Heptane", 44.6, Some(70.0), None),
    Fuel::new("gasoline", "Gasoline", 43.7, Some(55.0), None),
    Fuel::new("acetone", "Acetone", 30.8, Some(40.0), None),
    Fuel::new("methanol", "Methanol", 19.8, Some(22.0), None),
    Fuel::new("kerosene", "Kerosene", 43.2, None, None),
    Fuel::new("ethanol", "Ethanol", 26.8, None, None),
    // Plastics.
    Fuel::new("hdpe", "HDPE", 40.0, None, None),
    Fuel::new("polyethylene", "Polyethylene", 43.4, None, Some(363.0)),
    Fuel::new("polypropylene", "Polypropylene", 44.0, None, Some(367.0)),
    Fuel::new("polystyrene", "Polystyrene", 35.8, None, Some(356.0)),
    Fuel::new("polystyrene_granular", "Polystyrene (Granular)", 35.8, Some(38.0), None),
    Fuel::new("pmma", "PMMA", 24.2, None, Some(378.0)),
    Fuel::new("pmma_granular", "PMMA (Granular)", 24.2, Some(28.0), None),
    Fuel::new("polyethylene_granular", "Polyethylene (Granular)", 43.4, Some(26.0), None),
    Fuel::new("polypropylene_granular", "Polypropylene (Granular)", 44.0, Some(24.0), None),
    Fuel::new("nylon", "Nylon", 27.9, None, Some(432.0)),
    Fuel::new("nylon_6", "Nylon 6", 28.8, None, None),
    Fuel::new("pbt", "PBT", 20.9, None, None),
    Fuel::new("abs", "ABS", 30.0, None, None),
    Fuel::new("abs_fr", "ABS-FR", 11.7, None, None),
    Fuel::new("rigid_polyurethane_foam", "Rigid Polyurethane Foam", 22.3, Some(23.5), None),
    Fuel::new("flexible_polyurethane_foam", "Flexible Polyurethane Foam", 22.3, Some(24.0), None),
    Fuel::new("pvc", "PVC", 10.0, None, None),
    Fuel::new("pvc_granular", "PVC (Granular)", 10.0, Some(16.0), None),
    // Cellulosics.
    Fuel::new("corrugated_paper", "Corrugated Paper", 13.2, Some(14.0), None),
    Fuel::new("wood_crib", "Wood Crib", 14.7, Some(11.0), None),
    Fuel::new("douglas_fir", "Douglas Fir", 14.7, None, Some(350.0)),
    Fuel::new("hemlock", "Hemlock", 13.3, None, None),
    Fuel::new("plywood", "Plywood", 11.9, None, None),
    Fuel::new("plywood_fr", "Plywood FR", 11.2, None, None),
];

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn quantities_match_table_units() {
        let heptane = FUELS.iter().find(|f| f.key == "heptane").unwrap();

        assert_relative_eq!(
            heptane.heat_of_combustion().get::<kilojoule_per_kilogram>(),
            44_600.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(heptane.mass_flux().unwrap().value, 0.070, max_relative = 1e-12);
        assert!(heptane.ignition_temperature().is_none());
    }

    #[test]
    fn every_fuel_has_positive_values() {
        for fuel in FUELS {
            assert!(fuel.heat_of_combustion > 0.0, "{}", fuel.key);
            assert!(fuel.mass_flux.is_none_or(|flux| flux > 0.0), "{}", fuel.key);
        }
    }
}
