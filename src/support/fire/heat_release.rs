use uom::si::f64::{Area, AvailableEnergy, Power};

use crate::support::{materials, units::MassFlux};

use super::{CalculationError, finite_result, non_negative};

/// Heat release rate of a burning fuel bed: `Q = ṁ″·A·ΔHc`.
///
/// The mass burning flux comes from `mass_flux` when given and otherwise from
/// the fuel's tabulated value. The heat of combustion always comes from the
/// fuel table.
///
/// ```
/// use fire_models::support::fire::heat_release_rate;
/// use uom::si::{area::square_meter, f64::Area, power::kilowatt};
///
/// // 70 g/m²·s of heptane at 44.6 MJ/kg over 2 m².
/// let q = heat_release_rate("heptane", Area::new::<square_meter>(2.0), None).unwrap();
/// assert!((q.get::<kilowatt>() - 6244.0).abs() < 1e-6);
/// ```
///
/// # Errors
///
/// - [`CalculationError::Validation`] if the area or supplied flux is negative.
/// - [`CalculationError::Material`] if the fuel is unknown, or if it has no
///   tabulated flux and none was supplied.
pub fn heat_release_rate(
    fuel_key: &str,
    burning_area: Area,
    mass_flux: Option<MassFlux>,
) -> Result<Power, CalculationError> {
    let burning_area = non_negative("burning_area", burning_area)?;
    let fuel = materials::fuel(fuel_key)?;

    let mass_flux = match mass_flux {
        Some(flux) => non_negative("mass_flux", flux)?,
        None => fuel.mass_flux().ok_or_else(|| materials::MaterialError::MissingData {
            key: fuel.key().to_owned(),
            property: materials::Property::MassBurningFlux,
        })?,
    };

    let q = burning_rate_heat_release(mass_flux, burning_area, fuel.heat_of_combustion());
    Ok(finite_result("heat_release_rate", q)?)
}

/// Evaluates `Q = ṁ″·A·ΔHc` for already validated inputs.
#[must_use]
pub fn burning_rate_heat_release(
    mass_flux: MassFlux,
    burning_area: Area,
    heat_of_combustion: AvailableEnergy,
) -> Power {
    mass_flux * burning_area * heat_of_combustion
}
