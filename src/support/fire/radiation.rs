use std::{f64::consts::PI, ops::Deref};

use uom::si::{
    f64::{Area, HeatFluxDensity, Length, Power, Ratio},
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, UnitInterval},
    units::MassFlux,
};

use super::{
    CalculationError, ValidationError, finite_result, heat_release_rate, non_negative,
    strictly_positive,
};

/// Fraction of a fire's heat release emitted as thermal radiation.
///
/// Both endpoints of `[0, 1]` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RadiativeFraction(Constrained<Ratio, UnitInterval>);

impl RadiativeFraction {
    /// Creates a radiative fraction from a dimensionless value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside `[0, 1]` or `NaN`.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(Ratio::new::<ratio>(value))?))
    }
}

impl Deref for RadiativeFraction {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Radiant heat flux and the fire that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelRadiation {
    pub heat_release_rate: Power,
    pub heat_flux: HeatFluxDensity,
}

/// Point source radiant heat flux: `q″ = Q·Xr / (4π·R²)`.
///
/// ```
/// use fire_models::support::fire::{point_source_heat_flux, RadiativeFraction};
/// use uom::si::{
///     f64::{Length, Power},
///     heat_flux_density::watt_per_square_meter,
///     length::meter,
///     power::kilowatt,
/// };
///
/// let flux = point_source_heat_flux(
///     Power::new::<kilowatt>(1000.0),
///     Length::new::<meter>(5.0),
///     RadiativeFraction::new(0.3).unwrap(),
/// )
/// .unwrap();
///
/// let kw_per_m2 = flux.get::<watt_per_square_meter>() / 1000.0;
/// assert!((kw_per_m2 - 0.95493).abs() < 1e-5);
/// ```
///
/// # Errors
///
/// Returns a [`ValidationError`] if `Q < 0` or `R ≤ 0`, or if `R` is so small
/// that the flux is not finite.
pub fn point_source_heat_flux(
    heat_release_rate: Power,
    distance: Length,
    radiative_fraction: RadiativeFraction,
) -> Result<HeatFluxDensity, ValidationError> {
    let q = non_negative("heat_release_rate", heat_release_rate)?;
    let r = strictly_positive("distance", distance)?;

    let sphere: Area = r * r * (4.0 * PI);
    finite_result("heat_flux", q * radiative_fraction.get::<ratio>() / sphere)
}

/// Radiant heat flux from a burning fuel bed.
///
/// The heat release rate comes from [`heat_release_rate`], then the point
/// source model is applied at `distance`.
///
/// # Errors
///
/// Returns any error from [`heat_release_rate`] or [`point_source_heat_flux`].
pub fn fuel_point_source_heat_flux(
    fuel_key: &str,
    burning_area: Area,
    mass_flux: Option<MassFlux>,
    distance: Length,
    radiative_fraction: RadiativeFraction,
) -> Result<FuelRadiation, CalculationError> {
    let heat_release_rate = heat_release_rate(fuel_key, burning_area, mass_flux)?;
    let heat_flux = point_source_heat_flux(heat_release_rate, distance, radiative_fraction)?;
    Ok(FuelRadiation {
        heat_release_rate,
        heat_flux,
    })
}
