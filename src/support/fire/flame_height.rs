use uom::si::{
    f64::{Length, Power},
    length::meter,
    power::kilowatt,
};

use super::{ValidationError, finite_result, strictly_positive};

pub const HESKESTAD_HRR_COEFFICIENT: f64 = 0.235;
pub const HESKESTAD_DIAMETER_COEFFICIENT: f64 = 1.02;

/// Heskestad flame height: `L = 0.235·Q^0.4 − 1.02·D`.
///
/// A formula value at or below zero means no visible flame above the fuel
/// bed and is returned as exactly zero.
///
/// ```
/// use fire_models::support::fire::flame_height;
/// use uom::si::{f64::{Length, Power}, length::meter, power::kilowatt};
///
/// let large_pool = flame_height(Power::new::<kilowatt>(10.0), Length::new::<meter>(5.0)).unwrap();
/// assert_eq!(large_pool.get::<meter>(), 0.0);
/// ```
///
/// # Errors
///
/// Returns a [`ValidationError`] unless `Q > 0` and `D > 0`.
pub fn flame_height(heat_release_rate: Power, diameter: Length) -> Result<Length, ValidationError> {
    let q = strictly_positive("heat_release_rate", heat_release_rate)?.get::<kilowatt>();
    let d = strictly_positive("diameter", diameter)?.get::<meter>();

    let height = HESKESTAD_HRR_COEFFICIENT * q.powf(0.4) - HESKESTAD_DIAMETER_COEFFICIENT * d;
    finite_result("flame_height", Length::new::<meter>(height.max(0.0)))
}

/// Heat release rate producing a flame height: `Q = ((L + 1.02·D)/0.235)^2.5`.
///
/// # Errors
///
/// Returns a [`ValidationError`] unless `L > 0` and `D > 0`.
pub fn heat_release_for_flame_height(
    flame_height: Length,
    diameter: Length,
) -> Result<Power, ValidationError> {
    let l = strictly_positive("flame_height", flame_height)?.get::<meter>();
    let d = strictly_positive("diameter", diameter)?.get::<meter>();

    let q = ((l + HESKESTAD_DIAMETER_COEFFICIENT * d) / HESKESTAD_HRR_COEFFICIENT).powf(2.5);
    finite_result("heat_release_rate", Power::new::<kilowatt>(q))
}

/// Fire diameter producing a flame height: `D = (0.235·Q^0.4 − L)/1.02`.
///
/// # Errors
///
/// Returns a [`ValidationError`] unless `L > 0` and `Q > 0`, or
/// [`ValidationError::FlameHeightUnsupported`] if the flame is taller than
/// the heat release rate can support at any diameter.
pub fn diameter_for_flame_height(
    flame_height: Length,
    heat_release_rate: Power,
) -> Result<Length, ValidationError> {
    let l = strictly_positive("flame_height", flame_height)?.get::<meter>();
    let q = strictly_positive("heat_release_rate", heat_release_rate)?.get::<kilowatt>();

    let numerator = HESKESTAD_HRR_COEFFICIENT * q.powf(0.4) - l;
    if numerator <= 0.0 {
        return Err(ValidationError::FlameHeightUnsupported {
            flame_height: l,
            heat_release_rate: q,
        });
    }
    finite_result("diameter", Length::new::<meter>(numerator / HESKESTAD_DIAMETER_COEFFICIENT))
}
