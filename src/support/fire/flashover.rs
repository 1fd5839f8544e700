use uom::si::{area::square_meter, f64::Power, power::kilowatt};

use crate::support::materials;

use super::{
    CalculationError, CompartmentGeometry, ValidationError, finite_result, strictly_positive,
};

pub const MQH_COEFFICIENT: f64 = 610.0;
pub const BABRAUSKAS_COEFFICIENT: f64 = 750.0;
pub const THOMAS_SURFACE_COEFFICIENT: f64 = 7.8;
pub const THOMAS_VENT_COEFFICIENT: f64 = 378.0;

/// Minimum heat release rates for flashover by three independent methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashoverThresholds {
    pub mqh: Power,
    pub babrauskas: Power,
    pub thomas: Power,
}

/// Evaluates all three flashover correlations for a compartment.
///
/// The MQH correlation takes the lining's thermal conductivity (kW/m·K) from
/// the material store as its effective heat transfer coefficient `hk`.
///
/// # Errors
///
/// Returns [`CalculationError::Material`] if the lining key is unknown.
pub fn flashover(
    geometry: &CompartmentGeometry,
    lining_key: &str,
) -> Result<FlashoverThresholds, CalculationError> {
    let hk = effective_hk(lining_key)?;
    Ok(FlashoverThresholds {
        mqh: mqh(geometry, hk)?,
        babrauskas: finite_result("babrauskas", babrauskas(geometry))?,
        thomas: finite_result("thomas", thomas(geometry))?,
    })
}

/// Looks up the effective heat transfer coefficient `hk` of a lining.
///
/// # Errors
///
/// Returns [`materials::MaterialError::NotFound`] for an unknown lining key.
pub fn effective_hk(lining_key: &str) -> Result<f64, materials::MaterialError> {
    Ok(materials::thermal_properties(lining_key)?.conductivity_kw_per_m_k())
}

/// McCaffrey, Quintiere and Harkleroad: `Q = 610·√(hk·At·A0·√H0)`.
///
/// # Errors
///
/// Returns a [`ValidationError`] if `hk` is not strictly positive.
pub fn mqh(geometry: &CompartmentGeometry, hk: f64) -> Result<Power, ValidationError> {
    let hk = strictly_positive("hk", hk)?;
    let at = geometry.total_surface_area().get::<square_meter>();
    finite_result(
        "mqh",
        Power::new::<kilowatt>(MQH_COEFFICIENT * (hk * at * geometry.ventilation_factor()).sqrt()),
    )
}

/// Babrauskas: `Q = 750·A0·√H0`.
#[must_use]
pub fn babrauskas(geometry: &CompartmentGeometry) -> Power {
    Power::new::<kilowatt>(BABRAUSKAS_COEFFICIENT * geometry.ventilation_factor())
}

/// Thomas: `Q = 7.8·At + 378·A0·√H0`.
#[must_use]
pub fn thomas(geometry: &CompartmentGeometry) -> Power {
    let at = geometry.total_surface_area().get::<square_meter>();
    Power::new::<kilowatt>(
        THOMAS_SURFACE_COEFFICIENT * at + THOMAS_VENT_COEFFICIENT * geometry.ventilation_factor(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_foot,
        f64::{Area, Length},
        length::{foot, meter},
    };

    use crate::support::materials::MaterialError;

    fn geometry(at: f64, a0: f64, h0: f64) -> CompartmentGeometry {
        CompartmentGeometry::new(
            Area::new::<square_meter>(at),
            Area::new::<square_meter>(a0),
            Length::new::<meter>(h0),
        )
        .unwrap()
    }

    #[test]
    fn correlations_match_their_formulas() {
        let g = geometry(100.0, 2.0, 2.0);
        let vent = 2.0 * 2.0_f64.sqrt();

        assert_relative_eq!(
            mqh(&g, 0.16).unwrap().get::<kilowatt>(),
            610.0 * (0.16 * 100.0 * vent).sqrt(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            babrauskas(&g).get::<kilowatt>(),
            750.0 * vent,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            thomas(&g).get::<kilowatt>(),
            780.0 + 378.0 * vent,
            max_relative = 1e-12
        );
    }

    #[test]
    fn babrauskas_for_a_room_measured_in_feet() {
        let ft = |v| Length::new::<foot>(v);
        let g = CompartmentGeometry::from_dimensions(ft(10.0), ft(8.0), ft(7.0), ft(3.0), ft(6.0))
            .unwrap();

        assert_relative_eq!(
            g.total_surface_area().get::<square_foot>(),
            412.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            babrauskas(&g).get::<kilowatt>(),
            1700.0,
            max_relative = 0.02
        );
    }

    #[test]
    fn all_three_from_lining_key() {
        let g = geometry(100.0, 2.0, 2.0);
        let result = flashover(&g, "Concrete").unwrap();

        assert_relative_eq!(
            result.mqh.get::<kilowatt>(),
            mqh(&g, 1.6).unwrap().get::<kilowatt>(),
            max_relative = 1e-12
        );
        assert_eq!(result.babrauskas, babrauskas(&g));
        assert_eq!(result.thomas, thomas(&g));
    }

    #[test]
    fn unknown_lining_fails() {
        let g = geometry(100.0, 2.0, 2.0);
        assert_eq!(
            flashover(&g, "cardboard"),
            Err(CalculationError::Material(MaterialError::NotFound {
                key: "cardboard".to_owned()
            }))
        );
    }

    #[test]
    fn rejects_non_positive_hk() {
        let g = geometry(100.0, 2.0, 2.0);
        assert!(mqh(&g, 0.0).is_err());
    }
}
