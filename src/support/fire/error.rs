use num_traits::Zero;
use thiserror::Error;
use uom::si::{Dimension, Quantity, Units};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
    materials::MaterialError,
};

/// An input outside the domain of a correlation.
///
/// Inputs are checked before any formula is evaluated, and results are checked
/// after, so a calculator never returns a `NaN` or infinity. Values carried in
/// variants are SI.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("invalid `{input}`: {source}")]
    Constraint {
        input: &'static str,
        source: ConstraintError,
    },

    #[error("vent area {vent} m² exceeds the total enclosing surface area {enclosure} m²")]
    VentExceedsEnclosure { vent: f64, enclosure: f64 },

    #[error("layer height {layer} m must be below the ceiling height {ceiling} m")]
    LayerNotBelowCeiling { layer: f64, ceiling: f64 },

    #[error("neutral plane at {neutral_plane} m must lie strictly inside the {vent} m vent")]
    NeutralPlaneOutsideVent { neutral_plane: f64, vent: f64 },

    #[error("hot gas at {hot} K is not hotter than ambient air at {ambient} K")]
    NoBuoyancy { hot: f64, ambient: f64 },

    #[error("a {heat_release_rate} kW fire cannot produce a {flame_height} m flame")]
    FlameHeightUnsupported {
        flame_height: f64,
        heat_release_rate: f64,
    },

    #[error("target rise {target} K exceeds the steady-state rise {steady_state} K")]
    TargetExceedsSteadyState { target: f64, steady_state: f64 },

    #[error("target temperature {target} K is not above ambient {ambient} K")]
    TargetBelowAmbient { target: f64, ambient: f64 },

    #[error("`{name}` is not a known growth rate")]
    UnknownGrowthRate { name: String },

    #[error("at least one fuel package is required")]
    NoFuelPackages,

    #[error("`{output}` is not finite for these inputs")]
    NonFiniteResult { output: &'static str },
}

/// Errors from calculators that consult the material property store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Material(#[from] MaterialError),
}

/// A scalar or quantity whose magnitude can overflow.
pub(crate) trait Finite {
    fn is_finite(&self) -> bool;
}

impl Finite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl<D, U> Finite for Quantity<D, U, f64>
where
    D: Dimension + ?Sized,
    U: Units<f64> + ?Sized,
{
    fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// Returns `value` if it is finite and strictly positive, naming `input`
/// otherwise.
pub(crate) fn strictly_positive<T: PartialOrd + Zero + Finite>(
    input: &'static str,
    value: T,
) -> Result<T, ValidationError> {
    let value = StrictlyPositive::new(value)
        .map(|valid| valid.into_inner())
        .map_err(|source| ValidationError::Constraint { input, source })?;
    finite_input(input, value)
}

/// Returns `value` if it is finite and zero or greater, naming `input`
/// otherwise.
pub(crate) fn non_negative<T: PartialOrd + Zero + Finite>(
    input: &'static str,
    value: T,
) -> Result<T, ValidationError> {
    let value = NonNegative::new(value)
        .map(|valid| valid.into_inner())
        .map_err(|source| ValidationError::Constraint { input, source })?;
    finite_input(input, value)
}

fn finite_input<T: Finite>(input: &'static str, value: T) -> Result<T, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::Constraint {
            input,
            source: ConstraintError::NotFinite,
        })
    }
}

/// Returns a computed `value` if it is finite, naming `output` otherwise.
///
/// Finite inputs can still overflow or underflow inside a correlation.
pub(crate) fn finite_result<T: Finite>(
    output: &'static str,
    value: T,
) -> Result<T, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFiniteResult { output })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::meter};

    #[test]
    fn names_the_offending_input() {
        let err = strictly_positive("diameter", Length::new::<meter>(0.0)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Constraint {
                input: "diameter",
                source: ConstraintError::Zero,
            }
        );
        assert_eq!(err.to_string(), "invalid `diameter`: value must not be zero");
    }

    #[test]
    fn zero_is_non_negative() {
        assert_eq!(non_negative("area", 0.0), Ok(0.0));
        assert!(non_negative("area", -1e-9).is_err());
    }

    #[test]
    fn infinity_is_rejected() {
        let not_finite = |input| ValidationError::Constraint {
            input,
            source: ConstraintError::NotFinite,
        };
        assert_eq!(
            strictly_positive("diameter", Length::new::<meter>(f64::INFINITY)),
            Err(not_finite("diameter"))
        );
        assert_eq!(non_negative("time", f64::INFINITY), Err(not_finite("time")));
        assert_eq!(
            non_negative("time", f64::NEG_INFINITY),
            Err(ValidationError::Constraint {
                input: "time",
                source: ConstraintError::Negative,
            })
        );
        assert_eq!(
            non_negative("time", f64::NAN),
            Err(ValidationError::Constraint {
                input: "time",
                source: ConstraintError::NotANumber,
            })
        );
    }

    #[test]
    fn non_finite_results_name_the_output() {
        assert_eq!(finite_result("heat_flux", 2.5), Ok(2.5));
        assert_eq!(
            finite_result("heat_flux", f64::NAN),
            Err(ValidationError::NonFiniteResult {
                output: "heat_flux"
            })
        );
        assert!(finite_result("flame_height", Length::new::<meter>(f64::INFINITY)).is_err());
    }
}
