use std::fmt;

use super::{Unit, UnitSystem};

/// A scalar value tagged with the unit it is expressed in.
///
/// The unit type parameter fixes the dimension, so a length can only ever be
/// re-expressed in another length unit.
///
/// ```
/// use fire_models::support::units::{LengthUnit, PhysicalQuantity, UnitSystem};
///
/// let height = PhysicalQuantity::new(10.0, LengthUnit::Foot);
/// let si = height.in_system(UnitSystem::Si);
///
/// assert_eq!(si.unit(), LengthUnit::Meter);
/// assert!((si.value() - 3.048).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalQuantity<U> {
    value: f64,
    unit: U,
}

impl<U: Unit> PhysicalQuantity<U> {
    #[must_use]
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// Creates a quantity in the default unit of `system` for this dimension.
    #[must_use]
    pub fn in_units_of(value: f64, system: UnitSystem) -> Self {
        Self::new(value, U::for_system(system))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn unit(self) -> U {
        self.unit
    }

    /// Re-expresses this quantity in `unit`.
    #[must_use]
    pub fn to(self, unit: U) -> Self {
        Self::new(U::convert(self.value, self.unit, unit), unit)
    }

    /// Re-expresses this quantity in the default unit of `system`.
    #[must_use]
    pub fn in_system(self, system: UnitSystem) -> Self {
        self.to(U::for_system(system))
    }
}

impl<U: Unit> fmt::Display for PhysicalQuantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}
