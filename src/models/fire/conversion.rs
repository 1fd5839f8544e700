use twine_core::Model;

use crate::support::units::{Dimension, convert};

use super::Error;

/// Converts a value between two unit tokens of one dimension.
///
/// Tokens are matched as in [`convert`], for example `"ft"`, `"°F"`, or
/// `"BTU/ft²·s"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitConversion;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitConversionInput {
    pub dimension: Dimension,
    pub value: f64,
    pub from: String,
    pub to: String,
}

impl Model for UnitConversion {
    type Input = UnitConversionInput;
    type Output = f64;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(convert(input.dimension, input.value, &input.from, &input.to)?)
    }
}
