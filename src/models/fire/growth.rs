use twine_core::Model;
use uom::si::{f64::Time, power::kilowatt, time::second};

use crate::support::{
    fire::{GrowthRate, t_squared_heat_release, t_squared_time},
    units::{
        GrowthCoefficientUnit, HeatReleaseRateUnit, UnitSystem, growth_coefficient_from_kilowatts,
    },
};

use super::{Error, from_si, power, to_si};

/// A t-squared growing fire, solved forward for heat release rate or
/// inverted for time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TSquaredGrowth;

/// The unknown to solve for, with the known value.
///
/// Times are always seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "solve_for", rename_all = "snake_case")
)]
pub enum TSquaredSolve {
    HeatReleaseRate { time: f64 },
    Time { heat_release_rate: f64 },
}

/// A named growth rate (`slow`, `medium`, `fast`, `ultrafast`), or a custom
/// `alpha` in kW/s² (SI) or BTU/s³ (imperial), which takes precedence when
/// present.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TSquaredInput {
    #[cfg_attr(feature = "serde", serde(default))]
    pub growth_rate: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alpha: Option<f64>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub solve: TSquaredSolve,
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: UnitSystem,
}

impl TSquaredInput {
    fn rate(&self) -> Result<GrowthRate, Error> {
        match self.alpha {
            Some(alpha) => Ok(GrowthRate::Custom(growth_coefficient_from_kilowatts(
                to_si::<GrowthCoefficientUnit>(alpha, self.units),
            ))),
            None => Ok(self.growth_rate.parse()?),
        }
    }
}

impl Model for TSquaredGrowth {
    type Input = TSquaredInput;
    /// Heat release rate in kW or BTU/s, or time in seconds.
    type Output = f64;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let rate = input.rate()?;
        match input.solve {
            TSquaredSolve::HeatReleaseRate { time } => {
                let q = t_squared_heat_release(rate, Time::new::<second>(time))?;
                Ok(from_si::<HeatReleaseRateUnit>(q.get::<kilowatt>(), input.units))
            }
            TSquaredSolve::Time { heat_release_rate } => {
                let t = t_squared_time(rate, power(heat_release_rate, input.units))?;
                Ok(t.get::<second>())
            }
        }
    }
}
