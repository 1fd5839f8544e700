use std::str::FromStr;

use uom::si::{
    f64::{Power, Time},
    power::kilowatt,
    time::second,
};

use crate::support::units::{
    FireGrowthCoefficient, growth_coefficient_from_kilowatts, growth_coefficient_in_kilowatts,
};

use super::{ValidationError, finite_result, non_negative, strictly_positive};

/// Growth coefficient of a slow fire, kW/s².
pub const SLOW: f64 = 0.00293;
/// Growth coefficient of a medium fire, kW/s².
pub const MEDIUM: f64 = 0.01172;
/// Growth coefficient of a fast fire, kW/s².
pub const FAST: f64 = 0.0469;
/// Growth coefficient of an ultrafast fire, kW/s².
pub const ULTRAFAST: f64 = 0.1876;

/// Growth rate of a t-squared fire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GrowthRate {
    Slow,
    Medium,
    Fast,
    Ultrafast,
    Custom(FireGrowthCoefficient),
}

impl GrowthRate {
    /// Returns the growth coefficient `α`.
    #[must_use]
    pub fn coefficient(self) -> FireGrowthCoefficient {
        match self {
            Self::Slow => growth_coefficient_from_kilowatts(SLOW),
            Self::Medium => growth_coefficient_from_kilowatts(MEDIUM),
            Self::Fast => growth_coefficient_from_kilowatts(FAST),
            Self::Ultrafast => growth_coefficient_from_kilowatts(ULTRAFAST),
            Self::Custom(alpha) => alpha,
        }
    }
}

impl FromStr for GrowthRate {
    type Err = ValidationError;

    /// Parses one of the four named growth rates, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(Self::Slow),
            "medium" => Ok(Self::Medium),
            "fast" => Ok(Self::Fast),
            "ultrafast" | "ultra-fast" | "ultra_fast" => Ok(Self::Ultrafast),
            _ => Err(ValidationError::UnknownGrowthRate { name: s.to_owned() }),
        }
    }
}

/// Heat release rate of a t-squared fire: `Q = α·t²`.
///
/// ```
/// use fire_models::support::fire::{t_squared_heat_release, GrowthRate};
/// use uom::si::{f64::Time, power::kilowatt, time::second};
///
/// let q = t_squared_heat_release(GrowthRate::Medium, Time::new::<second>(300.0)).unwrap();
/// assert!((q.get::<kilowatt>() - 1054.8).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// Returns a [`ValidationError`] unless `α > 0` and `t ≥ 0`.
pub fn t_squared_heat_release(rate: GrowthRate, time: Time) -> Result<Power, ValidationError> {
    let alpha = strictly_positive("alpha", rate.coefficient())?;
    let t = non_negative("time", time)?;
    finite_result("heat_release_rate", alpha * t * t)
}

/// Time for a t-squared fire to reach a heat release rate: `t = √(Q/α)`.
///
/// # Errors
///
/// Returns a [`ValidationError`] unless `α > 0` and `Q ≥ 0`.
pub fn t_squared_time(rate: GrowthRate, heat_release_rate: Power) -> Result<Time, ValidationError> {
    let alpha = strictly_positive("alpha", rate.coefficient())?;
    let q = non_negative("heat_release_rate", heat_release_rate)?;

    let seconds = (q.get::<kilowatt>() / growth_coefficient_in_kilowatts(alpha)).sqrt();
    finite_result("time", Time::new::<second>(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn named_rates() {
        let cases = [
            (GrowthRate::Slow, SLOW),
            (GrowthRate::Medium, MEDIUM),
            (GrowthRate::Fast, FAST),
            (GrowthRate::Ultrafast, ULTRAFAST),
        ];
        for (rate, alpha) in cases {
            assert_relative_eq!(
                growth_coefficient_in_kilowatts(rate.coefficient()),
                alpha,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn medium_fire_at_five_minutes() {
        let t = Time::new::<second>(300.0);
        let q = t_squared_heat_release(GrowthRate::Medium, t).unwrap();
        assert_relative_eq!(q.get::<kilowatt>(), 1054.8, max_relative = 1e-12);

        let back = t_squared_time(GrowthRate::Medium, q).unwrap();
        assert_relative_eq!(back.get::<second>(), 300.0, max_relative = 1e-12);
    }

    #[test]
    fn custom_coefficient() {
        let rate = GrowthRate::Custom(growth_coefficient_from_kilowatts(0.02));
        let q = t_squared_heat_release(rate, Time::new::<second>(100.0)).unwrap();
        assert_relative_eq!(q.get::<kilowatt>(), 200.0, max_relative = 1e-12);
    }

    #[test]
    fn parses_names() {
        assert_eq!("Fast".parse::<GrowthRate>(), Ok(GrowthRate::Fast));
        assert_eq!("ultrafast".parse::<GrowthRate>(), Ok(GrowthRate::Ultrafast));
        assert!(matches!(
            "glacial".parse::<GrowthRate>(),
            Err(ValidationError::UnknownGrowthRate { .. })
        ));
    }

    #[test]
    fn rejects_invalid_inputs() {
        let zero = GrowthRate::Custom(growth_coefficient_from_kilowatts(0.0));
        assert!(t_squared_heat_release(zero, Time::new::<second>(10.0)).is_err());
        assert!(t_squared_time(zero, Power::new::<kilowatt>(10.0)).is_err());
        assert!(t_squared_heat_release(GrowthRate::Slow, Time::new::<second>(-1.0)).is_err());
        assert!(t_squared_time(GrowthRate::Slow, Power::new::<kilowatt>(-1.0)).is_err());
        assert_eq!(
            t_squared_time(GrowthRate::Slow, Power::new::<kilowatt>(0.0))
                .unwrap()
                .get::<second>(),
            0.0
        );
    }

    #[test]
    fn overflowing_time_is_an_error() {
        assert_eq!(
            t_squared_heat_release(GrowthRate::Fast, Time::new::<second>(1e200)),
            Err(ValidationError::NonFiniteResult {
                output: "heat_release_rate"
            })
        );
    }
}
