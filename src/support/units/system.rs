use std::{fmt, str::FromStr};

use super::UnitError;

/// The unit system a caller declares for a single request.
///
/// The declared system fixes the unit of every dimension in that request:
///
/// | Dimension            | SI      | Imperial    |
/// |----------------------|---------|-------------|
/// | Length               | m       | ft          |
/// | Temperature          | °C      | °F          |
/// | Heat release rate    | kW      | BTU/s       |
/// | Heat flux            | kW/m²   | BTU/ft²·s   |
/// | Area                 | m²      | ft²         |
/// | Growth coefficient   | kW/s²   | BTU/s³      |
///
/// SI is the default when a caller does not specify a system.
///
/// ```
/// use fire_models::support::units::UnitSystem;
///
/// assert_eq!("imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
/// assert_eq!("SI".parse::<UnitSystem>().unwrap(), UnitSystem::Si);
/// assert_eq!(UnitSystem::default(), UnitSystem::Si);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitSystem {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "SI", alias = "si", alias = "metric"))]
    Si,
    #[cfg_attr(feature = "serde", serde(rename = "imperial", alias = "Imperial"))]
    Imperial,
}

impl FromStr for UnitSystem {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "si" | "metric" => Ok(Self::Si),
            "imperial" | "us" => Ok(Self::Imperial),
            _ => Err(UnitError::UnknownSystem {
                system: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Si => f.write_str("SI"),
            Self::Imperial => f.write_str("imperial"),
        }
    }
}
