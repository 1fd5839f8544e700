//! Published conversion factors.
//!
//! These constants are the compatibility surface of the crate: results must
//! match the published hand-calculation worksheets, so each factor is stored
//! exactly as published rather than derived from an exact SI definition.
//!
//! The two heat release factors are deliberately independent. Their product is
//! `1.0000000128`, not `1.0`, so a kW → BTU/s → kW round trip drifts by about
//! 1.3e-8 relative.

/// Feet per meter.
pub const FEET_PER_METER: f64 = 3.28084;

/// BTU/s per kW.
pub const BTU_PER_SECOND_PER_KILOWATT: f64 = 0.947817;

/// kW per BTU/s.
pub const KILOWATTS_PER_BTU_PER_SECOND: f64 = 1.055056;

/// BTU/ft²·s per kW/m².
///
/// A second value, 0.088055, also circulates for this factor. 0.08811 is the
/// canonical one here.
pub const HEAT_FLUX_IMPERIAL_PER_SI: f64 = 0.08811;

/// ft² per m².
pub const SQUARE_FEET_PER_SQUARE_METER: f64 = 10.7639;

/// BTU/lb per MJ/kg, used only for heats of combustion.
pub const HEAT_OF_COMBUSTION_IMPERIAL_PER_SI: f64 = 430.0;

/// Pounds per kilogram.
pub const POUNDS_PER_KILOGRAM: f64 = 2.205;

/// Fahrenheit degrees per kelvin (or Celsius degree) of temperature difference.
pub const FAHRENHEIT_DEGREES_PER_KELVIN: f64 = 1.8;

/// Kelvin value of 0 °C.
pub const CELSIUS_ZERO_IN_KELVIN: f64 = 273.15;

/// Fahrenheit value of 0 °C.
pub const FAHRENHEIT_AT_CELSIUS_ZERO: f64 = 32.0;
