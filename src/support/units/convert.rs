//! Per-dimension unit enums and conversions.
//!
//! Every dimension with exactly two units converts with one fixed factor per
//! direction, so no intermediate unit is needed. Temperature has three units
//! and routes every conversion through kelvin.
//!
//! All conversions return the input unchanged when `from == to`, so a value
//! that never changes units is never perturbed by floating point.

use std::{fmt, str::FromStr};

use super::{
    Dimension, UnitError, UnitSystem,
    factors::{
        BTU_PER_SECOND_PER_KILOWATT, CELSIUS_ZERO_IN_KELVIN, FAHRENHEIT_AT_CELSIUS_ZERO,
        FAHRENHEIT_DEGREES_PER_KELVIN, FEET_PER_METER, HEAT_FLUX_IMPERIAL_PER_SI,
        HEAT_OF_COMBUSTION_IMPERIAL_PER_SI, KILOWATTS_PER_BTU_PER_SECOND, POUNDS_PER_KILOGRAM,
        SQUARE_FEET_PER_SQUARE_METER,
    },
};

/// A unit belonging to a single physical dimension.
///
/// Conversions are only defined between two units of the same implementor, so
/// converting a length into a temperature cannot be expressed.
pub trait Unit: Copy + Eq + fmt::Debug + FromStr<Err = UnitError> {
    /// The dimension every unit of this type measures.
    const DIMENSION: Dimension;

    /// Returns the default unit for this dimension in the given system.
    fn for_system(system: UnitSystem) -> Self;

    /// Returns the canonical symbol for this unit.
    fn symbol(self) -> &'static str;

    /// Converts `value` from unit `from` to unit `to`.
    fn convert(value: f64, from: Self, to: Self) -> f64;
}

/// Normalizes a unit token for matching.
///
/// Matching is case-insensitive and accepts superscript exponents and an
/// optional degree sign.
fn normalize(token: &str) -> String {
    token
        .trim()
        .to_ascii_lowercase()
        .replace('²', "2")
        .replace('³', "3")
        .replace('°', "")
        .replace('·', "/")
}

fn invalid<U: Unit>(token: &str) -> UnitError {
    UnitError::InvalidUnit {
        dimension: U::DIMENSION,
        unit: token.to_owned(),
    }
}

/// Length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    Meter,
    Foot,
}

/// Converts a length between meters and feet.
#[must_use]
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    match (from, to) {
        (LengthUnit::Meter, LengthUnit::Foot) => value * FEET_PER_METER,
        (LengthUnit::Foot, LengthUnit::Meter) => value / FEET_PER_METER,
        _ => value,
    }
}

impl Unit for LengthUnit {
    const DIMENSION: Dimension = Dimension::Length;

    fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self::Meter,
            UnitSystem::Imperial => Self::Foot,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Foot => "ft",
        }
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        convert_length(value, from, to)
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Self::Meter),
            "ft" | "foot" | "feet" => Ok(Self::Foot),
            _ => Err(invalid::<Self>(s)),
        }
    }
}

/// Absolute temperature units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Converts a temperature to kelvin.
#[must_use]
pub fn to_kelvin(value: f64, from: TemperatureUnit) -> f64 {
    match from {
        TemperatureUnit::Celsius => value + CELSIUS_ZERO_IN_KELVIN,
        TemperatureUnit::Fahrenheit => {
            (value - FAHRENHEIT_AT_CELSIUS_ZERO) / FAHRENHEIT_DEGREES_PER_KELVIN
                + CELSIUS_ZERO_IN_KELVIN
        }
        TemperatureUnit::Kelvin => value,
    }
}

/// Converts a temperature in kelvin to the given unit.
#[must_use]
pub fn from_kelvin(kelvin: f64, to: TemperatureUnit) -> f64 {
    match to {
        TemperatureUnit::Celsius => kelvin - CELSIUS_ZERO_IN_KELVIN,
        TemperatureUnit::Fahrenheit => {
            (kelvin - CELSIUS_ZERO_IN_KELVIN) * FAHRENHEIT_DEGREES_PER_KELVIN
                + FAHRENHEIT_AT_CELSIUS_ZERO
        }
        TemperatureUnit::Kelvin => kelvin,
    }
}

/// Converts an absolute temperature, routing through kelvin.
#[must_use]
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_kelvin(to_kelvin(value, from), to)
}

impl Unit for TemperatureUnit {
    const DIMENSION: Dimension = Dimension::Temperature;

    fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self::Celsius,
            UnitSystem::Imperial => Self::Fahrenheit,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        convert_temperature(value, from, to)
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "c" | "celsius" => Ok(Self::Celsius),
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            "k" | "kelvin" => Ok(Self::Kelvin),
            _ => Err(invalid::<Self>(s)),
        }
    }
}

/// Temperature difference units.
///
/// A kelvin and a Celsius degree are the same size, so only two units exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureDifferenceUnit {
    Kelvin,
    Fahrenheit,
}

/// Converts a temperature difference between kelvin and Fahrenheit degrees.
#[must_use]
pub fn convert_temperature_difference(
    value: f64,
    from: TemperatureDifferenceUnit,
    to: TemperatureDifferenceUnit,
) -> f64 {
    match (from, to) {
        (TemperatureDifferenceUnit::Kelvin, TemperatureDifferenceUnit::Fahrenheit) => {
            value * FAHRENHEIT_DEGREES_PER_KELVIN
        }
        (TemperatureDifferenceUnit::Fahrenheit, TemperatureDifferenceUnit::Kelvin) => {
            value / FAHRENHEIT_DEGREES_PER_KELVIN
        }
        _ => value,
    }
}

impl Unit for TemperatureDifferenceUnit {
    const DIMENSION: Dimension = Dimension::TemperatureDifference;

    fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self::Kelvin,
            UnitSystem::Imperial => Self::Fahrenheit,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Kelvin => "K",
            Self::Fahrenheit => "°F",
        }
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        convert_temperature_difference(value, from, to)
    }
}

impl FromStr for TemperatureDifferenceUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "k" | "c" | "kelvin" | "celsius" => Ok(Self::Kelvin),
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            _ => Err(invalid::<Self>(s)),
        }
    }
}

/// Heat release rate units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeatReleaseRateUnit {
    Kilowatt,
    BtuPerSecond,
}

/// Converts a heat release rate between kW and BTU/s.
///
/// Each direction uses its own published factor.
#[must_use]
pub fn convert_heat_release_rate(
    value: f64,
    from: HeatReleaseRateUnit,
    to: HeatReleaseRateUnit,
) -> f64 {
    match (from, to) {
        (HeatReleaseRateUnit::Kilowatt, HeatReleaseRateUnit::BtuPerSecond) => {
            value * BTU_PER_SECOND_PER_KILOWATT
        }
        (HeatReleaseRateUnit::BtuPerSecond, HeatReleaseRateUnit::Kilowatt) => {
            value * KILOWATTS_PER_BTU_PER_SECOND
        }
        _ => value,
    }
}

impl Unit for HeatReleaseRateUnit {
    const DIMENSION: Dimension = Dimension::HeatReleaseRate;

    fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self::Kilowatt,
            UnitSystem::Imperial => Self::BtuPerSecond,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Kilowatt => "kW",
            Self::BtuPerSecond => "BTU/s",
        }
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        convert_heat_release_rate(value, from, to)
    }
}

impl FromStr for HeatReleaseRateUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "kw" => Ok(Self::Kilowatt),
            "btu/s" => Ok(Self::BtuPerSecond),
            _ => Err(invalid::<Self>(s)),
        }
    }
}

/// Heat flux units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeatFluxUnit {
    KilowattPerSquareMeter,
    BtuPerSquareFootSecond,
}

/// Converts a heat flux between kW/m² and BTU/ft²·s.
#[must_use]
pub fn convert_heat_flux(value: f64, from: HeatFluxUnit, to: HeatFluxUnit) -> f64 {
    match (from, to) {
        (HeatFluxUnit::KilowattPerSquareMeter, HeatFluxUnit::BtuPerSquareFootSecond) => {
            value * HEAT_FLUX_IMPERIAL_PER_SI
        }
        (HeatFluxUnit::BtuPerSquareFootSecond, HeatFluxUnit::KilowattPerSquareMeter) => {
            value / HEAT_FLUX_IMPERIAL_PER_SI
        }
        _ => value,
    }
}

impl Unit for HeatFluxUnit {
    const DIMENSION: Dimension = Dimension::HeatFlux;

    fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self::KilowattPerSquareMeter,
            UnitSystem::Imperial => Self::BtuPerSquareFootSecond,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::KilowattPerSquareMeter => "kW/m²",
            Self::BtuPerSquareFootSecond => "BTU/ft²/s",
        }
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        convert_heat_flux(value, from, to)
    }
}

impl FromStr for HeatFluxUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "kw/m2" => Ok(Self::KilowattPerSquareMeter),
            "btu/ft2/s" | "btu/ft2-s" => Ok(Self::BtuPerSquareFootSecond),
            _ => Err(invalid::<Self>(s)),
        }
    }
}

/// Area units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AreaUnit {
    SquareMeter,
    SquareFoot,
}

/// Converts an area between m² and ft².
#[must_use]
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    match (from, to) {
        (AreaUnit::SquareMeter, AreaUnit::SquareFoot) => value * SQUARE_FEET_PER_SQUARE_METER,
        (AreaUnit::SquareFoot, AreaUnit::SquareMeter) => value / SQUARE_FEET_PER_SQUARE_METER,
        _ => value,
    }
}

impl Unit for AreaUnit {
    const DIMENSION: Dimension = Dimension::Area;

    fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self::SquareMeter,
            UnitSystem::Imperial => Self::SquareFoot,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::SquareMeter => "m²",
            Self::SquareFoot => "ft²",
        }
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        convert_area(value, from, to)
    }
}

impl FromStr for AreaUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "m2" | "sq m" => Ok(Self::SquareMeter),
            "ft2" | "sq ft" => Ok(Self::SquareFoot),
            _ => Err(invalid::<Self>(s)),
        }
    }
}

/// Fire growth coefficient units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrowthCoefficientUnit {
    KilowattPerSecondSquared,
    BtuPerSecondCubed,
}

/// Converts a t-squared growth coefficient between kW/s² and BTU/s³.
///
/// Time is the same in both systems, so only the energy-rate factor applies.
/// Both directions share the kW → BTU/s factor.
#[must_use]
pub fn convert_growth_coefficient(
    value: f64,
    from: GrowthCoefficientUnit,
    to: GrowthCoefficientUnit,
) -> f64 {
    match (from, to) {
        (
            GrowthCoefficientUnit::KilowattPerSecondSquared,
            GrowthCoefficientUnit::BtuPerSecondCubed,
        ) => value * BTU_PER_SECOND_PER_KILOWATT,
        (
            GrowthCoefficientUnit::BtuPerSecondCubed,
            GrowthCoefficientUnit::KilowattPerSecondSquared,
        ) => value / BTU_PER_SECOND_PER_KILOWATT,
        _ => value,
    }
}

impl Unit for GrowthCoefficientUnit {
    const DIMENSION: Dimension = Dimension::GrowthCoefficient;

    fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self::KilowattPerSecondSquared,
            UnitSystem::Imperial => Self::BtuPerSecondCubed,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::KilowattPerSecondSquared => "kW/s²",
            Self::BtuPerSecondCubed => "BTU/s³",
        }
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        convert_growth_coefficient(value, from, to)
    }
}

impl FromStr for GrowthCoefficientUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "kw/s2" => Ok(Self::KilowattPerSecondSquared),
            "btu/s3" => Ok(Self::BtuPerSecondCubed),
            _ => Err(invalid::<Self>(s)),
        }
    }
}

/// Velocity units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VelocityUnit {
    MeterPerSecond,
    FootPerSecond,
}

/// Converts a velocity between m/s and ft/s using the length factor.
#[must_use]
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    match (from, to) {
        (VelocityUnit::MeterPerSecond, VelocityUnit::FootPerSecond) => value * FEET_PER_METER,
        (VelocityUnit::FootPerSecond, VelocityUnit::MeterPerSecond) => value / FEET_PER_METER,
        _ => value,
    }
}

impl Unit for VelocityUnit {
    const DIMENSION: Dimension = Dimension::Velocity;

    fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self::MeterPerSecond,
            UnitSystem::Imperial => Self::FootPerSecond,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::MeterPerSecond => "m/s",
            Self::FootPerSecond => "ft/s",
        }
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        convert_velocity(value, from, to)
    }
}

impl FromStr for VelocityUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "m/s" => Ok(Self::MeterPerSecond),
            "ft/s" => Ok(Self::FootPerSecond),
            _ => Err(invalid::<Self>(s)),
        }
    }
}

/// Mass units, also used for mass flow rates (per second in both systems).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MassUnit {
    Kilogram,
    Pound,
}

/// Converts a mass (or a mass per second) between kilograms and pounds.
#[must_use]
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    match (from, to) {
        (MassUnit::Kilogram, MassUnit::Pound) => value * POUNDS_PER_KILOGRAM,
        (MassUnit::Pound, MassUnit::Kilogram) => value / POUNDS_PER_KILOGRAM,
        _ => value,
    }
}

impl Unit for MassUnit {
    const DIMENSION: Dimension = Dimension::Mass;

    fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self::Kilogram,
            UnitSystem::Imperial => Self::Pound,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Kilogram => "kg",
            Self::Pound => "lb",
        }
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        convert_mass(value, from, to)
    }
}

impl FromStr for MassUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(Self::Kilogram),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Self::Pound),
            _ => Err(invalid::<Self>(s)),
        }
    }
}

/// Energy units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnergyUnit {
    Megajoule,
    Btu,
}

/// Converts an energy between MJ and BTU.
///
/// Uses the heat release factors scaled from kJ to MJ, so energy and power
/// stay consistent with each other.
#[must_use]
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    match (from, to) {
        (EnergyUnit::Megajoule, EnergyUnit::Btu) => value * BTU_PER_SECOND_PER_KILOWATT * 1000.0,
        (EnergyUnit::Btu, EnergyUnit::Megajoule) => value * KILOWATTS_PER_BTU_PER_SECOND / 1000.0,
        _ => value,
    }
}

impl Unit for EnergyUnit {
    const DIMENSION: Dimension = Dimension::Energy;

    fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self::Megajoule,
            UnitSystem::Imperial => Self::Btu,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Megajoule => "MJ",
            Self::Btu => "BTU",
        }
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        convert_energy(value, from, to)
    }
}

impl FromStr for EnergyUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "mj" => Ok(Self::Megajoule),
            "btu" => Ok(Self::Btu),
            _ => Err(invalid::<Self>(s)),
        }
    }
}

/// Heat of combustion (mass-specific energy) units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeatOfCombustionUnit {
    MegajoulePerKilogram,
    BtuPerPound,
}

/// Converts a heat of combustion between MJ/kg and BTU/lb.
#[must_use]
pub fn convert_heat_of_combustion(
    value: f64,
    from: HeatOfCombustionUnit,
    to: HeatOfCombustionUnit,
) -> f64 {
    match (from, to) {
        (HeatOfCombustionUnit::MegajoulePerKilogram, HeatOfCombustionUnit::BtuPerPound) => {
            value * HEAT_OF_COMBUSTION_IMPERIAL_PER_SI
        }
        (HeatOfCombustionUnit::BtuPerPound, HeatOfCombustionUnit::MegajoulePerKilogram) => {
            value / HEAT_OF_COMBUSTION_IMPERIAL_PER_SI
        }
        _ => value,
    }
}

impl Unit for HeatOfCombustionUnit {
    const DIMENSION: Dimension = Dimension::HeatOfCombustion;

    fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Si => Self::MegajoulePerKilogram,
            UnitSystem::Imperial => Self::BtuPerPound,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::MegajoulePerKilogram => "MJ/kg",
            Self::BtuPerPound => "BTU/lb",
        }
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        convert_heat_of_combustion(value, from, to)
    }
}

impl FromStr for HeatOfCombustionUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "mj/kg" => Ok(Self::MegajoulePerKilogram),
            "btu/lb" => Ok(Self::BtuPerPound),
            _ => Err(invalid::<Self>(s)),
        }
    }
}

/// Converts `value` between two unit tokens of the named dimension.
///
/// # Errors
///
/// Returns [`UnitError::InvalidUnit`] if either token is not a unit of
/// `dimension`, including tokens that belong to some other dimension.
///
/// ```
/// use fire_models::support::units::{convert, Dimension, UnitError};
///
/// let ft = convert(Dimension::Length, 3.0, "m", "ft").unwrap();
/// assert!((ft - 9.84252).abs() < 1e-9);
///
/// assert!(matches!(
///     convert(Dimension::Length, 3.0, "m", "C"),
///     Err(UnitError::InvalidUnit { .. })
/// ));
/// ```
pub fn convert(dimension: Dimension, value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
    fn parsed<U: Unit>(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
        Ok(U::convert(value, from.parse()?, to.parse()?))
    }

    match dimension {
        Dimension::Length => parsed::<LengthUnit>(value, from, to),
        Dimension::Temperature => parsed::<TemperatureUnit>(value, from, to),
        Dimension::TemperatureDifference => parsed::<TemperatureDifferenceUnit>(value, from, to),
        Dimension::HeatReleaseRate => parsed::<HeatReleaseRateUnit>(value, from, to),
        Dimension::HeatFlux => parsed::<HeatFluxUnit>(value, from, to),
        Dimension::Area => parsed::<AreaUnit>(value, from, to),
        Dimension::GrowthCoefficient => parsed::<GrowthCoefficientUnit>(value, from, to),
        Dimension::Velocity => parsed::<VelocityUnit>(value, from, to),
        Dimension::Mass => parsed::<MassUnit>(value, from, to),
        Dimension::Energy => parsed::<EnergyUnit>(value, from, to),
        Dimension::HeatOfCombustion => parsed::<HeatOfCombustionUnit>(value, from, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const SAMPLES: [f64; 6] = [-40.0, 0.0, 1e-6, 1.0, 37.5, 12_345.678];

    fn round_trip<U: Unit>(a: U, b: U, max_relative: f64) {
        for x in SAMPLES {
            let back = U::convert(U::convert(x, a, b), b, a);
            assert_relative_eq!(back, x, max_relative = max_relative, epsilon = 1e-12);
        }
    }

    fn identity<U: Unit>(unit: U) {
        for x in SAMPLES {
            assert_eq!(U::convert(x, unit, unit).to_bits(), x.to_bits());
        }
    }

    #[test]
    fn round_trips_within_tolerance() {
        round_trip(LengthUnit::Meter, LengthUnit::Foot, 1e-9);
        round_trip(AreaUnit::SquareMeter, AreaUnit::SquareFoot, 1e-9);
        round_trip(
            HeatFluxUnit::KilowattPerSquareMeter,
            HeatFluxUnit::BtuPerSquareFootSecond,
            1e-9,
        );
        round_trip(
            GrowthCoefficientUnit::KilowattPerSecondSquared,
            GrowthCoefficientUnit::BtuPerSecondCubed,
            1e-9,
        );
        round_trip(VelocityUnit::MeterPerSecond, VelocityUnit::FootPerSecond, 1e-9);
        round_trip(MassUnit::Kilogram, MassUnit::Pound, 1e-9);
        round_trip(
            HeatOfCombustionUnit::MegajoulePerKilogram,
            HeatOfCombustionUnit::BtuPerPound,
            1e-9,
        );
        round_trip(
            TemperatureDifferenceUnit::Kelvin,
            TemperatureDifferenceUnit::Fahrenheit,
            1e-9,
        );

        let temperatures = [
            TemperatureUnit::Celsius,
            TemperatureUnit::Fahrenheit,
            TemperatureUnit::Kelvin,
        ];
        for a in temperatures {
            for b in temperatures {
                round_trip(a, b, 1e-9);
            }
        }
    }

    #[test]
    fn heat_release_round_trip_reflects_published_factors() {
        round_trip(
            HeatReleaseRateUnit::Kilowatt,
            HeatReleaseRateUnit::BtuPerSecond,
            1e-7,
        );
        round_trip(EnergyUnit::Megajoule, EnergyUnit::Btu, 1e-7);
    }

    #[test]
    fn same_unit_is_exact_identity() {
        identity(LengthUnit::Meter);
        identity(LengthUnit::Foot);
        identity(TemperatureUnit::Celsius);
        identity(TemperatureUnit::Fahrenheit);
        identity(TemperatureUnit::Kelvin);
        identity(HeatReleaseRateUnit::Kilowatt);
        identity(HeatReleaseRateUnit::BtuPerSecond);
        identity(HeatFluxUnit::KilowattPerSquareMeter);
        identity(HeatFluxUnit::BtuPerSquareFootSecond);
        identity(AreaUnit::SquareMeter);
        identity(AreaUnit::SquareFoot);
        identity(GrowthCoefficientUnit::KilowattPerSecondSquared);
        identity(GrowthCoefficientUnit::BtuPerSecondCubed);
    }

    #[test]
    fn temperature_reference_points() {
        use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

        assert_relative_eq!(convert_temperature(0.0, Celsius, Fahrenheit), 32.0, epsilon = 1e-9);
        assert_relative_eq!(convert_temperature(0.0, Celsius, Kelvin), 273.15, epsilon = 1e-9);
        assert_relative_eq!(
            convert_temperature(212.0, Fahrenheit, Celsius),
            100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            convert_temperature(-40.0, Fahrenheit, Celsius),
            -40.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn published_example_values() {
        assert_relative_eq!(
            convert_length(3.0, LengthUnit::Meter, LengthUnit::Foot),
            9.84252,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert_heat_release_rate(
                1000.0,
                HeatReleaseRateUnit::Kilowatt,
                HeatReleaseRateUnit::BtuPerSecond
            ),
            947.817,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert_heat_release_rate(
                1.0,
                HeatReleaseRateUnit::BtuPerSecond,
                HeatReleaseRateUnit::Kilowatt
            ),
            1.055056,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert_heat_flux(
                1.0,
                HeatFluxUnit::KilowattPerSquareMeter,
                HeatFluxUnit::BtuPerSquareFootSecond
            ),
            0.08811,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert_area(1.0, AreaUnit::SquareMeter, AreaUnit::SquareFoot),
            10.7639,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert_growth_coefficient(
                1.0,
                GrowthCoefficientUnit::KilowattPerSecondSquared,
                GrowthCoefficientUnit::BtuPerSecondCubed
            ),
            0.947817,
            max_relative = 1e-12
        );
    }

    #[test]
    fn parses_tokens_case_insensitively() {
        assert_eq!("FT".parse::<LengthUnit>(), Ok(LengthUnit::Foot));
        assert_eq!("°F".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!("BTU/s".parse::<HeatReleaseRateUnit>(), Ok(HeatReleaseRateUnit::BtuPerSecond));
        assert_eq!("kW/m²".parse::<HeatFluxUnit>(), Ok(HeatFluxUnit::KilowattPerSquareMeter));
        assert_eq!("ft²".parse::<AreaUnit>(), Ok(AreaUnit::SquareFoot));
        assert_eq!(
            "BTU/s³".parse::<GrowthCoefficientUnit>(),
            Ok(GrowthCoefficientUnit::BtuPerSecondCubed)
        );
    }

    #[test]
    fn rejects_units_from_other_dimensions() {
        assert_eq!(
            "kW".parse::<LengthUnit>(),
            Err(UnitError::InvalidUnit {
                dimension: Dimension::Length,
                unit: "kW".to_owned(),
            })
        );
        assert!(convert(Dimension::Temperature, 20.0, "C", "m").is_err());
        assert!(convert(Dimension::Area, 20.0, "m", "ft2").is_err());
        assert!(convert(Dimension::HeatFlux, 1.0, "kW", "BTU/s").is_err());
    }

    #[test]
    fn string_dispatch_matches_typed_conversion() {
        let value = convert(Dimension::HeatReleaseRate, 500.0, "kW", "btu/s").unwrap();
        assert_relative_eq!(value, 500.0 * BTU_PER_SECOND_PER_KILOWATT, max_relative = 1e-12);

        let value = convert(Dimension::Temperature, 68.0, "F", "C").unwrap();
        assert_relative_eq!(value, 20.0, epsilon = 1e-12);
    }

    #[test]
    fn default_units_follow_the_system() {
        assert_eq!(LengthUnit::for_system(UnitSystem::Imperial), LengthUnit::Foot);
        assert_eq!(TemperatureUnit::for_system(UnitSystem::Si), TemperatureUnit::Celsius);
        assert_eq!(
            HeatFluxUnit::for_system(UnitSystem::Imperial).symbol(),
            "BTU/ft²/s"
        );
    }
}
