//! SI-only fire dynamics correlations.
//!
//! Every calculator here takes [`uom`] quantities, validates its inputs before
//! evaluating anything, and returns either a quantity or a [`ValidationError`].
//! Calculators that read the material store return a [`CalculationError`].
//!
//! - **Geometry**: [`rectangular`], [`cylindrical`], [`CompartmentGeometry`]
//! - **Flashover**: [`flashover`] and the individual [`mqh`], [`babrauskas`],
//!   and [`thomas`] correlations
//! - **Flames and fuels**: [`flame_height`], [`heat_release_rate`],
//!   [`point_source_heat_flux`], [`fuel_point_source_heat_flux`]
//! - **Growth**: [`t_squared_heat_release`], [`t_squared_time`]
//! - **Smoke and gas flow**: [`smoke_filling_time`], [`smoke_layer_temperature`],
//!   [`ceiling_jet`], [`natural_vent_flow`]
//! - **Compartment temperature**: [`mqh_temperature_rise`], [`time_to_temperature`]
//! - **Fire load**: [`FuelPackage`], [`total_fire_load`], [`fire_load_density`]

mod ceiling_jet;
mod compartment;
mod error;
mod fire_load;
mod flame_height;
mod flashover;
mod growth;
mod heat_release;
mod radiation;
mod smoke_layer;
mod temperature_rise;
mod vent_flow;

pub use ceiling_jet::{
    CeilingJet, TEMPERATURE_TURNING_REGION, VELOCITY_TURNING_REGION, ceiling_jet,
    ceiling_jet_temperature_rise, ceiling_jet_velocity,
};
pub use compartment::{CompartmentGeometry, Measures, cylindrical, rectangular};
pub use error::{CalculationError, ValidationError};
pub use fire_load::{FuelPackage, fire_load_density, total_fire_load};
pub use flame_height::{
    HESKESTAD_DIAMETER_COEFFICIENT, HESKESTAD_HRR_COEFFICIENT, diameter_for_flame_height,
    flame_height, heat_release_for_flame_height,
};
pub use flashover::{
    BABRAUSKAS_COEFFICIENT, FlashoverThresholds, MQH_COEFFICIENT, THOMAS_SURFACE_COEFFICIENT,
    THOMAS_VENT_COEFFICIENT, babrauskas, effective_hk, flashover, mqh, thomas,
};
pub use growth::{FAST, GrowthRate, MEDIUM, SLOW, ULTRAFAST, t_squared_heat_release, t_squared_time};
pub use heat_release::{burning_rate_heat_release, heat_release_rate};
pub use radiation::{
    FuelRadiation, RadiativeFraction, fuel_point_source_heat_flux, point_source_heat_flux,
};
pub use smoke_layer::{
    AIR_SPECIFIC_HEAT, AMBIENT_AIR_DENSITY, ENTRAINMENT_COEFFICIENT, FILLING_AMBIENT_TEMPERATURE,
    smoke_filling_time, smoke_layer_temperature,
};
pub use temperature_rise::{MQH_TEMPERATURE_COEFFICIENT, mqh_temperature_rise, time_to_temperature};
pub use vent_flow::{AIR_DENSITY_CONSTANT, GRAVITY, VentFlow, natural_vent_flow};

pub(crate) use error::{finite_result, non_negative, strictly_positive};
