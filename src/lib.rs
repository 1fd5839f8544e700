//! # Fire Models
//!
//! Closed-form fire dynamics correlations (NUREG-1805 style hand calculations)
//! with a strict SI normalization discipline.
//!
//! ## Crate layout
//!
//! - [`models`]: Per-correlation [`twine_core::Model`] implementations that
//!   accept flat parameters in either unit system and return results in the
//!   caller's system.
//! - [`support`]: Unit conversion, the material property store, numeric
//!   constraints, and the SI-only correlation calculators.
//!
//! ## Unit discipline
//!
//! Every calculator in [`support::fire`] works on [`uom`] quantities, so its
//! formulas always see SI values. Imperial inputs are converted exactly once,
//! at the model boundary, using the published factors in
//! [`support::units::factors`], and results are converted back the same way.
//!
//! ```
//! use fire_models::models::fire::{PointSourceRadiation, PointSourceRadiationInput};
//! use fire_models::support::units::UnitSystem;
//! use twine_core::Model;
//!
//! let flux = PointSourceRadiation
//!     .call(&PointSourceRadiationInput {
//!         heat_release_rate: 1000.0,
//!         distance: 5.0,
//!         radiative_fraction: 0.3,
//!         units: UnitSystem::Si,
//!     })
//!     .unwrap();
//!
//! assert!((flux - 0.955).abs() < 1e-3);
//! ```

pub mod models;
pub mod support;
