//! Supporting utilities for the fire models.
//!
//! - [`constraint`]: Type-level numeric constraints used for input validation.
//! - [`units`]: Unit systems, published conversion factors, and quantity aliases.
//! - [`materials`]: The read-only fuel and lining property store.
//! - [`fire`]: SI-only correlation calculators.

pub mod constraint;
pub mod fire;
pub mod materials;
pub mod units;
