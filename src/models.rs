//! Public fire models.
//!
//! Models are the primary public interface of this crate. Each one is a thin
//! [`twine_core::Model`] adapter that normalizes caller-supplied values to SI,
//! delegates to a calculator in [`crate::support::fire`], and converts the
//! result back to the caller's [`UnitSystem`](crate::support::units::UnitSystem).

pub mod fire;
