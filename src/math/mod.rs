//! Integer arithmetic helpers for pool calculations.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe operations
//! on domain types and [`div_round`] for explicitly rounded division.  No
//! floating point is used anywhere in the crate.

mod checked;
mod rounding;

pub use checked::CheckedArithmetic;
pub use rounding::div_round;
