//! Interpolation engine.
//!
//! Responsibilities:
//!
//! - estimate one year from all known points (global Lagrange form)
//! - complete a series by filling every missing year
//! - answer simple queries about a series (missing years, observed count)

pub mod complete;
pub mod lagrange;

pub use complete::*;
pub use lagrange::*;
