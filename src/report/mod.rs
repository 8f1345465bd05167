//! Reporting utilities: report tables and console output.

pub mod format;

pub use format::*;
