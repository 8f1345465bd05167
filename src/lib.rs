//! `popfill` library crate.
//!
//! The binary (`popfill`) is a thin wrapper around this library so that:
//!
//! - the interpolation engine is testable without spawning processes
//! - loaders, reports and charts can be reused on their own

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod interp;
pub mod io;
pub mod plot;
pub mod report;
pub mod tui;
