//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - per-year observations and the series that holds them (`Observation`, `Series`)
//! - engine inputs (`KnownPoint`) and report labels (`DataKind`)
//! - run configuration (`RunConfig`) and the JSON file wrapper (`SeriesFile`)

pub mod types;

pub use types::*;
