//! Input/output helpers.
//!
//! - population file ingest + validation (`ingest`)
//! - text report writers (`export`)
//! - series JSON read/write (`json`)

pub mod export;
pub mod ingest;
pub mod json;

pub use export::*;
pub use ingest::*;
pub use json::*;
