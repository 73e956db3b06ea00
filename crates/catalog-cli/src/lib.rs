//! CLI library components for the catalog importer.

pub mod logging;
pub mod pipeline;
