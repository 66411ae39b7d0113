//! Fracdiff Types
//!
//! Core data structures shared by the fractional differencing workspace:
//! configuration, the timestamp-indexed column table, and the per-column
//! minimum-order resolution table.

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod order;
pub mod table;

// Re-export main types for convenience
pub use config::{
    InputConfig, LoggingConfig, OutputConfig, PipelineConfig, ScanMode, StationarityConfig,
};
pub use error::CoreError;
pub use order::{MinOrderTable, OrderResolution, UnresolvedReason};
pub use table::{Column, SeriesTable};
