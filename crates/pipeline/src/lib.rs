//! Fracdiff Pipeline
//!
//! JSON-configured end-to-end run: load a Parquet table, search the minimum
//! differencing order of every column, persist the order table and
//! (optionally) the stationarized table, and return a JSON summary.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

pub mod error;
pub mod runner;

pub use error::{ErrorResult, PipelineError};
pub use runner::{ColumnSummary, RunSummary, TableSummary, run_pipeline, run_pipeline_from_json};
