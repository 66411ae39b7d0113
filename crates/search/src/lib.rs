//! Fracdiff Search
//!
//! Minimum fractional differencing order search.
//!
//! For every column of a table, finds the smallest order `d` on a grid over
//! `[0, 1]` whose fixed-width filtered series passes a unit-root test, and
//! builds the stationarized table from the resulting orders.
//!
//! Per-column failures never abort a batch: they are reported as
//! [`OrderResolution::Unresolved`](fracdiff_types::OrderResolution) with a
//! reason. Only malformed input at the driver entry point is an error.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

pub mod column;
pub mod driver;
pub mod error;
pub mod grid;
pub mod stationarize;

// Re-export main types
pub use column::{CandidateOutcome, CandidateReport, ColumnSearch, OrderSearch};
pub use driver::{SearchReport, find_min_orders};
pub use error::SearchError;
pub use grid::candidate_grid;
pub use stationarize::{StationarizedTable, stationarize, stationarize_with_orders};
