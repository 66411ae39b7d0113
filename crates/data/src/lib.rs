//! Fracdiff Data
//!
//! Parquet table loading, table validation, and persistence of the
//! minimum-order table and the stationarized table.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

/// Data-layer error types.
pub mod error;
/// Parquet loading of timestamp-indexed tables.
pub mod loader;
/// Table validation helpers.
pub mod validation;
/// Order-table and Parquet writers.
pub mod writer;

/// Re-export: data-layer error type.
pub use error::DataError;
/// Re-export: load and validate a table.
pub use loader::load_and_validate;
/// Re-export: load a table from Parquet.
pub use loader::load_table;
/// Re-export: table validation.
pub use validation::validate_table;
/// Re-export: read a persisted minimum-order table.
pub use writer::read_min_order_table;
/// Re-export: persist a minimum-order table.
pub use writer::write_min_order_table;
/// Re-export: write a table to Parquet.
pub use writer::write_table_parquet;
