//! Data-layer error types.

use thiserror::Error;

/// Errors that can occur while loading, validating or writing tables.
#[derive(Debug, Error)]
pub enum DataError {
    /// A required file was not found on disk.
    #[error("File not found: {0} ({1})")]
    FileNotFound(String, String),

    /// Parquet or delimited-file parsing failed.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A required column is missing.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A column has an unexpected (non-numeric) data type.
    #[error("Invalid column type: {0}")]
    InvalidColumnType(String),

    /// No rows were loaded after reading data.
    #[error("Empty data")]
    EmptyData,

    /// Data violated a table invariant.
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// Writing an output file failed.
    #[error("Write error: {0}")]
    Write(String),
}
