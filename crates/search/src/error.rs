//! Search driver error types.

use fracdiff_transform::TransformError;
use fracdiff_types::CoreError;
use thiserror::Error;

/// Fatal errors at the driver entry point.
///
/// Per-column failures are not errors; see
/// [`UnresolvedReason`](fracdiff_types::UnresolvedReason).
#[derive(Debug, Error)]
pub enum SearchError {
    /// Table has no rows
    #[error("input table has no rows")]
    EmptyTable,

    /// Table has no value columns
    #[error("input table has no value columns")]
    NoColumns,

    /// Requested column not present in the table
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// Invalid search configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Output table could not be assembled
    #[error(transparent)]
    Table(#[from] CoreError),

    /// Stored order cannot build a filter
    #[error(transparent)]
    Transform(#[from] TransformError),
}
