//! Table validation helpers.

use crate::error::DataError;
use fracdiff_types::SeriesTable;

/// Validates a loaded table before the order search.
///
/// `NaN` marks a missing observation and is accepted; infinities are not.
///
/// # Errors
/// - [`DataError::EmptyData`] when the table has no rows or no value columns.
/// - [`DataError::CorruptData`] for non-increasing timestamps or infinite values.
pub fn validate_table(table: &SeriesTable) -> Result<(), DataError> {
    if table.is_empty() || table.num_columns() == 0 {
        return Err(DataError::EmptyData);
    }

    let timestamps = table.timestamps_ns();
    if let Some(i) = timestamps.windows(2).position(|w| w[1] <= w[0]) {
        return Err(DataError::CorruptData(format!(
            "Non-monotonic timestamp at index {}: {} <= {}",
            i + 1,
            timestamps[i + 1],
            timestamps[i]
        )));
    }

    for column in table.columns() {
        if let Some(i) = column.values.iter().position(|v| v.is_infinite()) {
            return Err(DataError::CorruptData(format!(
                "Infinite value in column '{}' at index {i}",
                column.name
            )));
        }
        if column.finite_count() == 0 {
            tracing::warn!("Column '{}' has no finite observations", column.name);
        }
    }

    Ok(())
}
