//! Build the stationarized table from minimum orders.

use fracdiff_transform::{FracDiff, SeriesTransform};
use fracdiff_types::{Column, MinOrderTable, OrderResolution, SeriesTable, StationarityConfig};

use crate::driver::{SearchReport, find_min_orders};
use crate::error::SearchError;

/// Table with non-stationary columns replaced by their filtered values.
#[derive(Debug, Clone, PartialEq)]
pub struct StationarizedTable {
    /// Output table, leading undefined rows removed
    pub table: SeriesTable,
    /// Rows dropped from the front of the input
    pub dropped_rows: usize,
    /// Columns replaced by a filtered series (`d > 0`)
    pub transformed: Vec<String>,
    /// Columns left out because their order is unresolved
    pub excluded: Vec<String>,
}

/// Searches every column, then builds the stationarized table.
///
/// # Errors
/// Returns [`SearchError`] for an invalid configuration or malformed table.
pub fn stationarize(
    table: &SeriesTable,
    config: &StationarityConfig,
    keep_originals: bool,
) -> Result<(SearchReport, StationarizedTable), SearchError> {
    let report = find_min_orders(table, config)?;
    let output =
        stationarize_with_orders(table, &report.orders(), report.threshold, keep_originals)?;
    Ok((report, output))
}

/// Applies a stored order table to `table`.
///
/// Output columns follow the order table: a resolved `d > 0` column is
/// replaced by its filtered series, a `d = 0` column is kept unchanged and an
/// unresolved column is left out. With `keep_originals`, raw copies of the
/// transformed columns are appended as `<name>_orig`. Leading rows are
/// dropped up to the longest undefined prefix among transformed columns.
///
/// # Errors
/// - [`SearchError::UnknownColumn`] when an order refers to a missing column.
/// - [`SearchError::Transform`] for a stored order the filter rejects.
/// - [`SearchError::Table`] when an `_orig` name collides with a column.
pub fn stationarize_with_orders(
    table: &SeriesTable,
    orders: &MinOrderTable,
    threshold: f64,
    keep_originals: bool,
) -> Result<StationarizedTable, SearchError> {
    let mut columns = Vec::with_capacity(orders.len());
    let mut originals = Vec::new();
    let mut transformed = Vec::new();
    let mut excluded = Vec::new();
    let mut dropped_rows = 0;

    for (name, resolution) in orders.iter() {
        let column = table
            .column(name)
            .ok_or_else(|| SearchError::UnknownColumn(name.to_string()))?;

        match resolution {
            OrderResolution::Resolved { d } if *d > 0.0 => {
                let filtered = FracDiff::new(*d, threshold)?.apply_column(column);
                dropped_rows = dropped_rows.max(filtered.leading_undefined());
                columns.push(filtered);
                transformed.push(name.to_string());
                if keep_originals {
                    originals.push(Column::new(format!("{name}_orig"), column.values.clone()));
                }
            }
            OrderResolution::Resolved { .. } => columns.push(column.clone()),
            OrderResolution::Unresolved { reason } => {
                tracing::warn!("{}: excluded from output table ({})", name, reason);
                excluded.push(name.to_string());
            }
        }
    }
    columns.extend(originals);

    let merged = SeriesTable::new(table.timestamps_ns().to_vec(), columns)?;
    let table = merged.skip_rows(dropped_rows);
    tracing::info!(
        "Stationarized table: {} columns transformed, {} excluded, {} leading rows dropped, {} rows kept",
        transformed.len(),
        excluded.len(),
        dropped_rows,
        table.len()
    );

    Ok(StationarizedTable {
        table,
        dropped_rows,
        transformed,
        excluded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fracdiff_types::UnresolvedReason;

    fn sample_table() -> SeriesTable {
        SeriesTable::new(
            vec![1, 2, 3, 4, 5],
            vec![
                Column::new("close", vec![10.0, 12.0, 11.0, 15.0, 14.0]),
                Column::new("volume", vec![5.0, 6.0, 5.0, 7.0, 6.0]),
                Column::new("flat", vec![1.0; 5]),
            ],
        )
        .unwrap()
    }

    fn sample_orders() -> MinOrderTable {
        [
            ("close".to_string(), OrderResolution::resolved(1.0)),
            ("volume".to_string(), OrderResolution::resolved(0.0)),
            (
                "flat".to_string(),
                OrderResolution::unresolved(UnresolvedReason::DegenerateSeries),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_stationarize_with_orders_replaces_keeps_and_excludes() {
        let out = stationarize_with_orders(&sample_table(), &sample_orders(), 1e-4, false).unwrap();

        assert_eq!(out.dropped_rows, 1);
        assert_eq!(out.transformed, vec!["close"]);
        assert_eq!(out.excluded, vec!["flat"]);
        assert_eq!(out.table.column_names(), vec!["close", "volume"]);
        assert_eq!(out.table.timestamps_ns(), &[2, 3, 4, 5]);

        let close = &out.table.column("close").unwrap().values;
        assert_relative_eq!(close[0], 2.0);
        assert_relative_eq!(close[1], -1.0);
        assert_eq!(out.table.column("volume").unwrap().values, vec![6.0, 5.0, 7.0, 6.0]);
    }

    #[test]
    fn test_keep_originals_appends_raw_copies() {
        let out = stationarize_with_orders(&sample_table(), &sample_orders(), 1e-4, true).unwrap();

        assert_eq!(
            out.table.column_names(),
            vec!["close", "volume", "close_orig"]
        );
        assert_eq!(
            out.table.column("close_orig").unwrap().values,
            vec![12.0, 11.0, 15.0, 14.0]
        );
    }

    #[test]
    fn test_unknown_order_column_is_error() {
        let orders: MinOrderTable = [("open".to_string(), OrderResolution::resolved(0.5))]
            .into_iter()
            .collect();
        let err = stationarize_with_orders(&sample_table(), &orders, 1e-4, false).unwrap_err();
        assert!(matches!(err, SearchError::UnknownColumn(name) if name == "open"));
    }

    #[test]
    fn test_invalid_threshold_is_error() {
        let err =
            stationarize_with_orders(&sample_table(), &sample_orders(), 0.0, false).unwrap_err();
        assert!(matches!(err, SearchError::Transform(_)));
    }
}
