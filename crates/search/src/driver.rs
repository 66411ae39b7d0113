//! All-column search driver.

use fracdiff_stats::StationarityTest;
use fracdiff_types::{MinOrderTable, SeriesTable, StationarityConfig};
use rayon::prelude::*;

use crate::column::{ColumnSearch, OrderSearch};
use crate::error::SearchError;

/// Search results for every column of a table.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SearchReport {
    /// Per-column results, in table column order
    pub columns: Vec<ColumnSearch>,
    /// Weight truncation threshold used by the filter
    pub threshold: f64,
    /// p-value cut-off
    pub significance: f64,
}

impl SearchReport {
    /// Minimum-order table in column order.
    #[must_use]
    pub fn orders(&self) -> MinOrderTable {
        self.columns
            .iter()
            .map(|c| (c.name.clone(), c.resolution))
            .collect()
    }

    /// Looks up one column's result.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnSearch> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Total filter applications across all columns.
    #[must_use]
    pub fn filter_evaluations(&self) -> usize {
        self.columns.iter().map(|c| c.filter_evaluations).sum()
    }

    /// Number of resolved columns.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.columns.iter().filter(|c| c.resolution.passes()).count()
    }
}

impl<T: StationarityTest> OrderSearch<T> {
    /// Searches every column of `table` independently.
    ///
    /// Weights are generated once per grid order and shared read-only by all
    /// columns. Columns run on the rayon pool when parallel search is
    /// enabled; results keep the table's column order either way.
    ///
    /// # Errors
    /// Returns [`SearchError::EmptyTable`] or [`SearchError::NoColumns`] for
    /// malformed input. Per-column failures are reported in the result.
    pub fn search_table(&self, table: &SeriesTable) -> Result<SearchReport, SearchError> {
        if table.is_empty() {
            return Err(SearchError::EmptyTable);
        }
        if table.num_columns() == 0 {
            return Err(SearchError::NoColumns);
        }

        let cache = self.weight_cache(table.len());
        let columns: Vec<ColumnSearch> = if self.parallel_columns() {
            table
                .columns()
                .par_iter()
                .map(|column| self.search_column_with_cache(column, &cache))
                .collect()
        } else {
            table
                .columns()
                .iter()
                .map(|column| self.search_column_with_cache(column, &cache))
                .collect()
        };

        for column in &columns {
            match column.resolution.order() {
                Some(d) => tracing::info!(
                    "{}: minimum order d={:.4} after {} filter evaluations",
                    column.name,
                    d,
                    column.filter_evaluations
                ),
                None => tracing::warn!(
                    "{}: unresolved ({})",
                    column.name,
                    column
                        .resolution
                        .reason()
                        .map_or_else(String::new, |r| r.to_string())
                ),
            }
        }

        let report = SearchReport {
            columns,
            threshold: self.threshold(),
            significance: self.significance(),
        };
        tracing::info!(
            "Order search finished: {}/{} columns resolved, {} filter evaluations",
            report.resolved_count(),
            report.columns.len(),
            report.filter_evaluations()
        );

        Ok(report)
    }

    /// Searches the named columns of `table`, in the given order.
    ///
    /// # Errors
    /// Returns [`SearchError::UnknownColumn`] for a name not in the table, or
    /// any error of [`search_table`](Self::search_table).
    pub fn search_columns(
        &self,
        table: &SeriesTable,
        names: &[String],
    ) -> Result<SearchReport, SearchError> {
        if let Some(missing) = names.iter().find(|n| table.column(n).is_none()) {
            return Err(SearchError::UnknownColumn(missing.clone()));
        }
        self.search_table(&table.select(names)?)
    }
}

/// Searches every column of `table` with the ADF test.
///
/// # Errors
/// Returns [`SearchError`] for an invalid configuration or malformed table.
pub fn find_min_orders(
    table: &SeriesTable,
    config: &StationarityConfig,
) -> Result<SearchReport, SearchError> {
    OrderSearch::from_config(config)?.search_table(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fracdiff_types::Column;

    #[test]
    fn test_empty_table_is_fatal() {
        let table = SeriesTable::new(vec![], vec![Column::new("x", vec![])]).unwrap();
        let err = find_min_orders(&table, &StationarityConfig::default()).unwrap_err();
        assert!(matches!(err, SearchError::EmptyTable));
    }

    #[test]
    fn test_table_without_columns_is_fatal() {
        let table = SeriesTable::new(vec![1, 2, 3], vec![]).unwrap();
        let err = find_min_orders(&table, &StationarityConfig::default()).unwrap_err();
        assert!(matches!(err, SearchError::NoColumns));
    }

    #[test]
    fn test_unknown_column_is_fatal() {
        let table =
            SeriesTable::new(vec![1, 2, 3], vec![Column::new("x", vec![1.0, 2.0, 3.0])]).unwrap();
        let search = OrderSearch::from_config(&StationarityConfig::default()).unwrap();
        let err = search
            .search_columns(&table, &["y".to_string()])
            .unwrap_err();
        assert!(matches!(err, SearchError::UnknownColumn(name) if name == "y"));
    }
}
