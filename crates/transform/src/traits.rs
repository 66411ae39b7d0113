//! Transform traits.

use fracdiff_types::Column;

/// A length-preserving transform over a numeric series.
///
/// Output has the same length as the input. Values inside the warmup
/// window are `f64::NAN`, never zero.
pub trait SeriesTransform: Send + Sync {
    /// Transforms the full series.
    fn apply(&self, values: &[f64]) -> Vec<f64>;

    /// Name of the transform (e.g., "FFD").
    fn name(&self) -> &str;

    /// Number of leading outputs left undefined for a series of length `len`.
    fn warmup_periods(&self, len: usize) -> usize;

    /// Transforms a column, keeping its name.
    fn apply_column(&self, column: &Column) -> Column {
        Column::new(column.name.clone(), self.apply(&column.values))
    }
}
