use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, TimestampNanosecondArray};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use parquet::arrow::arrow_writer::ArrowWriter;

use crate::error::DataError;
use fracdiff_types::{MinOrderTable, OrderResolution, SeriesTable, UnresolvedReason};

const ORDER_DELIMITER: u8 = b';';
const ORDER_HEADER: [&str; 2] = ["name", "value"];

fn create_parent_dir(path: &Path) -> Result<(), DataError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| DataError::Write(e.to_string()))?;
    }
    Ok(())
}

/// Writes the minimum-order table as `name;value` rows.
///
/// Unresolved columns get an empty value.
///
/// # Errors
/// Returns [`DataError::Write`] when the file cannot be written.
pub fn write_min_order_table(path: &Path, orders: &MinOrderTable) -> Result<(), DataError> {
    create_parent_dir(path)?;
    let mut writer = WriterBuilder::new()
        .delimiter(ORDER_DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|e| DataError::Write(e.to_string()))?;

    writer
        .write_record(ORDER_HEADER)
        .map_err(|e| DataError::Write(e.to_string()))?;
    for (name, resolution) in orders.iter() {
        let value = resolution.order().map(|d| d.to_string()).unwrap_or_default();
        writer
            .write_record([name, value.as_str()])
            .map_err(|e| DataError::Write(e.to_string()))?;
    }
    writer.flush().map_err(|e| DataError::Write(e.to_string()))?;

    tracing::info!(
        "Wrote {} minimum orders to {}",
        orders.len(),
        path.display()
    );
    Ok(())
}

/// Reads a `name;value` minimum-order table.
///
/// An empty value reads back as unresolved; the file does not carry the
/// failure kind, so it is reported as
/// [`UnresolvedReason::NoStationaryOrderFound`].
///
/// # Errors
/// - [`DataError::FileNotFound`] when the file cannot be opened.
/// - [`DataError::ParseError`] for a wrong header, short rows or bad numbers.
pub fn read_min_order_table(path: &Path) -> Result<MinOrderTable, DataError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(ORDER_DELIMITER)
        .has_headers(true)
        .from_path(path)
        .map_err(|e| DataError::FileNotFound(path.display().to_string(), e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| DataError::ParseError(e.to_string()))?;
    if headers.iter().ne(ORDER_HEADER) {
        return Err(DataError::ParseError(format!(
            "Expected header 'name;value', got '{}'",
            headers.iter().collect::<Vec<_>>().join(";")
        )));
    }

    let mut orders = MinOrderTable::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| DataError::ParseError(e.to_string()))?;
        let (Some(name), Some(value)) = (record.get(0), record.get(1)) else {
            return Err(DataError::ParseError(format!("Short record at row {row}")));
        };

        let resolution = if value.trim().is_empty() {
            OrderResolution::unresolved(UnresolvedReason::NoStationaryOrderFound)
        } else {
            let d: f64 = value.trim().parse().map_err(|_| {
                DataError::ParseError(format!("Invalid order '{value}' for column '{name}'"))
            })?;
            OrderResolution::resolved(d)
        };
        orders.insert(name, resolution);
    }

    Ok(orders)
}

/// Writes `table` to Parquet: a UTC `Timestamp(ns)` column named
/// `timestamp_column` followed by one `Float64` column per table column.
///
/// # Errors
/// Returns [`DataError::Write`] when the batch cannot be built or written.
pub fn write_table_parquet(
    path: &Path,
    table: &SeriesTable,
    timestamp_column: &str,
) -> Result<(), DataError> {
    create_parent_dir(path)?;

    let mut fields = vec![Field::new(
        timestamp_column,
        DataType::Timestamp(TimeUnit::Nanosecond, Some("UTC".into())),
        false,
    )];
    let mut arrays: Vec<ArrayRef> = vec![Arc::new(
        TimestampNanosecondArray::from(table.timestamps_ns().to_vec()).with_timezone("UTC"),
    )];
    for column in table.columns() {
        fields.push(Field::new(&column.name, DataType::Float64, true));
        arrays.push(Arc::new(Float64Array::from(column.values.clone())));
    }

    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), arrays)
        .map_err(|e| DataError::Write(e.to_string()))?;

    let file = File::create(path).map_err(|e| DataError::Write(e.to_string()))?;
    let mut writer =
        ArrowWriter::try_new(file, schema, None).map_err(|e| DataError::Write(e.to_string()))?;
    writer
        .write(&batch)
        .map_err(|e| DataError::Write(e.to_string()))?;
    writer.close().map_err(|e| DataError::Write(e.to_string()))?;

    tracing::info!(
        "Wrote {} rows x {} columns to {}",
        table.len(),
        table.num_columns(),
        path.display()
    );
    Ok(())
}
