use std::path::Path;

use arrow::array::{Array, Float64Array, Int64Array, TimestampNanosecondArray};
use arrow::datatypes::{DataType, TimeUnit};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::DataError;
use crate::validation::validate_table;
use fracdiff_types::{Column, SeriesTable};

/// Loads a timestamp-indexed table from a Parquet file.
///
/// The timestamp column must be `Timestamp(ns)` (any timezone) or `Int64`
/// epoch nanoseconds. Value columns must be `Float64` or `Int64`; nulls load
/// as `NaN`. With `columns == None` every column other than the timestamp is
/// loaded.
///
/// # Errors
/// - [`DataError::FileNotFound`] / [`DataError::ParseError`] for unreadable files.
/// - [`DataError::MissingColumn`] / [`DataError::InvalidColumnType`] for schema problems.
/// - [`DataError::CorruptData`] for null, duplicate or out-of-order timestamps.
/// - [`DataError::EmptyData`] when no rows were read.
pub fn load_table(
    path: &Path,
    timestamp_column: &str,
    columns: Option<&[String]>,
) -> Result<SeriesTable, DataError> {
    let file = std::fs::File::open(path)
        .map_err(|e| DataError::FileNotFound(path.display().to_string(), e.to_string()))?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| DataError::ParseError(e.to_string()))?;
    let schema = builder.schema().clone();

    let ts_field = schema
        .field_with_name(timestamp_column)
        .map_err(|_| DataError::MissingColumn(timestamp_column.to_string()))?;
    if !matches!(
        ts_field.data_type(),
        DataType::Timestamp(TimeUnit::Nanosecond, _) | DataType::Int64
    ) {
        return Err(DataError::InvalidColumnType(format!(
            "{timestamp_column} ({})",
            ts_field.data_type()
        )));
    }

    let names: Vec<String> = match columns {
        Some(selected) => selected.to_vec(),
        None => schema
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .filter(|name| name != timestamp_column)
            .collect(),
    };
    for name in &names {
        let field = schema
            .field_with_name(name)
            .map_err(|_| DataError::MissingColumn(name.clone()))?;
        if !matches!(field.data_type(), DataType::Float64 | DataType::Int64) {
            return Err(DataError::InvalidColumnType(format!(
                "{name} ({})",
                field.data_type()
            )));
        }
    }

    let reader = builder
        .build()
        .map_err(|e| DataError::ParseError(e.to_string()))?;

    let mut timestamps: Vec<i64> = Vec::new();
    let mut values: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    let mut processed_rows = 0usize;

    for batch_result in reader {
        let batch = batch_result.map_err(|e| DataError::ParseError(e.to_string()))?;

        let ts_arr = timestamp_column_accessor(&batch, timestamp_column)?;
        let accessors = names
            .iter()
            .map(|name| numeric_column_accessor(&batch, name))
            .collect::<Result<Vec<_>, _>>()?;

        for row_idx in 0..batch.num_rows() {
            let ts = ts_arr.value(row_idx).ok_or_else(|| {
                DataError::CorruptData(format!(
                    "Null timestamp at row {}",
                    processed_rows + row_idx
                ))
            })?;
            if let Some(&prev) = timestamps.last()
                && ts <= prev
            {
                return Err(DataError::CorruptData(format!(
                    "Non-increasing timestamp at row {}: {} <= {}",
                    processed_rows + row_idx,
                    ts,
                    prev
                )));
            }
            timestamps.push(ts);

            for (column, accessor) in values.iter_mut().zip(&accessors) {
                column.push(accessor.value(row_idx));
            }
        }

        processed_rows += batch.num_rows();
    }

    if timestamps.is_empty() {
        return Err(DataError::EmptyData);
    }

    let columns = names
        .into_iter()
        .zip(values)
        .map(|(name, values)| Column::new(name, values))
        .collect();
    let table = SeriesTable::new(timestamps, columns)
        .map_err(|e| DataError::CorruptData(e.to_string()))?;

    tracing::info!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.num_columns(),
        path.display()
    );

    Ok(table)
}

/// Convenience: load and validate a table.
///
/// # Errors
/// Any error of [`load_table`] or [`validate_table`].
pub fn load_and_validate(
    path: &Path,
    timestamp_column: &str,
    columns: Option<&[String]>,
) -> Result<SeriesTable, DataError> {
    let table = load_table(path, timestamp_column, columns)?;
    validate_table(&table)?;
    Ok(table)
}

enum TimestampAccessor<'a> {
    Nanos(&'a TimestampNanosecondArray),
    I64(&'a Int64Array),
}

impl TimestampAccessor<'_> {
    fn value(&self, idx: usize) -> Option<i64> {
        match self {
            TimestampAccessor::Nanos(arr) => (!arr.is_null(idx)).then(|| arr.value(idx)),
            TimestampAccessor::I64(arr) => (!arr.is_null(idx)).then(|| arr.value(idx)),
        }
    }
}

enum NumericAccessor<'a> {
    F64(&'a Float64Array),
    I64(&'a Int64Array),
}

impl NumericAccessor<'_> {
    fn value(&self, idx: usize) -> f64 {
        match self {
            NumericAccessor::F64(arr) if arr.is_null(idx) => f64::NAN,
            NumericAccessor::I64(arr) if arr.is_null(idx) => f64::NAN,
            NumericAccessor::F64(arr) => arr.value(idx),
            NumericAccessor::I64(arr) => arr.value(idx) as f64,
        }
    }
}

fn timestamp_column_accessor<'a>(
    batch: &'a RecordBatch,
    name: &str,
) -> Result<TimestampAccessor<'a>, DataError> {
    let col = batch
        .column_by_name(name)
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))?;

    if let Some(arr) = col.as_any().downcast_ref::<TimestampNanosecondArray>() {
        Ok(TimestampAccessor::Nanos(arr))
    } else if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        Ok(TimestampAccessor::I64(arr))
    } else {
        Err(DataError::InvalidColumnType(name.to_string()))
    }
}

fn numeric_column_accessor<'a>(
    batch: &'a RecordBatch,
    name: &str,
) -> Result<NumericAccessor<'a>, DataError> {
    let col = batch
        .column_by_name(name)
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))?;

    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok(NumericAccessor::F64(arr))
    } else if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        Ok(NumericAccessor::I64(arr))
    } else {
        Err(DataError::InvalidColumnType(name.to_string()))
    }
}
