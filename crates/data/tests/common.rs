use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray, TimestampNanosecondArray};
use arrow::datatypes::{Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_writer::ArrowWriter;

pub const MINUTE_NS: i64 = 60_000_000_000;
pub const START_NS: i64 = 1_704_067_200_000_000_000; // 2024-01-01 00:00:00 UTC

pub fn minute_index(len: usize) -> Vec<i64> {
    (0..len as i64).map(|i| START_NS + i * MINUTE_NS).collect()
}

pub fn write_batch(
    path: &Path,
    columns: Vec<(&str, ArrayRef)>,
) -> Result<(), Box<dyn std::error::Error>> {
    let fields: Vec<Field> = columns
        .iter()
        .map(|(name, array)| Field::new(*name, array.data_type().clone(), true))
        .collect();
    let schema = Arc::new(Schema::new(fields));
    let arrays = columns.into_iter().map(|(_, array)| array).collect();
    let batch = RecordBatch::try_new(schema.clone(), arrays)?;

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

pub fn timestamp_array(values: Vec<i64>) -> ArrayRef {
    Arc::new(TimestampNanosecondArray::from(values).with_timezone("UTC"))
}

pub fn int_array(values: Vec<Option<i64>>) -> ArrayRef {
    Arc::new(Int64Array::from(values))
}

pub fn float_array(values: Vec<Option<f64>>) -> ArrayRef {
    Arc::new(Float64Array::from(values))
}

pub fn string_array(values: Vec<&str>) -> ArrayRef {
    Arc::new(StringArray::from(values))
}

