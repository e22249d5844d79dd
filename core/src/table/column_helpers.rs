use arrow::array::{
    Array, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray, StringArray,
    StringViewArray,
};
use arrow::record_batch::RecordBatch;

use crate::error::TableError;

// ─────────────────────────────────────────────────────────────────────────────
// Named Column Extractors (handles Arrow type variations automatically)
// ─────────────────────────────────────────────────────────────────────────────

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a dyn Array, TableError> {
    batch
        .column_by_name(name)
        .map(|c| c.as_ref())
        .ok_or_else(|| TableError::ColumnNotFound {
            name: name.to_string(),
        })
}

fn unexpected(name: &str, expected: &'static str, col: &dyn Array) -> TableError {
    TableError::UnexpectedColumnType {
        name: name.to_string(),
        expected,
        actual: format!("{:?}", col.data_type()),
    }
}

pub fn col_strings(batch: &RecordBatch, name: &str) -> Result<Vec<String>, TableError> {
    let col = column(batch, name)?;
    if let Some(a) = col.as_any().downcast_ref::<StringArray>() {
        return Ok((0..a.len()).map(|i| a.value(i).to_string()).collect());
    }
    if let Some(a) = col.as_any().downcast_ref::<StringViewArray>() {
        return Ok((0..a.len()).map(|i| a.value(i).to_string()).collect());
    }
    if let Some(a) = col.as_any().downcast_ref::<LargeStringArray>() {
        return Ok((0..a.len()).map(|i| a.value(i).to_string()).collect());
    }
    Err(unexpected(name, "string", col))
}

pub fn col_f64(batch: &RecordBatch, name: &str) -> Result<Vec<f64>, TableError> {
    let col = column(batch, name)?;
    if let Some(a) = col.as_any().downcast_ref::<Float64Array>() {
        return Ok((0..a.len()).map(|i| a.value(i)).collect());
    }
    if let Some(a) = col.as_any().downcast_ref::<Float32Array>() {
        return Ok((0..a.len()).map(|i| a.value(i) as f64).collect());
    }
    if let Some(a) = col.as_any().downcast_ref::<Int64Array>() {
        return Ok((0..a.len()).map(|i| a.value(i) as f64).collect());
    }
    if let Some(a) = col.as_any().downcast_ref::<Int32Array>() {
        return Ok((0..a.len()).map(|i| a.value(i) as f64).collect());
    }
    Err(unexpected(name, "float", col))
}
