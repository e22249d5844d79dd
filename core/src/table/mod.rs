//! Columnar hand-off of the tabular view.
//!
//! Display surfaces that render data grids take the filtered rows as an
//! Arrow `RecordBatch`; categories travel as their dataset labels.

mod column_helpers;

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use tipboard_types::TipRow;

use crate::error::TableError;
use crate::filter::FilteredView;

pub use column_helpers::{col_f64, col_strings};

pub const COLUMNS: [&str; 6] = ["total_bill", "tip", "sex", "day", "time", "tip_pct"];

pub fn schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("total_bill", DataType::Float64, false),
        Field::new("tip", DataType::Float64, false),
        Field::new("sex", DataType::Utf8, false),
        Field::new("day", DataType::Utf8, false),
        Field::new("time", DataType::Utf8, false),
        Field::new("tip_pct", DataType::Float64, false),
    ]))
}

fn f64_column(rows: &[TipRow], f: impl Fn(&TipRow) -> f64) -> ArrayRef {
    Arc::new(Float64Array::from_iter_values(rows.iter().map(f)))
}

fn label_column(rows: &[TipRow], f: impl Fn(&TipRow) -> &'static str) -> ArrayRef {
    Arc::new(StringArray::from_iter_values(rows.iter().map(f)))
}

/// Build a batch holding every row of `view`.
pub fn to_record_batch(view: &FilteredView) -> Result<RecordBatch, TableError> {
    let rows = view.rows();
    let columns = vec![
        f64_column(rows, |r| r.total_bill),
        f64_column(rows, |r| r.tip),
        label_column(rows, |r| r.sex.label()),
        label_column(rows, |r| r.day.label()),
        label_column(rows, |r| r.time.label()),
        f64_column(rows, |r| r.tip_pct),
    ];
    Ok(RecordBatch::try_new(schema(), columns)?)
}

/// Read rows back out of a batch with the tabular view's columns.
pub fn rows_from_batch(batch: &RecordBatch) -> Result<Vec<TipRow>, TableError> {
    let bills = col_f64(batch, "total_bill")?;
    let tips = col_f64(batch, "tip")?;
    let sexes = col_strings(batch, "sex")?;
    let days = col_strings(batch, "day")?;
    let times = col_strings(batch, "time")?;
    let pcts = col_f64(batch, "tip_pct")?;

    let mut rows = Vec::with_capacity(batch.num_rows());
    for i in 0..batch.num_rows() {
        rows.push(TipRow {
            total_bill: bills[i],
            tip: tips[i],
            sex: sexes[i].parse()?,
            day: days[i].parse()?,
            time: times[i].parse()?,
            tip_pct: pcts[i],
        });
    }
    Ok(rows)
}
