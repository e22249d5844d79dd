//! Filter engine: current input state to filtered rows.

use std::slice;

use tipboard_types::{FilterState, Record, TipRow};

/// Records that satisfy a [`FilterState`], in dataset order, each with its
/// tip percentage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilteredView {
    rows: Vec<TipRow>,
}

impl FilteredView {
    pub fn new(rows: Vec<TipRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TipRow] {
        &self.rows
    }

    pub fn iter(&self) -> slice::Iter<'_, TipRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a FilteredView {
    type Item = &'a TipRow;
    type IntoIter = slice::Iter<'a, TipRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Row predicate: bill inside the inclusive range, gender and time selected.
pub fn admits(state: &FilterState, record: &Record) -> bool {
    state.bill_range.contains(record.total_bill)
        && state.genders.contains(&record.sex)
        && state.times.contains(&record.time)
}

/// Apply `state` to `records`. Pure; an empty result is a valid output.
pub fn compute(state: &FilterState, records: &[Record]) -> FilteredView {
    let rows = records
        .iter()
        .filter(|r| admits(state, r))
        .map(TipRow::from)
        .collect();
    FilteredView::new(rows)
}
