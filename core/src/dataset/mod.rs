//! The immutable record set shared by every dashboard session.

mod sample;

use std::sync::Arc;

use tipboard_types::{BillRange, FilterState, Record};

use crate::error::InputError;

pub use sample::SAMPLE_TIPS;

/// Read-only handle to the loaded records.
///
/// Cloning shares the same allocation; sessions never mutate it.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Dataset {
    pub fn new(records: impl Into<Arc<[Record]>>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The bundled tips sample.
    pub fn sample() -> Self {
        Self::new(SAMPLE_TIPS)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed `[min, max]` of `total_bill`, or None for an empty dataset.
    pub fn bill_bounds(&self) -> Option<BillRange> {
        let mut iter = self.records.iter().map(|r| r.total_bill);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), b| (lo.min(b), hi.max(b)));
        Some(BillRange::new(min, max))
    }

    /// Full bill range with every gender and time selected.
    pub fn full_filter(&self) -> FilterState {
        FilterState::all(self.bill_bounds().unwrap_or(BillRange::new(0.0, 0.0)))
    }

    /// Validate a range the way the bill slider constrains it.
    pub fn check_bill_range(&self, range: BillRange) -> Result<(), InputError> {
        if !range.min.is_finite() || !range.max.is_finite() {
            return Err(InputError::NotFinite {
                min: range.min,
                max: range.max,
            });
        }
        if range.min > range.max {
            return Err(InputError::InvertedRange {
                min: range.min,
                max: range.max,
            });
        }
        let bounds = self.bill_bounds().ok_or(InputError::EmptyDataset)?;
        if range.min < bounds.min || range.max > bounds.max {
            return Err(InputError::OutOfBounds {
                min: range.min,
                max: range.max,
                lower: bounds.min,
                upper: bounds.max,
            });
        }
        Ok(())
    }

    /// Identity check used by sessions sharing one dataset.
    pub fn ptr_eq(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}
