//! Memoized filter results keyed by exact filter state.

use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;

use hashbrown::HashMap;
use serde::Serialize;
use tipboard_types::{FilterState, MealTime, Sex};

use crate::filter::FilteredView;

/// Hashable identity of a [`FilterState`]. Bill bounds compare by bit
/// pattern, so only an exactly repeated state hits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct FilterKey {
    min_bits: u64,
    max_bits: u64,
    genders: BTreeSet<Sex>,
    times: BTreeSet<MealTime>,
}

impl From<&FilterState> for FilterKey {
    fn from(state: &FilterState) -> Self {
        Self {
            min_bits: state.bill_range.min.to_bits(),
            max_bits: state.bill_range.max.to_bits(),
            genders: state.genders.clone(),
            times: state.times.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Least-recently-used cache of filtered views.
#[derive(Debug)]
pub(crate) struct FilterMemo {
    capacity: usize,
    entries: HashMap<FilterKey, Arc<FilteredView>>,
    /// Front is least recently used
    order: VecDeque<FilterKey>,
    hits: u64,
    misses: u64,
}

impl FilterMemo {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached view for `key`, or compute and remember it.
    pub fn get_or_compute(
        &mut self,
        key: FilterKey,
        compute: impl FnOnce() -> FilteredView,
    ) -> Arc<FilteredView> {
        if let Some(view) = self.entries.get(&key) {
            let view = Arc::clone(view);
            self.hits += 1;
            self.touch(&key);
            tracing::debug!(rows = view.len(), "Filter memo hit");
            return view;
        }

        self.misses += 1;
        let view = Arc::new(compute());
        tracing::debug!(rows = view.len(), "Filter recomputed");

        if self.capacity > 0 {
            if self.entries.len() >= self.capacity
                && let Some(evicted) = self.order.pop_front()
            {
                self.entries.remove(&evicted);
            }
            self.order.push_back(key.clone());
            self.entries.insert(key, Arc::clone(&view));
        }
        view
    }

    fn touch(&mut self, key: &FilterKey) {
        if let Some(pos) = self.order.iter().position(|k| k == key)
            && let Some(k) = self.order.remove(pos)
        {
            self.order.push_back(k);
        }
    }

    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipboard_types::BillRange;

    fn key(min: f64, max: f64) -> FilterKey {
        FilterKey::from(&FilterState::all(BillRange::new(min, max)))
    }

    #[test]
    fn test_hit_returns_same_allocation() {
        let mut memo = FilterMemo::new(2);
        let a = memo.get_or_compute(key(1.0, 2.0), FilteredView::default);
        let b = memo.get_or_compute(key(1.0, 2.0), || panic!("should be cached"));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(
            memo.stats(),
            MemoStats {
                hits: 1,
                misses: 1,
                entries: 1
            }
        );
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut memo = FilterMemo::new(2);
        memo.get_or_compute(key(1.0, 2.0), FilteredView::default);
        memo.get_or_compute(key(1.0, 3.0), FilteredView::default);
        // Refresh the first key so the second becomes the eviction candidate
        memo.get_or_compute(key(1.0, 2.0), FilteredView::default);
        memo.get_or_compute(key(1.0, 4.0), FilteredView::default);

        assert_eq!(memo.stats().entries, 2);
        let mut computed = false;
        memo.get_or_compute(key(1.0, 2.0), || {
            computed = true;
            FilteredView::default()
        });
        assert!(!computed);
        memo.get_or_compute(key(1.0, 3.0), || {
            computed = true;
            FilteredView::default()
        });
        assert!(computed);
    }

    #[test]
    fn test_zero_capacity_never_caches() {
        let mut memo = FilterMemo::new(0);
        memo.get_or_compute(key(1.0, 2.0), FilteredView::default);
        memo.get_or_compute(key(1.0, 2.0), FilteredView::default);
        assert_eq!(memo.stats().misses, 2);
        assert_eq!(memo.stats().entries, 0);
    }

    #[test]
    fn test_key_distinguishes_selections() {
        let base = FilterState::all(BillRange::new(1.0, 2.0));
        let mut lunch_only = base.clone();
        lunch_only.times = [MealTime::Lunch].into_iter().collect();
        assert_ne!(FilterKey::from(&base), FilterKey::from(&lunch_only));
        assert_eq!(FilterKey::from(&base), FilterKey::from(&base.clone()));
    }
}
