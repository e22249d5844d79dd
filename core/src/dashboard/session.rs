use std::sync::Arc;

use tipboard_types::{AggregateResult, BillRange, DashboardConfig, FilterState, MealTime, Sex};

use super::handler::OutputHandler;
use super::memo::{FilterKey, FilterMemo, MemoStats};
use super::output::{OutputId, OutputUpdate};
use crate::config::DashboardConfigExt;
use crate::dataset::Dataset;
use crate::filter::{self, FilteredView};

/// One dashboard session: the current filter state, the memoized filtered
/// view derived from it, and every output computed from that view.
///
/// State changes are applied synchronously. When a call returns, the view,
/// the aggregates and all handlers are up to date.
pub struct Dashboard {
    dataset: Dataset,
    state: FilterState,
    memo: FilterMemo,
    view: Arc<FilteredView>,
    outputs: AggregateResult,
    /// Bumped on every effective state change
    generation: u64,
    handlers: Vec<Box<dyn OutputHandler>>,
}

impl Dashboard {
    /// Start a session from the configured default selections.
    pub fn new(dataset: Dataset, config: &DashboardConfig) -> Self {
        let state = config.initial_filter(&dataset);
        Self::with_state(dataset, state, config.memo_capacity)
    }

    pub fn with_state(dataset: Dataset, state: FilterState, memo_capacity: usize) -> Self {
        let mut memo = FilterMemo::new(memo_capacity);
        let view = memo.get_or_compute(FilterKey::from(&state), || {
            filter::compute(&state, dataset.records())
        });
        let outputs = crate::aggregate::aggregate(&view);
        tracing::info!(
            records = dataset.len(),
            guests = outputs.guest_count,
            "Dashboard session started"
        );
        Self {
            dataset,
            state,
            memo,
            view,
            outputs,
            generation: 0,
            handlers: Vec::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn view(&self) -> &Arc<FilteredView> {
        &self.view
    }

    pub fn aggregates(&self) -> &AggregateResult {
        &self.outputs
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn memo_stats(&self) -> MemoStats {
        self.memo.stats()
    }

    /// Register a display handler. It receives updates from the next change on.
    pub fn add_handler(&mut self, handler: Box<dyn OutputHandler>) {
        self.handlers.push(handler);
    }

    /// Compute `ids` against the current view without a state change, for
    /// handlers that attach late and need an initial render.
    pub fn current_outputs(&self, ids: &[OutputId]) -> Vec<OutputUpdate> {
        ids.iter().map(|id| id.compute(&self.view)).collect()
    }

    /// Replace the whole filter state. Returns false if nothing changed.
    ///
    /// Equality is the memo's: bill bounds compare by bit pattern.
    pub fn set_state(&mut self, state: FilterState) -> bool {
        if FilterKey::from(&state) == FilterKey::from(&self.state) {
            tracing::debug!(generation = self.generation, "Filter state unchanged");
            return false;
        }
        self.state = state;
        self.recompute();
        true
    }

    pub fn set_bill_range(&mut self, range: BillRange) -> bool {
        let mut state = self.state.clone();
        state.bill_range = range;
        self.set_state(state)
    }

    pub fn set_genders(&mut self, genders: impl IntoIterator<Item = Sex>) -> bool {
        let mut state = self.state.clone();
        state.genders = genders.into_iter().collect();
        self.set_state(state)
    }

    pub fn set_times(&mut self, times: impl IntoIterator<Item = MealTime>) -> bool {
        let mut state = self.state.clone();
        state.times = times.into_iter().collect();
        self.set_state(state)
    }

    /// Refresh the filtered view, rerun every output and notify handlers.
    fn recompute(&mut self) {
        let state = &self.state;
        let records = self.dataset.records();
        self.view = self
            .memo
            .get_or_compute(FilterKey::from(state), || filter::compute(state, records));
        self.generation += 1;

        let updates: Vec<OutputUpdate> = OutputId::ALL
            .iter()
            .map(|id| id.compute(&self.view))
            .collect();
        for update in &updates {
            update.apply_to(&mut self.outputs);
        }

        tracing::debug!(
            generation = self.generation,
            guests = self.outputs.guest_count,
            "Outputs recomputed"
        );

        for handler in &mut self.handlers {
            handler.on_recompute(self.generation);
            let wanted: Vec<OutputUpdate> = updates
                .iter()
                .filter(|u| handler.subscriptions().contains(&u.id()))
                .cloned()
                .collect();
            if !wanted.is_empty() {
                handler.handle_outputs(&wanted, &self.view);
            }
        }
    }
}
