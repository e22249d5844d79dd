use tipboard_core::{Dashboard, DashboardConfig, DashboardConfigExt, Dataset, FilterState};

use crate::display::ConsoleDisplay;

/// Holds all state for one interactive CLI session.
/// This is a lightweight container - logic lives in the dashboard.
pub struct CliContext {
    pub config: DashboardConfig,
    pub dashboard: Dashboard,
    /// Filter the session started from, restored by `reset`
    initial_state: FilterState,
}

impl CliContext {
    pub fn new(config: DashboardConfig, dataset: Dataset) -> Self {
        let initial_state = config.initial_filter(&dataset);
        let mut dashboard =
            Dashboard::with_state(dataset, initial_state.clone(), config.memo_capacity);
        dashboard.add_handler(Box::new(ConsoleDisplay::new(
            config.currency_symbol.clone(),
            config.table_preview_rows,
        )));
        Self {
            config,
            dashboard,
            initial_state,
        }
    }

    /// Context over the bundled sample with the on-disk configuration.
    pub fn load() -> Self {
        Self::new(DashboardConfig::load(), Dataset::sample())
    }

    pub fn initial_state(&self) -> &FilterState {
        &self.initial_state
    }

    pub fn currency(&self) -> &str {
        &self.config.currency_symbol
    }
}
