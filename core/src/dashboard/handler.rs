use super::output::{OutputId, OutputUpdate};
use crate::filter::FilteredView;

/// Trait for display surfaces that react to recomputed outputs.
/// Implement this for consoles, charts, tables, etc.
///
/// Handlers are owned by a single session, so `Send` is enough for sessions
/// to move between threads.
pub trait OutputHandler: Send {
    /// Handle one updated output.
    ///
    /// The filtered view it was computed from is passed along so handlers
    /// don't need to keep their own copy.
    fn handle_output(&mut self, update: &OutputUpdate, view: &FilteredView);

    /// Handle a batch of updates (default implementation calls handle_output for each)
    fn handle_outputs(&mut self, updates: &[OutputUpdate], view: &FilteredView) {
        for update in updates {
            self.handle_output(update, view);
        }
    }

    /// Outputs this handler wants to receive. Defaults to all of them.
    fn subscriptions(&self) -> &[OutputId] {
        &OutputId::ALL
    }

    /// Called once per effective state change, before any updates are delivered
    fn on_recompute(&mut self, _generation: u64) {}
}
