//! Reactive dashboard sessions.
//!
//! A session has one memoized derivation (the filtered view) and several
//! downstream outputs. Every effective filter change refreshes the view,
//! reruns each output and pushes the results to registered handlers.

pub mod handler;
mod memo;
pub mod output;
pub mod session;


pub use handler::OutputHandler;
pub use memo::MemoStats;
pub use output::{OutputId, OutputUpdate};
pub use session::Dashboard;
