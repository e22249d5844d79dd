//! Error types for the ambient layers around the dashboard engine.
//!
//! Filtering and aggregation never fail; an empty view is a normal result.

use thiserror::Error;

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),

    #[error("failed to resolve configuration path")]
    Path(#[source] confy::ConfyError),
}

/// Input rejected before it reaches a dashboard session
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("bill range bounds must be finite, got {min}..={max}")]
    NotFinite { min: f64, max: f64 },

    #[error("bill range is inverted: min {min} > max {max}")]
    InvertedRange { min: f64, max: f64 },

    #[error("bill range {min}..={max} is outside the dataset bounds {lower}..={upper}")]
    OutOfBounds {
        min: f64,
        max: f64,
        lower: f64,
        upper: f64,
    },

    #[error("dataset has no records")]
    EmptyDataset,

    #[error(transparent)]
    Label(#[from] tipboard_types::UnknownLabel),
}

/// Errors while handing the tabular view over as Arrow data
#[derive(Debug, Error)]
pub enum TableError {
    #[error("arrow error")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("column {name} not found in batch")]
    ColumnNotFound { name: String },

    #[error("unexpected column type for {name}: expected {expected}, got {actual}")]
    UnexpectedColumnType {
        name: String,
        expected: &'static str,
        actual: String,
    },

    #[error("bad category value in batch")]
    Label(#[from] tipboard_types::UnknownLabel),
}
