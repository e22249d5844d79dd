pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod table;

// Re-exports for convenience
pub use config::{DashboardConfig, DashboardConfigExt};
pub use dashboard::{Dashboard, MemoStats, OutputHandler, OutputId, OutputUpdate};
pub use dataset::{Dataset, SAMPLE_TIPS};
pub use error::{ConfigError, InputError, TableError};
pub use filter::FilteredView;

// Re-export shared value types
pub use tipboard_types::{
    AggregateResult, BillRange, ChartLabels, DAY_CHART, Day, DayTip, FilterState, GENDER_CHART,
    GenderTip, MealTime, Record, Sex, Stat, TipRow, UnknownLabel,
};
