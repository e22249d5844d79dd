//! Dashboard configuration
//!
//! Re-exports the shared config type and adds confy-backed persistence.

use std::path::PathBuf;

use tipboard_types::{BillRange, FilterState};

use crate::dataset::Dataset;
use crate::error::ConfigError;

pub use tipboard_types::DashboardConfig;

const APP_NAME: &str = "tipboard";
const CONFIG_NAME: &str = "config";

/// Extension trait for DashboardConfig persistence
pub trait DashboardConfigExt: Sized {
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn path() -> Result<PathBuf, ConfigError>;
    fn initial_filter(&self, dataset: &Dataset) -> FilterState;
}

impl DashboardConfigExt for DashboardConfig {
    /// Load from disk, falling back to defaults on any error
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default dashboard configuration");
            Self::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Path)
    }

    /// Starting filter: the dataset's full bill range plus the configured
    /// gender and time selections.
    fn initial_filter(&self, dataset: &Dataset) -> FilterState {
        let range = dataset.bill_bounds().unwrap_or(BillRange::new(0.0, 0.0));
        FilterState::new(
            range,
            self.default_genders.iter().copied(),
            self.default_times.iter().copied(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipboard_types::{MealTime, Sex};

    #[test]
    fn test_initial_filter_uses_dataset_bounds() {
        let dataset = Dataset::sample();
        let state = DashboardConfig::default().initial_filter(&dataset);
        assert_eq!(state, dataset.full_filter());
    }

    #[test]
    fn test_initial_filter_honours_defaults() {
        let config = DashboardConfig {
            default_genders: vec![Sex::Male],
            default_times: vec![MealTime::Dinner, MealTime::Dinner],
            ..Default::default()
        };
        let state = config.initial_filter(&Dataset::sample());
        assert_eq!(state.genders.len(), 1);
        assert!(state.genders.contains(&Sex::Male));
        assert_eq!(state.times.len(), 1);
    }

    #[test]
    fn test_config_file_format() {
        let text = toml::to_string(&DashboardConfig::default()).unwrap();
        assert!(text.contains("currency_symbol = \"$\""));
        let back: toml::Table = toml::from_str(&text).unwrap();
        let times = back["default_times"].as_array().unwrap();
        assert_eq!(times[0].as_str(), Some("Lunch"));
    }
}
