mod effort;
mod loader;

pub use effort::{
    default_days_per_week, default_developers, default_high_multiplier, default_hours_per_day,
    default_large_hours, default_low_multiplier, default_medium_hours, default_medium_multiplier,
    default_small_hours, default_xlarge_hours, EffortOverrides, EffortParameters,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from_path, parse_config, CONFIG_FILE_NAME,
};

use serde::{Deserialize, Serialize};

/// Root configuration structure, read from `.jobmap.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobmapConfig {
    /// Effort estimation parameters
    #[serde(default)]
    pub effort: EffortParameters,

    /// Report presentation settings
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Rows listed in the most/least complex sections
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top: default_top() }
    }
}

pub fn default_top() -> usize {
    20
}
