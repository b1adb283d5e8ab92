//! Effort estimation parameters.
//!
//! Baseline hours per size category, multipliers per complexity level and
//! team capacity. All values are caller-adjustable; the defaults are the
//! ones the migration dashboard ships with.

use crate::core::{ComplexityLevel, SizeCategory};
use crate::errors::{JobmapError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortParameters {
    #[serde(default = "default_small_hours")]
    pub small_hours: f64,

    #[serde(default = "default_medium_hours")]
    pub medium_hours: f64,

    #[serde(default = "default_large_hours")]
    pub large_hours: f64,

    #[serde(default = "default_xlarge_hours")]
    pub xlarge_hours: f64,

    #[serde(default = "default_low_multiplier")]
    pub low_multiplier: f64,

    #[serde(default = "default_medium_multiplier")]
    pub medium_multiplier: f64,

    #[serde(default = "default_high_multiplier")]
    pub high_multiplier: f64,

    /// Developers working in parallel
    #[serde(default = "default_developers")]
    pub developers: u32,

    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: u32,

    #[serde(default = "default_days_per_week")]
    pub days_per_week: u32,
}

impl Default for EffortParameters {
    fn default() -> Self {
        Self {
            small_hours: default_small_hours(),
            medium_hours: default_medium_hours(),
            large_hours: default_large_hours(),
            xlarge_hours: default_xlarge_hours(),
            low_multiplier: default_low_multiplier(),
            medium_multiplier: default_medium_multiplier(),
            high_multiplier: default_high_multiplier(),
            developers: default_developers(),
            hours_per_day: default_hours_per_day(),
            days_per_week: default_days_per_week(),
        }
    }
}

impl EffortParameters {
    pub fn baseline_hours(&self, size: SizeCategory) -> f64 {
        match size {
            SizeCategory::Small => self.small_hours,
            SizeCategory::Medium => self.medium_hours,
            SizeCategory::Large => self.large_hours,
            SizeCategory::XLarge => self.xlarge_hours,
        }
    }

    pub fn multiplier(&self, level: ComplexityLevel) -> f64 {
        match level {
            ComplexityLevel::Low => self.low_multiplier,
            ComplexityLevel::Medium => self.medium_multiplier,
            ComplexityLevel::High => self.high_multiplier,
        }
    }

    /// Team hours available per working day. Computed in `f64` so large
    /// teams cannot overflow.
    pub fn daily_capacity(&self) -> f64 {
        f64::from(self.developers) * f64::from(self.hours_per_day)
    }

    // Pure function: strictly positive, finite
    pub fn validate_positive(value: f64, name: &'static str) -> std::result::Result<(), String> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(format!("{} must be a positive number, got {}", name, value))
        }
    }

    // Pure function: whole number of at least one
    pub fn validate_at_least_one(value: u32, name: &'static str) -> std::result::Result<(), String> {
        if value >= 1 {
            Ok(())
        } else {
            Err(format!("{} must be at least 1, got {}", name, value))
        }
    }

    pub fn collect_validations(&self) -> Vec<(&'static str, std::result::Result<(), String>)> {
        vec![
            ("small_hours", Self::validate_positive(self.small_hours, "small_hours")),
            ("medium_hours", Self::validate_positive(self.medium_hours, "medium_hours")),
            ("large_hours", Self::validate_positive(self.large_hours, "large_hours")),
            ("xlarge_hours", Self::validate_positive(self.xlarge_hours, "xlarge_hours")),
            ("low_multiplier", Self::validate_positive(self.low_multiplier, "low_multiplier")),
            (
                "medium_multiplier",
                Self::validate_positive(self.medium_multiplier, "medium_multiplier"),
            ),
            ("high_multiplier", Self::validate_positive(self.high_multiplier, "high_multiplier")),
            ("developers", Self::validate_at_least_one(self.developers, "developers")),
            ("hours_per_day", Self::validate_at_least_one(self.hours_per_day, "hours_per_day")),
            ("days_per_week", Self::validate_at_least_one(self.days_per_week, "days_per_week")),
        ]
    }

    /// Reject the parameter set if any field is out of range.
    ///
    /// All offending fields are reported in a single `ParameterError`.
    pub fn validate(&self) -> Result<()> {
        let failures: Vec<(&'static str, String)> = self
            .collect_validations()
            .into_iter()
            .filter_map(|(name, result)| result.err().map(|msg| (name, msg)))
            .collect();

        if failures.is_empty() {
            return Ok(());
        }

        let parameter = failures
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");
        let message = failures
            .into_iter()
            .map(|(_, msg)| msg)
            .collect::<Vec<_>>()
            .join("; ");

        Err(JobmapError::parameter(parameter, message))
    }

    /// Apply per-field overrides, leaving unset fields unchanged.
    pub fn with_overrides(mut self, overrides: &EffortOverrides) -> Self {
        if let Some(v) = overrides.small_hours {
            self.small_hours = v;
        }
        if let Some(v) = overrides.medium_hours {
            self.medium_hours = v;
        }
        if let Some(v) = overrides.large_hours {
            self.large_hours = v;
        }
        if let Some(v) = overrides.xlarge_hours {
            self.xlarge_hours = v;
        }
        if let Some(v) = overrides.low_multiplier {
            self.low_multiplier = v;
        }
        if let Some(v) = overrides.medium_multiplier {
            self.medium_multiplier = v;
        }
        if let Some(v) = overrides.high_multiplier {
            self.high_multiplier = v;
        }
        if let Some(v) = overrides.developers {
            self.developers = v;
        }
        if let Some(v) = overrides.hours_per_day {
            self.hours_per_day = v;
        }
        if let Some(v) = overrides.days_per_week {
            self.days_per_week = v;
        }
        self
    }
}

/// Individually overridable effort fields, typically from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffortOverrides {
    pub small_hours: Option<f64>,
    pub medium_hours: Option<f64>,
    pub large_hours: Option<f64>,
    pub xlarge_hours: Option<f64>,
    pub low_multiplier: Option<f64>,
    pub medium_multiplier: Option<f64>,
    pub high_multiplier: Option<f64>,
    pub developers: Option<u32>,
    pub hours_per_day: Option<u32>,
    pub days_per_week: Option<u32>,
}

pub fn default_small_hours() -> f64 {
    8.0
}
pub fn default_medium_hours() -> f64 {
    16.0
}
pub fn default_large_hours() -> f64 {
    32.0
}
pub fn default_xlarge_hours() -> f64 {
    64.0
}
pub fn default_low_multiplier() -> f64 {
    0.8
}
pub fn default_medium_multiplier() -> f64 {
    1.0
}
pub fn default_high_multiplier() -> f64 {
    1.5
}
pub fn default_developers() -> u32 {
    3
}
pub fn default_hours_per_day() -> u32 {
    8
}
pub fn default_days_per_week() -> u32 {
    5
}
