//! Migration effort projection.
//!
//! Per-file hours are `baseline_hours[size] * multiplier[complexity]`.
//! The roll-up divides by team capacity; parameters are expected to have
//! passed [`EffortParameters::validate`] already, so a zero divisor here
//! is reported as an error instead of being clamped.

use crate::config::EffortParameters;
use crate::core::{ComplexityLevel, SizeCategory};
use crate::errors::{JobmapError, Result};
use serde::{Deserialize, Serialize};

pub fn estimate_hours(
    size: SizeCategory,
    level: ComplexityLevel,
    params: &EffortParameters,
) -> f64 {
    params.baseline_hours(size) * params.multiplier(level)
}

/// Aggregate effort across every analyzed file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffortTotals {
    pub total_hours: f64,
    pub total_days: f64,
    pub total_weeks: f64,
    pub total_files: usize,
}

pub fn project_totals<I>(estimated_hours: I, params: &EffortParameters) -> Result<EffortTotals>
where
    I: IntoIterator<Item = f64>,
{
    let (total_hours, total_files) = estimated_hours
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), hours| (sum + hours, n + 1));

    let daily_capacity = params.daily_capacity();
    if daily_capacity == 0.0 {
        return Err(JobmapError::DivisionByZero {
            quantity: "total_days",
        });
    }
    let total_days = total_hours / daily_capacity;

    if params.days_per_week == 0 {
        return Err(JobmapError::DivisionByZero {
            quantity: "total_weeks",
        });
    }
    let total_weeks = total_days / f64::from(params.days_per_week);

    Ok(EffortTotals {
        total_hours,
        total_days,
        total_weeks,
        total_files,
    })
}
