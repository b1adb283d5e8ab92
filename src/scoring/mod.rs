//! Ranking score for migration candidates.
//!
//! The score is a heuristic for ordering files, not a time unit. Effort
//! hours come from [`crate::effort`] with their own, configurable weights.

use crate::core::{Classification, ComplexityLevel, SizeCategory};

pub fn complexity_weight(level: ComplexityLevel) -> u32 {
    match level {
        ComplexityLevel::Low => 1,
        ComplexityLevel::Medium => 3,
        ComplexityLevel::High => 5,
    }
}

pub fn size_weight(size: SizeCategory) -> u32 {
    match size {
        SizeCategory::Small => 1,
        SizeCategory::Medium => 2,
        SizeCategory::Large => 3,
        SizeCategory::XLarge => 4,
    }
}

pub fn complexity_score(size: SizeCategory, level: ComplexityLevel) -> u32 {
    complexity_weight(level) * size_weight(size)
}

pub fn score_classification(classification: &Classification) -> u32 {
    complexity_score(classification.size_category, classification.complexity)
}
