//! Size, complexity and database-usage classification of a job file.

use crate::core::{Classification, ComplexityLevel, DatabaseUsage, FileRecord, SizeCategory};
use crate::taxonomy;
use std::collections::BTreeSet;

/// Thresholds are exclusive upper bounds: 10 is Medium, 20 Large, 40 XLarge.
pub fn size_category(component_count: usize) -> SizeCategory {
    match component_count {
        0..=9 => SizeCategory::Small,
        10..=19 => SizeCategory::Medium,
        20..=39 => SizeCategory::Large,
        _ => SizeCategory::XLarge,
    }
}

/// Decision list, evaluated top to bottom:
///
/// 1. drop utility components
/// 2. nothing left, or only Snowflake-native components left: Low
/// 3. any high-complexity component left: High
/// 4. otherwise Medium
pub fn complexity<S: AsRef<str>>(component_types: &BTreeSet<S>) -> ComplexityLevel {
    let relevant: Vec<&str> = component_types
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| !taxonomy::is_utility(t))
        .collect();

    if relevant.is_empty() {
        return ComplexityLevel::Low;
    }

    if relevant.iter().all(|t| taxonomy::is_snowflake(t)) {
        return ComplexityLevel::Low;
    }

    if relevant.iter().any(|t| taxonomy::is_high_complexity(t)) {
        return ComplexityLevel::High;
    }

    ComplexityLevel::Medium
}

/// Uses the full type set; utility components are not subtracted here.
///
/// DB2 together with Oracle is reported as "DB2 + Oracle" even when
/// Snowflake components are also present.
pub fn database_usage<S: AsRef<str>>(component_types: &BTreeSet<S>) -> DatabaseUsage {
    let has = |pred: fn(&str) -> bool| component_types.iter().any(|t| pred(t.as_ref()));

    let has_db2 = has(taxonomy::is_db2);
    let has_oracle = has(taxonomy::is_oracle);
    let has_snowflake = has(taxonomy::is_snowflake);

    match (has_db2, has_oracle, has_snowflake) {
        (true, true, _) => DatabaseUsage::Db2AndOracle,
        (true, false, _) => DatabaseUsage::Db2Only,
        (false, true, _) => DatabaseUsage::OracleOnly,
        (false, false, true) => DatabaseUsage::SnowflakeOnly,
        (false, false, false) => DatabaseUsage::OtherOrNone,
    }
}

pub fn classify(record: &FileRecord) -> Classification {
    Classification {
        size_category: size_category(record.component_count),
        complexity: complexity(&record.component_types),
        database_usage: database_usage(&record.component_types),
    }
}
