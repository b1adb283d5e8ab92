//! Component-type taxonomy.
//!
//! Read-only sets of component identifiers, built once on first use.
//! `tMap` counts as Snowflake-native: a job made only of mappings and
//! Snowflake connectors ports without rework.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Connection, teardown and diagnostic steps. Ignored for complexity.
pub static UTILITY_COMPONENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["tDie", "tSnowflakeConnection", "tSnowflakeClose", "tWarn"]
        .into_iter()
        .collect()
});

pub static SNOWFLAKE_COMPONENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "tMap",
        "tSnowflakeCommit",
        "tSnowflakeClose",
        "tSnowflakeConnection",
        "tSnowflakeInput",
        "tSnowflakeOutput",
    ]
    .into_iter()
    .collect()
});

/// Any one of these forces High complexity.
pub static HIGH_COMPLEXITY_COMPONENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["tRunJob", "tJavaRow", "tJava", "tPerlRow", "tPython"]
        .into_iter()
        .collect()
});

pub static DB2_COMPONENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "tDB2Input",
        "tDB2Output",
        "tDB2Connection",
        "tDB2Close",
        "tDB2Commit",
        "tDB2Rollback",
        "tDB2Row",
        "tDB2BulkExec",
        "tDB2TableList",
        "tDB2SCD",
    ]
    .into_iter()
    .collect()
});

pub static ORACLE_COMPONENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "tOracleInput",
        "tOracleOutput",
        "tOracleConnection",
        "tOracleClose",
        "tOracleCommit",
        "tOracleRollback",
        "tOracleRow",
        "tOracleBulkExec",
        "tOracleTableList",
        "tOracleSCD",
    ]
    .into_iter()
    .collect()
});

pub fn is_utility(component_type: &str) -> bool {
    UTILITY_COMPONENTS.contains(component_type)
}

pub fn is_snowflake(component_type: &str) -> bool {
    SNOWFLAKE_COMPONENTS.contains(component_type)
}

pub fn is_high_complexity(component_type: &str) -> bool {
    HIGH_COMPLEXITY_COMPONENTS.contains(component_type)
}

pub fn is_db2(component_type: &str) -> bool {
    DB2_COMPONENTS.contains(component_type)
}

pub fn is_oracle(component_type: &str) -> bool {
    ORACLE_COMPONENTS.contains(component_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_components_are_utility_and_snowflake() {
        assert!(is_utility("tSnowflakeConnection"));
        assert!(is_snowflake("tSnowflakeConnection"));
        assert!(is_utility("tSnowflakeClose"));
        assert!(is_snowflake("tSnowflakeClose"));
    }

    #[test]
    fn test_database_families_do_not_overlap() {
        assert!(DB2_COMPONENTS.is_disjoint(&ORACLE_COMPONENTS));
        assert!(DB2_COMPONENTS.is_disjoint(&SNOWFLAKE_COMPONENTS));
        assert!(ORACLE_COMPONENTS.is_disjoint(&SNOWFLAKE_COMPONENTS));
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        assert!(is_high_complexity("tJava"));
        assert!(!is_high_complexity("tjava"));
        assert!(!is_db2("tdb2input"));
    }
}
