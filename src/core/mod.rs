use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One raw inventory line: a component instance inside a job file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRow {
    pub file: String,
    pub component_type: String,
    pub unique_name: String,
}

impl ComponentRow {
    pub fn new(
        file: impl Into<String>,
        component_type: impl Into<String>,
        unique_name: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            component_type: component_type.into(),
            unique_name: unique_name.into(),
        }
    }
}

/// Per-file aggregate of the component inventory.
///
/// `component_count >= component_types.len()` always holds since every
/// distinct type comes from at least one row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub file: String,
    pub component_count: usize,
    pub component_types: BTreeSet<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
    XLarge,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 4] = [Self::Small, Self::Medium, Self::Large, Self::XLarge];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::XLarge => "XLarge",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl ComplexityLevel {
    pub const ALL: [ComplexityLevel; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which source databases a job talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DatabaseUsage {
    #[serde(rename = "DB2 Only")]
    Db2Only,
    #[serde(rename = "Oracle Only")]
    OracleOnly,
    #[serde(rename = "DB2 + Oracle")]
    Db2AndOracle,
    #[serde(rename = "Snowflake Only")]
    SnowflakeOnly,
    #[serde(rename = "Other/None")]
    OtherOrNone,
}

impl DatabaseUsage {
    pub const ALL: [DatabaseUsage; 5] = [
        Self::Db2Only,
        Self::OracleOnly,
        Self::Db2AndOracle,
        Self::SnowflakeOnly,
        Self::OtherOrNone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Db2Only => "DB2 Only",
            Self::OracleOnly => "Oracle Only",
            Self::Db2AndOracle => "DB2 + Oracle",
            Self::SnowflakeOnly => "Snowflake Only",
            Self::OtherOrNone => "Other/None",
        }
    }
}

impl fmt::Display for DatabaseUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub size_category: SizeCategory,
    pub complexity: ComplexityLevel,
    pub database_usage: DatabaseUsage,
}

/// A classified file with its ranking score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub record: FileRecord,
    pub classification: Classification,
    pub complexity_score: u32,
}

/// A scored file with its projected migration hours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatedRecord {
    pub scored: ScoredRecord,
    pub estimated_hours: f64,
}
