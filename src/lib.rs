// Export modules for library usage
pub mod aggregation;
pub mod classification;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod effort;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod taxonomy;

// Re-export commonly used types
pub use crate::core::{
    Classification, ComplexityLevel, ComponentRow, DatabaseUsage, EstimatedRecord, FileRecord,
    ScoredRecord, SizeCategory,
};

pub use crate::aggregation::aggregate;
pub use crate::classification::{classify, complexity, database_usage, size_category};
pub use crate::config::{EffortOverrides, EffortParameters, JobmapConfig};
pub use crate::effort::{estimate_hours, project_totals, EffortTotals};
pub use crate::errors::JobmapError;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, ReportOptions};
pub use crate::pipeline::analyze;
pub use crate::report::{
    sort_by_score, GroupKey, GroupMetric, GroupSummary, MigrationReport, ReportRow,
};
pub use crate::scoring::complexity_score;
