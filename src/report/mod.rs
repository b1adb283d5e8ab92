//! Assembled migration report.
//!
//! One flat [`ReportRow`] per file, ordered by complexity score, plus the
//! effort roll-up and summary views derived from those rows.

pub mod grouping;
pub mod summary;

pub use grouping::{
    group_by, CategoryMatrix, DatabaseBreakdown, GroupKey, GroupLabel, GroupMetric, GroupSummary,
};
pub use summary::{summarize_input, InputSummary};

use crate::config::EffortParameters;
use crate::core::{ComplexityLevel, DatabaseUsage, EstimatedRecord, SizeCategory};
use crate::effort::EffortTotals;
use serde::{Deserialize, Serialize};

/// Export row. Field order is the column order of the CSV export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub file: String,
    pub component_count: usize,
    pub size_category: SizeCategory,
    pub complexity: ComplexityLevel,
    pub database_usage: DatabaseUsage,
    pub complexity_score: u32,
    pub estimated_hours: f64,
}

impl From<&EstimatedRecord> for ReportRow {
    fn from(estimated: &EstimatedRecord) -> Self {
        let scored = &estimated.scored;
        Self {
            file: scored.record.file.clone(),
            component_count: scored.record.component_count,
            size_category: scored.classification.size_category,
            complexity: scored.classification.complexity,
            database_usage: scored.classification.database_usage,
            complexity_score: scored.complexity_score,
            estimated_hours: estimated.estimated_hours,
        }
    }
}

/// Stable sort, highest score first. Equal scores keep their input order.
pub fn sort_by_score(rows: &mut [ReportRow]) {
    rows.sort_by(|a, b| b.complexity_score.cmp(&a.complexity_score));
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MigrationReport {
    pub summary: InputSummary,
    pub parameters: EffortParameters,
    pub totals: EffortTotals,
    /// Sorted by descending complexity score
    pub rows: Vec<ReportRow>,
}

impl MigrationReport {
    pub fn assemble(
        summary: InputSummary,
        parameters: EffortParameters,
        totals: EffortTotals,
        estimated: &[EstimatedRecord],
    ) -> Self {
        let mut rows: Vec<ReportRow> = estimated.iter().map(ReportRow::from).collect();
        sort_by_score(&mut rows);
        Self {
            summary,
            parameters,
            totals,
            rows,
        }
    }

    /// Most complex files
    pub fn top(&self, n: usize) -> &[ReportRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Least complex files, in report order
    pub fn bottom(&self, n: usize) -> &[ReportRow] {
        let start = self.rows.len().saturating_sub(n);
        &self.rows[start..]
    }

    pub fn group_by(&self, keys: &[GroupKey], metric: GroupMetric) -> Vec<GroupSummary> {
        group_by(&self.rows, keys, metric)
    }

    pub fn complexity_distribution(&self) -> Vec<(ComplexityLevel, usize)> {
        ComplexityLevel::ALL
            .into_iter()
            .map(|level| (level, self.rows.iter().filter(|r| r.complexity == level).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    pub fn size_distribution(&self) -> Vec<(SizeCategory, usize)> {
        SizeCategory::ALL
            .into_iter()
            .map(|size| (size, self.rows.iter().filter(|r| r.size_category == size).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    pub fn database_distribution(&self) -> Vec<(DatabaseUsage, usize)> {
        DatabaseUsage::ALL
            .into_iter()
            .map(|db| (db, self.rows.iter().filter(|r| r.database_usage == db).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// File count and mean score per database usage category
    pub fn database_breakdown(&self) -> Vec<DatabaseBreakdown> {
        grouping::database_breakdown(&self.rows)
    }

    /// Number of files in each size x complexity cell
    pub fn size_complexity_counts(&self) -> CategoryMatrix<usize> {
        CategoryMatrix::build(&self.rows, |_| 1usize)
    }

    /// Estimated hours summed per size x complexity cell
    pub fn effort_breakdown(&self) -> CategoryMatrix<f64> {
        CategoryMatrix::build(&self.rows, |row| row.estimated_hours)
    }
}
