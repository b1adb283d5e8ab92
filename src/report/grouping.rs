//! Group-by summaries over report rows.

use super::ReportRow;
use crate::core::{ComplexityLevel, DatabaseUsage, SizeCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKey {
    Size,
    Complexity,
    Database,
}

/// Column aggregated by a group summary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupMetric {
    ComplexityScore,
    EstimatedHours,
}

impl GroupMetric {
    fn value(&self, row: &ReportRow) -> f64 {
        match self {
            Self::ComplexityScore => f64::from(row.complexity_score),
            Self::EstimatedHours => row.estimated_hours,
        }
    }
}

/// Group identity; fields not part of the grouping stay `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupLabel {
    pub size_category: Option<SizeCategory>,
    pub complexity: Option<ComplexityLevel>,
    pub database_usage: Option<DatabaseUsage>,
}

impl GroupLabel {
    fn for_row(row: &ReportRow, keys: &[GroupKey]) -> Self {
        let mut label = Self::default();
        for key in keys {
            match key {
                GroupKey::Size => label.size_category = Some(row.size_category),
                GroupKey::Complexity => label.complexity = Some(row.complexity),
                GroupKey::Database => label.database_usage = Some(row.database_usage),
            }
        }
        label
    }

    /// Human readable, e.g. `Large / High`
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = [
            self.size_category.map(|s| s.label()),
            self.complexity.map(|c| c.label()),
            self.database_usage.map(|d| d.label()),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            "All".to_string()
        } else {
            parts.join(" / ")
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub label: GroupLabel,
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
}

/// Group rows by any combination of keys.
///
/// Groups come out in category order (Small before Medium, Low before
/// High, ...). An empty key list yields a single group over all rows.
pub fn group_by(rows: &[ReportRow], keys: &[GroupKey], metric: GroupMetric) -> Vec<GroupSummary> {
    let grouped = rows.iter().fold(
        BTreeMap::<GroupLabel, (usize, f64)>::new(),
        |mut acc, row| {
            let entry = acc.entry(GroupLabel::for_row(row, keys)).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += metric.value(row);
            acc
        },
    );

    grouped
        .into_iter()
        .map(|(label, (count, sum))| GroupSummary {
            label,
            count,
            sum,
            mean: sum / count as f64,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatabaseBreakdown {
    pub database_usage: DatabaseUsage,
    pub file_count: usize,
    /// Rounded to two decimals
    pub avg_complexity_score: f64,
}

pub(super) fn database_breakdown(rows: &[ReportRow]) -> Vec<DatabaseBreakdown> {
    group_by(rows, &[GroupKey::Database], GroupMetric::ComplexityScore)
        .into_iter()
        .filter_map(|group| {
            group.label.database_usage.map(|database_usage| DatabaseBreakdown {
                database_usage,
                file_count: group.count,
                avg_complexity_score: round2(group.mean),
            })
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Size x complexity grid, zero-filled, in category order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatrix<T> {
    /// One row per size category, one column per complexity level
    pub cells: Vec<(SizeCategory, Vec<(ComplexityLevel, T)>)>,
}

impl<T> CategoryMatrix<T>
where
    T: Copy + Default + std::ops::AddAssign,
{
    pub(super) fn build(rows: &[ReportRow], value: impl Fn(&ReportRow) -> T) -> Self {
        let cells = SizeCategory::ALL
            .into_iter()
            .map(|size| {
                let columns = ComplexityLevel::ALL
                    .into_iter()
                    .map(|level| {
                        let mut total = T::default();
                        for row in rows
                            .iter()
                            .filter(|r| r.size_category == size && r.complexity == level)
                        {
                            total += value(row);
                        }
                        (level, total)
                    })
                    .collect();
                (size, columns)
            })
            .collect();
        Self { cells }
    }

    pub fn get(&self, size: SizeCategory, level: ComplexityLevel) -> T {
        self.cells
            .iter()
            .find(|(s, _)| *s == size)
            .and_then(|(_, columns)| columns.iter().find(|(l, _)| *l == level))
            .map(|(_, v)| *v)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        size: SizeCategory,
        level: ComplexityLevel,
        db: DatabaseUsage,
        score: u32,
        hours: f64,
    ) -> ReportRow {
        ReportRow {
            file: "job.kjb".to_string(),
            component_count: 1,
            size_category: size,
            complexity: level,
            database_usage: db,
            complexity_score: score,
            estimated_hours: hours,
        }
    }

    fn sample() -> Vec<ReportRow> {
        vec![
            row(SizeCategory::Small, ComplexityLevel::Low, DatabaseUsage::SnowflakeOnly, 1, 6.4),
            row(SizeCategory::Small, ComplexityLevel::High, DatabaseUsage::OtherOrNone, 5, 12.0),
            row(SizeCategory::Large, ComplexityLevel::High, DatabaseUsage::Db2Only, 15, 48.0),
            row(SizeCategory::Small, ComplexityLevel::Low, DatabaseUsage::SnowflakeOnly, 1, 6.4),
        ]
    }

    #[test]
    fn test_group_by_single_key() {
        let groups = group_by(&sample(), &[GroupKey::Complexity], GroupMetric::ComplexityScore);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label.complexity, Some(ComplexityLevel::Low));
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].sum, 2.0);
        assert_eq!(groups[1].label.complexity, Some(ComplexityLevel::High));
        assert_eq!(groups[1].mean, 10.0);
    }

    #[test]
    fn test_group_by_combined_keys_sums_hours() {
        let groups = group_by(
            &sample(),
            &[GroupKey::Size, GroupKey::Complexity],
            GroupMetric::EstimatedHours,
        );

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].label.describe(), "Small / Low");
        assert!((groups[0].sum - 12.8).abs() < 1e-9);
        assert_eq!(groups[2].label.describe(), "Large / High");
    }

    #[test]
    fn test_group_by_without_keys_is_single_group() {
        let groups = group_by(&sample(), &[], GroupMetric::ComplexityScore);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label.describe(), "All");
        assert_eq!(groups[0].count, 4);
    }

    #[test]
    fn test_group_by_empty_rows() {
        assert!(group_by(&[], &[GroupKey::Size], GroupMetric::EstimatedHours).is_empty());
    }

    #[test]
    fn test_database_breakdown_rounds_mean() {
        let mut rows = sample();
        rows.push(row(SizeCategory::Small, ComplexityLevel::Medium, DatabaseUsage::SnowflakeOnly, 3, 8.0));

        let breakdown = database_breakdown(&rows);

        let snowflake = breakdown
            .iter()
            .find(|b| b.database_usage == DatabaseUsage::SnowflakeOnly)
            .unwrap();
        assert_eq!(snowflake.file_count, 3);
        assert_eq!(snowflake.avg_complexity_score, 1.67);
    }

    #[test]
    fn test_matrix_is_zero_filled() {
        let counts = CategoryMatrix::build(&sample(), |_| 1usize);

        assert_eq!(counts.cells.len(), 4);
        assert_eq!(counts.get(SizeCategory::Small, ComplexityLevel::Low), 2);
        assert_eq!(counts.get(SizeCategory::XLarge, ComplexityLevel::Medium), 0);
    }
}
