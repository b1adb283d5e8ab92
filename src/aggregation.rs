//! Fold raw component rows into one record per job file.

use crate::core::{ComponentRow, FileRecord};
use crate::errors::{JobmapError, Result};
use std::collections::{BTreeSet, HashMap};

#[derive(Default)]
struct FileAccumulator {
    count: usize,
    types: BTreeSet<String>,
}

/// Group rows by `file`.
///
/// Records come back ordered by file name so that identical input always
/// yields identical output. Rows with an empty `file` are rejected.
pub fn aggregate(rows: &[ComponentRow]) -> Result<Vec<FileRecord>> {
    if let Some(position) = rows.iter().position(|row| row.file.trim().is_empty()) {
        return Err(JobmapError::schema(format!(
            "row {} has an empty `file` value",
            position + 1
        )));
    }

    let grouped = rows.iter().fold(
        HashMap::<&str, FileAccumulator>::new(),
        |mut acc, row| {
            let entry = acc.entry(row.file.as_str()).or_default();
            entry.count += 1;
            entry.types.insert(row.component_type.clone());
            acc
        },
    );

    let mut records: Vec<FileRecord> = grouped
        .into_iter()
        .map(|(file, acc)| FileRecord {
            file: file.to_string(),
            component_count: acc.count,
            component_types: acc.types,
        })
        .collect();
    records.sort_by(|a, b| a.file.cmp(&b.file));

    log::debug!(
        "Aggregated {} rows into {} file records",
        rows.len(),
        records.len()
    );

    Ok(records)
}
