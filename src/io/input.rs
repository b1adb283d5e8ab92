//! Component inventory input.
//!
//! A headed CSV with `file`, `component_type` and `unique_name` columns.
//! Any other column (typically a leading `index`) is ignored.

use crate::core::ComponentRow;
use crate::errors::{JobmapError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 3] = ["file", "component_type", "unique_name"];

pub fn read_component_rows<R: Read>(reader: R) -> Result<Vec<ComponentRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();

    if !missing.is_empty() {
        return Err(JobmapError::schema(format!(
            "CSV must contain columns {:?}; missing {:?}",
            REQUIRED_COLUMNS, missing
        )));
    }

    let rows = csv_reader
        .deserialize::<ComponentRow>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    log::debug!("Loaded {} component rows", rows.len());
    Ok(rows)
}

pub fn read_component_rows_from_path(path: &Path) -> Result<Vec<ComponentRow>> {
    let file = File::open(path)?;
    read_component_rows(file)
}
