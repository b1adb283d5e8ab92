pub mod input;
pub mod output;

pub use input::{read_component_rows, read_component_rows_from_path, REQUIRED_COLUMNS};
pub use output::{create_writer, OutputFormat, OutputWriter, ReportOptions};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

pub fn dir_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
