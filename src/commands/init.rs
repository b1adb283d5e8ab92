use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Jobmap Configuration

[effort]
# Baseline hours per size category
small_hours = 8.0
medium_hours = 16.0
large_hours = 32.0
xlarge_hours = 64.0

# Multipliers per complexity level
low_multiplier = 0.8
medium_multiplier = 1.0
high_multiplier = 1.5

# Team capacity
developers = 3
hours_per_day = 8
days_per_week = 5

[report]
top = 20
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if io::file_exists(config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)
}
