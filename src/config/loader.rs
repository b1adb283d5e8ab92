use std::fs;
use std::path::{Path, PathBuf};

use super::JobmapConfig;
use crate::errors::{JobmapError, Result};

pub const CONFIG_FILE_NAME: &str = ".jobmap.toml";

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<JobmapConfig, String> {
    toml::from_str::<JobmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Load an explicitly requested config file. Any failure is fatal.
pub fn load_config_from_path(path: &Path) -> Result<JobmapConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| JobmapError::config(format!("cannot read file: {}", e), path))?;
    let config = parse_config(&contents).map_err(|e| JobmapError::config(e, path))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a specific path
fn try_load_config_from_path(config_path: &Path) -> Option<JobmapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.jobmap.toml`.
///
/// Unreadable or invalid files are skipped with a warning; the built-in
/// defaults apply when nothing usable is found.
pub fn load_config(start: &Path) -> JobmapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            JobmapConfig::default()
        })
}
