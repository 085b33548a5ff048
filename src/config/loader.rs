//! Checklist file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::ChecklistConfig;
use crate::error::{CheckpostError, Result};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "checkpost.yml";

/// Resolve which checklist file to load.
///
/// An explicit path wins; otherwise `checkpost.yml` in `start`.
pub fn resolve_config_path(start: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => start.join(path),
        None => start.join(DEFAULT_CONFIG_FILE),
    }
}

/// Load a checklist file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ChecklistConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CheckpostError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CheckpostError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a `ChecklistConfig`.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ChecklistConfig> {
    serde_yaml::from_str(content).map_err(|e| CheckpostError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Directory that relative probe paths resolve against.
///
/// `project_dir` if set (relative to the checklist file's directory),
/// otherwise the checklist file's directory.
pub fn resolve_base_dir(config: &ChecklistConfig, config_path: &Path) -> PathBuf {
    let config_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    match &config.project_dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => config_dir.join(dir),
        None => config_dir,
    }
}
