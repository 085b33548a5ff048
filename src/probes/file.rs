//! File existence probe.

use std::path::{Path, PathBuf};

use crate::checklist::{CheckResult, FailureKind, Probe};

/// Check if a path exists.
pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

/// Passes when every listed path exists.
#[derive(Debug, Clone)]
pub struct FileExistsProbe {
    paths: Vec<PathBuf>,
}

impl FileExistsProbe {
    /// Create a probe for a single path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            paths: vec![path.into()],
        }
    }

    /// Create a probe that requires all paths.
    pub fn all<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Existence of each path, in declaration order.
    pub fn check(&self) -> Vec<(PathBuf, bool)> {
        self.paths
            .iter()
            .map(|p| (p.clone(), file_exists(p)))
            .collect()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl Probe for FileExistsProbe {
    fn describe(&self) -> String {
        let names: Vec<String> = self.paths.iter().map(|p| p.display().to_string()).collect();
        format!("exists: {}", names.join(", "))
    }

    fn evaluate(&self) -> anyhow::Result<CheckResult> {
        let found = self.check();

        let notes: Vec<String> = found
            .iter()
            .map(|(path, exists)| {
                if *exists {
                    format!("Found: {}", display_name(path))
                } else {
                    format!("Missing: {}", path.display())
                }
            })
            .collect();

        let missing: Vec<String> = found
            .iter()
            .filter(|(_, exists)| !exists)
            .map(|(path, _)| display_name(path))
            .collect();

        if missing.is_empty() {
            let detail = if found.len() == 1 {
                format!("{} exists", display_name(&found[0].0))
            } else {
                format!("All {} files present", found.len())
            };
            Ok(CheckResult::pass(detail).with_notes(notes))
        } else {
            Ok(CheckResult::fail(
                FailureKind::ResourceMissing,
                format!("Not found: {}", missing.join(", ")),
            )
            .with_notes(notes))
        }
    }
}
