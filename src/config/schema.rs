//! Checklist configuration schema.
//!
//! The checklist file is YAML:
//!
//! ```yaml
//! name: Asset Tracker
//! project_dir: ../asset-tracker
//! threshold: 6
//! timeout_secs: 10
//! checks:
//!   - id: "1"
//!     title: Web Form
//!     on_pass: App responding on localhost:5001
//!     probe:
//!       type: http_health
//!       url: http://localhost:5001/health
//!   - title: Database
//!     probe:
//!       type: row_count
//!       database: assets.db
//!       table: assets
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Default per-probe timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Root of a checklist file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecklistConfig {
    /// Display name used in the report header.
    #[serde(default)]
    pub name: Option<String>,

    /// Directory that relative probe paths resolve against.
    ///
    /// Relative values resolve against the checklist file's directory.
    #[serde(default)]
    pub project_dir: Option<PathBuf>,

    /// Minimum number of passing checks. Defaults to all of them.
    #[serde(default)]
    pub threshold: Option<usize>,

    /// Per-probe timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Checks in run order.
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

/// One check.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Identifier. Defaults to the 1-based position.
    #[serde(default)]
    pub id: Option<String>,

    /// Human title.
    pub title: String,

    /// Marks a passing check as limited, with this explanation.
    #[serde(default)]
    pub caveat: Option<String>,

    /// Detail line shown instead of the probe's when the check passes.
    #[serde(default)]
    pub on_pass: Option<String>,

    /// Extra lines appended to the probe's notes when the check passes,
    /// such as manually confirmed side effects.
    #[serde(default)]
    pub notes: Vec<String>,

    /// What to probe.
    pub probe: ProbeConfig,
}

/// Probe definition, tagged by `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum ProbeConfig {
    /// GET a health endpoint.
    HttpHealth {
        url: String,
        /// Substring the body must contain.
        #[serde(default)]
        expect: Option<String>,
        /// Dotted JSON field path to compare instead of a substring.
        #[serde(default)]
        json_field: Option<String>,
        /// Value `json_field` must equal.
        #[serde(default)]
        json_value: Option<serde_json::Value>,
    },

    /// Count rows in a SQLite table.
    RowCount { database: PathBuf, table: String },

    /// Require tokens in a text file.
    TextContains { file: PathBuf, tokens: Vec<String> },

    /// Require paths to exist.
    FilesExist { paths: Vec<PathBuf> },

    /// A fixed outcome: an accepted limitation or a manual confirmation.
    Fixed {
        #[serde(default)]
        passed: bool,
        detail: String,
        #[serde(default)]
        notes: Vec<String>,
    },
}

impl ProbeConfig {
    /// The `type` tag for this probe.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HttpHealth { .. } => "http_health",
            Self::RowCount { .. } => "row_count",
            Self::TextContains { .. } => "text_contains",
            Self::FilesExist { .. } => "files_exist",
            Self::Fixed { .. } => "fixed",
        }
    }
}

impl ChecklistConfig {
    /// Check ids with ordinal defaults applied.
    pub fn check_ids(&self) -> Vec<String> {
        self.checks
            .iter()
            .enumerate()
            .map(|(i, c)| c.id.clone().unwrap_or_else(|| (i + 1).to_string()))
            .collect()
    }

    /// Threshold with the all-checks default applied.
    pub fn effective_threshold(&self) -> usize {
        self.threshold.unwrap_or(self.checks.len())
    }
}
