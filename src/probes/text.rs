//! Text-contains probe.
//!
//! Reads a source file once and reports, independently for each token,
//! whether it appears in the file.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::checklist::{CheckResult, FailureKind, Probe};

/// Files larger than this are not searched.
const MAX_FILE_BYTES: u64 = 16 * 1024 * 1024;

/// Per-token hits for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatches {
    /// Whether the file could be read.
    pub file_found: bool,
    /// Token -> found.
    pub matches: BTreeMap<String, bool>,
    /// Why the file could not be read.
    pub cause: Option<String>,
}

impl TokenMatches {
    /// Whether a token was found.
    pub fn contains(&self, token: &str) -> bool {
        self.matches.get(token).copied().unwrap_or(false)
    }
}

/// Searches a file for required tokens.
#[derive(Debug, Clone)]
pub struct TextContainsProbe {
    file: PathBuf,
    tokens: Vec<String>,
}

impl TextContainsProbe {
    /// Create a probe for a file and a set of tokens.
    pub fn new<I, S>(file: impl Into<PathBuf>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            file: file.into(),
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    fn read(&self) -> Result<String, String> {
        let metadata = fs::metadata(&self.file).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                format!("{} not found", self.file.display())
            } else {
                format!("Could not read {}: {}", self.file.display(), e)
            }
        })?;

        if !metadata.is_file() {
            return Err(format!("{} is not a regular file", self.file.display()));
        }
        if metadata.len() > MAX_FILE_BYTES {
            return Err(format!(
                "{} is larger than {} bytes",
                self.file.display(),
                MAX_FILE_BYTES
            ));
        }

        fs::read(&self.file)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .map_err(|e| format!("Could not read {}: {}", self.file.display(), e))
    }

    /// Read the file and look up every token. All-false when unreadable.
    pub fn check(&self) -> TokenMatches {
        let (content, cause) = match self.read() {
            Ok(text) => (Some(text), None),
            Err(cause) => (None, Some(cause)),
        };

        let matches = self
            .tokens
            .iter()
            .map(|token| {
                let found = content
                    .as_deref()
                    .is_some_and(|text| text.contains(token.as_str()));
                (token.clone(), found)
            })
            .collect();

        TokenMatches {
            file_found: content.is_some(),
            matches,
            cause,
        }
    }
}

impl Probe for TextContainsProbe {
    fn describe(&self) -> String {
        format!("{} contains {}", self.file.display(), self.tokens.join(", "))
    }

    fn evaluate(&self) -> anyhow::Result<CheckResult> {
        let found = self.check();

        if !found.file_found {
            return Ok(CheckResult::fail(
                FailureKind::ResourceMissing,
                found.cause.unwrap_or_default(),
            ));
        }

        let notes: Vec<String> = self
            .tokens
            .iter()
            .map(|t| {
                if found.contains(t) {
                    format!("found: {}", t)
                } else {
                    format!("missing: {}", t)
                }
            })
            .collect();

        let missing: Vec<&str> = self
            .tokens
            .iter()
            .filter(|t| !found.contains(t))
            .map(String::as_str)
            .collect();

        let file_name = self
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.display().to_string());

        if missing.is_empty() {
            Ok(CheckResult::pass(format!("Implemented in {}", file_name)).with_notes(notes))
        } else {
            Ok(CheckResult::fail(
                FailureKind::SignalNotFound,
                format!("Not found in {}: {}", file_name, missing.join(", ")),
            )
            .with_notes(notes))
        }
    }
}
