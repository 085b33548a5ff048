//! Checklist report and summary.

use std::time::Duration;

use serde::Serialize;

use super::check::{CheckResult, FailureKind};

/// Derived status of a check entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Passed with no caveat.
    Complete,
    /// Passed, but the check carries a caveat.
    Limited,
    /// Did not pass.
    Failed,
    /// Did not pass because of a declared, accepted limitation.
    Blocked,
}

/// One check together with its result.
#[derive(Debug, Clone)]
pub struct CheckEntry {
    /// Check identifier.
    pub id: String,
    /// Check title.
    pub title: String,
    /// Caveat attached to the check, if any.
    pub caveat: Option<String>,
    /// Result produced by the probe.
    pub result: CheckResult,
    /// Time spent in the probe.
    pub elapsed: Duration,
}

impl CheckEntry {
    /// Status derived from the result and caveat.
    pub fn status(&self) -> CheckStatus {
        if !self.result.passed {
            if self.result.failure == Some(FailureKind::KnownLimitation) {
                CheckStatus::Blocked
            } else {
                CheckStatus::Failed
            }
        } else if self.caveat.is_some() {
            CheckStatus::Limited
        } else {
            CheckStatus::Complete
        }
    }
}

/// Ordered results of one checklist run.
#[derive(Debug, Clone)]
pub struct ChecklistReport {
    name: String,
    entries: Vec<CheckEntry>,
    threshold: usize,
}

impl ChecklistReport {
    /// Assemble a report. Entries must already be in declaration order.
    pub fn new(name: impl Into<String>, entries: Vec<CheckEntry>, threshold: usize) -> Self {
        Self {
            name: name.into(),
            entries,
            threshold,
        }
    }

    /// Checklist name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[CheckEntry] {
        &self.entries
    }

    /// Minimum number of passing checks.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Number of checks run.
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Number of passing checks (complete or limited).
    pub fn passed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.result.passed).count()
    }

    /// Whether the threshold was met.
    pub fn overall_passed(&self) -> bool {
        self.passed_count() >= self.threshold
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.overall_passed() {
            0
        } else {
            1
        }
    }

    /// Ids of entries with the given status, in declaration order.
    pub fn ids_with_status(&self, status: CheckStatus) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.status() == status)
            .map(|e| e.id.as_str())
            .collect()
    }

    /// Total time spent in probes.
    pub fn elapsed(&self) -> Duration {
        self.entries.iter().map(|e| e.elapsed).sum()
    }
}
