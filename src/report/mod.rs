//! Report formatters.
//!
//! Renderings of a [`ChecklistReport`] in check-declaration order. The runner
//! never prints; formatters consume the finished report.

pub mod human;
pub mod json;

use std::io::Write;

use serde::Serialize;

use crate::checklist::{CheckStatus, ChecklistReport};

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Sectioned, optionally colored terminal report.
    #[default]
    Human,
    /// Machine-readable JSON document.
    Json,
}

/// Trait for formatting reports.
pub trait ReportFormatter {
    /// Format a report to the given writer.
    fn format<W: Write + ?Sized>(
        &self,
        report: &ChecklistReport,
        writer: &mut W,
    ) -> std::io::Result<()>;
}

/// Overall verdict of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every check passed without caveats.
    Passed,
    /// Threshold met, but some checks failed or carry caveats.
    PassedWithLimitations,
    /// Threshold not met.
    Failed,
}

impl Verdict {
    /// Derive the verdict from a report.
    pub fn of(report: &ChecklistReport) -> Self {
        if !report.overall_passed() {
            Self::Failed
        } else if report
            .entries()
            .iter()
            .all(|e| e.status() == CheckStatus::Complete)
        {
            Self::Passed
        } else {
            Self::PassedWithLimitations
        }
    }

    /// Upper-case label for the verdict line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::PassedWithLimitations => "PASSED WITH LIMITATIONS",
            Self::Failed => "FAILED",
        }
    }
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
