//! JSON report formatter.

use std::io::Write;

use serde::Serialize;

use super::{ReportFormatter, Verdict};
use crate::checklist::{CheckEntry, CheckStatus, ChecklistReport, FailureKind};

/// Formats reports as a single JSON document.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Emit compact single-line JSON.
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    name: &'a str,
    checks: Vec<JsonCheck<'a>>,
    summary: JsonSummary<'a>,
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    id: &'a str,
    title: &'a str,
    status: CheckStatus,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
    notes: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caveat: Option<&'a str>,
    elapsed_ms: u64,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    total: usize,
    passed: usize,
    threshold: usize,
    overall_passed: bool,
    verdict: Verdict,
    complete: Vec<&'a str>,
    limited: Vec<&'a str>,
    failed: Vec<&'a str>,
    blocked: Vec<&'a str>,
}

impl<'a> From<&'a CheckEntry> for JsonCheck<'a> {
    fn from(entry: &'a CheckEntry) -> Self {
        Self {
            id: &entry.id,
            title: &entry.title,
            status: entry.status(),
            passed: entry.result.passed,
            detail: entry.result.detail.as_deref(),
            notes: &entry.result.notes,
            failure: entry.result.failure,
            caveat: entry.caveat.as_deref(),
            elapsed_ms: u64::try_from(entry.elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        report: &ChecklistReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let output = JsonReport {
            name: report.name(),
            checks: report.entries().iter().map(JsonCheck::from).collect(),
            summary: JsonSummary {
                total: report.total(),
                passed: report.passed_count(),
                threshold: report.threshold(),
                overall_passed: report.overall_passed(),
                verdict: Verdict::of(report),
                complete: report.ids_with_status(CheckStatus::Complete),
                limited: report.ids_with_status(CheckStatus::Limited),
                failed: report.ids_with_status(CheckStatus::Failed),
                blocked: report.ids_with_status(CheckStatus::Blocked),
            },
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)
    }
}
