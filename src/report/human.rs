//! Human-readable report formatter.
//!
//! Formats a checklist report for terminal display with optional color.

use std::io::Write;

use super::{ReportFormatter, Verdict};
use crate::checklist::{CheckEntry, CheckStatus, ChecklistReport};
use crate::ui::{CheckpostTheme, StatusKind};

/// Width of the header rules.
const RULE_WIDTH: usize = 60;

/// Formats reports for human consumption.
pub struct HumanFormatter {
    theme: CheckpostTheme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            theme: CheckpostTheme::for_color(use_color),
        }
    }

    fn write_entry<W: Write + ?Sized>(
        &self,
        entry: &CheckEntry,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let theme = &self.theme;
        let status = StatusKind::from(entry.status());

        writeln!(
            writer,
            "{} {}",
            theme.check_id.apply_to(format!("[{}]", entry.id)),
            theme.check_title.apply_to(&entry.title)
        )?;

        let detail = entry.result.detail.as_deref().unwrap_or("");
        match entry.result.failure {
            Some(kind) => writeln!(
                writer,
                "  {}  {} {}",
                status.styled(theme),
                detail,
                theme.dim.apply_to(format!("[{}]", kind))
            )?,
            None => writeln!(writer, "  {}  {}", status.styled(theme), detail)?,
        }

        for note in &entry.result.notes {
            writeln!(writer, "     {}", theme.dim.apply_to(note))?;
        }

        if entry.result.passed {
            if let Some(caveat) = &entry.caveat {
                writeln!(
                    writer,
                    "     {}",
                    theme.warning.apply_to(format!("Note: {}", caveat))
                )?;
            }
        }

        writeln!(writer)
    }

    fn write_summary<W: Write + ?Sized>(
        &self,
        report: &ChecklistReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let theme = &self.theme;

        writeln!(writer, "{}", theme.format_header("Validation Summary", RULE_WIDTH))?;
        writeln!(writer)?;
        writeln!(
            writer,
            "  {} {}/{} (threshold {})",
            theme.key.apply_to("Checks passed:"),
            report.passed_count(),
            report.total(),
            report.threshold()
        )?;

        for status in [
            CheckStatus::Complete,
            CheckStatus::Limited,
            CheckStatus::Failed,
            CheckStatus::Blocked,
        ] {
            let ids = report.ids_with_status(status);
            if ids.is_empty() {
                continue;
            }
            let kind = StatusKind::from(status);
            writeln!(
                writer,
                "  {} {}: {}",
                kind.styled_icon(theme),
                kind.summary_heading(),
                ids.join(", ")
            )?;
        }
        writeln!(writer)?;

        let verdict = Verdict::of(report);
        let verdict_text = format!(
            "{} ({}/{})",
            verdict.label(),
            report.passed_count(),
            report.total()
        );
        let styled_verdict = match verdict {
            Verdict::Passed => theme.success.apply_to(verdict_text),
            Verdict::PassedWithLimitations => theme.warning.apply_to(verdict_text),
            Verdict::Failed => theme.error.apply_to(verdict_text),
        };
        writeln!(writer, "  {} {}", theme.key.apply_to("Verdict:"), styled_verdict)?;

        if report.overall_passed() {
            writeln!(writer, "  {}", theme.success.apply_to("Validation successful."))
        } else {
            writeln!(writer, "  {}", theme.error.apply_to("Validation failed."))
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        report: &ChecklistReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", self.theme.format_header(report.name(), RULE_WIDTH))?;
        writeln!(writer)?;

        for entry in report.entries() {
            self.write_entry(entry, writer)?;
        }

        self.write_summary(report, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{Check, CheckResult, Checklist, ChecklistRunner, FailureKind};

    fn sample_report(threshold: usize) -> ChecklistReport {
        let checks = vec![
            Check::from_fn("1", "Web Form", || {
                Ok(CheckResult::pass("Responding").with_note("HTTP 200"))
            }),
            Check::from_fn("2", "Google Sheets", || Ok(CheckResult::pass("Implemented")))
                .with_caveat("Manual verification required"),
            Check::from_fn("3", "GitHub", || {
                Ok(CheckResult::fail(
                    FailureKind::KnownLimitation,
                    "Repository creation blocked",
                )
                .with_note("No API token available"))
            }),
        ];
        ChecklistRunner::run(&Checklist::new("Tracker", checks, threshold).unwrap())
    }

    fn render(report: &ChecklistReport) -> String {
        let mut output = Vec::new();
        HumanFormatter::new(false)
            .format(report, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn renders_checks_in_declaration_order() {
        let output = render(&sample_report(2));

        let web = output.find("[1] Web Form").unwrap();
        let sheets = output.find("[2] Google Sheets").unwrap();
        let github = output.find("[3] GitHub").unwrap();
        assert!(web < sheets && sheets < github);
    }

    #[test]
    fn renders_status_detail_and_notes() {
        let output = render(&sample_report(2));

        assert!(output.contains("  ✓ PASS  Responding\n"));
        assert!(output.contains("     HTTP 200\n"));
        assert!(output.contains("  ⚠ PASS  Implemented\n"));
        assert!(output.contains("     Note: Manual verification required\n"));
        assert!(output.contains("  ✗ FAIL  Repository creation blocked [blocked]\n"));
        assert!(output.contains("     No API token available\n"));
    }

    #[test]
    fn renders_summary_groups_and_verdict() {
        let output = render(&sample_report(2));

        assert!(output.contains("Checks passed: 2/3 (threshold 2)"));
        assert!(output.contains("✓ Complete: 1\n"));
        assert!(output.contains("⚠ Functional (limited): 2\n"));
        assert!(output.contains("✗ Blocked (accepted): 3\n"));
        assert!(!output.contains("Failed:"));
        assert!(output.contains("Verdict: PASSED WITH LIMITATIONS (2/3)"));
        assert!(output.contains("Validation successful."));
    }

    #[test]
    fn renders_failure_when_threshold_missed() {
        let output = render(&sample_report(3));

        assert!(output.contains("Verdict: FAILED (2/3)"));
        assert!(output.contains("Validation failed."));
        assert!(!output.contains("Validation successful."));
    }

    #[test]
    fn header_names_checklist() {
        let output = render(&sample_report(1));
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[1], "  Tracker");
    }

    #[test]
    fn empty_groups_are_omitted() {
        let checks = vec![Check::from_fn("1", "Only", || Ok(CheckResult::pass("ok")))];
        let report = ChecklistRunner::run(&Checklist::new("t", checks, 1).unwrap());
        let output = render(&report);

        assert!(output.contains("✓ Complete: 1"));
        assert!(!output.contains("Failed:"));
        assert!(output.contains("Verdict: PASSED (1/1)"));
    }
}
