//! Turns a checklist configuration into runnable checks.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::checklist::{Check, Checklist};
use crate::config::schema::{ChecklistConfig, ProbeConfig};
use crate::error::Result;
use crate::probes::{
    FileExistsProbe, FixedProbe, HealthExpectation, HttpHealthProbe, RowCountProbe,
    TextContainsProbe,
};

/// Name used when the checklist file doesn't set one.
pub const DEFAULT_CHECKLIST_NAME: &str = "Integration Checklist";

/// Build a checklist from configuration.
///
/// Relative probe paths resolve against `base_dir`. `threshold_override`
/// replaces the configured threshold.
///
/// # Errors
///
/// Returns `InvalidChecklist` if the resulting checklist is malformed.
pub fn build_checklist(
    config: &ChecklistConfig,
    base_dir: &Path,
    threshold_override: Option<usize>,
) -> Result<Checklist> {
    let timeout = Duration::from_secs(config.timeout_secs);

    let checks = config
        .check_ids()
        .into_iter()
        .zip(&config.checks)
        .map(|(id, check_config)| {
            let mut check = build_check(
                id,
                &check_config.title,
                &check_config.probe,
                base_dir,
                timeout,
            );
            if let Some(caveat) = &check_config.caveat {
                check = check.with_caveat(caveat.clone());
            }
            if let Some(detail) = &check_config.on_pass {
                check = check.with_pass_detail(detail.clone());
            }
            if !check_config.notes.is_empty() {
                check = check.with_notes(check_config.notes.clone());
            }
            check
        })
        .collect::<Vec<_>>();

    let threshold = threshold_override.unwrap_or_else(|| config.effective_threshold());
    let name = config
        .name
        .clone()
        .unwrap_or_else(|| DEFAULT_CHECKLIST_NAME.to_string());

    Checklist::new(name, checks, threshold)
}

fn build_check(
    id: String,
    title: &str,
    probe: &ProbeConfig,
    base_dir: &Path,
    timeout: Duration,
) -> Check {
    match probe {
        ProbeConfig::HttpHealth {
            url,
            expect,
            json_field,
            json_value,
        } => {
            let expectation = match (json_field, json_value) {
                (Some(field), Some(value)) => HealthExpectation::JsonField {
                    field: field.clone(),
                    value: value.clone(),
                },
                _ => expect
                    .clone()
                    .map(HealthExpectation::BodyContains)
                    .unwrap_or_default(),
            };
            Check::new(
                id,
                title,
                HttpHealthProbe::new(url.clone())
                    .with_timeout(timeout)
                    .with_expectation(expectation),
            )
        }
        ProbeConfig::RowCount { database, table } => Check::new(
            id,
            title,
            RowCountProbe::new(resolve_path(base_dir, database), table.clone())
                .with_timeout(timeout),
        ),
        ProbeConfig::TextContains { file, tokens } => Check::new(
            id,
            title,
            TextContainsProbe::new(resolve_path(base_dir, file), tokens.clone()),
        ),
        ProbeConfig::FilesExist { paths } => Check::new(
            id,
            title,
            FileExistsProbe::all(paths.iter().map(|p| resolve_path(base_dir, p))),
        ),
        ProbeConfig::Fixed {
            passed,
            detail,
            notes,
        } => {
            let probe = if *passed {
                FixedProbe::confirmed(detail.clone(), notes.clone())
            } else {
                FixedProbe::limitation(detail.clone(), notes.clone())
            };
            Check::new(id, title, probe)
        }
    }
}

/// Resolve a probe path against the base directory.
pub fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{ChecklistRunner, FailureKind};
    use crate::config::loader::parse_config;
    use std::fs;
    use tempfile::TempDir;

    fn parse(yaml: &str) -> ChecklistConfig {
        parse_config(yaml, Path::new("checkpost.yml")).unwrap()
    }

    #[test]
    fn resolves_relative_paths_against_base_dir() {
        assert_eq!(
            resolve_path(Path::new("/srv/app"), Path::new("app.py")),
            PathBuf::from("/srv/app/app.py")
        );
        assert_eq!(
            resolve_path(Path::new("/srv/app"), Path::new("/etc/app.py")),
            PathBuf::from("/etc/app.py")
        );
    }

    #[test]
    fn builds_checks_in_order_with_defaults() {
        let config = parse(
            r#"
checks:
  - title: First
    probe: { type: fixed, passed: true, detail: ok }
  - id: second
    title: Second
    caveat: Manual verification required
    probe: { type: fixed, detail: blocked }
"#,
        );
        let checklist = build_checklist(&config, Path::new("/tmp"), None).unwrap();

        assert_eq!(checklist.name(), DEFAULT_CHECKLIST_NAME);
        assert_eq!(checklist.threshold(), 2);
        let ids: Vec<_> = checklist.checks().iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["1", "second"]);
        assert_eq!(
            checklist.checks()[1].caveat(),
            Some("Manual verification required")
        );
    }

    #[test]
    fn threshold_override_wins() {
        let config = parse(
            r#"
threshold: 2
checks:
  - title: A
    probe: { type: fixed, passed: true, detail: ok }
  - title: B
    probe: { type: fixed, detail: blocked }
"#,
        );
        let checklist = build_checklist(&config, Path::new("/tmp"), Some(1)).unwrap();
        assert_eq!(checklist.threshold(), 1);
    }

    #[test]
    fn threshold_override_above_count_is_rejected() {
        let config = parse(
            r#"
checks:
  - title: A
    probe: { type: fixed, passed: true, detail: ok }
"#,
        );
        assert!(build_checklist(&config, Path::new("/tmp"), Some(5)).is_err());
    }

    #[test]
    fn built_checks_use_base_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("app.py"), "def send_email_via_zapier(): ...").unwrap();
        fs::write(temp.path().join("VALIDATION_REPORT.md"), "# Report").unwrap();

        let config = parse(
            r#"
name: Tracker
checks:
  - title: Email
    on_pass: Email function implemented in app.py
    probe: { type: text_contains, file: app.py, tokens: [send_email_via_zapier] }
  - title: Report
    probe: { type: files_exist, paths: [VALIDATION_REPORT.md, validate.py] }
  - title: Database
    probe: { type: row_count, database: assets.db, table: assets }
"#,
        );
        let checklist = build_checklist(&config, temp.path(), Some(1)).unwrap();
        let report = ChecklistRunner::run(&checklist);

        let entries = report.entries();
        assert!(entries[0].result.passed);
        assert_eq!(
            entries[0].result.detail.as_deref(),
            Some("Email function implemented in app.py")
        );
        assert_eq!(entries[1].result.failure, Some(FailureKind::ResourceMissing));
        assert_eq!(entries[2].result.failure, Some(FailureKind::ResourceMissing));
        assert!(report.overall_passed());
    }

    #[test]
    fn check_notes_are_appended_only_on_pass() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("app.py"), "def send_email(): ...").unwrap();

        let config = parse(
            r#"
checks:
  - title: Email
    notes: ["Gmail: delivered", "Outlook: blocked by tenant policy"]
    probe: { type: text_contains, file: app.py, tokens: [send_email] }
  - title: Slack
    notes: ["Message delivered"]
    probe: { type: text_contains, file: app.py, tokens: [post_to_slack] }
"#,
        );
        let checklist = build_checklist(&config, temp.path(), Some(1)).unwrap();
        assert_eq!(checklist.checks()[0].pass_notes().len(), 2);

        let report = ChecklistRunner::run(&checklist);
        let email = &report.entries()[0].result;
        assert_eq!(email.notes[0], "found: send_email");
        assert_eq!(
            &email.notes[1..],
            ["Gmail: delivered", "Outlook: blocked by tenant policy"]
        );

        let slack = &report.entries()[1].result;
        assert!(!slack.passed);
        assert!(!slack.notes.iter().any(|n| n == "Message delivered"));
    }
}
