//! Library integration tests.

use std::fs;
use std::path::Path;

use checkpost::checklist::{Check, CheckResult, CheckStatus, Checklist, ChecklistRunner};
use checkpost::config::{build_checklist, load_config_file, resolve_base_dir, validate};
use checkpost::probes::{FileExistsProbe, RowCountProbe, TextContainsProbe};
use checkpost::CheckpostError;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = CheckpostError::InvalidChecklist {
        message: "checklist has no checks".into(),
    };
    assert!(err.to_string().contains("no checks"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> checkpost::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use checkpost::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["checkpost", "list"]);
    assert!(matches!(cli.command, Some(Commands::List)));
}

#[test]
fn threshold_six_with_seven_of_eight_passing() {
    let checks = (1..=8)
        .map(|i| {
            Check::from_fn(i.to_string(), format!("Check {}", i), move || {
                Ok(if i == 6 {
                    CheckResult::fail(
                        checkpost::checklist::FailureKind::KnownLimitation,
                        "blocked",
                    )
                } else {
                    CheckResult::pass("ok")
                })
            })
        })
        .collect();

    let report = ChecklistRunner::run(&Checklist::new("Tracker", checks, 6).unwrap());

    assert_eq!(report.total(), 8);
    assert_eq!(report.passed_count(), 7);
    assert!(report.overall_passed());
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.ids_with_status(CheckStatus::Blocked), vec!["6"]);
    assert!(report.ids_with_status(CheckStatus::Failed).is_empty());
}

#[test]
fn outcomes_for_absent_resources() {
    let temp = TempDir::new().unwrap();

    let rows = RowCountProbe::new(temp.path().join("nope.db"), "assets").check();
    assert!(!rows.exists);
    assert_eq!(rows.count, 0);
    assert!(!temp.path().join("nope.db").exists());

    let files = FileExistsProbe::new(temp.path().join("README.md")).check();
    assert_eq!(files.len(), 1);
    assert!(!files[0].1);
}

#[test]
fn token_matches_report_each_token() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("app.py");
    fs::write(&file, "def foo(): pass\n").unwrap();

    let matches = TextContainsProbe::new(&file, ["foo", "bar"]).check();
    assert!(matches.file_found);
    assert!(matches.contains("foo"));
    assert!(!matches.contains("bar"));
}

fn write_checklist(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("checkpost.yml");
    fs::write(
        &path,
        r#"
name: Docs
checks:
  - id: readme
    title: README
    probe: { type: files_exist, paths: [README.md] }
  - id: blocked
    title: GitHub
    probe: { type: fixed, detail: no token }
"#,
    )
    .unwrap();
    path
}

#[test]
fn config_file_to_report_is_idempotent() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("README.md"), "# Docs\n").unwrap();
    let path = write_checklist(temp.path());

    let config = load_config_file(&path).unwrap();
    validate(&config).unwrap();
    let checklist =
        build_checklist(&config, &resolve_base_dir(&config, &path), Some(1)).unwrap();

    let first = ChecklistRunner::run(&checklist);
    let second = ChecklistRunner::run(&checklist);

    let summarize = |r: &checkpost::checklist::ChecklistReport| {
        r.entries()
            .iter()
            .map(|e| (e.id.clone(), e.result.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(summarize(&first), summarize(&second));
    assert!(first.overall_passed());
    assert_eq!(first.ids_with_status(CheckStatus::Complete), vec!["readme"]);
}
