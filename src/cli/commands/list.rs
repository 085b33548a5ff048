//! List command implementation.
//!
//! The `checkpost list` command prints the declared checks without running
//! any probe.

use std::io::Write;

use serde::Serialize;

use crate::checklist::Checklist;
use crate::error::Result;
use crate::report::OutputFormat;
use crate::ui::CheckpostTheme;

use super::dispatcher::{Command, CommandOptions, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    options: CommandOptions,
}

#[derive(Serialize)]
struct ListedCheck<'a> {
    id: &'a str,
    title: &'a str,
    probe: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    caveat: Option<&'a str>,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(options: CommandOptions) -> Self {
        Self { options }
    }

    fn write_human(&self, checklist: &Checklist, out: &mut dyn Write) -> std::io::Result<()> {
        let theme = CheckpostTheme::for_color(self.options.use_color);

        writeln!(out, "  {}", theme.key.apply_to(checklist.name()))?;
        for check in checklist.checks() {
            writeln!(
                out,
                "    {} {} {}",
                theme.check_id.apply_to(format!("[{}]", check.id())),
                theme.highlight.apply_to(check.title()),
                theme.dim.apply_to(format!("({})", check.probe().describe()))
            )?;
            if let Some(caveat) = check.caveat() {
                writeln!(
                    out,
                    "        {}",
                    theme.warning.apply_to(format!("Note: {}", caveat))
                )?;
            }
        }
        writeln!(out)?;
        writeln!(
            out,
            "  {} {} of {} must pass",
            theme.key.apply_to("Threshold:"),
            checklist.threshold(),
            checklist.checks().len()
        )
    }

    fn write_json(&self, checklist: &Checklist, out: &mut dyn Write) -> std::io::Result<()> {
        let checks: Vec<_> = checklist
            .checks()
            .iter()
            .map(|check| ListedCheck {
                id: check.id(),
                title: check.title(),
                probe: check.probe().describe(),
                caveat: check.caveat(),
            })
            .collect();
        let output = serde_json::json!({
            "name": checklist.name(),
            "threshold": checklist.threshold(),
            "checks": checks,
        });
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let checklist = self.options.load_checklist()?;

        match self.options.format {
            OutputFormat::Human => self.write_human(&checklist, out)?,
            OutputFormat::Json => self.write_json(&checklist, out)?,
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("checkpost.yml");
        fs::write(
            &path,
            r#"
name: Tracker
threshold: 1
checks:
  - id: web
    title: Web Form
    probe: { type: http_health, url: "http://127.0.0.1:9/health" }
  - title: Sheets
    caveat: Needs credentials
    probe: { type: text_contains, file: app.py, tokens: [append_row] }
"#,
        )
        .unwrap();
        (temp, path)
    }

    fn run(path: PathBuf, format: OutputFormat) -> String {
        let options = CommandOptions {
            config_path: path,
            threshold: None,
            format,
            use_color: false,
        };
        let mut out = Vec::new();
        let result = ListCommand::new(options).execute(&mut out).unwrap();
        assert!(result.success);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_checks_without_running_them() {
        let (_temp, path) = setup();
        let text = run(path, OutputFormat::Human);

        assert!(text.contains("Tracker"));
        assert!(text.contains("[web] Web Form (GET http://127.0.0.1:9/health"));
        assert!(text.contains("[2] Sheets"));
        assert!(text.contains("Note: Needs credentials"));
        assert!(text.contains("Threshold: 1 of 2 must pass"));
        assert!(!text.contains("PASS"));
    }

    #[test]
    fn lists_checks_as_json() {
        let (_temp, path) = setup();
        let json: serde_json::Value = serde_json::from_str(&run(path, OutputFormat::Json)).unwrap();

        assert_eq!(json["name"], "Tracker");
        assert_eq!(json["threshold"], 1);
        assert_eq!(json["checks"][0]["id"], "web");
        assert_eq!(json["checks"][1]["caveat"], "Needs credentials");
        assert!(json["checks"][0].get("caveat").is_none());
    }
}
