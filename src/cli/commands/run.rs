//! Run command implementation.
//!
//! The `checkpost run` command (also the default) executes the checklist and
//! prints the report.

use std::io::Write;

use crate::checklist::ChecklistRunner;
use crate::error::Result;
use crate::report::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};

use super::dispatcher::{Command, CommandOptions, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    options: CommandOptions,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(options: CommandOptions) -> Self {
        Self { options }
    }
}

impl Command for RunCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let checklist = self.options.load_checklist()?;
        let report = ChecklistRunner::run(&checklist);

        match self.options.format {
            OutputFormat::Human => {
                HumanFormatter::new(self.options.use_color).format(&report, out)?
            }
            OutputFormat::Json => JsonFormatter::new().format(&report, out)?,
        }
        out.flush()?;

        if report.overall_passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(report.exit_code()))
        }
    }
}
