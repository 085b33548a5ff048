//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::checklist::Checklist;
use crate::cli::args::{Cli, Commands};
use crate::config::{
    build_checklist, load_config_file, resolve_base_dir, resolve_config_path,
    validate_with_threshold,
};
use crate::error::Result;
use crate::report::OutputFormat;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination for the command's report
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct CommandOptions {
    /// Checklist file to load.
    pub config_path: PathBuf,
    /// Threshold override from the command line.
    pub threshold: Option<usize>,
    /// Output format.
    pub format: OutputFormat,
    /// Whether to emit ANSI colors.
    pub use_color: bool,
}

impl CommandOptions {
    /// Load, validate, and build the checklist these options point at.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` or `ConfigParseError` for an unreadable
    /// checklist file, and `ConfigValidationError` for a bad file or a
    /// threshold override that doesn't fit it.
    pub fn load_checklist(&self) -> Result<Checklist> {
        tracing::debug!("Loading checklist from {}", self.config_path.display());
        let config = load_config_file(&self.config_path)?;
        validate_with_threshold(&config, self.threshold)?;

        let base_dir = resolve_base_dir(&config, &self.config_path);
        tracing::debug!("Resolving probe paths against {}", base_dir.display());
        build_checklist(&config, &base_dir, self.threshold)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
    use_color: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher rooted at the given working directory.
    pub fn new(working_dir: PathBuf, use_color: bool) -> Self {
        Self {
            working_dir,
            use_color,
        }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Resolve command options from global CLI flags.
    pub fn options(&self, cli: &Cli) -> CommandOptions {
        CommandOptions {
            config_path: resolve_config_path(&self.working_dir, cli.config.as_deref()),
            threshold: cli.threshold,
            format: cli.format,
            use_color: self.use_color,
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        let options = self.options(cli);
        match &cli.command {
            Some(Commands::List) => super::list::ListCommand::new(options).execute(out),
            // Default to run when no subcommand is given
            Some(Commands::Run) | None => super::run::RunCommand::new(options).execute(out),
        }
    }
}
