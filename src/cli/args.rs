//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::report::OutputFormat;

/// Checkpost - Checklist validation against live collaborators.
#[derive(Debug, Parser)]
#[command(name = "checkpost")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to checklist file (overrides default ./checkpost.yml)
    #[arg(short, long, global = true, env = "CHECKPOST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum number of passing checks (overrides the checklist file)
    #[arg(long, global = true, value_name = "N")]
    pub threshold: Option<usize>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the checklist (default if no command specified)
    Run,

    /// List declared checks without running them
    List,
}
