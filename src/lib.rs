//! Checkpost - Checklist validation against live collaborators.
//!
//! Checkpost runs an ordered checklist of read-only probes (an HTTP health
//! endpoint, a SQLite table, a source file, a set of paths) and reports
//! which checks passed, which passed with caveats, and whether enough of
//! them passed to call the integration good.
//!
//! # Modules
//!
//! - [`checklist`] - Checks, the runner, and the report it produces
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Checklist file loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`probes`] - Read-only adapters for external collaborators
//! - [`report`] - Human and JSON report formatters
//! - [`ui`] - Terminal theme and status icons
//!
//! # Example
//!
//! ```
//! use checkpost::checklist::{Check, Checklist, ChecklistRunner};
//! use checkpost::probes::FixedProbe;
//!
//! let checks = vec![
//!     Check::new("1", "Manual review", FixedProbe::confirmed("Reviewed", Vec::<String>::new())),
//!     Check::new("2", "GitHub", FixedProbe::limitation("No token", ["Create repo manually"])),
//! ];
//! let checklist = Checklist::new("Release", checks, 1).unwrap();
//! let report = ChecklistRunner::run(&checklist);
//!
//! assert_eq!(report.passed_count(), 1);
//! assert!(report.overall_passed());
//! ```
//!
//! For file-based checklists, see the integration tests.

pub mod checklist;
pub mod cli;
pub mod config;
pub mod error;
pub mod probes;
pub mod report;
pub mod ui;

pub use error::{CheckpostError, Result};
