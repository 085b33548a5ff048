//! Checklist model and runner.
//!
//! # Modules
//!
//! - [`check`] - Checks, probes, and check results
//! - [`report`] - Ordered report with summary and verdict
//! - [`runner`] - Checklist validation and isolated, sequential execution
//!
//! # Example
//!
//! ```
//! use checkpost::checklist::{Check, CheckResult, Checklist, ChecklistRunner, FailureKind};
//!
//! let checks = vec![
//!     Check::from_fn("1", "Always up", || Ok(CheckResult::pass("ok"))),
//!     Check::from_fn("2", "Blocked", || {
//!         Ok(CheckResult::fail(FailureKind::KnownLimitation, "no token"))
//!     }),
//! ];
//! let checklist = Checklist::new("demo", checks, 1).unwrap();
//! let report = ChecklistRunner::run(&checklist);
//! assert_eq!(report.passed_count(), 1);
//! assert!(report.overall_passed());
//! ```

pub mod check;
pub mod report;
pub mod runner;

pub use check::{Check, CheckResult, FailureKind, FnProbe, Probe};
pub use report::{CheckEntry, CheckStatus, ChecklistReport};
pub use runner::{Checklist, ChecklistRunner};
