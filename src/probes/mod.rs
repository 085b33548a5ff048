//! Read-only probes for external collaborators.
//!
//! Each probe exposes a typed `check()` returning its raw outcome and
//! implements [`Probe`](crate::checklist::Probe) to turn that outcome into a
//! check result. Probes never let an error escape: unreachable hosts, missing
//! files, and database errors all become negative outcomes with a cause.
//!
//! # Modules
//!
//! - [`http`] - HTTP health endpoint
//! - [`database`] - SQLite table row count
//! - [`text`] - Token search in a text file
//! - [`file`] - Path existence
//! - [`fixed`] - Known limitations and manually confirmed outcomes

use std::time::Duration;

pub mod database;
pub mod file;
pub mod fixed;
pub mod http;
pub mod text;

pub use database::{RowCountOutcome, RowCountProbe};
pub use file::{file_exists, FileExistsProbe};
pub use fixed::FixedProbe;
pub use http::{HealthExpectation, HealthOutcome, HttpHealthProbe};
pub use text::{TextContainsProbe, TokenMatches};

/// Timeout applied to every blocking probe call unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
