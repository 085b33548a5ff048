//! Checklist construction and execution.
//!
//! The runner executes checks one at a time in declaration order. Each check
//! is isolated: a probe that returns an error or panics becomes a single
//! failed entry and the run carries on with the next check.

use std::any::Any;
use std::cell::Cell;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::time::Instant;

use crate::error::{CheckpostError, Result};

use super::check::{Check, CheckResult, FailureKind};
use super::report::{CheckEntry, ChecklistReport};

/// A validated, ordered set of checks with a pass threshold.
#[derive(Debug)]
pub struct Checklist {
    name: String,
    checks: Vec<Check>,
    threshold: usize,
}

impl Checklist {
    /// Build a checklist.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChecklist` if there are no checks, if two checks share
    /// an id, or if the threshold exceeds the number of checks.
    pub fn new(name: impl Into<String>, checks: Vec<Check>, threshold: usize) -> Result<Self> {
        if checks.is_empty() {
            return Err(CheckpostError::InvalidChecklist {
                message: "checklist has no checks".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for check in &checks {
            if !seen.insert(check.id()) {
                return Err(CheckpostError::InvalidChecklist {
                    message: format!("duplicate check id '{}'", check.id()),
                });
            }
        }

        if threshold > checks.len() {
            return Err(CheckpostError::InvalidChecklist {
                message: format!(
                    "threshold {} exceeds the number of checks ({})",
                    threshold,
                    checks.len()
                ),
            });
        }

        Ok(Self {
            name: name.into(),
            checks,
            threshold,
        })
    }

    /// Checklist name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks in declaration order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Minimum number of passing checks.
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

/// Runs checklists.
pub struct ChecklistRunner;

impl ChecklistRunner {
    /// Run every check in order and assemble the report.
    pub fn run(checklist: &Checklist) -> ChecklistReport {
        tracing::info!(
            "Running checklist '{}' ({} checks, threshold {})",
            checklist.name(),
            checklist.checks().len(),
            checklist.threshold()
        );

        let entries = checklist
            .checks()
            .iter()
            .map(Self::run_check)
            .collect::<Vec<_>>();

        let report = ChecklistReport::new(checklist.name(), entries, checklist.threshold());
        tracing::info!(
            "Checklist '{}' finished: {}/{} passed",
            report.name(),
            report.passed_count(),
            report.total()
        );
        report
    }

    /// Run one check, converting errors and panics into failed results.
    pub fn run_check(check: &Check) -> CheckEntry {
        tracing::debug!("Check {} ({}): {}", check.id(), check.title(), check.probe().describe());

        let start = Instant::now();
        install_quiet_panic_hook();
        CHECK_RUNNING.with(|flag| flag.set(true));
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| check.probe().evaluate()));
        CHECK_RUNNING.with(|flag| flag.set(false));
        let elapsed = start.elapsed();

        let mut result = match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                tracing::warn!("Check {} probe error: {:#}", check.id(), e);
                CheckResult::fail(FailureKind::ProbeCrashed, format!("Probe error: {:#}", e))
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!("Check {} probe panicked: {}", check.id(), message);
                CheckResult::fail(
                    FailureKind::ProbeCrashed,
                    format!("Probe panicked: {}", message),
                )
            }
        };

        if result.passed {
            if let Some(detail) = check.pass_detail() {
                result.detail = Some(detail.to_string());
            }
            result.notes.extend(check.pass_notes().iter().cloned());
        }

        tracing::debug!(
            "Check {} {} in {:?}",
            check.id(),
            if result.passed { "passed" } else { "failed" },
            elapsed
        );

        CheckEntry {
            id: check.id().to_string(),
            title: check.title().to_string(),
            caveat: check.caveat().map(String::from),
            result,
            elapsed,
        }
    }
}

thread_local! {
    static CHECK_RUNNING: Cell<bool> = const { Cell::new(false) };
}

static QUIET_PANIC_HOOK: Once = Once::new();

/// Silence the default panic report while a check runs on this thread.
///
/// The panic is still reported through `tracing` by `run_check`. Panics on
/// other threads, or outside a check, go to the previous hook.
fn install_quiet_panic_hook() {
    QUIET_PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if check_running() {
                if let Some(location) = info.location() {
                    tracing::debug!("Check panicked at {}", location);
                }
            } else {
                previous(info);
            }
        }));
    });
}

fn check_running() -> bool {
    CHECK_RUNNING.with(Cell::get)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
