//! Fixed-result probe.
//!
//! Represents outcomes that are known ahead of time: a permanent, accepted
//! limitation, or an external side effect confirmed by hand.

use crate::checklist::{CheckResult, FailureKind, Probe};

/// Always yields the same result.
#[derive(Debug, Clone)]
pub struct FixedProbe {
    result: CheckResult,
}

impl FixedProbe {
    /// A check that always fails with an explanation.
    pub fn limitation<I, S>(reason: impl Into<String>, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            result: CheckResult::fail(FailureKind::KnownLimitation, reason).with_notes(notes),
        }
    }

    /// A check recorded as passing after manual confirmation.
    pub fn confirmed<I, S>(detail: impl Into<String>, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            result: CheckResult::pass(detail).with_notes(notes),
        }
    }
}

impl Probe for FixedProbe {
    fn describe(&self) -> String {
        let kind = if self.result.passed {
            "confirmed"
        } else {
            "known limitation"
        };
        match &self.result.detail {
            Some(detail) => format!("{}: {}", kind, detail),
            None => kind.to_string(),
        }
    }

    fn evaluate(&self) -> anyhow::Result<CheckResult> {
        Ok(self.result.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limitation_always_fails() {
        let probe = FixedProbe::limitation(
            "Repository creation blocked",
            ["GitHub CLI not authenticated", "No API token available"],
        );

        for _ in 0..2 {
            let result = probe.evaluate().unwrap();
            assert!(!result.passed);
            assert_eq!(result.failure, Some(FailureKind::KnownLimitation));
            assert_eq!(result.notes.len(), 2);
        }
        assert!(probe.describe().starts_with("known limitation"));
    }

    #[test]
    fn confirmed_passes_with_notes() {
        let probe = FixedProbe::confirmed("Delivered", ["Message ID: 636"]);
        let result = probe.evaluate().unwrap();
        assert!(result.passed);
        assert_eq!(result.notes, vec!["Message ID: 636"]);
        assert_eq!(probe.describe(), "confirmed: Delivered");
    }
}
