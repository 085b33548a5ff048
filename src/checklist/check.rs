//! Check and result types.
//!
//! A [`Check`] pairs an identifier and title with a [`Probe`]. Probes are the
//! only place that touches external systems; everything else in the crate
//! works on the immutable [`CheckResult`] they produce.

use std::fmt;

use serde::Serialize;

/// Classification of why a check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Network or connection failure talking to the collaborator.
    ProbeUnreachable,
    /// File, database, or table is absent.
    ResourceMissing,
    /// Resource is present but holds no data.
    ResourceEmpty,
    /// Expected token or marker was not found.
    SignalNotFound,
    /// The probe returned an error or panicked.
    ProbeCrashed,
    /// A known, accepted limitation declared in the checklist.
    KnownLimitation,
}

impl FailureKind {
    /// Short label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::ProbeUnreachable => "unreachable",
            Self::ResourceMissing => "missing",
            Self::ResourceEmpty => "empty",
            Self::SignalNotFound => "not found",
            Self::ProbeCrashed => "probe error",
            Self::KnownLimitation => "blocked",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of running a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Whether the check passed.
    pub passed: bool,

    /// One-line explanation of the outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Additional detail lines (sample rows, per-token hits, root causes).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,

    /// Why the check failed, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

impl CheckResult {
    /// Create a passing result.
    pub fn pass(detail: impl Into<String>) -> Self {
        Self {
            passed: true,
            detail: Some(detail.into()),
            notes: Vec::new(),
            failure: None,
        }
    }

    /// Create a failing result with a cause.
    pub fn fail(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            passed: false,
            detail: Some(detail.into()),
            notes: Vec::new(),
            failure: Some(kind),
        }
    }

    /// Add a note line.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add several note lines.
    pub fn with_notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notes.extend(notes.into_iter().map(Into::into));
        self
    }
}

/// Read-only adapter that queries one external collaborator.
///
/// Implementations should normalize every failure they can anticipate into a
/// failed [`CheckResult`]. Returning `Err` (or panicking) is still safe: the
/// runner converts it into a [`FailureKind::ProbeCrashed`] result.
pub trait Probe {
    /// Human-readable description of what the probe looks at.
    fn describe(&self) -> String;

    /// Query the collaborator and produce a result.
    fn evaluate(&self) -> anyhow::Result<CheckResult>;
}

/// Probe backed by a closure.
pub struct FnProbe<F> {
    description: String,
    f: F,
}

impl<F> FnProbe<F>
where
    F: Fn() -> anyhow::Result<CheckResult>,
{
    /// Create a closure-backed probe.
    pub fn new(description: impl Into<String>, f: F) -> Self {
        Self {
            description: description.into(),
            f,
        }
    }
}

impl<F> Probe for FnProbe<F>
where
    F: Fn() -> anyhow::Result<CheckResult>,
{
    fn describe(&self) -> String {
        self.description.clone()
    }

    fn evaluate(&self) -> anyhow::Result<CheckResult> {
        (self.f)()
    }
}

/// A single named validation step.
pub struct Check {
    id: String,
    title: String,
    caveat: Option<String>,
    pass_detail: Option<String>,
    pass_notes: Vec<String>,
    probe: Box<dyn Probe>,
}

impl Check {
    /// Create a check from any probe.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        probe: impl Probe + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            caveat: None,
            pass_detail: None,
            pass_notes: Vec::new(),
            probe: Box::new(probe),
        }
    }

    /// Create a check from a closure.
    pub fn from_fn<F>(id: impl Into<String>, title: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> anyhow::Result<CheckResult> + 'static,
    {
        let title = title.into();
        let probe = FnProbe::new(title.clone(), f);
        Self::new(id, title, probe)
    }

    /// Mark a passing outcome as limited, with an explanation.
    pub fn with_caveat(mut self, caveat: impl Into<String>) -> Self {
        self.caveat = Some(caveat.into());
        self
    }

    /// Replace the probe's detail line when the check passes.
    pub fn with_pass_detail(mut self, detail: impl Into<String>) -> Self {
        self.pass_detail = Some(detail.into());
        self
    }

    /// Append fixed lines to the probe's notes when the check passes.
    pub fn with_notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pass_notes.extend(notes.into_iter().map(Into::into));
        self
    }

    /// Check identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Check title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Caveat attached to a passing outcome.
    pub fn caveat(&self) -> Option<&str> {
        self.caveat.as_deref()
    }

    /// Detail line used in place of the probe's when the check passes.
    pub fn pass_detail(&self) -> Option<&str> {
        self.pass_detail.as_deref()
    }

    /// Lines appended to the notes when the check passes.
    pub fn pass_notes(&self) -> &[String] {
        &self.pass_notes
    }

    /// The probe backing this check.
    pub fn probe(&self) -> &dyn Probe {
        self.probe.as_ref()
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("caveat", &self.caveat)
            .field("probe", &self.probe.describe())
            .finish()
    }
}
