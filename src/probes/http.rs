//! HTTP health probe.
//!
//! Performs a single bounded-timeout GET against a health endpoint and checks
//! the response for a status marker.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::checklist::{CheckResult, FailureKind, Probe};

use super::DEFAULT_TIMEOUT;

/// Marker expected in a healthy response body by default.
pub const DEFAULT_HEALTH_MARKER: &str = r#""status":"healthy""#;

/// What a healthy response must contain.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthExpectation {
    /// Body contains this substring.
    BodyContains(String),
    /// Body parses as JSON and the dotted field path equals the value.
    JsonField {
        field: String,
        value: serde_json::Value,
    },
}

impl Default for HealthExpectation {
    fn default() -> Self {
        Self::BodyContains(DEFAULT_HEALTH_MARKER.to_string())
    }
}

impl HealthExpectation {
    /// Whether a response body satisfies the expectation.
    pub fn is_met(&self, body: &str) -> bool {
        match self {
            Self::BodyContains(marker) => body.contains(marker.as_str()),
            Self::JsonField { field, value } => serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|doc| lookup_field(&doc, field).cloned())
                .is_some_and(|found| &found == value),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::BodyContains(marker) => format!("body contains {}", marker),
            Self::JsonField { field, value } => format!("{} == {}", field, value),
        }
    }
}

fn lookup_field<'a>(doc: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    path.split('.')
        .try_fold(doc, |current, segment| current.get(segment))
}

/// Raw outcome of a health request.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthOutcome {
    /// Whether an HTTP response was received at all.
    pub reachable: bool,
    /// HTTP status code, if a response was received.
    pub status: Option<u16>,
    /// Response body (empty when unreachable).
    pub body: String,
    /// Why the endpoint could not be reached.
    pub cause: Option<String>,
}

impl HealthOutcome {
    fn unreachable(cause: String) -> Self {
        Self {
            reachable: false,
            status: None,
            body: String::new(),
            cause: Some(cause),
        }
    }
}

/// Probes an HTTP health endpoint.
#[derive(Debug, Clone)]
pub struct HttpHealthProbe {
    url: String,
    timeout: Duration,
    expectation: HealthExpectation,
}

impl HttpHealthProbe {
    /// Create a probe with the default 10-second timeout and marker.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
            expectation: HealthExpectation::default(),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set what a healthy response must contain.
    pub fn with_expectation(mut self, expectation: HealthExpectation) -> Self {
        self.expectation = expectation;
        self
    }

    /// Configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issue the request. Never fails: errors become `reachable = false`.
    pub fn check(&self) -> HealthOutcome {
        let client = match Client::builder()
            .user_agent(concat!("checkpost/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .connect_timeout(self.timeout)
            .build()
        {
            Ok(client) => client,
            Err(e) => return HealthOutcome::unreachable(format!("HTTP client error: {}", e)),
        };

        let response = match client.get(&self.url).send() {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Health request to {} failed: {}", self.url, e);
                let cause = if e.is_timeout() {
                    format!("timed out after {:?}", self.timeout)
                } else {
                    e.to_string()
                };
                return HealthOutcome::unreachable(cause);
            }
        };

        let status = response.status().as_u16();
        match response.text() {
            Ok(body) => HealthOutcome {
                reachable: true,
                status: Some(status),
                body,
                cause: None,
            },
            Err(e) => HealthOutcome {
                reachable: true,
                status: Some(status),
                body: String::new(),
                cause: Some(format!("failed to read body: {}", e)),
            },
        }
    }
}

impl Probe for HttpHealthProbe {
    fn describe(&self) -> String {
        format!("GET {} ({})", self.url, self.expectation.describe())
    }

    fn evaluate(&self) -> anyhow::Result<CheckResult> {
        let outcome = self.check();

        if !outcome.reachable {
            let cause = outcome.cause.unwrap_or_default();
            return Ok(CheckResult::fail(
                FailureKind::ProbeUnreachable,
                format!("Connection error: {}", cause),
            )
            .with_note(format!("URL: {}", self.url)));
        }

        let status = outcome.status.unwrap_or_default();
        if !(200..300).contains(&status) {
            return Ok(CheckResult::fail(
                FailureKind::SignalNotFound,
                format!("Health check failed: HTTP {}", status),
            )
            .with_note(format!("URL: {}", self.url)));
        }

        if !self.expectation.is_met(&outcome.body) {
            return Ok(CheckResult::fail(
                FailureKind::SignalNotFound,
                format!(
                    "Health check failed: expected {}",
                    self.expectation.describe()
                ),
            )
            .with_note(format!("URL: {}", self.url)));
        }

        Ok(CheckResult::pass(format!("Responding at {}", self.url))
            .with_note(format!("HTTP {}", status)))
    }
}
