//! Checklist configuration validation rules.
//!
//! This module validates a checklist before anything runs:
//! - At least one check, with unique ids
//! - Threshold between 1 and the number of checks
//! - A non-zero probe timeout
//! - Probe-specific fields (URL scheme, table identifier, non-empty lists)

use std::collections::HashSet;

use crate::config::schema::{ChecklistConfig, ProbeConfig};
use crate::error::{CheckpostError, Result};
use crate::probes::database::is_valid_identifier;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Check id if the error is check-specific
    pub check: Option<String>,
}

impl ValidationError {
    fn global(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            check: None,
        }
    }

    fn for_check(rule: &str, check: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            check: Some(check.to_string()),
        }
    }
}

/// Validate a checklist configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &ChecklistConfig) -> Vec<ValidationError> {
    validate_config_with_threshold(config, None)
}

/// Validate a checklist configuration with a command-line threshold.
///
/// The override replaces the file's `threshold` in the bounds check.
pub fn validate_config_with_threshold(
    config: &ChecklistConfig,
    threshold_override: Option<usize>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_checklist(config, threshold_override));
    errors.extend(validate_probes(config));

    errors
}

fn validate_checklist(
    config: &ChecklistConfig,
    threshold_override: Option<usize>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.checks.is_empty() {
        errors.push(ValidationError::global(
            "no-checks",
            "Checklist must define at least one check".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for id in config.check_ids() {
        if !seen.insert(id.clone()) {
            errors.push(ValidationError::for_check(
                "duplicate-id",
                &id,
                format!("Check id '{}' is used more than once", id),
            ));
        }
    }

    if let Some(threshold) = threshold_override.or(config.threshold) {
        if threshold == 0 {
            errors.push(ValidationError::global(
                "threshold-zero",
                "Threshold must be at least 1".to_string(),
            ));
        } else if threshold > config.checks.len() {
            errors.push(ValidationError::global(
                "threshold-too-high",
                format!(
                    "Threshold {} exceeds the number of checks ({})",
                    threshold,
                    config.checks.len()
                ),
            ));
        }
    }

    if config.timeout_secs == 0 {
        errors.push(ValidationError::global(
            "timeout-zero",
            "timeout_secs must be greater than 0".to_string(),
        ));
    }

    errors
}

fn validate_probes(config: &ChecklistConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, check) in config.check_ids().iter().zip(&config.checks) {
        match &check.probe {
            ProbeConfig::HttpHealth {
                url,
                expect,
                json_field,
                json_value,
            } => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    errors.push(ValidationError::for_check(
                        "invalid-url",
                        id,
                        format!("Check '{}' url must start with http:// or https://", id),
                    ));
                }
                if json_field.is_some() != json_value.is_some() {
                    errors.push(ValidationError::for_check(
                        "incomplete-json-expectation",
                        id,
                        format!(
                            "Check '{}' must set both json_field and json_value",
                            id
                        ),
                    ));
                }
                if expect.is_some() && json_field.is_some() {
                    errors.push(ValidationError::for_check(
                        "conflicting-expectation",
                        id,
                        format!(
                            "Check '{}' cannot combine expect with json_field",
                            id
                        ),
                    ));
                }
            }
            ProbeConfig::RowCount { table, .. } => {
                if !is_valid_identifier(table) {
                    errors.push(ValidationError::for_check(
                        "invalid-table",
                        id,
                        format!("Check '{}' table '{}' is not a valid identifier", id, table),
                    ));
                }
            }
            ProbeConfig::TextContains { tokens, .. } => {
                if tokens.is_empty() || tokens.iter().any(|t| t.is_empty()) {
                    errors.push(ValidationError::for_check(
                        "empty-tokens",
                        id,
                        format!("Check '{}' needs at least one non-empty token", id),
                    ));
                }
            }
            ProbeConfig::FilesExist { paths } => {
                if paths.is_empty() {
                    errors.push(ValidationError::for_check(
                        "empty-paths",
                        id,
                        format!("Check '{}' needs at least one path", id),
                    ));
                }
            }
            ProbeConfig::Fixed { .. } => {}
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &ChecklistConfig) -> Result<()> {
    validate_with_threshold(config, None)
}

/// Validate with a command-line threshold override and return Result.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate_with_threshold(
    config: &ChecklistConfig,
    threshold_override: Option<usize>,
) -> Result<()> {
    let errors = validate_config_with_threshold(config, threshold_override);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(CheckpostError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> ChecklistConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn rules(config: &ChecklistConfig) -> Vec<String> {
        validate_config(config).into_iter().map(|e| e.rule).collect()
    }

    #[test]
    fn valid_config_passes() {
        let config = parse(
            r#"
threshold: 1
checks:
  - title: Health
    probe: { type: http_health, url: "http://localhost:5001/health" }
  - title: Database
    probe: { type: row_count, database: a.db, table: assets }
"#,
        );
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn threshold_override_replaces_file_threshold() {
        let config = parse(
            r#"
threshold: 3
checks:
  - title: A
    probe: { type: fixed, detail: x }
  - title: B
    probe: { type: fixed, detail: y }
"#,
        );
        assert_eq!(rules(&config), vec!["threshold-too-high"]);
        assert!(validate_with_threshold(&config, Some(1)).is_ok());

        let rules_with = |t| {
            validate_config_with_threshold(&config, Some(t))
                .into_iter()
                .map(|e| e.rule)
                .collect::<Vec<_>>()
        };
        assert_eq!(rules_with(0), vec!["threshold-zero"]);
        assert_eq!(rules_with(5), vec!["threshold-too-high"]);
    }

    #[test]
    fn empty_checklist_is_invalid() {
        let config = parse("checks: []\n");
        assert_eq!(rules(&config), vec!["no-checks"]);
    }

    #[test]
    fn duplicate_ids_are_invalid() {
        let config = parse(
            r#"
checks:
  - id: "1"
    title: A
    probe: { type: fixed, detail: x }
  - title: B
    probe: { type: fixed, detail: y }
"#,
        );
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "duplicate-id");
        assert_eq!(errors[0].check.as_deref(), Some("1"));
    }

    #[test]
    fn threshold_bounds() {
        let zero = parse(
            r#"
threshold: 0
checks:
  - title: A
    probe: { type: fixed, detail: x }
"#,
        );
        assert_eq!(rules(&zero), vec!["threshold-zero"]);

        let high = parse(
            r#"
threshold: 2
checks:
  - title: A
    probe: { type: fixed, detail: x }
"#,
        );
        assert_eq!(rules(&high), vec!["threshold-too-high"]);
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let config = parse(
            r#"
timeout_secs: 0
checks:
  - title: A
    probe: { type: fixed, detail: x }
"#,
        );
        assert_eq!(rules(&config), vec!["timeout-zero"]);
    }

    #[test]
    fn check_field_rules() {
        let config = parse(
            r#"
checks:
  - title: Health
    probe: { type: http_health, url: "localhost:5001/health" }
  - title: Json
    probe: { type: http_health, url: "http://x/health", json_field: status }
  - title: Both
    probe: { type: http_health, url: "http://x/health", expect: ok, json_field: s, json_value: ok }
  - title: Database
    probe: { type: row_count, database: a.db, table: "assets; --" }
  - title: Tokens
    probe: { type: text_contains, file: app.py, tokens: [] }
  - title: Files
    probe: { type: files_exist, paths: [] }
"#,
        );
        assert_eq!(
            rules(&config),
            vec![
                "invalid-url",
                "incomplete-json-expectation",
                "conflicting-expectation",
                "invalid-table",
                "empty-tokens",
                "empty-paths",
            ]
        );
    }

    #[test]
    fn validate_joins_messages() {
        let config = parse(
            r#"
threshold: 0
timeout_secs: 0
checks:
  - title: A
    probe: { type: fixed, detail: x }
"#,
        );
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("Threshold must be at least 1"));
        assert!(err.contains("timeout_secs"));
        assert!(err.contains("; "));
    }
}
