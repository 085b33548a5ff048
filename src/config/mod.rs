//! Checklist configuration loading, parsing, and validation.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//! - Conversion into runnable checks in [`builder`]
//!
//! # Example
//!
//! ```
//! use checkpost::config::{build_checklist, load_config_file, resolve_base_dir, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("checkpost.yml");
//! fs::write(
//!     &path,
//!     "checks:\n  - title: Blocked\n    probe: { type: fixed, detail: no token }\n",
//! )
//! .unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! validate(&config).unwrap();
//! let checklist = build_checklist(&config, &resolve_base_dir(&config, &path), None).unwrap();
//! assert_eq!(checklist.checks().len(), 1);
//! ```

pub mod builder;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::{build_checklist, resolve_path, DEFAULT_CHECKLIST_NAME};
pub use loader::{
    load_config_file, parse_config, resolve_base_dir, resolve_config_path, DEFAULT_CONFIG_FILE,
};
pub use schema::{CheckConfig, ChecklistConfig, ProbeConfig, DEFAULT_TIMEOUT_SECS};
pub use validator::{
    validate, validate_config, validate_config_with_threshold, validate_with_threshold,
    ValidationError,
};
