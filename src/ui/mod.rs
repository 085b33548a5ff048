//! Terminal styling.
//!
//! This module provides:
//! - [`CheckpostTheme`] with colored and plain variants
//! - [`StatusKind`] icons and labels for check outcomes

pub mod icons;
pub mod theme;

pub use icons::StatusKind;
pub use theme::{should_use_colors, CheckpostTheme};
