//! Visual theme and styling.

use console::Style;

/// Checkpost's visual theme.
#[derive(Debug, Clone)]
pub struct CheckpostTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for limited checks and caveats (orange).
    pub warning: Style,
    /// Style for failing checks (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for check titles (bold).
    pub check_title: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for check ids (dim).
    pub check_id: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for key labels in the summary (bold).
    pub key: Style,
}

impl Default for CheckpostTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckpostTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            check_title: Style::new().bold(),
            header: Style::new().bold().magenta(),
            check_id: Style::new().dim(),
            border: Style::new().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            check_title: Style::new(),
            header: Style::new(),
            check_id: Style::new(),
            border: Style::new(),
            key: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner between two rules.
    pub fn format_header(&self, title: &str, width: usize) -> String {
        let rule = "═".repeat(width);
        format!(
            "{}\n  {}\n{}",
            self.border.apply_to(&rule),
            self.header.apply_to(title),
            self.border.apply_to(&rule)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_error() {
        let theme = CheckpostTheme::plain();
        let msg = theme.format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_header() {
        let theme = CheckpostTheme::plain();
        let header = theme.format_header("Tracker", 10);
        let lines: Vec<_> = header.lines().collect();
        assert_eq!(lines, vec!["══════════", "  Tracker", "══════════"]);
    }

    #[test]
    fn for_color_false_is_plain() {
        let theme = CheckpostTheme::for_color(false);
        assert_eq!(theme.success.apply_to("ok").to_string(), "ok");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = CheckpostTheme::default();
        let new = CheckpostTheme::new();
        assert_eq!(default.format_error("x"), new.format_error("x"));
    }
}
