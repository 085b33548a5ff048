//! Status vocabulary for report output.
//!
//! `StatusKind` provides one canonical set of icons, labels, and colors for
//! check outcomes.

use crate::checklist::CheckStatus;

use super::theme::CheckpostTheme;

/// Status kinds used in report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Pass,
    /// Check passed with a caveat.
    Limited,
    /// Check failed.
    Fail,
    /// Check failed on an accepted limitation.
    Blocked,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Limited => "⚠",
            Self::Fail | Self::Blocked => "✗",
        }
    }

    /// Outcome label shown after the icon.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Limited => "PASS",
            Self::Fail | Self::Blocked => "FAIL",
        }
    }

    /// Heading used for this status in the summary block.
    pub fn summary_heading(self) -> &'static str {
        match self {
            Self::Pass => "Complete",
            Self::Limited => "Functional (limited)",
            Self::Fail => "Failed",
            Self::Blocked => "Blocked (accepted)",
        }
    }

    /// Styled `icon label` string using the given theme.
    pub fn styled(self, theme: &CheckpostTheme) -> String {
        let text = format!("{} {}", self.icon(), self.label());
        match self {
            Self::Pass => theme.success.apply_to(text).to_string(),
            Self::Limited => theme.warning.apply_to(text).to_string(),
            Self::Fail | Self::Blocked => theme.error.apply_to(text).to_string(),
        }
    }

    /// Styled icon only.
    pub fn styled_icon(self, theme: &CheckpostTheme) -> String {
        match self {
            Self::Pass => theme.success.apply_to(self.icon()).to_string(),
            Self::Limited => theme.warning.apply_to(self.icon()).to_string(),
            Self::Fail | Self::Blocked => theme.error.apply_to(self.icon()).to_string(),
        }
    }
}

impl From<CheckStatus> for StatusKind {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Complete => Self::Pass,
            CheckStatus::Limited => Self::Limited,
            CheckStatus::Failed => Self::Fail,
            CheckStatus::Blocked => Self::Blocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Pass.icon(), "✓");
        assert_eq!(StatusKind::Limited.icon(), "⚠");
        assert_eq!(StatusKind::Fail.icon(), "✗");
    }

    #[test]
    fn limited_still_reads_as_pass() {
        assert_eq!(StatusKind::Limited.label(), "PASS");
        assert_eq!(StatusKind::Fail.label(), "FAIL");
    }

    #[test]
    fn styled_plain_is_icon_and_label() {
        let theme = CheckpostTheme::plain();
        assert_eq!(StatusKind::Fail.styled(&theme), "✗ FAIL");
        assert_eq!(StatusKind::Pass.styled_icon(&theme), "✓");
    }

    #[test]
    fn from_check_status() {
        assert_eq!(StatusKind::from(CheckStatus::Complete), StatusKind::Pass);
        assert_eq!(StatusKind::from(CheckStatus::Limited), StatusKind::Limited);
        assert_eq!(StatusKind::from(CheckStatus::Failed), StatusKind::Fail);
        assert_eq!(StatusKind::from(CheckStatus::Blocked), StatusKind::Blocked);
    }

    #[test]
    fn blocked_reads_as_fail_with_own_heading() {
        assert_eq!(StatusKind::Blocked.icon(), "✗");
        assert_eq!(StatusKind::Blocked.label(), "FAIL");
        assert_eq!(StatusKind::Blocked.summary_heading(), "Blocked (accepted)");
    }
}
