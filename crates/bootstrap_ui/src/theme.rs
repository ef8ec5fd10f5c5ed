//! The closed set of Bootstrap theme colors shared by buttons and alerts.

/// Semantic theme colors. Every colored component family resolves its CSS
/// class from one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ThemeColor {
    /// Red, destructive actions.
    Danger,
    /// Near-black.
    Dark,
    /// Teal, informational.
    Info,
    /// Near-white.
    Light,
    /// Brand blue.
    Primary,
    /// Muted gray.
    Secondary,
    /// Green, positive outcomes.
    Success,
    /// Yellow, cautionary.
    Warning,
}

impl ThemeColor {
    /// Every theme color, in declaration order.
    pub const ALL: [ThemeColor; 8] = [
        Self::Danger,
        Self::Dark,
        Self::Info,
        Self::Light,
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Warning,
    ];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Dark => "dark",
            Self::Info => "info",
            Self::Light => "light",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_and_lowercase() {
        let mut seen = std::collections::BTreeSet::new();
        for color in ThemeColor::ALL {
            let token = color.token();
            assert!(token.chars().all(|c| c.is_ascii_lowercase()));
            assert!(seen.insert(token), "duplicate token {token}");
        }
        assert_eq!(seen.len(), ThemeColor::ALL.len());
    }
}
