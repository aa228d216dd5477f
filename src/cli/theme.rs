//! Visual theme and styling.

use console::Style;

/// Templar's visual theme.
#[derive(Debug, Clone)]
pub struct TemplarTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for section headers (cyan bold).
    pub header: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for TemplarTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplarTheme {
    /// Create the default templar theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            key: Style::new().bold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_new() {
        // Styles have no PartialEq; spot-check construction doesn't panic.
        let _ = TemplarTheme::new();
        let _ = TemplarTheme::default();
    }
}
