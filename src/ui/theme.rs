//! Visual theme and styling.

use console::Style;

/// Styles used by the shell host.
#[derive(Debug, Clone)]
pub struct ShellTheme {
    /// Style for the prompt label (magenta bold).
    pub prompt: Style,
    /// Style for the working directory in the prompt (dim).
    pub cwd: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for ShellTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            prompt: Style::new().magenta().bold(),
            cwd: Style::new().dim(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            prompt: Style::new(),
            cwd: Style::new(),
            error: Style::new(),
        }
    }

    /// Pick [`ShellTheme::new`] or [`ShellTheme::plain`].
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format the prompt, e.g. `ares /home/user > `.
    pub fn format_prompt(&self, label: &str, cwd: Option<&str>) -> String {
        match cwd {
            Some(cwd) => format!(
                "{} {} > ",
                self.prompt.apply_to(label),
                self.cwd.apply_to(cwd)
            ),
            None => format!("{} > ", self.prompt.apply_to(label)),
        }
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("Error: {}", msg)))
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
    fn plain_prompt_with_cwd() {
        let theme = ShellTheme::plain();
        assert_eq!(theme.format_prompt("ares", Some("/tmp")), "ares /tmp > ");
    }

    #[test]
    fn plain_prompt_without_cwd() {
        let theme = ShellTheme::plain();
        assert_eq!(theme.format_prompt("ares", None), "ares > ");
    }

    #[test]
    fn plain_error_is_prefixed() {
        let theme = ShellTheme::plain();
        assert_eq!(
            theme.format_error("unknown command: x"),
            "Error: unknown command: x"
        );
    }

    #[test]
    fn colored_error_contains_message() {
        let theme = ShellTheme::new();
        assert!(theme.format_error("boom").contains("boom"));
    }
}
