//! Output formatting for the CLI.

use crate::config::OutputFormat;
use colored::*;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a setup step status line.
    pub fn step(&self, complete: bool, title: &str) -> String {
        if complete {
            self.colorize(&format!("● {}", title), "green")
        } else {
            self.colorize(&format!("○ {}", title), "yellow")
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("test"), "✗ test");
    }

    #[test]
    fn test_step_markers() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert_eq!(formatter.step(true, "done"), "● done");
        assert_eq!(formatter.step(false, "todo"), "○ todo");
    }
}
