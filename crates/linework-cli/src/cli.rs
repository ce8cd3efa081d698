//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Linework CLI - Drive the LINE artifact document pipeline.
#[derive(Debug, Parser)]
#[command(name = "linework")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
    /// Quiet format (exit code / names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new artifact document
    Create(CreateArgs),

    /// Apply a free-text update to a document
    Update(UpdateArgs),

    /// Validate a document's configuration
    Validate(ValidateArgs),

    /// Show the configuration fields recognized in a text
    Extract(ExtractArgs),

    /// Show setup guide progress for a document
    Setup(SetupArgs),
}

/// Arguments for the create command.
#[derive(Debug, Parser)]
pub struct CreateArgs {
    /// Artifact kind
    #[arg(short, long, value_enum, default_value = "line")]
    pub kind: KindArg,

    /// Document title
    #[arg(short, long, default_value = "LINE設定")]
    pub title: String,

    /// Write the created document to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the update command.
#[derive(Debug, Parser)]
pub struct UpdateArgs {
    /// Document file to update
    pub file: PathBuf,

    /// Free-text description of the change
    pub description: String,

    /// Artifact kind
    #[arg(short, long, value_enum, default_value = "line")]
    pub kind: KindArg,

    /// Document title
    #[arg(short, long, default_value = "LINE設定")]
    pub title: String,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Document file to validate
    pub file: PathBuf,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Text to extract configuration fields from
    pub text: String,
}

/// Arguments for the setup command.
#[derive(Debug, Parser)]
pub struct SetupArgs {
    /// Document file to inspect
    pub file: PathBuf,
}

/// Artifact kind argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    /// Channel configuration document
    Line,
    /// Message composer document
    LineMessaging,
}

impl KindArg {
    /// Artifact kind string used by the handler registry.
    pub fn as_str(&self) -> &'static str {
        match self {
            KindArg::Line => "line",
            KindArg::LineMessaging => "line-messaging",
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_command() {
        let cli = Cli::parse_from(["linework", "create", "--kind", "line"]);
        match cli.command {
            Command::Create(args) => assert_eq!(args.kind.as_str(), "line"),
            _ => panic!("Expected Create command"),
        }
    }

    #[test]
    fn test_update_command() {
        let cli = Cli::parse_from([
            "linework",
            "update",
            "doc.json",
            "チャネルIDは12345です",
            "--kind",
            "line",
        ]);
        match cli.command {
            Command::Update(args) => {
                assert_eq!(args.file.to_str(), Some("doc.json"));
                assert_eq!(args.description, "チャネルIDは12345です");
            }
            _ => panic!("Expected Update command"),
        }
    }

    #[test]
    fn test_messaging_kind() {
        let cli = Cli::parse_from(["linework", "create", "--kind", "line-messaging"]);
        match cli.command {
            Command::Create(args) => assert_eq!(args.kind.as_str(), "line-messaging"),
            _ => panic!("Expected Create command"),
        }
    }

    #[test]
    fn test_extract_command() {
        let cli = Cli::parse_from(["linework", "extract", "some text"]);
        match cli.command {
            Command::Extract(args) => assert_eq!(args.text, "some text"),
            _ => panic!("Expected Extract command"),
        }
    }
}
