//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use linework_domain::ChannelConfig;
use linework_validator::Validator;
use serde_json::json;
use std::fs;

/// Execute the validate command.
///
/// Exits nonzero when the document fails validation. A missing or
/// malformed document file is validated as the empty configuration.
pub fn execute_validate(args: ValidateArgs, formatter: &Formatter) -> Result<()> {
    let contents = fs::read_to_string(&args.file).unwrap_or_default();
    let config = ChannelConfig::parse_or_default(&contents);
    let errors = Validator::new().validate(&config);

    match formatter.format() {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "errors": errors }))?
            );
        }
        OutputFormat::Text => {
            if errors.is_empty() {
                println!("{}", formatter.success("Configuration is valid"));
            } else {
                for message in &errors {
                    println!("{}", formatter.error(message));
                }
            }
        }
        OutputFormat::Quiet => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed(errors.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        let mut config = ChannelConfig::empty();
        config.channel_id = "12345".to_string();
        config.channel_secret = "abc123".to_string();
        config.access_token = "tok-1".to_string();
        fs::write(&path, config.to_pretty_json().unwrap()).unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_validate(ValidateArgs { file: path }, &formatter).is_ok());
    }

    #[test]
    fn test_validate_invalid_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, ChannelConfig::empty().to_pretty_json().unwrap()).unwrap();

        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let result = execute_validate(ValidateArgs { file: path }, &formatter);
        assert!(matches!(result, Err(CliError::ValidationFailed(3))));
    }
}
