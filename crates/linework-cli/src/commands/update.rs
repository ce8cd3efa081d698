//! Update command implementation.

use crate::cli::UpdateArgs;
use crate::error::Result;
use crate::output::Formatter;
use linework_artifact::{default_registry, OutputStream, UpdateRequest};
use linework_domain::DocumentId;
use std::fs;

/// Execute the update command.
///
/// A missing document file degrades to empty prior content; the
/// handler itself recovers from malformed JSON. The handler's returned
/// content is written back to the file.
pub fn execute_update(args: UpdateArgs, formatter: &Formatter) -> Result<()> {
    let prior = fs::read_to_string(&args.file).unwrap_or_default();
    let registry = default_registry();

    let mut sink = Vec::new();
    let content = {
        let mut stream = OutputStream::new(&mut sink);
        let request = UpdateRequest {
            id: DocumentId::new(),
            title: &args.title,
            content: &prior,
            description: Some(&args.description),
        };
        registry.on_update(args.kind.as_str(), &request, &mut stream)?
    };

    print!("{}", String::from_utf8_lossy(&sink));

    fs::write(&args.file, &content)?;
    println!(
        "{}",
        formatter.success(&format!("Document written to {}", args.file.display()))
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::KindArg;
    use crate::config::OutputFormat;
    use linework_domain::ChannelConfig;

    fn update_args(file: std::path::PathBuf, description: &str) -> UpdateArgs {
        UpdateArgs {
            file,
            description: description.to_string(),
            kind: KindArg::Line,
            title: "LINE設定".to_string(),
        }
    }

    #[test]
    fn test_update_merges_into_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        let mut prior = ChannelConfig::empty();
        prior.channel_id = "12345".to_string();
        prior.channel_secret = "abc123".to_string();
        fs::write(&path, prior.to_pretty_json().unwrap()).unwrap();

        let formatter = Formatter::new(OutputFormat::Text, false);
        execute_update(
            update_args(path.clone(), "アクセストークンは「tok-en_1」です"),
            &formatter,
        )
        .unwrap();

        let config = ChannelConfig::parse(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(config.channel_id, "12345");
        assert_eq!(config.access_token, "tok-en_1");
    }

    #[test]
    fn test_update_missing_file_starts_from_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let formatter = Formatter::new(OutputFormat::Text, false);
        execute_update(
            update_args(path.clone(), "チャネルIDは「12345」です"),
            &formatter,
        )
        .unwrap();

        // Rejected by validation (secret and token still empty) but the
        // merged field is persisted all the same.
        let config = ChannelConfig::parse(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(config.channel_id, "12345");
        assert_eq!(config.channel_secret, "");
    }
}
