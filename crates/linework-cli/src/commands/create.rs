//! Create command implementation.

use crate::cli::CreateArgs;
use crate::error::Result;
use crate::output::Formatter;
use linework_artifact::{default_registry, CreateRequest, OutputStream};
use linework_domain::DocumentId;
use std::fs;

/// Execute the create command.
pub fn execute_create(args: CreateArgs, formatter: &Formatter) -> Result<()> {
    let registry = default_registry();

    let mut sink = Vec::new();
    let content = {
        let mut stream = OutputStream::new(&mut sink);
        let request = CreateRequest {
            id: DocumentId::new(),
            title: &args.title,
        };
        registry.on_create(args.kind.as_str(), &request, &mut stream)?
    };

    print!("{}", String::from_utf8_lossy(&sink));

    if let Some(path) = &args.output {
        fs::write(path, &content)?;
        println!(
            "{}",
            formatter.success(&format!("Document written to {}", path.display()))
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::KindArg;
    use crate::config::OutputFormat;
    use linework_domain::ChannelConfig;

    #[test]
    fn test_create_writes_document_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        let args = CreateArgs {
            kind: KindArg::Line,
            title: "LINE設定".to_string(),
            output: Some(path.clone()),
        };
        let formatter = Formatter::new(OutputFormat::Text, false);

        execute_create(args, &formatter).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let config = ChannelConfig::parse(&contents).unwrap();
        assert_eq!(config, ChannelConfig::empty());
    }
}
