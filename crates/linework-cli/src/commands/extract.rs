//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use linework_domain::Field;
use linework_extractor::extract;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, formatter: &Formatter) -> Result<()> {
    let partial = extract(&args.text);

    match formatter.format() {
        OutputFormat::Quiet => {
            // Recognized field names only
            for field in Field::ALL {
                if partial.get(field).is_some() {
                    println!("{}", field.as_str());
                }
            }
        }
        _ => {
            println!("{}", serde_json::to_string_pretty(&partial)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command_runs() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = ExtractArgs {
            text: "アクセストークンは「abc123-XYZ」です".to_string(),
        };
        assert!(execute_extract(args, &formatter).is_ok());
    }
}
