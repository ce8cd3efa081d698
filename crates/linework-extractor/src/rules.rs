//! Per-field recognition rules
//!
//! Each rule looks for a field-name cue phrase, an optional particle
//! (は/が/を/の), an optional opening quote (「『"'), then captures a
//! value in the field's character class. The rules are compiled once
//! and shared.

use linework_domain::Field;
use once_cell::sync::Lazy;
use regex::Regex;

/// One recognition rule: cue phrase plus value capture for a field
pub struct FieldRule {
    /// Configuration field this rule produces
    pub field: Field,

    /// Compiled pattern; capture group 1 is the field value
    pub regex: Regex,
}

// Capture group 1 is always the value. The webhook value runs from
// http(s):// to the next whitespace or closing quote (」』"').
const RULE_PATTERNS: &[(Field, &str)] = &[
    (
        Field::ChannelId,
        r#"(?:チャネルID|チャンネルID|(?i:Channel ID))(?:[はがをの])?\s*[「『"']?([0-9]+)"#,
    ),
    (
        Field::ChannelSecret,
        r#"(?:チャネルシークレット|シークレット|(?i:Channel Secret))(?:[はがをの])?\s*[「『"']?([A-Za-z0-9]+)"#,
    ),
    (
        Field::AccessToken,
        r#"(?:アクセストークン|(?i:Access Token))(?:[はがをの])?\s*[「『"']?([A-Za-z0-9_-]+)"#,
    ),
    (
        Field::Webhooks,
        r#"(?i:Webhook)(?:\s*URL)?(?:[はがをの])?\s*[「『"']?(https?://[^\s」』"']+)"#,
    ),
];

/// The extraction rule table, compiled once
pub static RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    RULE_PATTERNS
        .iter()
        .map(|(field, pattern)| FieldRule {
            field: *field,
            regex: Regex::new(pattern).expect("RULE_PATTERNS: invalid regex"),
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_compile() {
        assert_eq!(RULES.len(), 4);
    }

    #[test]
    fn test_each_rule_has_one_capture_group() {
        for rule in RULES.iter() {
            assert_eq!(rule.regex.captures_len(), 2, "{}", rule.field.as_str());
        }
    }
}
