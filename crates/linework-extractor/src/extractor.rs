//! Free-text extraction functions

use crate::rules::RULES;
use linework_domain::{MessageSchedule, PartialChannelConfig, ScheduleUnit};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Extract recognizable configuration fields from free text.
///
/// Each rule is applied independently; the first match per field wins
/// and a field whose rule does not match is left absent (never set to
/// the empty string). Identical input always yields an identical
/// result. No side effects.
pub fn extract(text: &str) -> PartialChannelConfig {
    let mut partial = PartialChannelConfig::new();

    for rule in RULES.iter() {
        if let Some(captures) = rule.regex.captures(text) {
            if let Some(value) = captures.get(1) {
                debug!("recognized {} in description", rule.field.as_str());
                partial.set(rule.field, value.as_str().to_string());
            }
        }
    }

    partial
}

static SCHEDULE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s*(分|時間|日)後").expect("SCHEDULE_PATTERN: invalid regex"));

/// Recognize a delivery delay phrase (N分後 / N時間後 / N日後).
///
/// Returns `None` when no delay phrase is present; the message is then
/// composed as a draft.
pub fn extract_schedule(text: &str) -> Option<MessageSchedule> {
    let captures = SCHEDULE_PATTERN.captures(text)?;
    let delay: u32 = captures.get(1)?.as_str().parse().ok()?;
    let unit = match captures.get(2)?.as_str() {
        "分" => ScheduleUnit::Minutes,
        "時間" => ScheduleUnit::Hours,
        _ => ScheduleUnit::Days,
    };

    Some(MessageSchedule { delay, unit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_access_token_quoted() {
        let partial = extract("アクセストークンは「abc123-XYZ」です");
        assert_eq!(partial.access_token.as_deref(), Some("abc123-XYZ"));
        assert!(partial.channel_id.is_none());
        assert!(partial.channel_secret.is_none());
        assert!(partial.webhooks.is_none());
    }

    #[test]
    fn test_extract_channel_id_digits_only() {
        let partial = extract("チャネルIDは12345です");
        assert_eq!(partial.channel_id.as_deref(), Some("12345"));
    }

    #[test]
    fn test_extract_channel_id_alternate_spelling() {
        let partial = extract("チャンネルIDを「98765」に変更");
        assert_eq!(partial.channel_id.as_deref(), Some("98765"));
    }

    #[test]
    fn test_extract_channel_secret() {
        let partial = extract("シークレットは「s3cret99」にしてください");
        assert_eq!(partial.channel_secret.as_deref(), Some("s3cret99"));
    }

    #[test]
    fn test_extract_webhook_stops_at_closing_quote() {
        let partial = extract("Webhook URLは「https://example.com/cb」です");
        assert_eq!(partial.webhooks.as_deref(), Some("https://example.com/cb"));
    }

    #[test]
    fn test_extract_webhook_stops_at_whitespace() {
        let partial = extract("Webhookは https://example.com/cb に設定");
        assert_eq!(partial.webhooks.as_deref(), Some("https://example.com/cb"));
    }

    #[test]
    fn test_extract_webhook_requires_http_scheme() {
        let partial = extract("Webhook URLは「ftp://example.com」です");
        assert!(partial.webhooks.is_none());
    }

    #[test]
    fn test_extract_multiple_fields_from_one_text() {
        let partial = extract(
            "チャネルIDは「12345」、シークレットは「abc123」、アクセストークンは「tok-en_1」です",
        );
        assert_eq!(partial.channel_id.as_deref(), Some("12345"));
        assert_eq!(partial.channel_secret.as_deref(), Some("abc123"));
        assert_eq!(partial.access_token.as_deref(), Some("tok-en_1"));
    }

    #[test]
    fn test_extract_english_cue_phrases() {
        let partial = extract("Set Channel ID 12345 and Access Token abc-123_x");
        assert_eq!(partial.channel_id.as_deref(), Some("12345"));
        assert_eq!(partial.access_token.as_deref(), Some("abc-123_x"));
    }

    #[test]
    fn test_extract_omits_unmentioned_fields() {
        let partial = extract("今日はいい天気ですね");
        assert!(partial.is_empty());
    }

    #[test]
    fn test_extract_first_match_per_field_wins() {
        let partial = extract("チャネルIDは111です。チャネルIDは222です。");
        assert_eq!(partial.channel_id.as_deref(), Some("111"));
    }

    #[test]
    fn test_extract_cue_without_value_is_a_miss() {
        // Cue present but nothing in the value class follows
        let partial = extract("アクセストークンは？");
        assert!(partial.access_token.is_none());
    }

    #[test]
    fn test_extract_is_deterministic() {
        let text = "チャネルIDは12345、Webhookはhttps://example.com です";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn test_extract_schedule_minutes() {
        let schedule = extract_schedule("30分後に送信してください").unwrap();
        assert_eq!(schedule.delay, 30);
        assert_eq!(schedule.unit, ScheduleUnit::Minutes);
    }

    #[test]
    fn test_extract_schedule_hours() {
        let schedule = extract_schedule("2時間後").unwrap();
        assert_eq!(schedule.delay, 2);
        assert_eq!(schedule.unit, ScheduleUnit::Hours);
    }

    #[test]
    fn test_extract_schedule_days() {
        let schedule = extract_schedule("3日後にリマインドを送る").unwrap();
        assert_eq!(schedule.delay, 3);
        assert_eq!(schedule.unit, ScheduleUnit::Days);
    }

    #[test]
    fn test_extract_schedule_none_without_delay_phrase() {
        assert!(extract_schedule("こんにちは").is_none());
        assert!(extract_schedule("後で送る").is_none());
    }
}
