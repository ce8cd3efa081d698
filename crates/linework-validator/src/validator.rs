//! Configuration format rules

use linework_domain::ChannelConfig;
use once_cell::sync::Lazy;
use regex::Regex;

// Anchored full-match patterns; an empty value never matches.
static CHANNEL_ID_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("CHANNEL_ID_FORMAT: invalid regex"));

static CHANNEL_SECRET_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("CHANNEL_SECRET_FORMAT: invalid regex"));

static ACCESS_TOKEN_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("ACCESS_TOKEN_FORMAT: invalid regex"));

/// Validates channel configurations against the per-field format rules
///
/// Rules run in a fixed order (channelId, channelSecret, accessToken,
/// webhooks) and every applicable rule is evaluated - one failing field
/// never suppresses the others. The `richMenus` and `templates` fields
/// carry no rules and round-trip untouched.
pub struct Validator;

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Check every rule and collect the violations, in rule order.
    ///
    /// An empty result means the configuration is valid. The result is
    /// produced fresh on every call, never cached.
    pub fn validate(&self, config: &ChannelConfig) -> Vec<String> {
        let mut errors = Vec::new();

        if let Some(message) = self.check_channel_id(config) {
            errors.push(message.to_string());
        }
        if let Some(message) = self.check_channel_secret(config) {
            errors.push(message.to_string());
        }
        if let Some(message) = self.check_access_token(config) {
            errors.push(message.to_string());
        }
        if let Some(message) = self.check_webhooks(config) {
            errors.push(message.to_string());
        }

        errors
    }

    fn check_channel_id(&self, config: &ChannelConfig) -> Option<&'static str> {
        if CHANNEL_ID_FORMAT.is_match(&config.channel_id) {
            None
        } else {
            Some("チャネルIDは数字のみで入力してください。")
        }
    }

    fn check_channel_secret(&self, config: &ChannelConfig) -> Option<&'static str> {
        if CHANNEL_SECRET_FORMAT.is_match(&config.channel_secret) {
            None
        } else {
            Some("チャネルシークレットは英数字のみで入力してください。")
        }
    }

    fn check_access_token(&self, config: &ChannelConfig) -> Option<&'static str> {
        if ACCESS_TOKEN_FORMAT.is_match(&config.access_token) {
            None
        } else {
            Some("アクセストークンは英数字・ハイフン・アンダースコアのみで入力してください。")
        }
    }

    // Only checked once a URL has been provided; emptiness is the valid
    // "not yet provided" state.
    fn check_webhooks(&self, config: &ChannelConfig) -> Option<&'static str> {
        let webhooks = &config.webhooks;
        if webhooks.is_empty()
            || webhooks.starts_with("http://")
            || webhooks.starts_with("https://")
        {
            None
        } else {
            Some("Webhook URLはhttp://またはhttps://で始まる必要があります。")
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
