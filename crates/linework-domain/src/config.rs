//! Channel configuration - the document content for the `line` artifact

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing or serializing document content
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Content was not a valid JSON document
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A configuration field name
///
/// The field set is fixed; serialized documents use the camelCase names
/// returned by [`Field::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// LINE channel identifier (digits)
    ChannelId,

    /// Channel secret (alphanumeric)
    ChannelSecret,

    /// Channel access token (alphanumeric, hyphen, underscore)
    AccessToken,

    /// Webhook URL (http/https)
    Webhooks,

    /// Rich menu settings (free-form, not validated)
    RichMenus,

    /// Message template settings (free-form, not validated)
    Templates,
}

impl Field {
    /// All fields, in document order.
    pub const ALL: [Field; 6] = [
        Field::ChannelId,
        Field::ChannelSecret,
        Field::AccessToken,
        Field::Webhooks,
        Field::RichMenus,
        Field::Templates,
    ];

    /// Get the field name as used in serialized documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ChannelId => "channelId",
            Field::ChannelSecret => "channelSecret",
            Field::AccessToken => "accessToken",
            Field::Webhooks => "webhooks",
            Field::RichMenus => "richMenus",
            Field::Templates => "templates",
        }
    }

    /// Parse a field from its document name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "channelId" => Some(Field::ChannelId),
            "channelSecret" => Some(Field::ChannelSecret),
            "accessToken" => Some(Field::AccessToken),
            "webhooks" => Some(Field::Webhooks),
            "richMenus" => Some(Field::RichMenus),
            "templates" => Some(Field::Templates),
            _ => None,
        }
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid field: {}", s))
    }
}

/// LINE channel configuration
///
/// All values are strings; the empty string is the "not yet provided"
/// state and is a valid value at the type level. Completeness is a
/// property of validation, never of the type, and is recomputed on
/// every check.
///
/// # Examples
///
/// ```
/// use linework_domain::ChannelConfig;
///
/// let config = ChannelConfig::empty();
/// assert_eq!(config.channel_id, "");
///
/// let json = config.to_pretty_json().unwrap();
/// let parsed = ChannelConfig::parse(&json).unwrap();
/// assert_eq!(config, parsed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelConfig {
    /// LINE channel identifier
    pub channel_id: String,

    /// Channel secret
    pub channel_secret: String,

    /// Channel access token
    pub access_token: String,

    /// Webhook URL
    pub webhooks: String,

    /// Rich menu settings
    pub rich_menus: String,

    /// Message template settings
    pub templates: String,
}

impl ChannelConfig {
    /// The all-empty initial configuration
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse persisted document content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse persisted document content, degrading to the empty
    /// configuration when the content is missing or malformed
    pub fn parse_or_default(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_default()
    }

    /// Serialize to the persisted document format (pretty-printed JSON,
    /// 2-space indentation)
    pub fn to_pretty_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get a field value
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ChannelId => &self.channel_id,
            Field::ChannelSecret => &self.channel_secret,
            Field::AccessToken => &self.access_token,
            Field::Webhooks => &self.webhooks,
            Field::RichMenus => &self.rich_menus,
            Field::Templates => &self.templates,
        }
    }

    /// Set a field value
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::ChannelId => self.channel_id = value,
            Field::ChannelSecret => self.channel_secret = value,
            Field::AccessToken => self.access_token = value,
            Field::Webhooks => self.webhooks = value,
            Field::RichMenus => self.rich_menus = value,
            Field::Templates => self.templates = value,
        }
    }

    /// Fold a partial configuration into a copy of this one.
    ///
    /// Field-wise override: every present field of `partial` replaces
    /// the corresponding field, including present-but-empty values;
    /// absent fields are left untouched. Never additive, never deep.
    pub fn merge(&self, partial: &PartialChannelConfig) -> ChannelConfig {
        let mut merged = self.clone();
        for field in Field::ALL {
            if let Some(value) = partial.get(field) {
                merged.set(field, value.to_string());
            }
        }
        merged
    }
}

/// The subset of configuration fields recognized from one text input
///
/// `None` means the field was not recognized. A partial configuration is
/// never persisted; it only exists to be merged into a [`ChannelConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialChannelConfig {
    /// Recognized channel identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// Recognized channel secret
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_secret: Option<String>,

    /// Recognized access token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Recognized webhook URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhooks: Option<String>,

    /// Recognized rich menu settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rich_menus: Option<String>,

    /// Recognized template settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<String>,
}

impl PartialChannelConfig {
    /// Create an empty partial configuration (nothing recognized)
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field was recognized
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// Get a recognized field value
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::ChannelId => self.channel_id.as_deref(),
            Field::ChannelSecret => self.channel_secret.as_deref(),
            Field::AccessToken => self.access_token.as_deref(),
            Field::Webhooks => self.webhooks.as_deref(),
            Field::RichMenus => self.rich_menus.as_deref(),
            Field::Templates => self.templates.as_deref(),
        }
    }

    /// Record a recognized field value
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::ChannelId => &mut self.channel_id,
            Field::ChannelSecret => &mut self.channel_secret,
            Field::AccessToken => &mut self.access_token,
            Field::Webhooks => &mut self.webhooks,
            Field::RichMenus => &mut self.rich_menus,
            Field::Templates => &mut self.templates,
        };
        *slot = Some(value);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn config_strategy() -> impl Strategy<Value = ChannelConfig> {
        (
            any::<String>(),
            any::<String>(),
            any::<String>(),
            any::<String>(),
            any::<String>(),
            any::<String>(),
        )
            .prop_map(
                |(channel_id, channel_secret, access_token, webhooks, rich_menus, templates)| {
                    ChannelConfig {
                        channel_id,
                        channel_secret,
                        access_token,
                        webhooks,
                        rich_menus,
                        templates,
                    }
                },
            )
    }

    fn partial_strategy() -> impl Strategy<Value = PartialChannelConfig> {
        (
            any::<Option<String>>(),
            any::<Option<String>>(),
            any::<Option<String>>(),
            any::<Option<String>>(),
            any::<Option<String>>(),
            any::<Option<String>>(),
        )
            .prop_map(
                |(channel_id, channel_secret, access_token, webhooks, rich_menus, templates)| {
                    PartialChannelConfig {
                        channel_id,
                        channel_secret,
                        access_token,
                        webhooks,
                        rich_menus,
                        templates,
                    }
                },
            )
    }

    proptest! {
        /// Property: merge is a field-wise override - present fields win,
        /// absent fields come from the base
        #[test]
        fn test_merge_field_wise_override(
            base in config_strategy(),
            partial in partial_strategy(),
        ) {
            let merged = base.merge(&partial);
            for field in Field::ALL {
                match partial.get(field) {
                    Some(value) => prop_assert_eq!(merged.get(field), value),
                    None => prop_assert_eq!(merged.get(field), base.get(field)),
                }
            }
        }

        /// Property: serialize then parse reproduces the configuration
        #[test]
        fn test_json_round_trip(config in config_strategy()) {
            let json = config.to_pretty_json().unwrap();
            let parsed = ChannelConfig::parse(&json).unwrap();
            prop_assert_eq!(config, parsed);
        }
    }
}
