//! Message composer document - the content for the `line-messaging` artifact

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Unit of a delivery delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleUnit {
    /// Minutes after composing
    Minutes,

    /// Hours after composing
    Hours,

    /// Days after composing
    Days,
}

impl ScheduleUnit {
    /// Get the unit name as used in serialized documents
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleUnit::Minutes => "minutes",
            ScheduleUnit::Hours => "hours",
            ScheduleUnit::Days => "days",
        }
    }
}

/// Relative delivery schedule for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSchedule {
    /// Delay count in `unit`s
    pub delay: u32,

    /// Unit of the delay
    pub unit: ScheduleUnit,
}

/// Kind of message content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Plain text message
    Text,

    /// Image message
    Image,

    /// Sticker message
    Sticker,
}

/// Delivery status of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Composed but not scheduled
    Draft,

    /// Waiting for its delivery schedule
    Scheduled,

    /// Already delivered
    Sent,
}

/// One message in the composer history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier (UUIDv7 string)
    pub id: String,

    /// Kind of content
    #[serde(rename = "type")]
    pub kind: MessageKind,

    /// Message body
    pub content: String,

    /// Delivery schedule; absent for drafts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<MessageSchedule>,

    /// Delivery status
    pub status: MessageStatus,

    /// Composition time (Unix seconds)
    pub timestamp: u64,
}

impl Message {
    /// Compose a text message.
    ///
    /// A message with a delivery schedule starts out `scheduled`,
    /// otherwise it is a `draft`.
    pub fn text(
        content: impl Into<String>,
        schedule: Option<MessageSchedule>,
        timestamp: u64,
    ) -> Self {
        let status = if schedule.is_some() {
            MessageStatus::Scheduled
        } else {
            MessageStatus::Draft
        };

        Self {
            id: uuid::Uuid::now_v7().to_string(),
            kind: MessageKind::Text,
            content: content.into(),
            schedule,
            status,
            timestamp,
        }
    }
}

/// Composer-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSettings {
    /// Schedule applied when the user enables scheduling without
    /// choosing a delay
    pub default_schedule: MessageSchedule,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            default_schedule: MessageSchedule {
                delay: 1,
                unit: ScheduleUnit::Days,
            },
        }
    }
}

/// The message composer document: history plus settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageDocument {
    /// Composed messages, oldest first
    pub messages: Vec<Message>,

    /// Composer settings
    pub settings: MessageSettings,
}

impl MessageDocument {
    /// The initial document: no messages, default settings
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse persisted document content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse persisted document content, degrading to the empty
    /// document when the content is missing or malformed
    pub fn parse_or_default(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_default()
    }

    /// Serialize to the persisted document format (pretty-printed JSON,
    /// 2-space indentation)
    pub fn to_pretty_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Append a message to the history
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }
}
