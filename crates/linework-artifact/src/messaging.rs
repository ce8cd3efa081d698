//! Message composer document handler

use crate::error::ArtifactError;
use crate::handler::{CreateRequest, DocumentHandler, UpdateRequest};
use crate::stream::OutputStream;
use linework_domain::{Message, MessageDocument};
use linework_extractor::extract_schedule;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

// Fixed wire contract.
const APPEND_PREFIX: &str = "メッセージを追加しました:";

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Handler for the `line-messaging` artifact: the message composer.
///
/// An update appends the description as a new text message - scheduled
/// when the text carries a delivery delay phrase (N分後 / N時間後 /
/// N日後), draft otherwise. An empty description leaves the document
/// unchanged and re-emits its serialization.
pub struct MessagingHandler;

impl MessagingHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self
    }

    fn parse_content(&self, content: &str) -> MessageDocument {
        match MessageDocument::parse(content) {
            Ok(document) => document,
            Err(e) => {
                debug!("unparseable prior content, starting from empty: {}", e);
                MessageDocument::empty()
            }
        }
    }
}

impl DocumentHandler for MessagingHandler {
    fn kind(&self) -> &'static str {
        "line-messaging"
    }

    fn on_create(
        &self,
        request: &CreateRequest<'_>,
        stream: &mut OutputStream<'_>,
    ) -> Result<String, ArtifactError> {
        info!(
            "creating line-messaging document {} ({})",
            request.id, request.title
        );

        let initial = MessageDocument::empty().to_pretty_json()?;
        stream.write_chunk(&initial)?;
        Ok(initial)
    }

    fn on_update(
        &self,
        request: &UpdateRequest<'_>,
        stream: &mut OutputStream<'_>,
    ) -> Result<String, ArtifactError> {
        info!("updating line-messaging document {}", request.id);

        let mut document = self.parse_content(request.content);

        let description = request.description.map(str::trim).unwrap_or("");
        if description.is_empty() {
            let serialized = document.to_pretty_json()?;
            stream.write_chunk(&serialized)?;
            return Ok(serialized);
        }

        let schedule = extract_schedule(description);
        document.push(Message::text(description, schedule, unix_timestamp()));

        let serialized = document.to_pretty_json()?;
        stream.write_chunk(&format!("{}\n{}", APPEND_PREFIX, serialized))?;
        Ok(serialized)
    }
}

impl Default for MessagingHandler {
    fn default() -> Self {
        Self::new()
    }
}
