//! Channel configuration document handler

use crate::error::ArtifactError;
use crate::handler::{CreateRequest, DocumentHandler, UpdateRequest};
use crate::stream::OutputStream;
use linework_domain::ChannelConfig;
use linework_extractor::extract;
use linework_validator::Validator;
use tracing::{debug, info, warn};

// Fixed wire contract - the client matches on these prefixes verbatim.
const ERROR_PREFIX: &str = "エラー:";
const SUCCESS_PREFIX: &str = "設定を更新しました:";

/// Handler for the `line` artifact: channel configuration documents.
///
/// On update it runs the extraction pipeline over the supplied
/// description, merges the recognized fields into the prior
/// configuration, validates the result, and reports either an itemized
/// error list or the updated configuration - exactly one chunk either
/// way. A rejected update still persists the merged fields.
pub struct ChannelConfigHandler {
    validator: Validator,
}

impl ChannelConfigHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            validator: Validator::new(),
        }
    }

    fn parse_content(&self, content: &str) -> ChannelConfig {
        match ChannelConfig::parse(content) {
            Ok(config) => config,
            Err(e) => {
                debug!("unparseable prior content, starting from empty: {}", e);
                ChannelConfig::empty()
            }
        }
    }
}

impl DocumentHandler for ChannelConfigHandler {
    fn kind(&self) -> &'static str {
        "line"
    }

    fn on_create(
        &self,
        request: &CreateRequest<'_>,
        stream: &mut OutputStream<'_>,
    ) -> Result<String, ArtifactError> {
        info!("creating line document {} ({})", request.id, request.title);

        // Emptiness is the accepted initial state; validation is not
        // invoked at creation time.
        let initial = ChannelConfig::empty().to_pretty_json()?;
        stream.write_chunk(&initial)?;
        Ok(initial)
    }

    fn on_update(
        &self,
        request: &UpdateRequest<'_>,
        stream: &mut OutputStream<'_>,
    ) -> Result<String, ArtifactError> {
        info!("updating line document {}", request.id);

        let mut config = self.parse_content(request.content);

        if let Some(description) = request.description {
            let partial = extract(description);
            config = config.merge(&partial);
        }

        let errors = self.validator.validate(&config);
        if !errors.is_empty() {
            warn!(
                "update of {} rejected with {} validation error(s)",
                request.id,
                errors.len()
            );
            stream.write_chunk(&format!("{}\n{}", ERROR_PREFIX, errors.join("\n")))?;
            // Merged fields are kept even when validation rejects them.
            return Ok(config.to_pretty_json()?);
        }

        let serialized = config.to_pretty_json()?;
        stream.write_chunk(&format!("{}\n{}", SUCCESS_PREFIX, serialized))?;
        Ok(serialized)
    }
}

impl Default for ChannelConfigHandler {
    fn default() -> Self {
        Self::new()
    }
}
