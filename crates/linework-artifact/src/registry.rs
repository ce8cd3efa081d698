//! Handler registry mapping artifact kinds to document handlers

use crate::channel::ChannelConfigHandler;
use crate::error::ArtifactError;
use crate::handler::{CreateRequest, DocumentHandler, UpdateRequest};
use crate::messaging::MessagingHandler;
use crate::stream::OutputStream;

/// Registry of document handlers keyed by artifact kind
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn DocumentHandler>>,
}

impl HandlerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler.
    ///
    /// A handler already registered for the same kind is replaced.
    pub fn register(&mut self, handler: Box<dyn DocumentHandler>) {
        let kind = handler.kind();
        self.handlers.retain(|h| h.kind() != kind);
        self.handlers.push(handler);
    }

    /// Look up the handler for an artifact kind
    pub fn get(&self, kind: &str) -> Option<&dyn DocumentHandler> {
        self.handlers
            .iter()
            .find(|h| h.kind() == kind)
            .map(|h| h.as_ref())
    }

    /// Registered kinds, in registration order
    pub fn kinds(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.kind()).collect()
    }

    /// Number of registered handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Run document creation for a kind
    pub fn on_create(
        &self,
        kind: &str,
        request: &CreateRequest<'_>,
        stream: &mut OutputStream<'_>,
    ) -> Result<String, ArtifactError> {
        self.get(kind)
            .ok_or_else(|| ArtifactError::UnknownKind(kind.to_string()))?
            .on_create(request, stream)
    }

    /// Run one update cycle for a kind
    pub fn on_update(
        &self,
        kind: &str,
        request: &UpdateRequest<'_>,
        stream: &mut OutputStream<'_>,
    ) -> Result<String, ArtifactError> {
        self.get(kind)
            .ok_or_else(|| ArtifactError::UnknownKind(kind.to_string()))?
            .on_update(request, stream)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with the built-in LINE handlers registered
pub fn default_registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    registry.register(Box::new(ChannelConfigHandler::new()));
    registry.register(Box::new(MessagingHandler::new()));
    registry
}
