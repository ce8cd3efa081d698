//! Error types for document handlers

use thiserror::Error;

/// Errors that can occur while running a document handler
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Output stream write failure
    #[error("stream write error: {0}")]
    Io(#[from] std::io::Error),

    /// Document content serialization failure
    #[error("content error: {0}")]
    Content(#[from] linework_domain::ConfigError),

    /// No handler registered for the requested artifact kind
    #[error("unknown artifact kind: {0}")]
    UnknownKind(String),
}
