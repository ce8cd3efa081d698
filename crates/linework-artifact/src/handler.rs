//! Document handler trait and lifecycle requests

use crate::error::ArtifactError;
use crate::stream::OutputStream;
use linework_domain::DocumentId;

/// Collaborator inputs for document creation
#[derive(Debug)]
pub struct CreateRequest<'a> {
    /// Identifier assigned by the document framework
    pub id: DocumentId,

    /// Document title
    pub title: &'a str,
}

/// Collaborator inputs for one update cycle
#[derive(Debug)]
pub struct UpdateRequest<'a> {
    /// Identifier assigned by the document framework
    pub id: DocumentId,

    /// Document title
    pub title: &'a str,

    /// Previously persisted content; possibly empty or malformed
    pub content: &'a str,

    /// Free-text description of the requested change
    pub description: Option<&'a str>,
}

/// A server-side artifact document handler.
///
/// Each call is one complete unit of work: the handler receives the
/// prior content by value, writes its status chunks to `stream`, and
/// returns the content to persist. Handlers hold no per-document state
/// between calls.
pub trait DocumentHandler {
    /// Artifact kind this handler serves
    fn kind(&self) -> &'static str;

    /// Initialize a new document and return its initial content
    fn on_create(
        &self,
        request: &CreateRequest<'_>,
        stream: &mut OutputStream<'_>,
    ) -> Result<String, ArtifactError>;

    /// Apply one update cycle and return the content to persist
    fn on_update(
        &self,
        request: &UpdateRequest<'_>,
        stream: &mut OutputStream<'_>,
    ) -> Result<String, ArtifactError>;
}
