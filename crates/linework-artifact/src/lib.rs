//! Linework Artifact
//!
//! Server-side document lifecycle handlers for the LINE artifacts: the
//! channel configuration document (`line`) and the message composer
//! (`line-messaging`). Handlers orchestrate extraction, merge, and
//! validation, and report each outcome as one newline-terminated chunk
//! on an output stream owned by the caller.
//!
//! # Architecture
//!
//! ```text
//! Description → Extractor → Merge → Validator → report chunk
//!                                             ↘ persisted content
//! ```
//!
//! Every create/update call is a complete, independent unit of work:
//! it receives the prior content, writes at most one chunk on create
//! and exactly one on update, and returns the content to persist.
//! Malformed prior content degrades to the default document - there
//! are no fatal errors in this subsystem beyond I/O on the stream.

#![warn(missing_docs)]

mod channel;
mod error;
mod handler;
mod messaging;
mod registry;
mod stream;

pub use channel::ChannelConfigHandler;
pub use error::ArtifactError;
pub use handler::{CreateRequest, DocumentHandler, UpdateRequest};
pub use messaging::MessagingHandler;
pub use registry::{default_registry, HandlerRegistry};
pub use stream::OutputStream;
