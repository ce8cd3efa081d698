//! Linework Domain Layer
//!
//! This crate contains the data model for the LINE artifact pipeline:
//! the channel configuration document, the message composer document,
//! and the setup wizard state. It defines the value objects and merge
//! semantics that the extractor, validator, and document handlers
//! operate on.
//!
//! ## Key Concepts
//!
//! - **ChannelConfig**: the persisted configuration; empty string means
//!   "not yet provided", never "invalid"
//! - **PartialChannelConfig**: the subset of fields recognized from one
//!   text input; absent fields are never merged
//! - **MessageDocument**: the composer's message history and settings
//! - **SetupGuide**: wizard position over the fixed setup step list
//!
//! ## Architecture
//!
//! Pure data and transformations only. Parsing of persisted content is
//! lenient by convention: malformed content degrades to the default
//! document, never to a fatal error.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod document;
pub mod message;
pub mod setup;

// Re-exports for convenience
pub use config::{ChannelConfig, ConfigError, Field, PartialChannelConfig};
pub use document::DocumentId;
pub use message::{
    Message, MessageDocument, MessageKind, MessageSchedule, MessageSettings, MessageStatus,
    ScheduleUnit,
};
pub use setup::{SetupGuide, SetupStep, SETUP_STEPS};
