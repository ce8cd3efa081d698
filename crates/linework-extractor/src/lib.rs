//! Linework Extractor
//!
//! Converts free-form natural-language text (the reference domain is
//! Japanese descriptions of LINE channel settings) into a partial
//! channel configuration.
//!
//! # Architecture
//!
//! ```text
//! Text → per-field rules → PartialChannelConfig → merge → Validator
//! ```
//!
//! Extraction is a mapping from field name to one independent
//! recognition rule, not a single-pass parser: the first match per
//! field wins, a missed rule leaves its field absent, and one rule
//! never blocks another. Extraction is stateless and deterministic.
//!
//! # Example
//!
//! ```
//! use linework_extractor::extract;
//!
//! let partial = extract("アクセストークンは「abc123-XYZ」です");
//! assert_eq!(partial.access_token.as_deref(), Some("abc123-XYZ"));
//! assert!(partial.channel_id.is_none());
//! ```

#![warn(missing_docs)]

mod extractor;
mod rules;

pub use extractor::{extract, extract_schedule};
pub use rules::{FieldRule, RULES};
