//! Linework Validator
//!
//! Checks a channel configuration against the per-field format rules
//! and produces an ordered list of user-facing messages. An empty list
//! means the configuration is valid.
//!
//! # Example
//!
//! ```
//! use linework_domain::ChannelConfig;
//! use linework_validator::Validator;
//!
//! let mut config = ChannelConfig::empty();
//! config.channel_id = "12345".to_string();
//! config.channel_secret = "abc123".to_string();
//! config.access_token = "tok-en_1".to_string();
//!
//! let errors = Validator::new().validate(&config);
//! assert!(errors.is_empty());
//! ```

#![warn(missing_docs)]

mod validator;

pub use validator::Validator;
