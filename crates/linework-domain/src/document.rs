//! Document identifiers assigned by the surrounding framework

use std::fmt;

/// Unique identifier for an artifact document based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability for document listings
/// - 128-bit uniqueness
/// - No coordination required for distributed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(u128);

impl DocumentId {
    /// Generate a new UUIDv7-based DocumentId
    ///
    /// # Examples
    ///
    /// ```
    /// use linework_domain::DocumentId;
    ///
    /// let id = DocumentId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a DocumentId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a DocumentId from a UUIDv7 string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}
