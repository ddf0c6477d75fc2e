// src/types/ids.rs
use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of one block in the hosted page's record map.
///
/// The v3 endpoints use dashed UUIDs throughout. `parse` validates that
/// shape and is used for configured identifiers (the menu page, the end
/// marker); deserialization stays lenient so an unexpected upstream key
/// never aborts a response parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BlockId(String);

impl BlockId {
    /// Parse a dashed-UUID block identifier.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        let uuid =
            Uuid::parse_str(input).map_err(|_| ValidationError::InvalidId(input.to_string()))?;
        Ok(Self(uuid.as_hyphenated().to_string()))
    }

    /// Wrap an identifier string exactly as it appeared on the wire.
    pub(crate) fn from_wire(value: String) -> Self {
        Self(value)
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for BlockId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BlockId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_wire(value))
    }
}
