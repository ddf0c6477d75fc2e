// src/types/credentials.rs
//! Newtypes for the snippet-service credentials.

use super::ValidationError;
use std::fmt;

/// Access token for the gist API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistToken(String);

impl GistToken {
    /// Create a new token with validation
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();

        if token.is_empty() {
            return Err(ValidationError::InvalidGistToken {
                reason: "token cannot be empty".to_string(),
            });
        }

        if token.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidGistToken {
                reason: "token must not contain whitespace".to_string(),
            });
        }

        Ok(Self(token))
    }

    /// Get the token as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GistToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact the token in display
        let visible = self.0.len().min(4);
        write!(f, "{}...", &self.0[..visible])
    }
}

/// Identifier of the target gist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistId(String);

impl GistId {
    /// Create a new gist ID with validation
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();

        if id.is_empty() {
            return Err(ValidationError::InvalidGistId {
                reason: "gist ID cannot be empty".to_string(),
            });
        }

        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidGistId {
                reason: "gist ID must be alphanumeric".to_string(),
            });
        }

        Ok(Self(id))
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
