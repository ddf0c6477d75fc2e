// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! The split mirrors the run's recovery rules: configuration and network
//! variants abort the run, while absence of data inside a fetched record
//! never surfaces here at all (it reads as empty text instead).

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Page service returned an error ({status}): {message}")]
    PageService { status: u16, message: String },

    #[error("Snippet service returned an error ({status}): {message}")]
    SnippetService { status: u16, message: String },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Truncates an error response body for display.
pub(crate) fn body_preview(body: &str) -> String {
    let limit = crate::constants::ERROR_BODY_PREVIEW_LENGTH;
    if body.chars().count() > limit {
        let cut: String = body.chars().take(limit).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}
