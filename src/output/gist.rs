// src/output/gist.rs
//! Overwrites the target gist with the condensed snippet.

use super::SnippetDocument;
use crate::constants::{GIST_API_BASE_URL, GIST_USER_AGENT};
use crate::error::{body_preview, AppError};
use crate::types::{GistId, GistToken};
use reqwest::blocking::Client;
use reqwest::header;
use serde::Serialize;
use std::collections::HashMap;

/// Body of a gist update: replaces the description and one file's
/// content in a single call.
#[derive(Debug, Serialize)]
struct GistUpdateRequest {
    description: String,
    files: HashMap<String, GistFile>,
}

#[derive(Debug, Serialize)]
struct GistFile {
    content: String,
}

/// Authenticated writer for one gist.
pub struct GistPublisher {
    client: Client,
    gist_id: GistId,
    file_name: String,
}

impl GistPublisher {
    /// Creates a publisher for the given gist and file name.
    pub fn new(
        token: &GistToken,
        gist_id: GistId,
        file_name: impl Into<String>,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(token)?)
            .build()?;
        Ok(Self {
            client,
            gist_id,
            file_name: file_name.into(),
        })
    }

    /// Creates the default headers for gist requests. The service
    /// rejects requests without a user agent.
    fn create_headers(token: &GistToken) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", token.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid gist token format: {}", e))
            })?,
        );

        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(GIST_USER_AGENT),
        );

        Ok(headers)
    }

    /// Replaces the gist's description and file content with the
    /// document. Any failure is fatal for the run.
    pub fn publish(&self, document: &SnippetDocument) -> Result<(), AppError> {
        let url = format!("{}/{}", GIST_API_BASE_URL, self.gist_id.as_str());
        log::debug!("PATCH {}", url);

        let body = GistUpdateRequest {
            description: document.title.clone(),
            files: HashMap::from([(
                self.file_name.clone(),
                GistFile {
                    content: document.content.clone(),
                },
            )]),
        };

        let response = self.client.patch(url).json(&body).send()?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(AppError::SnippetService {
                status: status.as_u16(),
                message: body_preview(&text),
            });
        }

        log::info!("Updated gist {} ({})", self.gist_id, self.file_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn update_request_body_shape() {
        let body = GistUpdateRequest {
            description: "오늘의 아이스크림 🍦".to_string(),
            files: HashMap::from([(
                "menu.md".to_string(),
                GistFile {
                    content: "말차 | 흑임자".to_string(),
                },
            )]),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "description": "오늘의 아이스크림 🍦",
                "files": { "menu.md": { "content": "말차 | 흑임자" } }
            })
        );
    }
}
