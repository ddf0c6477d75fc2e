// src/api/client.rs
//! Pure HTTP client wrapper for the hosted-page endpoints.
//!
//! A thin wrapper around reqwest's blocking client: it attaches the
//! session-shaped cookie, posts JSON, and checks the status. Parsing and
//! business logic happen elsewhere.

use crate::error::{body_preview, AppError};
use reqwest::blocking::Client;
use reqwest::header;
use serde::Serialize;

/// A blocking client scoped to one hosted-page host.
pub struct NotionSiteClient {
    client: Client,
    host: String,
}

impl NotionSiteClient {
    /// Creates a client for the given host (e.g. `https://x.notion.site`).
    pub fn new(host: impl Into<String>, cookie: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(cookie)?)
            .build()?;
        Ok(Self {
            client,
            host: host.into(),
        })
    }

    /// Creates the default headers for page requests.
    fn create_headers(cookie: &str) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            header::COOKIE,
            header::HeaderValue::from_str(cookie).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid cookie value: {}", e))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Posts a JSON body to an `api/v3` endpoint and returns the response
    /// body text.
    ///
    /// Any transport failure or non-success status is fatal for the run.
    pub fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<String, AppError> {
        let url = format!("{}/api/v3/{}", self.host, endpoint);
        log::debug!("POST {}", url);

        let response = self.client.post(url).json(body).send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(AppError::PageService {
                status: status.as_u16(),
                message: body_preview(&text),
            });
        }

        Ok(text)
    }
}
