//! Async HTTP access to the CMS REST backend.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`CliError::Server`] carrying the backend's
//! `message` field when the body has one, so `submit` can hand the same text
//! to the draft bookkeeping that the browser would show.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use drafts::EntityKind;
use drafts::submit::backend_error_message;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CliError;

#[derive(Deserialize)]
struct SlugAvailability {
    available: bool,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Client for `base_url`, sending `token` as a bearer credential when set.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, CliError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token.trim()))?);
        }
        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /api/{collection}/check-slug?slug=...`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn check_slug(&self, kind: EntityKind, slug: &str) -> Result<bool, CliError> {
        let url = self.url(&format!("/api/{}/check-slug", kind.collection()));
        let response = self.http.get(url).query(&[("slug", slug)]).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(server_error(status.as_u16(), &body));
        }
        let body: SlugAvailability = response.json().await?;
        Ok(body.available)
    }

    /// `POST /api/{collection}` with the create payload.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Server`] with the backend's message for a rejected
    /// create, or the transport error.
    pub async fn create<P: Serialize>(&self, kind: EntityKind, payload: &P) -> Result<Value, CliError> {
        let url = self.url(&format!("/api/{}", kind.collection()));
        let response = self.http.post(url).json(payload).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(server_error(status.as_u16(), &body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// `GET /api/media`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn list_media(&self) -> Result<Value, CliError> {
        let response = self.http.get(self.url("/api/media")).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(server_error(status.as_u16(), &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

fn server_error(status: u16, body: &str) -> CliError {
    CliError::Server {
        status,
        message: backend_error_message(body),
    }
}
