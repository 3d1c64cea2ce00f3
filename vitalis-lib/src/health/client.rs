//! Minimal REST client shared by the hosting platform strategies.

use crate::Result;
use crate::http::build_client;
use core::time::Duration;
use reqwest::header::{ACCEPT, HeaderName};
use serde::de::DeserializeOwned;

/// A hosting platform API rooted at a base URL.
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
    accept: Option<&'static str>,
}

impl Client {
    /// Create a client that attaches `auth` to every request, when given.
    pub fn new(base_url: impl Into<String>, auth: Option<(HeaderName, String)>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout, auth)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            accept: None,
        })
    }

    /// Send the given media type in the `Accept` header of every request.
    #[must_use]
    pub const fn with_accept(mut self, accept: &'static str) -> Self {
        self.accept = Some(accept);
        self
    }

    /// GET `path` and decode the body, failing on any non-success status.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.get(path, &[]).send().await?;
        Ok(resp.error_for_status()?.json().await?)
    }

    /// GET `path` and decode the body, or return `None` if the server answers with a non-success status.
    pub async fn get_json_if_ok<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let resp = self.get(path, &[]).send().await?;
        if !resp.status().is_success() {
            log::debug!(target: super::LOG_TARGET, "{} answered {}", resp.url(), resp.status());
            return Ok(None);
        }

        Ok(Some(resp.json().await?))
    }

    /// Check whether GET `path` answers with `200 OK`.
    pub async fn exists(&self, path: &str, query: &[(&str, &str)]) -> Result<bool> {
        let resp = self.get(path, query).send().await?;
        Ok(resp.status() == reqwest::StatusCode::OK)
    }

    fn get(&self, path: &str, query: &[(&str, &str)]) -> reqwest::RequestBuilder {
        let mut builder = self.client.get(format!("{}{path}", self.base_url));
        if !query.is_empty() {
            builder = builder.query(query);
        }

        if let Some(accept) = self.accept {
            builder = builder.header(ACCEPT, accept);
        }

        builder
    }
}
