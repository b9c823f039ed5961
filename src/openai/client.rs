// Authenticated JSON-over-HTTP client for the OpenAI REST API.
//
// Every endpoint this crate touches is a POST with a JSON body and a JSON
// response, so the whole surface is one generic `post_json` helper.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;

const USER_AGENT: &str = concat!("ugc-analyzer/", env!("CARGO_PKG_VERSION"));

/// Thin reqwest wrapper carrying the bearer credential and base URL.
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create a client for `base_url` (e.g. `https://api.openai.com/v1`).
    ///
    /// `timeout` bounds each request end to end; a request that exceeds it
    /// fails like any other transport error.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Build a client from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.require_openai()?;
        Self::new(
            &config.openai_base_url,
            &config.openai_api_key,
            config.http_timeout,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` as JSON to `{base_url}{path}` and deserialize the reply.
    ///
    /// Non-2xx statuses become errors that name the path and status only.
    /// The provider's error body is logged at debug level and not returned,
    /// because error messages travel back to API callers.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        debug!(path = path, "OpenAI POST request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .with_context(|| format!("OpenAI {path} request failed"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            debug!(path = path, status = %status, body = %body, "OpenAI error response");
            anyhow::bail!("OpenAI {path} returned {status}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse OpenAI {path} response"))
    }
}
