use std::env;
use std::fmt;
use std::time::Duration;

use anyhow::Result;

/// Default OpenAI-compatible API endpoint.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat model used for the quality/engagement assessment.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Per-request timeout for outbound provider calls.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Port the HTTP server listens on when neither --port nor PORT is given.
pub const DEFAULT_PORT: u16 = 8000;

/// Central configuration loaded from environment variables.
///
/// The credential comes from the environment (never hardcoded). The .env
/// file is loaded automatically at startup via dotenvy.
#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    /// Base URL for both the moderation and chat-completion endpoints.
    pub openai_base_url: String,
    pub chat_model: String,
    /// Moderation model override. When unset the provider picks its default.
    pub moderation_model: Option<String>,
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build the configuration from a variable lookup.
    ///
    /// Everything except the API key has a default. The key is checked
    /// separately by `require_openai` so `--help` and friends work without it.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_timeout_secs = parse_or_default(
            "ANALYZER_HTTP_TIMEOUT_SECS",
            var("ANALYZER_HTTP_TIMEOUT_SECS"),
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?;

        Ok(Self {
            openai_api_key: var("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: var("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            chat_model: var("OPENAI_CHAT_MODEL").unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            moderation_model: var("OPENAI_MODERATION_MODEL").filter(|m| !m.trim().is_empty()),
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }

    /// Check that the OpenAI API key is configured.
    /// Call this before building any provider client.
    pub fn require_openai(&self) -> Result<()> {
        if self.openai_api_key.trim().is_empty() {
            anyhow::bail!(
                "OPENAI_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}

/// Port for `serve`, from the PORT env var or `DEFAULT_PORT`.
///
/// Only the server reads this, so a bad PORT never blocks `analyze`.
pub fn server_port() -> Result<u16> {
    server_port_from(|name| env::var(name).ok())
}

pub fn server_port_from<F>(var: F) -> Result<u16>
where
    F: Fn(&str) -> Option<String>,
{
    parse_or_default("PORT", var("PORT"), DEFAULT_PORT)
}

// Hand-written so the API key never ends up in a log line.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .field("chat_model", &self.chat_model)
            .field("moderation_model", &self.moderation_model)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

/// Parse an optional env value, falling back to `default` when unset or blank.
fn parse_or_default<T>(name: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|e| anyhow::anyhow!("{name} must be a number, got {value:?}: {e}")),
    }
}
