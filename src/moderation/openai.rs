// OpenAI moderations endpoint implementation.
//
// API docs: https://platform.openai.com/docs/api-reference/moderations
//
// Only the first result is read. We always send a single input string, so
// the provider returns exactly one result on success.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::traits::{ModerationResult, Moderator};
use crate::openai::client::OpenAiClient;
use crate::output::truncate_chars;

/// Moderator backed by `POST /moderations`.
pub struct OpenAiModerator {
    client: Arc<OpenAiClient>,
    model: Option<String>,
}

impl OpenAiModerator {
    /// `model` of `None` lets the provider choose its default moderation model.
    pub fn new(client: Arc<OpenAiClient>, model: Option<String>) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl Moderator for OpenAiModerator {
    async fn moderate(&self, text: &str) -> Result<ModerationResult> {
        let request = ModerationRequest {
            input: text,
            model: self.model.as_deref(),
        };

        let response: ModerationResponse = self.client.post_json("/moderations", &request).await?;
        let result = first_result(response)?;

        debug!(
            flagged = result.flagged,
            categories = result.categories.len(),
            text_preview = %truncate_chars(text, 50),
            "Moderated text"
        );

        Ok(result)
    }
}

/// Pull the first entry out of a moderation response.
pub fn first_result(response: ModerationResponse) -> Result<ModerationResult> {
    let first = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("OpenAI moderation returned no results"))?;

    Ok(ModerationResult {
        flagged: first.flagged,
        categories: first.categories,
    })
}

// --- OpenAI moderation request/response types ---

#[derive(Serialize)]
struct ModerationRequest<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

/// Body of a successful `/moderations` call.
#[derive(Debug, Deserialize)]
pub struct ModerationResponse {
    pub results: Vec<ModerationEntry>,
}

/// One classified input. Fields we don't forward (`category_scores`,
/// `category_applied_input_types`) are ignored.
#[derive(Debug, Deserialize)]
pub struct ModerationEntry {
    pub flagged: bool,
    pub categories: Map<String, Value>,
}
