// OpenAI chat-completions implementation of InsightGenerator.
//
// API docs: https://platform.openai.com/docs/api-reference/chat/create

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::{build_messages, ChatMessage};
use super::traits::InsightGenerator;
use crate::openai::client::OpenAiClient;

/// Insight generator backed by `POST /chat/completions`.
pub struct OpenAiInsightGenerator {
    client: Arc<OpenAiClient>,
    model: String,
}

impl OpenAiInsightGenerator {
    pub fn new(client: Arc<OpenAiClient>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl InsightGenerator for OpenAiInsightGenerator {
    async fn generate(&self, text: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: build_messages(text),
        };

        let response: ChatCompletionResponse =
            self.client.post_json("/chat/completions", &request).await?;
        let insights = first_message_content(response)?;

        debug!(
            model = %self.model,
            insight_chars = insights.chars().count(),
            "Generated insights"
        );

        Ok(insights)
    }
}

/// Pull the text of the first choice out of a completion response.
pub fn first_message_content(response: ChatCompletionResponse) -> Result<String> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("OpenAI chat completion returned no choices"))?;

    choice
        .message
        .content
        .ok_or_else(|| anyhow::anyhow!("OpenAI chat completion returned no message content"))
}

// --- OpenAI chat-completions request/response types ---

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

/// Body of a successful `/chat/completions` call (non-streaming).
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
}

/// `content` is null when the model answered with a refusal or tool call.
#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}
