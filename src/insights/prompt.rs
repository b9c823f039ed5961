// Fixed prompt for the engagement assessment.
//
// The service is aimed at Portuguese-speaking content teams, so both turns
// are in Portuguese and the model answers in kind.

use serde::Serialize;

/// System turn: sets the analyst persona.
pub const SYSTEM_PROMPT: &str = "Você é um analista de conteúdo UGC.";

/// Prefix of the user turn; the content is appended verbatim after it.
pub const USER_PROMPT_PREFIX: &str = "Avalie esse conteúdo quanto à qualidade e engajamento: ";

/// One chat turn in OpenAI wire format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Build the two-turn conversation sent to the chat model for `text`.
pub fn build_messages(text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!("{USER_PROMPT_PREFIX}{text}")),
    ]
}
