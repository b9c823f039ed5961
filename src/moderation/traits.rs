// Moderator trait: the provider-facing seam for the first call of an analysis.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// The verdict for a single piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationResult {
    /// Whether the provider considers the text a policy violation.
    pub flagged: bool,
    /// Per-category breakdown exactly as the provider returned it
    /// (booleans for OpenAI, but any JSON value is passed through).
    pub categories: Map<String, Value>,
}

/// Trait for classifying text against a moderation policy. Implementations
/// are async because every real provider sits behind an HTTP API.
#[async_trait]
pub trait Moderator: Send + Sync {
    async fn moderate(&self, text: &str) -> Result<ModerationResult>;
}
