// InsightGenerator trait: the provider-facing seam for the second call of an analysis.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for producing a natural-language quality/engagement assessment of
/// a piece of user-generated content.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    /// Generate insights for `text`. The output is not deterministic:
    /// two calls with the same text may return different wording.
    async fn generate(&self, text: &str) -> Result<String>;
}
