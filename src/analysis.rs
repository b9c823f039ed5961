// Content analysis: the request handler core.
//
// One analysis is two sequential provider calls (moderation, then insight
// generation) folded into a single response. Any failure in either call
// collapses into the flat `{ "error": ... }` shape; there are no partial
// results and no retries.

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::Config;
use crate::insights::openai::OpenAiInsightGenerator;
use crate::insights::traits::InsightGenerator;
use crate::moderation::openai::OpenAiModerator;
use crate::moderation::traits::Moderator;
use crate::openai::client::OpenAiClient;
use crate::output::truncate_chars;

/// Request body for `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub text: String,
}

/// Combined verdict for one piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub flagged: bool,
    pub categories: Map<String, Value>,
    pub insights: String,
}

/// What `analyze` returns: either the full verdict or a single error message.
///
/// Serialized untagged so the JSON is exactly
/// `{flagged, categories, insights}` or `{error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Success(Analysis),
    Failure { error: String },
}

impl AnalysisResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, AnalysisResponse::Failure { .. })
    }
}

/// Runs analyses against a moderation provider and an insight generator.
///
/// Cheap to clone; the providers are shared behind `Arc`.
#[derive(Clone)]
pub struct Analyzer {
    moderator: Arc<dyn Moderator>,
    generator: Arc<dyn InsightGenerator>,
}

impl Analyzer {
    pub fn new(moderator: Arc<dyn Moderator>, generator: Arc<dyn InsightGenerator>) -> Self {
        Self {
            moderator,
            generator,
        }
    }

    /// Build an analyzer wired to the OpenAI API. Both providers share one
    /// HTTP client and credential.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Arc::new(OpenAiClient::from_config(config)?);
        let moderator = OpenAiModerator::new(client.clone(), config.moderation_model.clone());
        let generator = OpenAiInsightGenerator::new(client, config.chat_model.clone());
        Ok(Self::new(Arc::new(moderator), Arc::new(generator)))
    }

    /// Analyze `text`, always producing a well-formed response.
    ///
    /// Only the outermost error message reaches the caller; the full cause
    /// chain is logged.
    pub async fn analyze(&self, text: &str) -> AnalysisResponse {
        match self.try_analyze(text).await {
            Ok(analysis) => {
                debug!(
                    flagged = analysis.flagged,
                    text_preview = %truncate_chars(text, 50),
                    "Analysis complete"
                );
                AnalysisResponse::Success(analysis)
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Analysis failed");
                AnalysisResponse::Failure {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Both calls run in order. A flagged verdict does not skip generation.
    pub async fn try_analyze(&self, text: &str) -> Result<Analysis> {
        let moderation = self.moderator.moderate(text).await?;
        let insights = self.generator.generate(text).await?;

        Ok(Analysis {
            flagged: moderation.flagged,
            categories: moderation.categories,
            insights,
        })
    }
}
