// In-process fakes for the two provider traits.
//
// Each fake records the texts it was called with so tests can check call
// order and that flagging never short-circuits generation.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

use ugc_analyzer::analysis::Analyzer;
use ugc_analyzer::insights::traits::InsightGenerator;
use ugc_analyzer::moderation::traits::{ModerationResult, Moderator};

/// Shared log of provider calls, in the order they happened.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub struct FakeModerator {
    pub result: Option<ModerationResult>,
    pub calls: CallLog,
}

#[async_trait]
impl Moderator for FakeModerator {
    async fn moderate(&self, text: &str) -> Result<ModerationResult> {
        self.calls.lock().unwrap().push(format!("moderate:{text}"));
        match &self.result {
            Some(result) => Ok(result.clone()),
            None => anyhow::bail!("moderation service unavailable"),
        }
    }
}

pub struct FakeGenerator {
    pub insights: Option<String>,
    pub calls: CallLog,
}

#[async_trait]
impl InsightGenerator for FakeGenerator {
    async fn generate(&self, text: &str) -> Result<String> {
        self.calls.lock().unwrap().push(format!("generate:{text}"));
        match &self.insights {
            Some(insights) => Ok(insights.clone()),
            None => anyhow::bail!("generation service unavailable"),
        }
    }
}

pub fn categories(json: &str) -> Map<String, Value> {
    serde_json::from_str(json).unwrap()
}

/// Build an analyzer over fakes. `None` makes that provider fail.
pub fn analyzer(
    moderation: Option<ModerationResult>,
    insights: Option<&str>,
) -> (Analyzer, CallLog) {
    let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let moderator = FakeModerator {
        result: moderation,
        calls: calls.clone(),
    };
    let generator = FakeGenerator {
        insights: insights.map(str::to_string),
        calls: calls.clone(),
    };
    (
        Analyzer::new(Arc::new(moderator), Arc::new(generator)),
        calls,
    )
}

pub fn clean(categories_json: &str) -> ModerationResult {
    ModerationResult {
        flagged: false,
        categories: categories(categories_json),
    }
}

pub fn flagged(categories_json: &str) -> ModerationResult {
    ModerationResult {
        flagged: true,
        categories: categories(categories_json),
    }
}
