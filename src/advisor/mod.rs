pub mod client;
pub mod commands;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use log::error;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::directions::{DirectionRecord, RoomType};

/// Minimum remedy count a structured reply must carry. Sparser replies are
/// treated as malformed and feed the fallback path.
const MIN_REMEDIES: usize = 3;

/// Compatibility verdict for one (direction, room) pair. Real and fallback
/// results share this shape; callers cannot tell them apart structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemedyResult {
    pub score: f64,
    pub assessment: String,
    pub remedies: Vec<String>,
}

/// Fixed result substituted for every transport or parse failure.
pub fn fallback_remedy() -> RemedyResult {
    RemedyResult {
        score: 50.0,
        assessment: "Analysis temporarily unavailable. Traditionally, Vastu placement depends \
                     on specific elemental balances."
            .to_string(),
        remedies: vec![
            "Consult a Vastu expert.".to_string(),
            "Ensure natural light flow.".to_string(),
            "Keep the area clean.".to_string(),
        ],
    }
}

/// The outbound reasoning-service seam. One call per invocation, no
/// retries; implementations return the raw structured-response text.
#[async_trait]
pub trait RemedySource: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub fn build_prompt(direction: &DirectionRecord, room: &RoomType) -> String {
    format!(
        "Analyze the Vastu compliance of placing a {} in the {} direction.\n\
         The direction significance is: {}\n\n\
         Provide:\n\
         1. A compatibility score out of 100.\n\
         2. A brief assessment of why this is or isn't ideal.\n\
         3. 3-4 specific remedies if the placement is bad, or enhancement tips if it's good.",
        room.label, direction.full_name, direction.significance
    )
}

/// Schema constraint sent with every request so the service replies with
/// `{score, assessment, remedies}` JSON.
pub(crate) fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "NUMBER" },
            "assessment": { "type": "STRING" },
            "remedies": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["score", "assessment", "remedies"]
    })
}

/// Parse and validate a structured reply. The producer-side 3-4 remedy
/// contract is not trusted; anything sparser counts as malformed.
pub fn parse_remedy_text(text: &str) -> Result<RemedyResult> {
    let result: RemedyResult = serde_json::from_str(text.trim())
        .context("reasoning service returned malformed JSON")?;

    if result.remedies.len() < MIN_REMEDIES {
        bail!(
            "reasoning service returned {} remedies, expected at least {MIN_REMEDIES}",
            result.remedies.len()
        );
    }

    Ok(result)
}

/// Issues one compatibility evaluation per call. Stateless between calls;
/// every failure mode is absorbed here and becomes the fixed fallback, so
/// `evaluate` is total from the caller's perspective.
#[derive(Clone)]
pub struct RemedyAdvisor {
    source: Arc<dyn RemedySource>,
}

impl RemedyAdvisor {
    pub fn new(source: Arc<dyn RemedySource>) -> Self {
        Self { source }
    }

    pub async fn evaluate(&self, direction: &DirectionRecord, room: &RoomType) -> RemedyResult {
        let prompt = build_prompt(direction, room);

        match self.try_evaluate(&prompt).await {
            Ok(result) => result,
            Err(err) => {
                error!(
                    "vastu analysis failed for {} / {}: {err:#}",
                    direction.id, room.id
                );
                fallback_remedy()
            }
        }
    }

    async fn try_evaluate(&self, prompt: &str) -> Result<RemedyResult> {
        let text = self.source.generate(prompt).await?;
        parse_remedy_text(&text)
    }
}
