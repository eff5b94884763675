//! Language model boundary: turns a question into an untrusted JSON intent
//! and answers the free-text actions.

pub mod client;
pub mod extract;
pub mod prompt;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use crate::Result;

pub use client::OpenAiClient;
pub use extract::{could_not_parse, first_json_object, parse_model_output};

/// A text completion service.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Complete a single-message prompt at the given temperature.
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String>;
}

/// Ask the model to translate `question` into a JSON intent.
///
/// Model output that holds no parseable object comes back as the
/// `{"error": "could not parse"}` sentinel rather than an error; transport
/// failures are errors.
pub async fn parse_query(
    llm: &dyn LanguageModel,
    question: &str,
    today: NaiveDate,
) -> Result<Value> {
    let prompt = prompt::intent_prompt(question, today);
    let output = llm.complete(&prompt, prompt::INTENT_TEMPERATURE).await?;
    debug!("Model output: {}", output);
    Ok(parse_model_output(&output))
}

/// Plain-text explanation of a statistic.
pub async fn explain_stat(llm: &dyn LanguageModel, stat_name: &str) -> Result<String> {
    let text = llm
        .complete(&prompt::explain_prompt(stat_name), prompt::EXPLAIN_TEMPERATURE)
        .await?;
    Ok(text.trim().to_string())
}

/// Plain-text answer to an NBA history question.
pub async fn historical_fact(llm: &dyn LanguageModel, question: &str) -> Result<String> {
    let text = llm
        .complete(&prompt::historical_prompt(question), prompt::HISTORY_TEMPERATURE)
        .await?;
    Ok(text.trim().to_string())
}
