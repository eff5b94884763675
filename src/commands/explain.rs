//! Free-text answers delegated to the language model

use crate::{
    llm::{self, LanguageModel},
    nba::types::Answer,
    Result,
};

use super::common::require_text;

/// Explain what a statistic measures.
pub async fn handle_explain_stat(llm: &dyn LanguageModel, stat_name: &str) -> Result<Answer> {
    let stat_name = require_text(stat_name, "stat_name")?;
    Ok(Answer::Text(llm::explain_stat(llm, stat_name).await?))
}

/// Answer an NBA history question.
pub async fn handle_historical_fact(llm: &dyn LanguageModel, question: &str) -> Result<Answer> {
    let question = require_text(question, "original_question")?;
    Ok(Answer::Text(llm::historical_fact(llm, question).await?))
}
