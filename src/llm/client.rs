//! OpenAI-compatible chat completions client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::LanguageModel;
use crate::{
    config::Config,
    core::{
        http::{bearer_headers, status_error, transport_error},
        with_retry, RetryPolicy,
    },
    error::{Boundary, ChatError},
    Result,
};

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Language model reached over the `/chat/completions` API.
pub struct OpenAiClient {
    http: Client,
    url: String,
    model: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .default_headers(bearer_headers(config.api_key.as_str())?)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            url: format!("{}/chat/completions", config.llm_base_url),
            model: config.model.clone(),
            timeout: config.timeout,
            retry: config.retry,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn complete_once(&self, prompt: &str, temperature: f32) -> Result<String> {
        let context = "requesting a completion";
        let body = json!({
            "model": self.model,
            "temperature": temperature,
            "messages": [{"role": "user", "content": prompt}],
        });

        let start = Instant::now();
        let resp = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(e, Boundary::LanguageModel, context, self.timeout))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(status, Boundary::LanguageModel, context));
        }

        let completion: ChatCompletion = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                transport_error(e, Boundary::LanguageModel, context, self.timeout)
            } else {
                ChatError::ExternalService {
                    boundary: Boundary::LanguageModel,
                    context: context.to_string(),
                    message: format!("unexpected payload: {}", e),
                    retryable: false,
                }
            }
        })?;
        debug!(
            "{} answered in {}ms",
            self.model,
            start.elapsed().as_millis()
        );

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ChatError::ExternalService {
                boundary: Boundary::LanguageModel,
                context: context.to_string(),
                message: "response had no message content".to_string(),
                retryable: false,
            })
    }
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        with_retry(&self.retry, "language model request", || {
            self.complete_once(prompt, temperature)
        })
        .await
    }
}
