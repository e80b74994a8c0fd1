// src/advisor/openai.rs

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::advisor::{AdviceRequest, AdvisorError, NarrativeAdvisor};
use crate::config::AdvisorConfig;

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiAdvisor {
    api_key: String,
    endpoint: String,
    model: String,
    client: Client,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiAdvisor {
    pub fn new(api_key: String, cfg: &AdvisorConfig) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| AdvisorError::Request(e.to_string()))?;

        Ok(Self {
            api_key,
            endpoint: format!("{}/chat/completions", cfg.base_url.trim_end_matches('/')),
            model: cfg.model.clone(),
            client,
        })
    }
}

impl NarrativeAdvisor for OpenAiAdvisor {
    fn complete(&self, request: &AdviceRequest) -> Result<String, AdvisorError> {
        let payload = ChatPayload {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!(model = %self.model, max_tokens = request.max_tokens, "requesting completion");

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .map_err(|e| AdvisorError::Request(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| AdvisorError::Request(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "completion request rejected");
            return Err(AdvisorError::Api {
                status: status.as_u16(),
                body,
            });
        }

        parse_completion(&body)
    }
}

/// First choice's message content, trimmed.
pub fn parse_completion(body: &str) -> Result<String, AdvisorError> {
    let completion: ChatCompletion =
        serde_json::from_str(body).map_err(|e| AdvisorError::Malformed(e.to_string()))?;

    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AdvisorError::Malformed("response has no message content".into()))?;

    let content = content.trim();
    if content.is_empty() {
        return Err(AdvisorError::Malformed("response message is empty".into()));
    }
    Ok(content.to_string())
}
