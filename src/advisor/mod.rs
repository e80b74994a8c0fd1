//! Boundary to the external text-generation service.
//!
//! The dashboard only ever sees an [`Advice`]: either the generated text or a
//! failure message ready to show the user.

pub mod openai;
pub mod prompts;

use thiserror::Error;
use tracing::warn;

pub use openai::OpenAiAdvisor;

#[derive(Debug, Clone, PartialEq)]
pub struct AdviceRequest {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("no API key configured for the advice service")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(String),
    #[error("service returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

pub trait NarrativeAdvisor: Send + Sync {
    fn complete(&self, request: &AdviceRequest) -> Result<String, AdvisorError>;
}

/// Stand-in used when no API key is set; every request fails politely.
pub struct DisabledAdvisor;

impl NarrativeAdvisor for DisabledAdvisor {
    fn complete(&self, _request: &AdviceRequest) -> Result<String, AdvisorError> {
        Err(AdvisorError::NotConfigured)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Advice {
    Answer(String),
    Failed(String),
}

impl Advice {
    pub fn from_result(result: Result<String, AdvisorError>) -> Self {
        match result {
            Ok(text) => Advice::Answer(text),
            Err(e) => {
                warn!(error = %e, "advice request failed");
                Advice::Failed(format!("An error occurred: {e}"))
            }
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Advice::Answer(text) | Advice::Failed(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Advice::Failed(_))
    }
}

/// Narrative market analysis for one plaza.
pub fn market_analysis(advisor: &dyn NarrativeAdvisor, plaza: &str, max_tokens: u32) -> Advice {
    let request = prompts::market_analysis_request(plaza, max_tokens);
    Advice::from_result(advisor.complete(&request))
}

/// Free-text question from the chat view.
pub fn answer_question(advisor: &dyn NarrativeAdvisor, question: &str, max_tokens: u32) -> Advice {
    let request = prompts::chat_request(question, max_tokens);
    Advice::from_result(advisor.complete(&request))
}
