//! HTTP client for the chat-completion API.
//!
//! This module provides a simple bearer-authenticated client for a
//! chat-completion endpoint, plus the `InsightSource` trait the pipeline
//! consumes. Requests are synchronous; there is no retry, no backoff, and no
//! timeout beyond the transport defaults.

use crate::ai::prompts::insight_prompt;
use crate::config::Config;
use crate::constants::MAX_INSIGHT_TOKENS;
use crate::errors::{AiError, AppResult};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender (system, user, assistant)
    pub role: String,
    /// The content of the message
    pub content: String,
}

impl Message {
    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for chat completion.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
}

/// Response from chat completion.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Message,
}

/// Error body returned by the API on a non-success status.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Source of insight text for one user's journal entries.
///
/// The pipeline depends on this seam rather than on the HTTP client directly,
/// so tests can substitute a stub.
pub trait InsightSource {
    /// Generates insight text from a JSON-serialized collection of one
    /// user's journal entries. The returned text is the model's raw reply,
    /// unparsed.
    fn generate(&self, journals_json: &str) -> AppResult<String>;
}

/// Client for the chat-completion API.
pub struct ChatClient {
    url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl ChatClient {
    /// Creates a new client for the given endpoint, credential, and model.
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client: Client::new(),
        }
    }

    /// Creates a client from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_url, &config.api_key, &config.model)
    }

    /// Sends a chat completion request and returns the reply text.
    ///
    /// The request carries the configured model, the given messages, and the
    /// fixed completion-token budget.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint is not reachable
    /// - The API returns a non-success status (the message from the JSON
    ///   error body is included when present)
    /// - The response carries no choices
    pub fn chat(&self, messages: &[Message]) -> AppResult<String> {
        debug!("Sending chat request with model: {}", self.model);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            max_tokens: MAX_INSIGHT_TOKENS,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(AiError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);

            return Err(AiError::Api {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let chat_response: ChatResponse = response.json().map_err(|e| {
            AiError::InvalidResponse(format!("Failed to parse chat response: {}", e))
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AiError::InvalidResponse("Response carried no choices".to_string()))?;

        debug!("Received chat response ({} bytes)", content.len());
        Ok(content)
    }
}

impl InsightSource for ChatClient {
    fn generate(&self, journals_json: &str) -> AppResult<String> {
        let messages = vec![Message::user(insight_prompt(journals_json))];

        // Log-then-reraise: the failure aborts the remaining per-user loop
        // in the caller.
        self.chat(&messages).map_err(|e| {
            error!("Insight request failed: {}", e);
            e
        })
    }
}
