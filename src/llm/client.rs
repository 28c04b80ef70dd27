// LogSage - llm/client.rs
//
// Blocking HTTP client for the Azure OpenAI endpoints.
// Runs on the background analysis thread; one request per analysis action,
// no retry, no backoff. Failures propagate to the caller unchanged.

use crate::llm::api::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, EmbeddingRequest,
    EmbeddingResponse,
};
use crate::llm::config::ServiceConfig;
use crate::util::constants::{COMPLETION_MAX_TOKENS, COMPLETION_TEMPERATURE, HTTP_TIMEOUT_SECS};
use crate::util::error::LlmError;
use std::time::{Duration, Instant};

/// Seam for the remote text-completion capability.
///
/// The analyser depends on this trait rather than on `AzureClient` directly
/// so the request/sentinel logic is testable without a network.
pub trait TextCompletion {
    /// Send `prompt` as the sole user message and return the completion text
    /// of the first choice, unmodified.
    fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Client for the configured Azure OpenAI resource.
pub struct AzureClient {
    config: ServiceConfig,
    http: reqwest::blocking::Client,
}

impl AzureClient {
    /// Build a client from resolved configuration.
    ///
    /// The timeout is a transport-layer default; the analysis flow imposes no
    /// deadline of its own.
    pub fn new(config: ServiceConfig) -> Result<Self, LlmError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::ClientBuild { source: e })?;

        Ok(Self { config, http })
    }

    /// Generate an embedding vector for `text`.
    ///
    /// Present as a service capability; the interactive analysis flow does
    /// not call it.
    pub fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError> {
        let url = self.config.embeddings_url();
        let request = EmbeddingRequest {
            input: text.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .header("api-key", &self.config.api_key)
            .json(&request)
            .send()
            .map_err(|e| LlmError::Http { source: e })?;

        let response = check_status(response)?;
        let body: EmbeddingResponse = response
            .json()
            .map_err(|e| LlmError::MalformedResponse { source: e })?;

        body.data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or(LlmError::EmptyResponse)
    }
}

impl TextCompletion for AzureClient {
    fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let url = self.config.chat_completions_url();
        let request = ChatCompletionRequest {
            messages: vec![ChatMessage::user(prompt)],
            temperature: COMPLETION_TEMPERATURE,
            max_tokens: COMPLETION_MAX_TOKENS,
        };

        tracing::debug!(
            deployment = %self.config.gpt_deployment,
            prompt_chars = prompt.len(),
            "Sending chat completion request"
        );
        let started = Instant::now();

        let response = self
            .http
            .post(&url)
            .header("api-key", &self.config.api_key)
            .json(&request)
            .send()
            .map_err(|e| LlmError::Http { source: e })?;

        let response = check_status(response)?;
        let body: ChatCompletionResponse = response
            .json()
            .map_err(|e| LlmError::MalformedResponse { source: e })?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)?;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            response_chars = content.len(),
            "Chat completion received"
        );

        Ok(content)
    }
}

/// Map non-success statuses to `LlmError::Api`, keeping the body verbatim
/// because Azure error payloads carry the diagnostic detail.
fn check_status(
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, LlmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    tracing::warn!(status = status.as_u16(), "Service returned an error");
    Err(LlmError::Api {
        status: status.as_u16(),
        body,
    })
}
