//! Completion service client.
//!
//! [`CompletionClient`] is the seam between the orchestrator and the model.
//! [`OllamaClient`] speaks the Ollama `/api/generate` contract over HTTP; the
//! [`crate::fakes`] module provides in-memory stand-ins for tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CompletionConfig;
use crate::error::{CompletionError, CompletionResult};

/// Turns a prompt into generated text.
///
/// Implementations make at most one attempt per call. Failures are reported as
/// `Err`, never by panicking; an empty `Ok` is a valid (if useless) answer.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> CompletionResult<String>;
}

/// Request body for `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    pub options: GenerateOptions,
}

/// Sampling options.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerateOptions {
    pub temperature: f32,
    pub num_predict: u32,
}

/// The only field of the reply we use. A missing field reads as empty text.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// HTTP client for an Ollama-compatible service.
pub struct OllamaClient {
    config: CompletionConfig,
    http_client: reqwest::Client,
}

impl OllamaClient {
    /// Create a client; the configured timeout applies to every request.
    pub fn new(config: CompletionConfig) -> CompletionResult<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("newsjudge/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionError::Client(e.to_string()))?;

        Ok(OllamaClient {
            config,
            http_client,
        })
    }

    /// Create client from environment variables
    pub fn from_env() -> CompletionResult<Self> {
        Self::new(CompletionConfig::from_env())
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
                num_predict: self.config.max_tokens,
            },
        }
    }

    fn classify_error(&self, err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout(self.config.timeout)
        } else if err.is_decode() {
            CompletionError::MalformedBody(err.to_string())
        } else {
            CompletionError::Transport(err.to_string())
        }
    }

    /// Whether the service answers `GET /api/tags` with a success status.
    pub async fn is_available(&self) -> bool {
        let url = self.config.endpoint("/api/tags");
        match self.http_client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl CompletionClient for OllamaClient {
    async fn complete(&self, prompt: &str) -> CompletionResult<String> {
        let url = self.config.endpoint("/api/generate");
        debug!(url = %url, model = %self.config.model, prompt_len = prompt.len(), "sending completion request");

        let response = self
            .http_client
            .post(&url)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.classify_error(e))?;
        let parsed: GenerateResponse = serde_json::from_slice(&bytes)
            .map_err(|e| CompletionError::MalformedBody(e.to_string()))?;

        debug!(response_len = parsed.response.len(), "completion received");
        Ok(parsed.response)
    }
}
