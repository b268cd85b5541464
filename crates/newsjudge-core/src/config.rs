//! Completion service configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default service location when `OLLAMA_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://ollama:11434";

/// Default model when `OLLAMA_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Low temperature keeps verdicts stable across repeated calls.
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

/// Output cap; the expected reply is three short lines.
pub const DEFAULT_MAX_TOKENS: u32 = 150;

/// Must stay below the 30 s deadline imposed on callers of `analyze`.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(25);

/// Settings for one completion service endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Service root, e.g. `http://localhost:11434`
    pub base_url: String,
    /// Model identifier passed through to the service
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum generated tokens (`num_predict`)
    pub max_tokens: u32,
    /// Hard deadline for the whole request
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        CompletionConfig {
            base_url: std::env::var("OLLAMA_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CompletionConfig {
    /// Create a config from environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create config for a specific endpoint and model
    pub fn new(base_url: &str, model: &str) -> Self {
        CompletionConfig {
            base_url: base_url.to_string(),
            model: model.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of a service route, tolerating a trailing `/` on the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_config_default() {
        let config = CompletionConfig::default();
        assert!(!config.base_url.is_empty());
        assert!(!config.model.is_empty());
        assert_eq!(config.max_tokens, 150);
        assert_eq!(config.timeout, Duration::from_secs(25));
        assert!((config.temperature - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_completion_config_new() {
        let config = CompletionConfig::new("http://localhost:11434", "mistral");
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.model, "mistral");
    }

    #[test]
    fn test_completion_config_with_timeout() {
        let config = CompletionConfig::new("http://localhost:11434", "mistral")
            .with_timeout(Duration::from_millis(200));
        assert_eq!(config.timeout, Duration::from_millis(200));
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = CompletionConfig::new("http://localhost:11434/", "mistral");
        assert_eq!(
            config.endpoint("/api/generate"),
            "http://localhost:11434/api/generate"
        );

        let config = CompletionConfig::new("http://localhost:11434", "mistral");
        assert_eq!(config.endpoint("api/tags"), "http://localhost:11434/api/tags");
    }
}
