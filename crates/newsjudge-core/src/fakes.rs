//! In-memory completion clients (testing and offline use)
//!
//! `StubCompletionClient` replays a canned reply and records every prompt it
//! receives; `UnavailableCompletionClient` fails every call.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::CompletionClient;
use crate::error::{CompletionError, CompletionResult};

/// Returns the same reply for every prompt and keeps the prompts it was sent.
#[derive(Debug, Default)]
pub struct StubCompletionClient {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl StubCompletionClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    /// The most recent prompt, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts().pop()
    }
}

#[async_trait]
impl CompletionClient for StubCompletionClient {
    async fn complete(&self, prompt: &str) -> CompletionResult<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(self.reply.clone())
    }
}

/// Fails every call with a transport error.
#[derive(Debug, Default)]
pub struct UnavailableCompletionClient;

impl UnavailableCompletionClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompletionClient for UnavailableCompletionClient {
    async fn complete(&self, _prompt: &str) -> CompletionResult<String> {
        Err(CompletionError::Transport(
            "connection refused (stub)".to_string(),
        ))
    }
}
