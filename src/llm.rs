//! The answering-model collaborator seam.
//!
//! The core treats answer generation as an opaque text-completion call: a
//! prompt goes in, the model's raw text comes back verbatim. The default
//! implementation talks to the OpenAI chat API.

use crate::error::{Result, TolkError};
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Default timeout for completion API requests (5 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Opaque text-completion collaborator.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Complete a prompt, returning the model's raw text unmodified.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// OpenAI-backed completer.
pub struct OpenAICompleter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAICompleter {
    /// Create a completer for the given model with the default timeout.
    pub fn new(model: &str) -> Self {
        Self::with_timeout(model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a completer with a custom request timeout.
    pub fn with_timeout(model: &str, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client: Client::with_config(OpenAIConfig::default()).with_http_client(http_client),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl Completer for OpenAICompleter {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> =
            vec![ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| TolkError::Completion(e.to_string()))?
                .into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .map_err(|e| TolkError::Completion(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| TolkError::Completion(e.to_string()))?;

        let answer = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| TolkError::Completion("Empty response from model".to_string()))?
            .clone();

        debug!(model = %self.model, chars = answer.len(), "completion received");

        Ok(answer)
    }
}
