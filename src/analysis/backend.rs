//! Transport seam for the remote narrative model.
//!
//! `CompletionBackend` is the only piece that talks to a provider. Request
//! shaping and response parsing live in `NarrativeService`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ChatMessage;

/// Failures reported by a provider transport.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// Provider rejected the credential.
    #[error("invalid API key; verify the key in your environment settings")]
    Unauthorized,

    /// Could not reach the provider.
    #[error("transport error: {0}")]
    Transport(String),

    /// Provider answered with an error.
    #[error("provider returned {status}: {message}")]
    Service { status: u16, message: String },
}

/// One request to the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub prompt: String,
    /// JSON schema the reply must follow; `None` means free text.
    pub response_schema: Option<serde_json::Value>,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_prompt: None,
            history: Vec::new(),
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    pub fn with_system(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.history = history;
        self
    }

    pub fn with_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// Citation metadata attached by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GroundingChunk {
    pub title: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CompletionResponse {
    /// Raw reply text; `None` when the provider returned nothing.
    pub text: Option<String>,
    #[serde(default)]
    pub grounding: Vec<GroundingChunk>,
}

impl CompletionResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            grounding: Vec::new(),
        }
    }
}

#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Backend identifier for logs.
    fn id(&self) -> &str;

    /// Sends one request. No retries; failures pass straight through.
    async fn complete(
        &self,
        api_key: &str,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, BackendError>;
}
