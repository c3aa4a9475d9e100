//! AI narrative port.
//!
//! The narrative is an opaque remote function of the selected profiles.
//! Nothing here retries or caches: one user action is one provider call, and
//! its failure is handed back as a typed `AnalysisError`.

pub mod backend;
pub mod gemini;
pub mod mock;
pub mod prompt;
pub mod service;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profiles::Profile;

pub use backend::{
    BackendError, CompletionBackend, CompletionRequest, CompletionResponse, GroundingChunk,
};
pub use gemini::GeminiBackend;
pub use mock::MockBackend;
pub use prompt::AnalysisMode;
pub use service::NarrativeService;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overview: String,
    pub friction_points: Vec<String>,
    pub scientific_context: String,
    pub strategies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_dynamics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grounding_sources: Option<Vec<GroundingSource>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// No API key configured; nothing was sent.
    #[error("no API credential is configured for the narrative service")]
    MissingCredentials,

    #[error("narrative provider failed: {0}")]
    Provider(#[from] BackendError),

    #[error("the model returned an empty response")]
    EmptyResponse,

    /// Reply was not the expected JSON; no partial result is recovered.
    #[error("the model returned a malformed response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait NarrativePort: Send + Sync {
    async fn analyze_profiles(&self, profiles: &[Profile]) -> Result<AnalysisResult, AnalysisError>;

    async fn chat(
        &self,
        profiles: &[Profile],
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, AnalysisError>;
}
