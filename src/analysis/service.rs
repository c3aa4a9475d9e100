use async_trait::async_trait;
use tracing::{info, warn};

use crate::profiles::Profile;
use crate::workspace::AiSettings;

use super::backend::{CompletionBackend, CompletionRequest, GroundingChunk};
use super::prompt::{analysis_schema, build_analysis_prompt, chat_system_prompt, AnalysisMode};
use super::{AnalysisError, AnalysisResult, ChatMessage, GroundingSource, NarrativePort};

const DEFAULT_SOURCE_TITLE: &str = "Scientific Reference";
const EMPTY_CHAT_REPLY: &str = "I was unable to synthesize a response.";

/// `NarrativePort` implementation over a `CompletionBackend`.
pub struct NarrativeService<B> {
    backend: B,
    api_key: Option<String>,
    analysis_model: String,
    chat_model: String,
}

impl<B: CompletionBackend> NarrativeService<B> {
    pub fn new(backend: B, settings: &AiSettings) -> Self {
        Self {
            backend,
            api_key: settings.resolve_api_key(),
            analysis_model: settings.analysis_model.clone(),
            chat_model: settings.chat_model.clone(),
        }
    }

    /// Overrides the resolved key. `None` or blank disables the service.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn credential(&self) -> Result<&str, AnalysisError> {
        self.api_key
            .as_deref()
            .ok_or(AnalysisError::MissingCredentials)
    }
}

/// Parses the model's JSON reply and attaches the provider's citations.
/// Group replies must carry a non-blank `groupDynamics`.
pub fn parse_analysis(
    text: Option<&str>,
    grounding: &[GroundingChunk],
    mode: AnalysisMode,
) -> Result<AnalysisResult, AnalysisError> {
    let text = text
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AnalysisError::EmptyResponse)?;
    let mut result: AnalysisResult = serde_json::from_str(text)
        .map_err(|err| AnalysisError::MalformedResponse(err.to_string()))?;
    let has_dynamics = result
        .group_dynamics
        .as_deref()
        .is_some_and(|text| !text.trim().is_empty());
    if mode == AnalysisMode::Group && !has_dynamics {
        return Err(AnalysisError::MalformedResponse(
            "group analysis is missing groupDynamics".into(),
        ));
    }
    result.grounding_sources = Some(grounding_sources(grounding));
    Ok(result)
}

fn grounding_sources(chunks: &[GroundingChunk]) -> Vec<GroundingSource> {
    chunks
        .iter()
        .filter_map(|chunk| {
            let uri = chunk.uri.as_ref().filter(|u| !u.is_empty())?;
            Some(GroundingSource {
                title: chunk
                    .title
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| DEFAULT_SOURCE_TITLE.to_string()),
                uri: uri.clone(),
            })
        })
        .collect()
}

#[async_trait]
impl<B: CompletionBackend> NarrativePort for NarrativeService<B> {
    async fn analyze_profiles(&self, profiles: &[Profile]) -> Result<AnalysisResult, AnalysisError> {
        let api_key = self.credential()?;
        let mode = AnalysisMode::for_count(profiles.len());
        let request = CompletionRequest::new(&self.analysis_model, build_analysis_prompt(profiles))
            .with_schema(analysis_schema(mode));
        info!(
            backend = self.backend.id(),
            model = %self.analysis_model,
            profiles = profiles.len(),
            ?mode,
            "requesting narrative analysis"
        );
        let response = self.backend.complete(api_key, request).await.map_err(|err| {
            warn!(error = %err, "narrative analysis failed");
            AnalysisError::from(err)
        })?;
        parse_analysis(response.text.as_deref(), &response.grounding, mode).map_err(|err| {
            warn!(error = %err, "narrative analysis reply rejected");
            err
        })
    }

    async fn chat(
        &self,
        profiles: &[Profile],
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, AnalysisError> {
        let api_key = self.credential()?;
        let request = CompletionRequest::new(&self.chat_model, message)
            .with_system(chat_system_prompt(profiles))
            .with_history(history.to_vec());
        let response = self.backend.complete(api_key, request).await.map_err(|err| {
            warn!(error = %err, "narrative chat failed");
            AnalysisError::from(err)
        })?;
        Ok(response
            .text
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| EMPTY_CHAT_REPLY.to_string()))
    }
}
