//! Gemini `generateContent` backend over HTTPS.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::workspace::AiSettings;

use super::backend::{
    BackendError, CompletionBackend, CompletionRequest, CompletionResponse, GroundingChunk,
};
use super::service::NarrativeService;
use super::ChatRole;

/// Public Gemini REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiBackend {
    client: Client,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| BackendError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn google() -> Result<Self, BackendError> {
        Self::new(DEFAULT_ENDPOINT)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

impl NarrativeService<GeminiBackend> {
    /// Service talking to the endpoint and models named in `settings`.
    pub fn gemini(settings: &AiSettings) -> Result<Self, BackendError> {
        Ok(NarrativeService::new(
            GeminiBackend::new(&settings.endpoint)?,
            settings,
        ))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

impl<'a> Content<'a> {
    fn new(role: Option<&'static str>, text: &'a str) -> Self {
        Self {
            role,
            parts: vec![Part { text }],
        }
    }
}

fn role_name(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Model => "model",
    }
}

fn request_body(request: &CompletionRequest) -> GenerateRequest<'_> {
    let mut contents: Vec<Content<'_>> = request
        .history
        .iter()
        .map(|message| Content::new(Some(role_name(message.role)), &message.text))
        .collect();
    contents.push(Content::new(Some("user"), &request.prompt));
    GenerateRequest {
        system_instruction: request
            .system_prompt
            .as_deref()
            .map(|text| Content::new(None, text)),
        contents,
        generation_config: request
            .response_schema
            .as_ref()
            .map(|schema| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<ResponseChunk>,
}

#[derive(Debug, Deserialize)]
struct ResponseChunk {
    #[serde(default)]
    web: Option<GroundingChunk>,
}

impl GenerateResponse {
    /// Text of the first candidate plus its web citations.
    fn into_completion(self) -> CompletionResponse {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return CompletionResponse::default();
        };
        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();
        let grounding = candidate
            .grounding_metadata
            .map(|meta| {
                meta.grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web)
                    .collect()
            })
            .unwrap_or_default();
        CompletionResponse {
            text: (!text.is_empty()).then_some(text),
            grounding,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

fn status_error(status: u16, body: &str) -> BackendError {
    if status == 401 || status == 403 || body.contains("API_KEY_INVALID") {
        return BackendError::Unauthorized;
    }
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.to_string());
    BackendError::Service { status, message }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    fn id(&self) -> &str {
        "gemini"
    }

    async fn complete(
        &self,
        api_key: &str,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, BackendError> {
        let url = self.generate_url(&request.model);
        tracing::debug!(model = %request.model, history = request.history.len(), "posting generateContent");
        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&request_body(&request))
            .send()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body).map_err(|err| {
            BackendError::Transport(format!("undecodable generateContent reply: {err}"))
        })?;
        Ok(parsed.into_completion())
    }
}
