//! Mock completion backend for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use super::backend::{BackendError, CompletionBackend, CompletionRequest, CompletionResponse};

/// Scripted backend. Returns the configured reply (or error) for every call
/// and remembers the requests it saw.
pub struct MockBackend {
    backend_id: String,
    reply: Result<CompletionResponse, BackendError>,
    call_count: AtomicU32,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockBackend {
    pub fn new(backend_id: impl Into<String>) -> Self {
        Self {
            backend_id: backend_id.into(),
            reply: Ok(CompletionResponse::text("Mock response")),
            call_count: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, response: CompletionResponse) -> Self {
        self.reply = Ok(response);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_response(CompletionResponse::text(text))
    }

    pub fn with_error(mut self, error: BackendError) -> Self {
        self.reply = Err(error);
        self
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new("mock-model")
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    fn id(&self) -> &str {
        &self.backend_id
    }

    async fn complete(
        &self,
        _api_key: &str,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        self.reply.clone()
    }
}
