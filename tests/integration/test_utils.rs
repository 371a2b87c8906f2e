//! Shared test utilities for integration tests.

use async_trait::async_trait;
use futures::StreamExt;
use parking_lot::Mutex;
use quill::error::ApiError;
use quill::provider::{CompletionStream, GenerativeClient};

/// Scripted streaming client. Yields its script once, records call count and
/// the last payload it received.
pub struct MockStreamClient {
    script: Mutex<Vec<Result<String, ApiError>>>,
    hang_after: bool,
    pub calls: Mutex<usize>,
    pub last_prompt: Mutex<Option<String>>,
}

impl MockStreamClient {
    pub fn new(script: Vec<Result<String, ApiError>>) -> Self {
        Self {
            script: Mutex::new(script),
            hang_after: false,
            calls: Mutex::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// After the script is exhausted the stream pends forever, simulating a
    /// stalled remote stream.
    pub fn pending_after(script: Vec<Result<String, ApiError>>) -> Self {
        Self {
            hang_after: true,
            ..Self::new(script)
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl GenerativeClient for MockStreamClient {
    async fn stream(&self, prompt: String) -> Result<CompletionStream, ApiError> {
        *self.calls.lock() += 1;
        *self.last_prompt.lock() = Some(prompt);
        let items: Vec<_> = self.script.lock().drain(..).collect();
        let stream = futures::stream::iter(items);
        if self.hang_after {
            Ok(stream.chain(futures::stream::pending()).boxed())
        } else {
            Ok(stream.boxed())
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }

    async fn list_models(&self) -> Result<Vec<String>, ApiError> {
        Ok(vec!["mock-model".to_string()])
    }
}
