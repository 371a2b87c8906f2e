//! Model Provider Abstraction
//!
//! Unified interface for streaming README generation from multiple LLM
//! providers (Gemini, OpenAI-compatible endpoints, local models via Ollama).
//! Each client opens one streaming HTTP call and exposes it as an ordered
//! stream of text fragments.

use crate::error::ApiError;
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::collections::VecDeque;
use std::pin::Pin;
use std::time::Duration;

pub mod commands;
pub mod profile;
pub mod sse;

pub use profile::{ProviderKind, ProviderProfile};

/// Resolved provider configuration: profile plus the API key it resolved to.
#[derive(Debug, Clone)]
pub enum ModelProvider {
    Gemini {
        model: String,
        api_key: String,
        base_url: Option<String>,
        thinking_budget: Option<u32>,
    },
    OpenAi {
        model: String,
        api_key: String,
        base_url: Option<String>, // For OpenAI-compatible endpoints
    },
    Ollama {
        model: String,
        base_url: Option<String>, // Default: http://localhost:11434
    },
}

/// Streaming completion type: text fragments in arrival order.
pub type CompletionStream = Pin<Box<dyn Stream<Item = Result<String, ApiError>> + Send>>;

/// Generative service client trait
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Open one streaming generation call for the given payload.
    async fn stream(&self, prompt: String) -> Result<CompletionStream, ApiError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Get the model name
    fn model_name(&self) -> &str;

    /// List available models from the provider
    async fn list_models(&self) -> Result<Vec<String>, ApiError>;
}

/// Create concrete clients from resolved provider configuration.
pub struct ProviderFactory;

impl ProviderFactory {
    pub fn create_client(provider: &ModelProvider) -> Result<Box<dyn GenerativeClient>, ApiError> {
        Ok(match provider {
            ModelProvider::Gemini {
                model,
                api_key,
                base_url,
                thinking_budget,
            } => Box::new(GeminiClient::new(
                model.clone(),
                api_key.clone(),
                base_url.clone(),
                *thinking_budget,
            )?),
            ModelProvider::OpenAi {
                model,
                api_key,
                base_url,
            } => Box::new(OpenAiClient::new(
                model.clone(),
                api_key.clone(),
                base_url.clone(),
            )?),
            ModelProvider::Ollama { model, base_url } => {
                Box::new(OllamaClient::new(model.clone(), base_url.clone())?)
            }
        })
    }
}

// Helper function to map HTTP errors to ApiError
fn map_http_error(error: reqwest::Error) -> ApiError {
    if error.is_status() {
        let status = error.status().unwrap();
        match status.as_u16() {
            401 | 403 => ApiError::ProviderAuthFailed(format!("Authentication failed: {}", error)),
            429 => ApiError::ProviderRateLimit(format!("Rate limit exceeded: {}", error)),
            404 => ApiError::ProviderModelNotFound(format!("Model not found: {}", error)),
            _ => ApiError::ProviderRequestFailed(format!(
                "Request failed with status {}: {}",
                status, error
            )),
        }
    } else if error.is_timeout() {
        ApiError::ProviderRequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::ProviderRequestFailed(format!("Connection error: {}", error))
    } else {
        ApiError::ProviderError(format!("HTTP error: {}", error))
    }
}

/// Map a non-success response to the error taxonomy, consuming the body for
/// the provider's message.
async fn status_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    match status.as_u16() {
        401 | 403 => ApiError::ProviderAuthFailed(format!("Authentication failed: {}", error_text)),
        429 => ApiError::ProviderRateLimit(format!("Rate limit exceeded: {}", error_text)),
        404 => ApiError::ProviderModelNotFound(format!("Model not found: {}", error_text)),
        _ => ApiError::ProviderRequestFailed(format!(
            "Request failed with status {}: {}",
            status, error_text
        )),
    }
}

const PROVIDER_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared HTTP client. Connect timeout only: an established stream has no
/// overall deadline, cancellation is the caller's escape hatch.
fn build_provider_http_client() -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(PROVIDER_HTTP_CONNECT_TIMEOUT)
        .build()
        .map_err(|e| ApiError::ProviderError(format!("Failed to create HTTP client: {}", e)))
}

struct LineState<S> {
    body: S,
    decoder: sse::LineDecoder,
    pending: VecDeque<Result<String, ApiError>>,
    done: bool,
}

/// Decode a streaming response body into complete lines. The stream ends
/// after the first transport error or when the body is exhausted, flushing
/// any unterminated final line first.
fn decode_lines<S, B>(body: S) -> impl Stream<Item = Result<String, ApiError>> + Send
where
    S: Stream<Item = Result<B, reqwest::Error>> + Send + Unpin + 'static,
    B: AsRef<[u8]>,
{
    let state = LineState {
        body,
        decoder: sse::LineDecoder::new(),
        pending: VecDeque::new(),
        done: false,
    };
    futures::stream::unfold(state, |mut state| async move {
        loop {
            if let Some(item) = state.pending.pop_front() {
                return Some((item, state));
            }
            if state.done {
                return None;
            }
            match state.body.next().await {
                Some(Ok(chunk)) => {
                    for line in state.decoder.feed(chunk.as_ref()) {
                        state.pending.push_back(Ok(line));
                    }
                }
                Some(Err(err)) => {
                    state.pending.push_back(Err(map_http_error(err)));
                    state.done = true;
                }
                None => {
                    if let Some(line) = state.decoder.take_remainder() {
                        state.pending.push_back(Ok(line));
                    }
                    state.done = true;
                }
            }
        }
    })
}

/// Turn a streaming response into a fragment stream using a per-provider line
/// parser. Lines the parser maps to `None` (keep-alives, end sentinels, empty
/// deltas) are dropped; parse failures and transport errors surface once.
fn text_fragment_stream(
    response: reqwest::Response,
    parse: fn(&str) -> Result<Option<String>, ApiError>,
) -> CompletionStream {
    let stream = decode_lines(response.bytes_stream().boxed()).filter_map(move |line| {
        let item = match line {
            Ok(line) => parse(&line).transpose(),
            Err(err) => Some(Err(err)),
        };
        async move { item }
    });
    Box::pin(stream)
}

fn parse_gemini_line(line: &str) -> Result<Option<String>, ApiError> {
    let Some(payload) = sse::data_payload(line) else {
        return Ok(None);
    };
    if payload.is_empty() {
        return Ok(None);
    }

    #[derive(Deserialize)]
    struct Chunk {
        candidates: Option<Vec<Candidate>>,
    }
    #[derive(Deserialize)]
    struct Candidate {
        content: Option<Content>,
    }
    #[derive(Deserialize)]
    struct Content {
        parts: Option<Vec<Part>>,
    }
    #[derive(Deserialize)]
    struct Part {
        text: Option<String>,
    }

    let chunk: Chunk = serde_json::from_str(payload)
        .map_err(|e| ApiError::ProviderError(format!("Failed to parse stream chunk: {}", e)))?;
    let text: String = chunk
        .candidates
        .unwrap_or_default()
        .into_iter()
        .filter_map(|c| c.content)
        .filter_map(|c| c.parts)
        .flatten()
        .filter_map(|p| p.text)
        .collect();
    Ok((!text.is_empty()).then_some(text))
}

fn parse_openai_line(line: &str) -> Result<Option<String>, ApiError> {
    let Some(payload) = sse::data_payload(line) else {
        return Ok(None);
    };
    if payload.is_empty() || payload == "[DONE]" {
        return Ok(None);
    }

    #[derive(Deserialize)]
    struct Chunk {
        choices: Vec<Choice>,
    }
    #[derive(Deserialize)]
    struct Choice {
        delta: Option<Delta>,
    }
    #[derive(Deserialize)]
    struct Delta {
        content: Option<String>,
    }

    let chunk: Chunk = serde_json::from_str(payload)
        .map_err(|e| ApiError::ProviderError(format!("Failed to parse stream chunk: {}", e)))?;
    let text: String = chunk
        .choices
        .into_iter()
        .filter_map(|c| c.delta)
        .filter_map(|d| d.content)
        .collect();
    Ok((!text.is_empty()).then_some(text))
}

fn parse_ollama_line(line: &str) -> Result<Option<String>, ApiError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    #[derive(Deserialize)]
    struct Chunk {
        response: Option<String>,
        error: Option<String>,
    }

    let chunk: Chunk = serde_json::from_str(line)
        .map_err(|e| ApiError::ProviderError(format!("Failed to parse stream chunk: {}", e)))?;
    if let Some(error) = chunk.error {
        return Err(ApiError::ProviderError(error));
    }
    Ok(chunk.response.filter(|t| !t.is_empty()))
}

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_THINKING_BUDGET: u32 = 4000;

/// Gemini provider client
pub struct GeminiClient {
    client: Client,
    model: String,
    api_key: String,
    base_url: String,
    thinking_budget: u32,
}

impl GeminiClient {
    pub fn new(
        model: String,
        api_key: String,
        base_url: Option<String>,
        thinking_budget: Option<u32>,
    ) -> Result<Self, ApiError> {
        let client = build_provider_http_client()?;
        Ok(Self {
            client,
            model,
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            thinking_budget: thinking_budget.unwrap_or(DEFAULT_THINKING_BUDGET),
        })
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn stream(&self, prompt: String) -> Result<CompletionStream, ApiError> {
        let url = format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.base_url, self.model
        );
        let request_body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "thinkingConfig": { "thinkingBudget": self.thinking_budget }
            },
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(text_fragment_stream(response, parse_gemini_line))
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn list_models(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        #[derive(Deserialize)]
        struct ModelsResponse {
            models: Option<Vec<ModelInfo>>,
        }
        #[derive(Deserialize)]
        struct ModelInfo {
            name: String,
        }

        let models: ModelsResponse = response.json().await.map_err(|e| {
            ApiError::ProviderError(format!("Failed to parse models response: {}", e))
        })?;

        Ok(models
            .models
            .unwrap_or_default()
            .into_iter()
            .map(|m| m.name.trim_start_matches("models/").to_string())
            .collect())
    }
}

/// OpenAI-compatible provider client (hosted or custom endpoints)
pub struct OpenAiClient {
    client: Client,
    model: String,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(model: String, api_key: String, base_url: Option<String>) -> Result<Self, ApiError> {
        let client = build_provider_http_client()?;
        Ok(Self {
            client,
            model,
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
        })
    }
}

#[async_trait]
impl GenerativeClient for OpenAiClient {
    async fn stream(&self, prompt: String) -> Result<CompletionStream, ApiError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "stream": true,
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(text_fragment_stream(response, parse_openai_line))
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn list_models(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        #[derive(Deserialize)]
        struct ModelsResponse {
            data: Vec<ModelInfo>,
        }
        #[derive(Deserialize)]
        struct ModelInfo {
            id: String,
        }

        let models: ModelsResponse = response.json().await.map_err(|e| {
            ApiError::ProviderError(format!("Failed to parse models response: {}", e))
        })?;

        Ok(models.data.into_iter().map(|m| m.id).collect())
    }
}

/// Ollama provider client (local models)
pub struct OllamaClient {
    client: Client,
    model: String,
    base_url: String,
}

impl OllamaClient {
    pub fn new(model: String, base_url: Option<String>) -> Result<Self, ApiError> {
        let client = build_provider_http_client()?;
        Ok(Self {
            client,
            model,
            base_url: base_url.unwrap_or_else(|| "http://localhost:11434".to_string()),
        })
    }
}

#[async_trait]
impl GenerativeClient for OllamaClient {
    async fn stream(&self, prompt: String) -> Result<CompletionStream, ApiError> {
        let url = format!("{}/api/generate", self.base_url);
        let request_body = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": true,
        });

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(text_fragment_stream(response, parse_ollama_line))
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn list_models(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        #[derive(Deserialize)]
        struct TagsResponse {
            models: Vec<ModelInfo>,
        }
        #[derive(Deserialize)]
        struct ModelInfo {
            name: String,
        }

        let models: TagsResponse = response.json().await.map_err(|e| {
            ApiError::ProviderError(format!("Failed to parse models response: {}", e))
        })?;

        Ok(models.models.into_iter().map(|m| m.name).collect())
    }
}
