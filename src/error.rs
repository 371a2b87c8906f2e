//! Error types for the README generation pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Source ingestion errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory {path:?}: {message}")]
    WalkFailed { path: PathBuf, message: String },

    #[error("Path not found: {0:?}")]
    PathNotFound(PathBuf),
}

/// Generation and provider errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No source files provided. Add at least one file and retry.")]
    NoSourceFiles,

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Provider model not found: {0}")]
    ProviderModelNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Generation cancelled")]
    GenerationCancelled,

    #[error("Source error: {0}")]
    SourceError(#[from] SourceError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
