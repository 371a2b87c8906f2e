//! Provider profiles: the configuration contract for the remote generation
//! service. A profile names the provider kind, the model identifier, and the
//! effort budget; API keys resolve from an inline value or an environment
//! variable at client-construction time.

use crate::error::ApiError;
use crate::provider::ModelProvider;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gemini,
    OpenAi,
    Ollama,
}

impl ProviderKind {
    pub fn parse(s: &str) -> Result<Self, ApiError> {
        match s {
            "gemini" => Ok(ProviderKind::Gemini),
            "openai" => Ok(ProviderKind::OpenAi),
            "ollama" => Ok(ProviderKind::Ollama),
            other => Err(ApiError::ConfigError(format!(
                "Invalid provider type: {} (must be 'gemini', 'openai', or 'ollama')",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Ollama => "ollama",
        }
    }

    /// Conventional API key environment variable, used when the profile names
    /// neither an inline key nor a key variable.
    fn default_api_key_env(&self) -> Option<&'static str> {
        match self {
            ProviderKind::Gemini => Some("GEMINI_API_KEY"),
            ProviderKind::OpenAi => Some("OPENAI_API_KEY"),
            ProviderKind::Ollama => None,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named provider profile from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub provider: ProviderKind,

    /// Model identifier passed through to the service
    pub model: String,

    /// Inline API key. Never serialized back out.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Environment variable holding the API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,

    /// Endpoint override (custom or self-hosted deployments)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Reasoning effort budget, forwarded to providers that support one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking_budget: Option<u32>,
}

impl ProviderProfile {
    pub fn new(provider: ProviderKind, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            api_key: None,
            api_key_env: None,
            base_url: None,
            thinking_budget: None,
        }
    }

    pub fn validate(&self, name: &str) -> Result<(), ApiError> {
        if self.model.trim().is_empty() {
            return Err(ApiError::ConfigError(format!(
                "Provider '{}' has no model set",
                name
            )));
        }
        Ok(())
    }

    /// Resolve the profile into a concrete [`ModelProvider`], including the
    /// API key. Key precedence: inline value, then `api_key_env`, then the
    /// provider's conventional environment variable.
    pub fn resolve(&self, name: &str) -> Result<ModelProvider, ApiError> {
        Ok(match self.provider {
            ProviderKind::Gemini => ModelProvider::Gemini {
                model: self.model.clone(),
                api_key: self.resolve_api_key(name)?,
                base_url: self.base_url.clone(),
                thinking_budget: self.thinking_budget,
            },
            ProviderKind::OpenAi => ModelProvider::OpenAi {
                model: self.model.clone(),
                api_key: self.resolve_api_key(name)?,
                base_url: self.base_url.clone(),
            },
            ProviderKind::Ollama => ModelProvider::Ollama {
                model: self.model.clone(),
                base_url: self.base_url.clone(),
            },
        })
    }

    fn resolve_api_key(&self, name: &str) -> Result<String, ApiError> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        let env_var = self
            .api_key_env
            .as_deref()
            .or_else(|| self.provider.default_api_key_env())
            .ok_or_else(|| {
                ApiError::ProviderNotConfigured(format!("Provider '{}' requires an API key", name))
            })?;
        std::env::var(env_var).map_err(|_| {
            ApiError::ProviderAuthFailed(format!(
                "Provider '{}': API key variable {} is not set",
                name, env_var
            ))
        })
    }

    /// Human-readable key status for display; never exposes the key itself.
    pub fn api_key_status(&self) -> String {
        if self.api_key.is_some() {
            return "configured (inline)".to_string();
        }
        match self
            .api_key_env
            .as_deref()
            .or_else(|| self.provider.default_api_key_env())
        {
            Some(env_var) if std::env::var(env_var).is_ok() => format!("env {} (set)", env_var),
            Some(env_var) => format!("env {} (unset)", env_var),
            None => "not required".to_string(),
        }
    }
}
