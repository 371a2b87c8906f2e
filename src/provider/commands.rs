//! Provider command service: list/show/test results consumed by the CLI
//! presentation layer.

use crate::config::QuillConfig;
use crate::error::ApiError;
use crate::provider::{ProviderFactory, ProviderProfile};
use serde::Serialize;

pub struct ProviderCommandService;

/// One row for provider list output.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderListEntry {
    pub name: String,
    pub provider_type: String,
    pub model: String,
    pub is_default: bool,
}

/// Result of provider list command.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderListResult {
    pub providers: Vec<ProviderListEntry>,
}

/// Result of provider show (profile plus API key status).
#[derive(Debug, Clone, Serialize)]
pub struct ProviderShowResult {
    pub name: String,
    pub profile: ProviderProfile,
    pub api_key_status: String,
}

/// Result of provider test command.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderTestResult {
    pub provider_name: String,
    pub model_checked: String,
    pub connectivity_ok: bool,
    pub model_available: bool,
    pub available_models: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ProviderCommandService {
    pub fn list(config: &QuillConfig) -> ProviderListResult {
        let mut providers: Vec<ProviderListEntry> = config
            .providers
            .iter()
            .map(|(name, profile)| ProviderListEntry {
                name: name.clone(),
                provider_type: profile.provider.to_string(),
                model: profile.model.clone(),
                is_default: config.default_provider.as_deref() == Some(name.as_str()),
            })
            .collect();
        providers.sort_by(|a, b| a.name.cmp(&b.name));
        ProviderListResult { providers }
    }

    pub fn show(config: &QuillConfig, name: &str) -> Result<ProviderShowResult, ApiError> {
        let profile = config.providers.get(name).ok_or_else(|| {
            ApiError::ProviderNotConfigured(format!("Unknown provider '{}'", name))
        })?;
        Ok(ProviderShowResult {
            name: name.to_string(),
            profile: profile.clone(),
            api_key_status: profile.api_key_status(),
        })
    }

    /// Resolve the profile, build a client, and check connectivity by listing
    /// models. Failures land in the result rather than an error: a broken
    /// provider is the finding, not an abort.
    pub async fn test(name: &str, profile: &ProviderProfile) -> ProviderTestResult {
        let model_checked = profile.model.clone();
        match Self::run_test(name, profile).await {
            Ok(available_models) => {
                let model_available = available_models.iter().any(|m| m == &model_checked);
                ProviderTestResult {
                    provider_name: name.to_string(),
                    model_checked,
                    connectivity_ok: true,
                    model_available,
                    available_models,
                    error_message: None,
                }
            }
            Err(err) => ProviderTestResult {
                provider_name: name.to_string(),
                model_checked,
                connectivity_ok: false,
                model_available: false,
                available_models: Vec::new(),
                error_message: Some(err.to_string()),
            },
        }
    }

    async fn run_test(name: &str, profile: &ProviderProfile) -> Result<Vec<String>, ApiError> {
        let provider = profile.resolve(name)?;
        let client = ProviderFactory::create_client(&provider)?;
        client.list_models().await
    }
}
