//! Configuration System
//!
//! Layered configuration for provider profiles, generation defaults, and
//! logging. Sources merge lowest-to-highest: built-in defaults, the global
//! config file, the workspace `quill.toml`, then `QUILL__*` environment
//! overrides.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use crate::provider::profile::{ProviderKind, ProviderProfile};

mod facade;
mod sources;

pub use facade::ConfigLoader;

/// Formatting preset passed through to the generation prompt. Controls the
/// instructions given to the remote service, not local logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReadmeStyle {
    Minimal,
    #[default]
    Comprehensive,
    Playful,
}

impl ReadmeStyle {
    pub fn parse(s: &str) -> Result<Self, ApiError> {
        match s {
            "minimal" => Ok(ReadmeStyle::Minimal),
            "comprehensive" => Ok(ReadmeStyle::Comprehensive),
            "playful" => Ok(ReadmeStyle::Playful),
            other => Err(ApiError::ConfigError(format!(
                "Invalid style: {} (must be 'minimal', 'comprehensive', or 'playful')",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadmeStyle::Minimal => "minimal",
            ReadmeStyle::Comprehensive => "comprehensive",
            ReadmeStyle::Playful => "playful",
        }
    }
}

impl std::fmt::Display for ReadmeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation preferences for one README. Mutated field-by-field via
/// [`ReadmeConfigPatch`]; always present with defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadmeConfig {
    #[serde(default)]
    pub project_name: String,

    #[serde(default)]
    pub repo_url: Option<String>,

    #[serde(default = "default_true")]
    pub include_license: bool,

    #[serde(default = "default_true")]
    pub include_badges: bool,

    #[serde(default)]
    pub style: ReadmeStyle,
}

fn default_true() -> bool {
    true
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            repo_url: None,
            include_license: true,
            include_badges: true,
            style: ReadmeStyle::Comprehensive,
        }
    }
}

/// Partial update for [`ReadmeConfig`]: set fields replace, unset fields
/// retain prior values.
#[derive(Debug, Clone, Default)]
pub struct ReadmeConfigPatch {
    pub project_name: Option<String>,
    pub repo_url: Option<String>,
    pub include_license: Option<bool>,
    pub include_badges: Option<bool>,
    pub style: Option<ReadmeStyle>,
}

impl ReadmeConfig {
    pub fn apply(&mut self, patch: ReadmeConfigPatch) {
        if let Some(project_name) = patch.project_name {
            self.project_name = project_name;
        }
        if let Some(repo_url) = patch.repo_url {
            self.repo_url = Some(repo_url);
        }
        if let Some(include_license) = patch.include_license {
            self.include_license = include_license;
        }
        if let Some(include_badges) = patch.include_badges {
            self.include_badges = include_badges;
        }
        if let Some(style) = patch.style {
            self.style = style;
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuillConfig {
    /// Named provider profiles
    #[serde(default)]
    pub providers: HashMap<String, ProviderProfile>,

    /// Provider used when `--provider` is not given
    #[serde(default)]
    pub default_provider: Option<String>,

    /// Generation defaults, overridable per invocation
    #[serde(default)]
    pub generation: ReadmeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl QuillConfig {
    /// Validate cross-field consistency. Profile-level checks live on
    /// [`ProviderProfile::validate`].
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(name) = &self.default_provider {
            if !self.providers.contains_key(name) {
                return Err(ApiError::ConfigError(format!(
                    "default_provider '{}' has no matching [providers.{}] section",
                    name, name
                )));
            }
        }
        for (name, profile) in &self.providers {
            profile.validate(name)?;
        }
        Ok(())
    }

    /// Resolve the profile for a generation attempt: explicit name, then the
    /// configured default, then the sole profile when only one exists.
    pub fn resolve_provider(&self, name: Option<&str>) -> Result<(&str, &ProviderProfile), ApiError> {
        if let Some(name) = name {
            return self
                .providers
                .get_key_value(name)
                .map(|(k, v)| (k.as_str(), v))
                .ok_or_else(|| {
                    ApiError::ProviderNotConfigured(format!(
                        "Unknown provider '{}'. Use `quill provider list` to see configured providers.",
                        name
                    ))
                });
        }
        if let Some(name) = &self.default_provider {
            let profile = self.providers.get(name).ok_or_else(|| {
                ApiError::ProviderNotConfigured(format!("Default provider '{}' is not configured", name))
            })?;
            return Ok((name.as_str(), profile));
        }
        match self.providers.len() {
            0 => Err(ApiError::ProviderNotConfigured(
                "No providers configured. Add a [providers.<name>] section to quill.toml.".to_string(),
            )),
            1 => {
                let (name, profile) = self.providers.iter().next().ok_or_else(|| {
                    ApiError::ProviderNotConfigured("No providers configured".to_string())
                })?;
                Ok((name.as_str(), profile))
            }
            _ => {
                let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
                names.sort_unstable();
                Err(ApiError::ProviderNotConfigured(format!(
                    "Multiple providers configured: {}. Use `--provider <name>` or set default_provider.",
                    names.join(", ")
                )))
            }
        }
    }
}
