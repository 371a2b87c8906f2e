//! CLI presentation: formatting of command results. No domain logic.

use crate::error::ApiError;
use crate::provider::commands::{ProviderListResult, ProviderShowResult, ProviderTestResult};
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn format_provider_list_text(result: &ProviderListResult) -> String {
    if result.providers.is_empty() {
        return "No providers configured. Add a [providers.<name>] section to quill.toml.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Name", "Type", "Model", "Default"]);
    for provider in &result.providers {
        table.add_row(vec![
            provider.name.clone(),
            provider.provider_type.clone(),
            provider.model.clone(),
            if provider.is_default { "*" } else { "" }.to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_provider_list_json(result: &ProviderListResult) -> Result<String, ApiError> {
    serde_json::to_string_pretty(result)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize provider list: {}", e)))
}

pub fn format_provider_show_text(result: &ProviderShowResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Provider: {}\n", result.name));
    out.push_str(&format!("Type:     {}\n", result.profile.provider));
    out.push_str(&format!("Model:    {}\n", result.profile.model));
    if let Some(base_url) = &result.profile.base_url {
        out.push_str(&format!("Endpoint: {}\n", base_url));
    }
    if let Some(budget) = result.profile.thinking_budget {
        out.push_str(&format!("Thinking budget: {}\n", budget));
    }
    out.push_str(&format!("API key:  {}", result.api_key_status));
    out
}

pub fn format_provider_show_json(result: &ProviderShowResult) -> Result<String, ApiError> {
    serde_json::to_string_pretty(result)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize provider: {}", e)))
}

pub fn format_provider_test_result(result: &ProviderTestResult) -> String {
    let mut out = String::new();
    if result.connectivity_ok {
        out.push_str(&format!(
            "{} provider '{}' is reachable\n",
            "✓".green(),
            result.provider_name
        ));
        if result.model_available {
            out.push_str(&format!(
                "{} model '{}' is available",
                "✓".green(),
                result.model_checked
            ));
        } else {
            out.push_str(&format!(
                "{} model '{}' was not reported by the provider ({} models listed)",
                "!".yellow(),
                result.model_checked,
                result.available_models.len()
            ));
        }
    } else {
        out.push_str(&format!(
            "{} provider '{}' is unreachable",
            "✗".red(),
            result.provider_name
        ));
        if let Some(message) = &result.error_message {
            out.push_str(&format!("\n  {}", message));
        }
    }
    out
}

pub fn format_generate_summary(bytes: usize, out: Option<&Path>) -> String {
    match out {
        Some(path) => format!(
            "{} README generated ({} bytes, written to {})",
            "✓".green(),
            bytes,
            path.display()
        ),
        None => format!("{} README generated ({} bytes)", "✓".green(), bytes),
    }
}
