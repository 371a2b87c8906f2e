//! CLI help: command-name contract for logging and routing.

use crate::cli::parse::{Commands, ProviderCommands};

/// Command name string for logs (e.g. "generate", "provider.list").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Generate { .. } => "generate".to_string(),
        Commands::Provider { command } => format!("provider.{}", provider_command_name(command)),
    }
}

pub fn provider_command_name(command: &ProviderCommands) -> &'static str {
    match command {
        ProviderCommands::List { .. } => "list",
        ProviderCommands::Show { .. } => "show",
        ProviderCommands::Test { .. } => "test",
    }
}
