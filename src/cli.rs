//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; a single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ProviderCommands};
pub use presentation::{
    format_generate_summary, format_provider_list_json, format_provider_list_text,
    format_provider_show_json, format_provider_show_text, format_provider_test_result,
};
pub use route::RunContext;
