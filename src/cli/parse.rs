//! CLI parse: clap types for Quill. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quill CLI - Streaming README generation
#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Generate a README.md from project source files via a streaming model call")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a README from the given files or directories
    Generate {
        /// Files or directories included as project context, in order
        paths: Vec<PathBuf>,

        /// Project name (default: workspace directory name)
        #[arg(long)]
        project_name: Option<String>,

        /// Repository URL embedded in the prompt
        #[arg(long)]
        repo_url: Option<String>,

        /// Formatting style (minimal, comprehensive, playful)
        #[arg(long)]
        style: Option<String>,

        /// Skip badge instructions
        #[arg(long)]
        no_badges: bool,

        /// Skip the license section
        #[arg(long)]
        no_license: bool,

        /// Provider profile to use (default: default_provider from config)
        #[arg(long)]
        provider: Option<String>,

        /// Also write the final document to this path
        #[arg(long)]
        out: Option<PathBuf>,

        /// Overwrite --out without confirmation
        #[arg(long)]
        force: bool,
    },
    /// Manage providers
    Provider {
        #[command(subcommand)]
        command: ProviderCommands,
    },
}

#[derive(Subcommand)]
pub enum ProviderCommands {
    /// List configured provider profiles
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one provider profile
    Show {
        /// Provider name
        name: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Test provider connectivity and model availability
    Test {
        /// Provider name (defaults like generate: default_provider, then sole profile)
        name: Option<String>,
    },
}
