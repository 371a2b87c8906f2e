//! CLI route: single route table and run context. Dispatches to domain
//! services and presentation; owns the sync-to-async bridge.

use crate::cli::help::command_name;
use crate::cli::parse::{Commands, ProviderCommands};
use crate::cli::presentation;
use crate::config::{ConfigLoader, QuillConfig, ReadmeConfigPatch, ReadmeStyle};
use crate::error::ApiError;
use crate::generate::{cancel_pair, GenerationController};
use crate::provider::commands::ProviderCommandService;
use crate::provider::ProviderFactory;
use crate::source::{self, SourceSet};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: workspace root and loaded config.
pub struct RunContext {
    config: QuillConfig,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self {
            config,
            workspace_root,
        })
    }

    pub fn config(&self) -> &QuillConfig {
        &self.config
    }

    /// Execute a parsed command, returning text for stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        info!(command = %command_name(command), "executing command");
        match command {
            Commands::Generate {
                paths,
                project_name,
                repo_url,
                style,
                no_badges,
                no_license,
                provider,
                out,
                force,
            } => self.run_generate(GenerateArgs {
                paths,
                project_name: project_name.as_deref(),
                repo_url: repo_url.as_deref(),
                style: style.as_deref(),
                no_badges: *no_badges,
                no_license: *no_license,
                provider: provider.as_deref(),
                out: out.as_deref(),
                force: *force,
            }),
            Commands::Provider { command } => self.run_provider(command),
        }
    }

    fn run_generate(&self, args: GenerateArgs) -> Result<String, ApiError> {
        let mut sources = SourceSet::new();
        sources.add_files(source::read_sources(args.paths)?);

        let mut readme_config = self.config.generation.clone();
        readme_config.apply(ReadmeConfigPatch {
            project_name: args.project_name.map(str::to_string),
            repo_url: args.repo_url.map(str::to_string),
            include_badges: args.no_badges.then_some(false),
            include_license: args.no_license.then_some(false),
            style: args.style.map(ReadmeStyle::parse).transpose()?,
        });
        if readme_config.project_name.is_empty() {
            readme_config.project_name = default_project_name(&self.workspace_root);
        }

        let (provider_name, profile) = self.config.resolve_provider(args.provider)?;
        let resolved = profile.resolve(provider_name)?;
        let client = ProviderFactory::create_client(&resolved)?;
        info!(
            provider = provider_name,
            model = %profile.model,
            files = sources.len(),
            "starting generation"
        );

        let rt = tokio::runtime::Runtime::new().map_err(|e| {
            ApiError::GenerationFailed(format!("Failed to start async runtime: {}", e))
        })?;

        let controller = GenerationController::new();
        let state = rt.block_on(async {
            let (handle, token) = cancel_pair();
            let ctrl_c = tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    handle.cancel();
                }
            });

            let state = controller
                .run(
                    client.as_ref(),
                    sources.files(),
                    &readme_config,
                    &token,
                    |fragment| {
                        print!("{}", fragment);
                        let _ = std::io::stdout().flush();
                    },
                )
                .await;
            ctrl_c.abort();
            state
        });

        if let Some(message) = state.error {
            return Err(ApiError::GenerationFailed(message));
        }
        if !state.output.ends_with('\n') {
            println!();
        }

        if let Some(out_path) = args.out {
            write_output(out_path, &state.output, args.force)?;
        }
        eprintln!(
            "{}",
            presentation::format_generate_summary(state.output.len(), args.out)
        );
        Ok(String::new())
    }

    fn run_provider(&self, command: &ProviderCommands) -> Result<String, ApiError> {
        match command {
            ProviderCommands::List { format } => {
                let result = ProviderCommandService::list(&self.config);
                match format.as_str() {
                    "json" => presentation::format_provider_list_json(&result),
                    _ => Ok(presentation::format_provider_list_text(&result)),
                }
            }
            ProviderCommands::Show { name, format } => {
                let result = ProviderCommandService::show(&self.config, name)?;
                match format.as_str() {
                    "json" => presentation::format_provider_show_json(&result),
                    _ => Ok(presentation::format_provider_show_text(&result)),
                }
            }
            ProviderCommands::Test { name } => {
                let (provider_name, profile) = self.config.resolve_provider(name.as_deref())?;
                let rt = tokio::runtime::Runtime::new().map_err(|e| {
                    ApiError::ProviderError(format!("Failed to start async runtime: {}", e))
                })?;
                let result = rt.block_on(ProviderCommandService::test(provider_name, profile));
                Ok(presentation::format_provider_test_result(&result))
            }
        }
    }
}

struct GenerateArgs<'a> {
    paths: &'a [PathBuf],
    project_name: Option<&'a str>,
    repo_url: Option<&'a str>,
    style: Option<&'a str>,
    no_badges: bool,
    no_license: bool,
    provider: Option<&'a str>,
    out: Option<&'a Path>,
    force: bool,
}

fn default_project_name(workspace_root: &Path) -> String {
    workspace_root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "Untitled Project".to_string())
}

fn write_output(path: &Path, content: &str, force: bool) -> Result<(), ApiError> {
    if path.exists() && !force {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", path.display()))
            .default(false)
            .interact()
            .map_err(|e| ApiError::GenerationFailed(format!("Confirmation failed: {}", e)))?;
        if !confirmed {
            return Err(ApiError::GenerationFailed(format!(
                "Not overwriting {}",
                path.display()
            )));
        }
    }
    std::fs::write(path, content).map_err(|e| {
        ApiError::GenerationFailed(format!("Failed to write {}: {}", path.display(), e))
    })
}
