//! Config loading facade: merges defaults, global file, workspace file, and
//! environment overrides into a validated [`QuillConfig`].

use crate::config::sources::{global_file, workspace_file};
use crate::config::QuillConfig;
use crate::error::ApiError;
use config::{Config, Environment, File};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace. Precedence, lowest to highest:
    /// built-in defaults, global config file, `<workspace>/quill.toml`,
    /// `QUILL__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<QuillConfig, ApiError> {
        let mut builder = Config::builder();
        builder = global_file::add_to_builder(builder)?;
        builder = workspace_file::add_to_builder(builder, workspace_root);
        builder = builder.add_source(
            Environment::with_prefix("QUILL")
                .separator("__")
                .try_parsing(true),
        );

        let config: QuillConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load a single explicit config file, bypassing the layered sources.
    pub fn load_from_file(path: &Path) -> Result<QuillConfig, ApiError> {
        let config: QuillConfig = Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
