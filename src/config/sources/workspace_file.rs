//! Workspace config file source: `<workspace>/quill.toml`. Overrides the
//! global file.

use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::Path;
use tracing::debug;

pub const WORKSPACE_CONFIG_NAME: &str = "quill.toml";

/// Add the workspace config file to the builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> ConfigBuilder<DefaultState> {
    let path = workspace_root.join(WORKSPACE_CONFIG_NAME);
    if path.exists() {
        builder = builder.add_source(File::from(path).required(false));
    } else {
        debug!(config_path = %path.display(), "no workspace config file");
    }
    builder
}
