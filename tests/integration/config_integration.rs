//! Configuration loading: file layering, deserialization, validation.

use quill::config::{ConfigLoader, ProviderKind, ReadmeStyle};

#[test]
fn explicit_file_populates_providers_and_generation() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
default_provider = "gemini"

[providers.gemini]
provider = "gemini"
model = "gemini-3-pro-preview"
api_key_env = "GEMINI_API_KEY"
thinking_budget = 4000

[providers.local]
provider = "ollama"
model = "llama3"

[generation]
project_name = "demo"
style = "minimal"
include_badges = false
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();

    assert_eq!(config.default_provider.as_deref(), Some("gemini"));
    let gemini = &config.providers["gemini"];
    assert_eq!(gemini.provider, ProviderKind::Gemini);
    assert_eq!(gemini.model, "gemini-3-pro-preview");
    assert_eq!(gemini.thinking_budget, Some(4000));
    assert_eq!(config.providers["local"].provider, ProviderKind::Ollama);

    assert_eq!(config.generation.project_name, "demo");
    assert_eq!(config.generation.style, ReadmeStyle::Minimal);
    assert!(!config.generation.include_badges);
    // Unset fields keep their defaults.
    assert!(config.generation.include_license);
}

#[test]
fn workspace_file_is_picked_up_from_workspace_root() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(
        temp.path().join("quill.toml"),
        r#"
[providers.local]
provider = "ollama"
model = "llama3"

[generation]
project_name = "from-workspace"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(temp.path()).unwrap();

    assert_eq!(config.generation.project_name, "from-workspace");
    assert!(config.providers.contains_key("local"));
}

#[test]
fn empty_workspace_falls_back_to_defaults() {
    let temp = tempfile::tempdir().unwrap();
    let config = ConfigLoader::load(temp.path()).unwrap();

    assert_eq!(config.generation.style, ReadmeStyle::Comprehensive);
    assert!(config.generation.include_badges);
    assert!(config.logging.enabled);
    assert_eq!(config.logging.output, "stderr");
}

#[test]
fn dangling_default_provider_fails_validation() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "default_provider = \"ghost\"\n").unwrap();

    assert!(ConfigLoader::load_from_file(&path).is_err());
}

#[test]
fn provider_without_model_fails_validation() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[providers.broken]
provider = "ollama"
model = ""
"#,
    )
    .unwrap();

    assert!(ConfigLoader::load_from_file(&path).is_err());
}

#[test]
fn unknown_style_in_file_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[generation]
style = "formal"
"#,
    )
    .unwrap();

    assert!(ConfigLoader::load_from_file(&path).is_err());
}
