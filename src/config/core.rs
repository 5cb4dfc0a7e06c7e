use super::LintgateConfig;
use super::smart_load;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use std::path::{Path, PathBuf};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Repository config file names, lowest priority first
const REPO_CONFIG_FILES: &[&str] = &[
    "lintgate.toml",
    "lintgate.json",
    "lintgate.yaml",
    "lintgate.yml",
];

impl LintgateConfig {
    /// Load configuration for the repository rooted at `repo_dir`
    pub fn load_from(repo_dir: &Path, custom_config: Option<&Path>) -> Result<Self> {
        let figment = Self::figment(repo_dir, custom_config)?;
        let config: LintgateConfig = figment
            .extract()
            .context("Failed to parse lintgate configuration")?;

        tracing::debug!(
            "Loaded configuration: {} languages, {} debug patterns",
            config.languages.len(),
            config.debug.patterns.len()
        );

        Ok(config)
    }

    /// Only the embedded defaults
    pub fn defaults() -> Result<Self> {
        Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .extract()
            .context("Embedded default configuration is invalid")
    }

    /// Build the layered figment without extracting it
    pub fn figment(repo_dir: &Path, custom_config: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(user_config) = Self::user_config_path() {
            tracing::trace!("CONFIG LOAD: user config {}", user_config.display());
            figment = figment
                .merge(Toml::file(&user_config))
                .merge(Json::file(user_config.with_extension("json")))
                .merge(Yaml::file(user_config.with_extension("yaml")))
                .merge(Yaml::file(user_config.with_extension("yml")));
        }

        // An explicit config replaces the repository files
        if let Some(custom_path) = custom_config {
            if !custom_path.exists() {
                anyhow::bail!("Config file not found: {}", custom_path.display());
            }
            tracing::trace!("CONFIG LOAD: custom config {}", custom_path.display());
            figment = figment.merge(smart_load::auto(custom_path));
        } else {
            for name in REPO_CONFIG_FILES {
                let path = repo_dir.join(name);
                if path.exists() {
                    tracing::trace!("CONFIG LOAD: repository config {}", path.display());
                    figment = figment.merge(smart_load::auto(path));
                }
            }
        }

        // Environment variables always have highest priority; the CLI reads
        // LINTGATE_SKIP_TOOL_CHECK and LINTGATE_LOG itself
        Ok(figment.merge(
            Env::prefixed("LINTGATE_")
                .ignore(&["SKIP_TOOL_CHECK", "LOG"])
                .split("__"),
        ))
    }

    fn user_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config/lintgate/config.toml"))
    }
}
