//! Configuration management for lintgate
//!
//! Configuration is layered with figment: embedded defaults, then the user
//! config, then the repository config (or an explicit `--config` file), then
//! `LINTGATE_*` environment variables. The merged result is extracted into
//! [`LintgateConfig`].

use anyhow::{Context, Result};
use globset::Glob;
use regex::Regex;
use serde::{Deserialize, Serialize};

mod core;
pub mod languages;
pub mod smart_load;

pub use languages::{FormatterConfig, LanguageConfig, LintOutput, LintTarget, LinterConfig};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintgateConfig {
    /// Required external tools
    pub tools: ToolsConfig,

    /// Languages checked by the pre-commit hook, in execution order
    #[serde(default)]
    pub languages: Vec<LanguageConfig>,

    /// Debugging statement detection
    pub debug: DebugConfig,

    /// Commit message augmentation
    pub commit_msg: CommitMsgConfig,
}

/// Tool validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Executables that must resolve on PATH
    #[serde(default)]
    pub required: Vec<String>,

    /// Skip the PATH lookup entirely
    #[serde(default)]
    pub skip_check: bool,
}

/// Debugging statement scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub patterns: Vec<DebugPatternConfig>,
}

/// A banned pattern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugPatternConfig {
    /// Pattern name shown next to each match
    pub name: String,

    /// Regex searched for on each line
    pub regex: String,

    /// Lines also matching this regex are not flagged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
}

/// Commit-msg hook configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitMsgConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Regex locating the issue identifier in the branch name
    pub pattern: String,

    /// Text written in front of the identifier
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_enabled() -> bool {
    true
}

fn default_prefix() -> String {
    "#".to_string()
}

impl LintgateConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for tool in &self.tools.required {
            if tool.trim().is_empty() {
                anyhow::bail!("Required tool names cannot be empty");
            }
        }

        for lang in &self.languages {
            if lang.name.is_empty() {
                anyhow::bail!("Every language needs a name");
            }
            if lang.extensions.is_empty() {
                anyhow::bail!("Language '{}' has no extensions", lang.name);
            }
            if lang.linter.command.is_empty() {
                anyhow::bail!("Language '{}' has an empty linter command", lang.name);
            }
            if lang.formatter.command.is_empty() {
                anyhow::bail!("Language '{}' has an empty formatter command", lang.name);
            }
            for pattern in &lang.formatter.exclude {
                Glob::new(pattern).with_context(|| {
                    format!("Invalid exclude glob '{}' for language '{}'", pattern, lang.name)
                })?;
            }
        }

        for pattern in &self.debug.patterns {
            Regex::new(&pattern.regex)
                .with_context(|| format!("Invalid regex for debug pattern '{}'", pattern.name))?;
            if let Some(exclude) = &pattern.exclude {
                Regex::new(exclude).with_context(|| {
                    format!("Invalid exclude regex for debug pattern '{}'", pattern.name)
                })?;
            }
        }

        Regex::new(&self.commit_msg.pattern).context("Invalid commit_msg.pattern regex")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests;
