//! Language configurations
//!
//! Each language names the file extensions it owns plus the linter and
//! formatter that run over its staged files. The defaults for Python and Go
//! live in `default-config.toml`.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language name used in status lines (e.g. "python")
    pub name: String,

    /// Filename suffixes owned by this language, including the dot
    pub extensions: Vec<String>,

    pub linter: LinterConfig,

    pub formatter: FormatterConfig,
}

/// Linter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Executable to run
    pub command: String,

    /// Arguments placed before the file or package list
    #[serde(default)]
    pub args: Vec<String>,

    /// Whether the linter takes files or package directories
    #[serde(default)]
    pub target: LintTarget,

    /// How to read the linter's stdout
    #[serde(default)]
    pub output: LintOutput,
}

/// Formatter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Executable to run; it must rewrite files in place
    pub command: String,

    /// Arguments placed before the file list
    #[serde(default)]
    pub args: Vec<String>,

    /// Glob patterns for files the formatter must never touch
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// What a linter is invoked against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LintTarget {
    /// One invocation over the exact staged files
    #[default]
    Files,
    /// One invocation per unique containing directory, recursively
    Packages,
}

/// Output format produced by a linter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LintOutput {
    /// `pylint --output-format=json`
    PylintJson,
    /// `golangci-lint run --output.json.path=stdout`
    GolangciJson,
    /// Anything else, passed through verbatim
    #[default]
    Text,
}

impl LanguageConfig {
    /// Check whether a path belongs to this language by suffix
    pub fn matches(&self, path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}
