//! Command implementations for lintgate CLI
//!
//! Each command is organized into its own module. Commands return the
//! process exit code; only fatal problems come back as errors.

use crate::config::LintgateConfig;
use crate::git::GitRepo;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub mod config;
pub mod hooks;
pub mod tools;

/// Global flags shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub skip_tool_check: bool,
}

impl GlobalArgs {
    /// Load configuration for `repo_dir`, honoring `--config`
    pub fn load_config(&self, repo_dir: &Path) -> Result<LintgateConfig> {
        LintgateConfig::load_from(repo_dir, self.config.as_deref())
    }
}

/// Repository root when run inside one, otherwise the current directory
fn config_root() -> PathBuf {
    match GitRepo::discover(".") {
        Ok(repo) => repo.workdir().to_path_buf(),
        Err(e) => {
            tracing::debug!("Not inside a git repository: {:#}", e);
            PathBuf::from(".")
        }
    }
}
