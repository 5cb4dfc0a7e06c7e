//! Required tool validation
//!
//! Before any check runs, every external executable the hooks depend on must
//! resolve on the search path. A missing tool is an environment problem, not a
//! check failure, so it aborts the whole run with its own exit code.

use anyhow::Result;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;


/// Error raised when a required executable cannot be found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTool {
    pub tool: String,
}

impl MissingTool {
    /// Process exit code used when a required tool is missing
    pub const EXIT_CODE: i32 = 2;
}

impl fmt::Display for MissingTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Required tool '{}' is not installed or not on PATH", self.tool)
    }
}

impl std::error::Error for MissingTool {}

/// Result of a tool validation
#[derive(Debug, PartialEq)]
pub enum ToolCheck {
    /// Every tool resolved, with its location
    Verified(Vec<(String, PathBuf)>),
    /// Validation was switched off
    Skipped,
}

/// Validator for the configured required tools
pub struct ToolValidator {
    required: Vec<String>,
    search_path: Option<OsString>,
}

impl ToolValidator {
    /// Create a validator that searches `PATH`
    pub fn new(required: Vec<String>) -> Self {
        Self {
            required,
            search_path: None,
        }
    }

    /// Search an explicit path list instead of `PATH`
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    /// Resolve every required tool, failing on the first one missing
    pub fn validate(&self, skip: bool) -> Result<ToolCheck> {
        if skip {
            tracing::debug!("Tool validation skipped");
            return Ok(ToolCheck::Skipped);
        }

        let mut resolved = Vec::with_capacity(self.required.len());
        for tool in &self.required {
            match self.locate(tool) {
                Some(path) => {
                    tracing::trace!("Resolved {} at {}", tool, path.display());
                    resolved.push((tool.clone(), path));
                }
                None => {
                    return Err(MissingTool { tool: tool.clone() }.into());
                }
            }
        }

        Ok(ToolCheck::Verified(resolved))
    }

    fn locate(&self, tool: &str) -> Option<PathBuf> {
        match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().ok()?;
                which::which_in(tool, Some(paths), cwd).ok()
            }
            None => which::which(tool).ok(),
        }
    }
}
