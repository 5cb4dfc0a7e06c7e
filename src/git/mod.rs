//! Git integration layer for lintgate
//!
//! This module provides a high-level interface for Git operations using git2.
//! It answers the three questions the hooks ask of git: which files are
//! staged, which files differ from the index, and which branch is checked out.

use anyhow::{Context, Result};
use git2::{ErrorCode, Repository};
use std::path::{Path, PathBuf};

pub mod commit;
mod operations;

/// Git repository handle
pub struct GitRepo {
    pub(crate) repo: Repository,
    workdir: PathBuf,
}

impl GitRepo {
    /// Open the repository containing `path`
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref()).with_context(|| {
            format!("No Git repository found at {}", path.as_ref().display())
        })?;
        Self::from_repository(repo)
    }

    /// Open a repository at exactly `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path).context("Failed to open Git repository")?;
        Self::from_repository(repo)
    }

    fn from_repository(repo: Repository) -> Result<Self> {
        let workdir = repo
            .workdir()
            .context("Repository has no working directory")?
            .to_path_buf();

        Ok(Self { repo, workdir })
    }

    /// Working directory root; staged paths are relative to it
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Get the current branch name
    ///
    /// Returns `None` on a detached HEAD. A branch without commits yet is
    /// read from the symbolic `HEAD` reference.
    pub fn current_branch(&self) -> Result<Option<String>> {
        match self.repo.head() {
            Ok(head) => {
                if head.is_branch() {
                    Ok(head.shorthand().map(str::to_string))
                } else {
                    Ok(None)
                }
            }
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                let head = self
                    .repo
                    .find_reference("HEAD")
                    .context("Failed to read HEAD reference")?;
                Ok(head
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix("refs/heads/"))
                    .map(str::to_string))
            }
            Err(e) => Err(e).context("Failed to get HEAD reference"),
        }
    }
}
