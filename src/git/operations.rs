use super::GitRepo;
use anyhow::{Context, Result};
use git2::{DiffOptions, Status, StatusOptions};
use std::path::{Path, PathBuf};

impl GitRepo {
    /// Get files staged as added or modified, relative to the working directory
    ///
    /// Deletions and untracked files are left out since there is nothing to
    /// lint or format in them.
    pub fn staged_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut status_opts = StatusOptions::new();
        status_opts.include_ignored(false);
        status_opts.include_untracked(false);

        let statuses = self
            .repo
            .statuses(Some(&mut status_opts))
            .context("Failed to get repository status")?;

        for entry in statuses.iter() {
            if entry
                .status()
                .intersects(Status::INDEX_NEW | Status::INDEX_MODIFIED)
            {
                if let Some(path) = entry.path() {
                    files.push(PathBuf::from(path));
                }
            }
        }

        tracing::debug!("Found {} staged files", files.len());
        Ok(files)
    }

    /// Get the subset of `paths` whose working tree content differs from the index
    pub fn changed_against_index(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        if paths.is_empty() {
            return Ok(Vec::new());
        }

        let mut diff_opts = DiffOptions::new();
        diff_opts.disable_pathspec_match(true);
        for path in paths {
            diff_opts.pathspec(path.as_path());
        }

        let diff = self
            .repo
            .diff_index_to_workdir(None, Some(&mut diff_opts))
            .context("Failed to diff working tree against index")?;

        let changed: Vec<PathBuf> = diff
            .deltas()
            .filter_map(|delta| delta.new_file().path().or(delta.old_file().path()))
            .map(Path::to_path_buf)
            .collect();

        tracing::debug!(
            "{} of {} files differ from the index",
            changed.len(),
            paths.len()
        );
        Ok(changed)
    }
}
