//! Commit message hook implementation
//!
//! This hook tags the commit message with the issue identifier embedded in
//! the branch name, e.g. `feature/PROJ-1234-fix` appends `#PROJ-1234`. When
//! there is nothing to add the message file is not written at all.

use super::HookContext;
use crate::git::GitRepo;
use crate::git::commit::{append_issue_id, extract_issue_id};
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// What the hook did to the message file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitMsgOutcome {
    /// The identifier was appended to the subject line
    Appended { issue_id: String },
    /// The file was left untouched
    Unchanged { reason: String },
}

/// Execute commit-msg hook against the message file git passed in
pub fn execute(context: &HookContext, repo: &GitRepo, message_file: &Path) -> Result<CommitMsgOutcome> {
    let config = &context.config.commit_msg;
    let output = &context.output;

    let unchanged = |reason: &str| -> Result<CommitMsgOutcome> {
        output.verbose(&format!("Commit message unchanged: {}", reason));
        Ok(CommitMsgOutcome::Unchanged {
            reason: reason.to_string(),
        })
    };

    if !config.enabled {
        return unchanged("commit_msg hook disabled");
    }

    let message = fs::read_to_string(message_file).with_context(|| {
        format!("Failed to read commit message file: {}", message_file.display())
    })?;

    let branch = match repo.current_branch() {
        Ok(Some(branch)) => branch,
        Ok(None) => return unchanged("HEAD is detached"),
        Err(e) => {
            output.warning(&format!("Could not read the current branch: {:#}", e));
            return unchanged("current branch unknown");
        }
    };

    let pattern = match Regex::new(&config.pattern) {
        Ok(pattern) => pattern,
        Err(e) => {
            output.warning(&format!("Invalid commit_msg.pattern regex: {}", e));
            return unchanged("commit_msg.pattern does not compile");
        }
    };

    let Some(issue_id) = extract_issue_id(&branch, &pattern) else {
        return unchanged(&format!("no issue identifier in branch '{}'", branch));
    };

    let Some(augmented) = append_issue_id(&message, &issue_id, &config.prefix) else {
        return unchanged(&format!("message already references {}", issue_id));
    };

    fs::write(message_file, augmented).with_context(|| {
        format!("Failed to write commit message file: {}", message_file.display())
    })?;

    tracing::debug!("Tagged commit message with {}{}", config.prefix, issue_id);
    output.success(&format!("Added {}{} to commit message", config.prefix, issue_id));

    Ok(CommitMsgOutcome::Appended { issue_id })
}
