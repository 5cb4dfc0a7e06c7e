//! Hook command implementations
//!
//! Entry points git calls through the installed hook scripts.

use super::GlobalArgs;
use crate::cli::Output;
use crate::git::GitRepo;
use crate::hooks::{self, HookContext};
use anyhow::Result;
use std::path::Path;

/// Run the pre-commit checks; exit code 1 aborts the commit
pub fn pre_commit(global: &GlobalArgs, output: Output) -> Result<i32> {
    let repo = GitRepo::discover(".")?;
    let context = context(global, output, &repo)?;

    let status = hooks::pre_commit::execute(&context, &repo)?;
    if !status.is_failed() {
        output.success("All pre-commit checks passed");
    }

    Ok(status.exit_code())
}

/// Tag the commit message; never blocks the commit
///
/// Only a message file that cannot be read or written is an error. Repository
/// and configuration problems leave the message as written.
pub fn commit_msg(global: &GlobalArgs, output: Output, message_file: &Path) -> Result<i32> {
    let loaded = GitRepo::discover(".").and_then(|repo| {
        let config = global.load_config(repo.workdir())?;
        Ok((repo, config))
    });

    let (repo, config) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            output.warning(&format!("Commit message left unchanged: {:#}", e));
            return Ok(0);
        }
    };

    let context = HookContext::new(config, output);
    hooks::commit_msg::execute(&context, &repo, message_file)?;
    Ok(0)
}

fn context(global: &GlobalArgs, output: Output, repo: &GitRepo) -> Result<HookContext> {
    let config = global.load_config(repo.workdir())?;
    config.validate()?;
    Ok(HookContext::new(config, output).with_skip_tool_check(global.skip_tool_check))
}
