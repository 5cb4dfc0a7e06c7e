//! Git hook implementations
//!
//! - `pre-commit`: validates required tools, scans staged files for debugging
//!   statements, then lints and formats each language that has staged files.
//!   Every check runs; the combined [`OverallStatus`] decides the exit code.
//! - `commit-msg`: appends the issue identifier found in the branch name to the
//!   commit message.

pub mod changeset;
pub mod commit_msg;
pub mod pre_commit;
pub mod status;

pub use changeset::{ChangeSet, LanguageBucket};
pub use commit_msg::CommitMsgOutcome;
pub use status::{CheckOutcome, CheckReport, OverallStatus};

use crate::cli::Output;
use crate::config::LintgateConfig;

/// Everything a hook needs besides the repository
pub struct HookContext {
    pub config: LintgateConfig,
    pub output: Output,
    /// Set from `--skip-tool-check`; `tools.skip_check` in config also applies
    pub skip_tool_check: bool,
}

impl HookContext {
    pub fn new(config: LintgateConfig, output: Output) -> Self {
        Self {
            config,
            output,
            skip_tool_check: false,
        }
    }

    pub fn with_skip_tool_check(mut self, skip: bool) -> Self {
        self.skip_tool_check = skip;
        self
    }

    fn tool_check_skipped(&self) -> bool {
        self.skip_tool_check || self.config.tools.skip_check
    }
}
