//! External tool integration
//!
//! Runs the configured linters and formatters as child processes and turns
//! their exit status and output into reports the hooks can act on.

pub mod formatters;
pub mod linters;
pub mod process;

pub use formatters::{FormatOutcome, FormatReport, run_formatter};
pub use linters::{LintIssue, LintReport, LintRun, run_linter};
pub use process::{ToolOutput, run_tool};
