//! # lintgate - Git hooks for Python and Go repositories
//!
//! lintgate runs as the `pre-commit` and `commit-msg` hooks of a repository.
//!
//! ## Features
//!
//! - **Linting**: pylint for staged Python files, golangci-lint for the Go packages they live in
//! - **Formatting**: yapf and gofmt rewrite staged files in place and abort the commit on drift
//! - **Debug code**: staged lines containing `print`, `fmt.Print` and friends block the commit
//! - **Issue tagging**: `feature/PROJ-1234-fix` turns a commit subject into `... #PROJ-1234`
//!
//! ## Quick Start
//!
//! ```bash
//! # .git/hooks/pre-commit
//! exec lintgate pre-commit
//!
//! # .git/hooks/commit-msg
//! exec lintgate commit-msg "$1"
//! ```

pub mod cli;
pub mod config;
pub mod external;
pub mod git;
pub mod hooks;
pub mod scanner;
pub mod tools;

pub use cli::{Cli, Output};
pub use config::LintgateConfig;
pub use hooks::{CheckReport, OverallStatus};
pub use tools::MissingTool;

/// Result type alias for lintgate operations
pub type Result<T> = anyhow::Result<T>;
