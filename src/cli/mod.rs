//! Command-line interface for lintgate
//!
//! Git invokes `lintgate pre-commit` and `lintgate commit-msg <FILE>` from the
//! hook scripts; the remaining commands help set a repository up.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
mod output;

pub use output::Output;

/// lintgate - Git hooks that keep linters, formatters and debug code in check
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path (highest priority below environment variables)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (only failures)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Skip the required tool check for this run
    #[arg(long, global = true, env = "LINTGATE_SKIP_TOOL_CHECK")]
    pub skip_tool_check: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the pre-commit checks against staged files
    PreCommit,
    /// Append the branch issue identifier to a commit message file
    CommitMsg {
        /// Path of the commit message file git passes to the hook
        file: PathBuf,
    },
    /// Check that every required tool is installed
    Tools,
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = ShowFormat::Text)]
        format: ShowFormat,
    },
    /// Validate the merged configuration
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Text,
    Toml,
    Json,
    Yaml,
}

impl Cli {
    /// Execute the CLI command and return the process exit code
    pub fn run(self) -> Result<i32> {
        let output = Output::new(self.verbose, self.quiet);
        let global = commands::GlobalArgs {
            config: self.config,
            skip_tool_check: self.skip_tool_check,
        };

        match self.command {
            Some(Commands::PreCommit) => commands::hooks::pre_commit(&global, output),
            Some(Commands::CommitMsg { file }) => {
                commands::hooks::commit_msg(&global, output, &file)
            }
            Some(Commands::Tools) => commands::tools::execute(&global, &output),
            Some(Commands::Config(cmd)) => commands::config::execute(cmd, &global, &output),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_commit_msg_with_globals() {
        let cli = Cli::parse_from(["lintgate", "commit-msg", ".git/COMMIT_EDITMSG", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::CommitMsg { file }) => {
                assert_eq!(file, PathBuf::from(".git/COMMIT_EDITMSG"))
            }
            _ => panic!("expected commit-msg"),
        }
    }

    #[test]
    fn test_parse_config_show_format() {
        let cli = Cli::parse_from(["lintgate", "config", "show", "--format", "yaml"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommands::Show {
                format: ShowFormat::Yaml
            }))
        ));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["lintgate", "-q", "-v", "tools"]).is_err());
    }
}
