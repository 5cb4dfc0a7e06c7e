//! Pre-commit hook implementation
//!
//! This hook runs before commits are created and performs:
//! - Required tool validation (fatal, exit code 2)
//! - Debugging statement detection across all staged files
//! - Linting, then formatting, for each language with staged files
//!
//! Every check runs to completion so a single attempt shows every problem.

use super::{ChangeSet, CheckReport, HookContext, LanguageBucket, OverallStatus};
use crate::external::{FormatOutcome, run_formatter, run_linter};
use crate::git::GitRepo;
use crate::scanner::DebugScanner;
use crate::tools::{ToolCheck, ToolValidator};
use anyhow::Result;
use std::path::PathBuf;

/// Execute pre-commit hook
///
/// Only a missing required tool or an unreadable repository is an error;
/// check failures are folded into the returned status.
pub fn execute(context: &HookContext, repo: &GitRepo) -> Result<OverallStatus> {
    let output = &context.output;
    let config = &context.config;

    let validator = ToolValidator::new(config.tools.required.clone());
    match validator.validate(context.tool_check_skipped())? {
        ToolCheck::Verified(tools) => {
            output.verbose(&format!("All {} required tools found", tools.len()))
        }
        ToolCheck::Skipped => output.verbose("Required tool check skipped"),
    }

    let staged_files = repo.staged_files()?;
    output.verbose_summary("🔍", "Staged files", staged_files.len());

    let mut status = OverallStatus::default();
    let mut record = |report: CheckReport| {
        output.check_report(&report);
        status.record(report);
    };

    if config.debug.enabled {
        record(debug_check(context, repo, &staged_files));
    }

    let changes = ChangeSet::classify(&staged_files, &config.languages);
    for bucket in &changes.buckets {
        if bucket.is_empty() {
            record(CheckReport::skipped(
                bucket.language.name.as_str(),
                "no staged files",
            ));
            continue;
        }

        record(lint_check(repo, bucket));
        record(format_check(repo, bucket));
    }

    let failed = status.failed_checks().count();
    if failed > 0 {
        output.blank_line();
        output.error(&format!(
            "Commit aborted: {} of {} checks failed",
            failed,
            status.checks().len()
        ));
    }

    Ok(status)
}

fn debug_check(context: &HookContext, repo: &GitRepo, files: &[PathBuf]) -> CheckReport {
    const NAME: &str = "debug statements";

    if files.is_empty() {
        return CheckReport::skipped(NAME, "no staged files");
    }

    let scanner = match DebugScanner::new(&context.config.debug.patterns) {
        Ok(scanner) => scanner,
        Err(e) => return CheckReport::failed(NAME, format!("{:#}", e), Vec::new()),
    };

    let result = scanner.scan_paths(repo.workdir(), files);
    for warning in &result.warnings {
        context.output.warning(&format!(
            "Could not scan {}: {}",
            warning.path.display(),
            warning.message
        ));
    }

    if result.is_clean() {
        CheckReport::passed(
            NAME,
            format!("none found in {} files", result.stats.files_scanned),
        )
    } else {
        CheckReport::failed(
            NAME,
            format!("{} lines with debugging code", result.matches.len()),
            result.matches.iter().map(ToString::to_string).collect(),
        )
    }
}

fn lint_check(repo: &GitRepo, bucket: &LanguageBucket<'_>) -> CheckReport {
    let name = format!("{} lint", bucket.language.name);
    let report = run_linter(repo.workdir(), bucket.language, &bucket.files);

    if report.passed() {
        return CheckReport::passed(
            name,
            format!("{} passed on {} files", report.linter, report.files),
        );
    }

    let summary = match report.issue_count() {
        0 => format!("{} failed", report.linter),
        count => format!("{} reported {} issues", report.linter, count),
    };
    CheckReport::failed(name, summary, report.failure_details())
}

fn format_check(repo: &GitRepo, bucket: &LanguageBucket<'_>) -> CheckReport {
    let name = format!("{} format", bucket.language.name);

    let report = match run_formatter(repo, bucket.language, &bucket.files) {
        Ok(report) => report,
        Err(e) => return CheckReport::failed(name, format!("{:#}", e), Vec::new()),
    };

    match report.outcome {
        FormatOutcome::Skipped => CheckReport::skipped(name, "all staged files are excluded"),
        FormatOutcome::Clean { formatted } => CheckReport::passed(
            name,
            format!("{} left {} files unchanged", report.formatter, formatted),
        ),
        FormatOutcome::Drift { changed } => CheckReport::failed(
            name,
            format!(
                "{} reformatted {} files; review and stage them, then commit again",
                report.formatter,
                changed.len()
            ),
            changed.iter().map(|p| p.display().to_string()).collect(),
        ),
        FormatOutcome::ToolFailed { message } => CheckReport::failed(
            name,
            format!("{} failed", report.formatter),
            message.lines().map(str::to_string).collect(),
        ),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::cli::Output;
    use crate::config::{LintOutput, LintTarget, LintgateConfig};
    use crate::hooks::CheckOutcome;
    use crate::tools::MissingTool;
    use git2::Repository;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn sh(script: &str) -> (String, Vec<String>) {
        (
            "sh".to_string(),
            vec!["-c".to_string(), script.to_string(), "tool".to_string()],
        )
    }

    /// Defaults with every external tool replaced by a shell snippet
    fn config(lint: &str, format: &str) -> LintgateConfig {
        let mut config = LintgateConfig::defaults().unwrap();
        config.tools.required = vec!["sh".to_string()];
        for language in &mut config.languages {
            (language.linter.command, language.linter.args) = sh(lint);
            language.linter.target = LintTarget::Files;
            language.linter.output = LintOutput::Text;
            (language.formatter.command, language.formatter.args) = sh(format);
        }
        config
    }

    fn staged_repo(files: &[(&str, &str)]) -> (TempDir, GitRepo) {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let mut index = repo.index().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
            index.add_path(Path::new(name)).unwrap();
        }
        index.write().unwrap();
        let git = GitRepo::open(dir.path()).unwrap();
        (dir, git)
    }

    fn run(config: LintgateConfig, repo: &GitRepo) -> Result<OverallStatus> {
        let context = HookContext::new(config, Output::new(false, true));
        execute(&context, repo)
    }

    fn outcome<'a>(status: &'a OverallStatus, name: &str) -> &'a CheckOutcome {
        &status
            .checks()
            .iter()
            .find(|check| check.name == name)
            .unwrap_or_else(|| panic!("no check named {}", name))
            .outcome
    }

    #[test]
    fn test_non_language_files_skip_every_language() {
        let (_dir, git) = staged_repo(&[("README.md", "# Docs\n")]);

        let status = run(config("exit 1", "exit 1"), &git).unwrap();

        assert_eq!(status.exit_code(), 0);
        assert_eq!(outcome(&status, "debug statements"), &CheckOutcome::Passed);
        assert_eq!(outcome(&status, "python"), &CheckOutcome::Skipped);
        assert_eq!(outcome(&status, "go"), &CheckOutcome::Skipped);
    }

    #[test]
    fn test_print_statement_fails_the_commit() {
        let (_dir, git) = staged_repo(&[("app.py", "print('hi')\n")]);

        let status = run(config("true", "true"), &git).unwrap();

        assert!(status.is_failed());
        assert_eq!(outcome(&status, "debug statements"), &CheckOutcome::Failed);
        assert_eq!(outcome(&status, "python lint"), &CheckOutcome::Passed);
        assert_eq!(outcome(&status, "python format"), &CheckOutcome::Passed);

        let debug = status.failed_checks().next().unwrap();
        assert_eq!(debug.details, vec!["app.py:1".to_string()]);
    }

    #[test]
    fn test_lint_and_format_failures_are_both_reported() {
        let (_dir, git) = staged_repo(&[("svc/main.go", "package main\n")]);
        let lint = "echo 'main.go:1: unused variable'; exit 1";
        let format = "for f; do echo '// formatted' >> \"$f\"; done";

        let status = run(config(lint, format), &git).unwrap();

        assert_eq!(status.exit_code(), 1);
        assert_eq!(outcome(&status, "go lint"), &CheckOutcome::Failed);
        assert_eq!(outcome(&status, "go format"), &CheckOutcome::Failed);
        assert_eq!(outcome(&status, "python"), &CheckOutcome::Skipped);
        assert_eq!(status.failed_checks().count(), 2);
    }

    #[test]
    fn test_disabled_debug_check_is_not_run() {
        let (_dir, git) = staged_repo(&[("app.py", "print('hi')\n")]);
        let mut config = config("true", "true");
        config.debug.enabled = false;

        let status = run(config, &git).unwrap();

        assert_eq!(status.exit_code(), 0);
        assert!(status.checks().iter().all(|c| c.name != "debug statements"));
    }

    #[test]
    fn test_missing_tool_is_fatal() {
        let (_dir, git) = staged_repo(&[("app.py", "x = 1\n")]);
        let mut config = config("true", "true");
        config.tools.required = vec!["lintgate-missing-tool-xyz".to_string()];

        let err = run(config, &git).unwrap_err();

        let missing = err.downcast_ref::<MissingTool>().unwrap();
        assert_eq!(missing.tool, "lintgate-missing-tool-xyz");
    }

    #[test]
    fn test_skip_flag_bypasses_missing_tool() {
        let (_dir, git) = staged_repo(&[("app.py", "x = 1\n")]);
        let mut config = config("true", "true");
        config.tools.required = vec!["lintgate-missing-tool-xyz".to_string()];

        let context = HookContext::new(config, Output::new(false, true)).with_skip_tool_check(true);
        let status = execute(&context, &git).unwrap();

        assert_eq!(status.exit_code(), 0);
    }
}
