//! Formatter utilities
//!
//! Formatters rewrite staged files in place. Afterwards the working tree is
//! compared with the index: any file the formatter changed is now different
//! from what the committer staged, so the commit has to stop until the
//! changes are reviewed and staged again. A second run after staging leaves
//! nothing to change.

use super::process::run_tool;
use crate::config::LanguageConfig;
use crate::git::GitRepo;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::PathBuf;

/// What happened when a formatter ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Every file was excluded, the formatter did not run
    Skipped,
    /// The formatter left every file as staged
    Clean { formatted: usize },
    /// The formatter changed these files
    Drift { changed: Vec<PathBuf> },
    /// The formatter could not run or exited non-zero
    ToolFailed { message: String },
}

/// Result of formatting one language's bucket
#[derive(Debug, Clone)]
pub struct FormatReport {
    pub formatter: String,
    pub outcome: FormatOutcome,
}

/// Format `files` in place and report which of them now differ from the index
pub fn run_formatter(
    repo: &GitRepo,
    language: &LanguageConfig,
    files: &[PathBuf],
) -> Result<FormatReport> {
    let formatter = &language.formatter;
    let excludes = build_excludes(&formatter.exclude)
        .with_context(|| format!("Invalid exclude patterns for {}", language.name))?;

    let targets: Vec<PathBuf> = files
        .iter()
        .filter(|file| !excludes.is_match(file))
        .cloned()
        .collect();

    if targets.len() < files.len() {
        tracing::debug!(
            "Excluded {} generated files from {}",
            files.len() - targets.len(),
            formatter.command
        );
    }

    let report = |outcome| FormatReport {
        formatter: formatter.command.clone(),
        outcome,
    };

    if targets.is_empty() {
        return Ok(report(FormatOutcome::Skipped));
    }

    let output = match run_tool(&formatter.command, &formatter.args, &targets, repo.workdir()) {
        Ok(output) => output,
        Err(e) => {
            return Ok(report(FormatOutcome::ToolFailed {
                message: format!("{:#}", e),
            }));
        }
    };

    if !output.success {
        let mut message = output.combined();
        if message.is_empty() {
            message = format!("{} exited with {:?}", formatter.command, output.code);
        }
        return Ok(report(FormatOutcome::ToolFailed { message }));
    }

    let changed = repo.changed_against_index(&targets)?;
    if changed.is_empty() {
        Ok(report(FormatOutcome::Clean {
            formatted: targets.len(),
        }))
    } else {
        Ok(report(FormatOutcome::Drift { changed }))
    }
}

fn build_excludes(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::{FormatterConfig, LintOutput, LintTarget, LinterConfig};
    use git2::Repository;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Appends a marker line to every file it is given
    const APPEND_FORMATTER: &str = "for f; do echo '# formatted' >> \"$f\"; done";

    fn language(script: &str, exclude: &[&str]) -> LanguageConfig {
        LanguageConfig {
            name: "python".to_string(),
            extensions: vec![".py".to_string()],
            linter: LinterConfig {
                command: "true".to_string(),
                args: vec![],
                target: LintTarget::Files,
                output: LintOutput::Text,
            },
            formatter: FormatterConfig {
                command: "sh".to_string(),
                args: vec!["-c".to_string(), script.to_string(), "fmt".to_string()],
                exclude: exclude.iter().map(|e| e.to_string()).collect(),
            },
        }
    }

    fn staged_repo(files: &[&str]) -> (TempDir, GitRepo) {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let mut index = repo.index().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "x = 1\n").unwrap();
            index.add_path(Path::new(file)).unwrap();
        }
        index.write().unwrap();
        let git = GitRepo::open(dir.path()).unwrap();
        (dir, git)
    }

    fn paths(files: &[&str]) -> Vec<PathBuf> {
        files.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_drift_counts_changed_files() {
        let files = ["a.py", "pkg/b.py"];
        let (_dir, git) = staged_repo(&files);

        let report = run_formatter(&git, &language(APPEND_FORMATTER, &[]), &paths(&files)).unwrap();

        match report.outcome {
            FormatOutcome::Drift { changed } => assert_eq!(changed.len(), 2),
            other => panic!("expected drift, got {:?}", other),
        }
    }

    #[test]
    fn test_second_run_after_staging_is_clean() {
        let files = ["a.py"];
        let (dir, git) = staged_repo(&files);
        let lang = language("for f; do grep -q formatted \"$f\" || echo '# formatted' >> \"$f\"; done", &[]);

        let first = run_formatter(&git, &lang, &paths(&files)).unwrap();
        assert!(matches!(first.outcome, FormatOutcome::Drift { .. }));

        let repo = Repository::open(dir.path()).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("a.py")).unwrap();
        index.write().unwrap();

        let second = run_formatter(&git, &lang, &paths(&files)).unwrap();
        assert_eq!(second.outcome, FormatOutcome::Clean { formatted: 1 });
    }

    #[test]
    fn test_excluded_files_are_not_formatted() {
        let files = ["api_pb2.py", "proto/svc_pb2_grpc.py", "app.py"];
        let (dir, git) = staged_repo(&files);
        let lang = language(APPEND_FORMATTER, &["*_pb2.py", "*_pb2_grpc.py"]);

        let report = run_formatter(&git, &lang, &paths(&files)).unwrap();

        assert_eq!(
            report.outcome,
            FormatOutcome::Drift {
                changed: vec![PathBuf::from("app.py")]
            }
        );
        assert_eq!(fs::read_to_string(dir.path().join("api_pb2.py")).unwrap(), "x = 1\n");
    }

    #[test]
    fn test_all_excluded_is_skipped() {
        let files = ["api_pb2.py"];
        let (_dir, git) = staged_repo(&files);

        let report = run_formatter(&git, &language(APPEND_FORMATTER, &["*_pb2.py"]), &paths(&files)).unwrap();

        assert_eq!(report.outcome, FormatOutcome::Skipped);
    }

    #[test]
    fn test_failing_formatter_reports_output() {
        let files = ["a.py"];
        let (_dir, git) = staged_repo(&files);

        let report = run_formatter(&git, &language("echo 'syntax error' >&2; exit 1", &[]), &paths(&files)).unwrap();

        assert_eq!(
            report.outcome,
            FormatOutcome::ToolFailed {
                message: "syntax error".to_string()
            }
        );
    }
}
