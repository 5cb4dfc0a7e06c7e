//! Linter utilities
//!
//! Runs a language's linter over its staged files. File-oriented linters
//! (pylint) get the exact file list in one invocation. Package-oriented
//! linters (golangci-lint) run once per unique containing directory against
//! that directory's recursive package tree.
//!
//! Structured output modes are parsed into [`LintIssue`]s; anything that does
//! not parse is passed through verbatim.

use super::process::run_tool;
use crate::config::{LanguageConfig, LintOutput, LintTarget};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single finding reported by a linter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    pub path: String,
    pub line: u64,
    pub column: u64,
    pub rule: String,
    pub message: String,
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: [{}] {}",
            self.path, self.line, self.column, self.rule, self.message
        )
    }
}

/// Result of one linter invocation
#[derive(Debug, Clone)]
pub struct LintRun {
    /// Files or package pattern the linter was pointed at
    pub target: String,
    pub success: bool,
    pub issues: Vec<LintIssue>,
    /// Output kept verbatim when it could not be parsed
    pub raw_output: Option<String>,
}

/// Combined result of every invocation for one language
#[derive(Debug, Clone)]
pub struct LintReport {
    pub linter: String,
    pub files: usize,
    pub runs: Vec<LintRun>,
}

impl LintReport {
    pub fn passed(&self) -> bool {
        self.runs.iter().all(|run| run.success)
    }

    /// Detail lines for every failed invocation, in run order
    pub fn failure_details(&self) -> Vec<String> {
        let mut details = Vec::new();
        for run in self.runs.iter().filter(|run| !run.success) {
            if run.issues.is_empty() {
                match &run.raw_output {
                    Some(raw) if !raw.trim().is_empty() => {
                        details.extend(raw.lines().map(str::to_string));
                    }
                    _ => details.push(format!("{} failed on {}", self.linter, run.target)),
                }
            } else {
                details.extend(run.issues.iter().map(LintIssue::to_string));
            }
        }
        details
    }

    pub fn issue_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|run| !run.success)
            .map(|run| run.issues.len())
            .sum()
    }
}

/// Run the language's linter over `files`, relative to `workdir`
pub fn run_linter(workdir: &Path, language: &LanguageConfig, files: &[PathBuf]) -> LintReport {
    let linter = &language.linter;

    let runs = match linter.target {
        LintTarget::Files => {
            let target = files
                .iter()
                .map(|f| f.display().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            vec![lint_once(workdir, language, target, files)]
        }
        LintTarget::Packages => package_dirs(files)
            .iter()
            .map(|dir| {
                let pattern = package_pattern(dir);
                lint_once(workdir, language, pattern.clone(), &[pattern])
            })
            .collect(),
    };

    LintReport {
        linter: linter.command.clone(),
        files: files.len(),
        runs,
    }
}

fn lint_once<S: AsRef<std::ffi::OsStr>>(
    workdir: &Path,
    language: &LanguageConfig,
    target: String,
    targets: &[S],
) -> LintRun {
    let linter = &language.linter;

    let output = match run_tool(&linter.command, &linter.args, targets, workdir) {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!("{} could not be started: {:#}", linter.command, e);
            return LintRun {
                target,
                success: false,
                issues: Vec::new(),
                raw_output: Some(format!("{:#}", e)),
            };
        }
    };

    let parsed = match linter.output {
        LintOutput::PylintJson => parse_pylint_json(&output.stdout),
        LintOutput::GolangciJson => parse_golangci_json(&output.stdout),
        LintOutput::Text => None,
    };

    if parsed.is_none() && linter.output != LintOutput::Text {
        tracing::debug!(
            "{} output was not valid {:?}, passing it through",
            linter.command,
            linter.output
        );
    }

    let (issues, raw_output) = match parsed {
        Some(issues) if !issues.is_empty() || output.success => (issues, None),
        // Failed without parsable findings, show what the tool said
        _ => (Vec::new(), Some(output.combined())),
    };

    LintRun {
        target,
        success: output.success,
        issues,
        raw_output,
    }
}

/// Sorted unique directories containing `files`; the repository root is `.`
pub fn package_dirs(files: &[PathBuf]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|file| match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Recursive package pattern for a directory, e.g. `./cmd/server/...`
pub fn package_pattern(dir: &Path) -> String {
    if dir == Path::new(".") {
        "./...".to_string()
    } else {
        format!("./{}/...", dir.display())
    }
}

#[derive(Deserialize)]
struct PylintMessage {
    path: String,
    line: u64,
    #[serde(default)]
    column: u64,
    symbol: String,
    message: String,
    #[serde(rename = "message-id")]
    message_id: String,
}

/// Parse `pylint --output-format=json`
fn parse_pylint_json(stdout: &str) -> Option<Vec<LintIssue>> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Some(Vec::new());
    }

    let messages: Vec<PylintMessage> = serde_json::from_str(trimmed).ok()?;
    Some(
        messages
            .into_iter()
            .map(|m| LintIssue {
                path: m.path,
                line: m.line,
                column: m.column,
                rule: format!("{} {}", m.message_id, m.symbol),
                message: m.message,
            })
            .collect(),
    )
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GolangciOutput {
    #[serde(default)]
    issues: Option<Vec<GolangciIssue>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GolangciIssue {
    from_linter: String,
    text: String,
    pos: GolangciPos,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GolangciPos {
    filename: String,
    line: u64,
    #[serde(default)]
    column: u64,
}

/// Parse `golangci-lint run --output.json.path=stdout`
fn parse_golangci_json(stdout: &str) -> Option<Vec<LintIssue>> {
    // Only the first line carries the JSON document
    let document = stdout.lines().find(|line| line.trim_start().starts_with('{'))?;
    let output: GolangciOutput = serde_json::from_str(document).ok()?;

    Some(
        output
            .issues
            .unwrap_or_default()
            .into_iter()
            .map(|issue| LintIssue {
                path: issue.pos.filename,
                line: issue.pos.line,
                column: issue.pos.column,
                rule: issue.from_linter,
                message: issue.text,
            })
            .collect(),
    )
}
