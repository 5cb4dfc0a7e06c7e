//! Child process execution

use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

/// Captured result of one tool invocation
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// Stdout followed by stderr, as a user would have seen it
    pub fn combined(&self) -> String {
        let mut combined = self.stdout.trim_end().to_string();
        let stderr = self.stderr.trim_end();
        if !stderr.is_empty() {
            if !combined.is_empty() {
                combined.push('\n');
            }
            combined.push_str(stderr);
        }
        combined
    }
}

/// Run `command args... targets...` in `cwd` and wait for it
///
/// Only a failure to spawn is an error; a non-zero exit is reported through
/// [`ToolOutput::success`].
pub fn run_tool<S: AsRef<OsStr>>(
    command: &str,
    args: &[String],
    targets: &[S],
    cwd: &Path,
) -> Result<ToolOutput> {
    tracing::debug!(
        "Running {} {} with {} targets in {}",
        command,
        args.join(" "),
        targets.len(),
        cwd.display()
    );

    let output = Command::new(command)
        .args(args)
        .args(targets)
        .current_dir(cwd)
        .output()
        .with_context(|| format!("Failed to execute {}", command))?;

    let result = ToolOutput {
        success: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    tracing::trace!("{} exited with {:?}", command, result.code);
    Ok(result)
}
