//! Output system for lintgate
//!
//! Every check prints one line starting with a colored status word
//! (`SUCCESS`, `FAILED`, `SKIPPED`), followed by indented details on failure.
//! Colors come from `console` and are dropped automatically when the output
//! is not a terminal.

use crate::hooks::{CheckOutcome, CheckReport};
use console::style;

/// Output handler for consistent CLI formatting
#[derive(Debug, Clone, Copy)]
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a verbose summary with styling
    pub fn verbose_summary(&self, icon: &str, message: &str, count: usize) {
        if self.verbose {
            println!(
                "{} {} {}",
                style(icon).cyan(),
                style(message).dim(),
                style(format!("({})", count)).yellow().bold()
            );
        }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print a check result line, plus its details when it failed
    ///
    /// Failures are printed even in quiet mode.
    pub fn check_report(&self, report: &CheckReport) {
        let word = match report.outcome {
            CheckOutcome::Passed => style("SUCCESS").green().bold(),
            CheckOutcome::Failed => style("FAILED").red().bold(),
            CheckOutcome::Skipped => style("SKIPPED").yellow().bold(),
        };

        if self.quiet && report.outcome != CheckOutcome::Failed {
            return;
        }

        println!(
            "{:<7} {} {}",
            word,
            style(&report.name).bold(),
            style(&report.summary).dim()
        );

        if report.outcome == CheckOutcome::Failed {
            for detail in &report.details {
                self.indent(detail);
            }
        }
    }

    /// Print a table row
    pub fn table_row(&self, key: &str, value: &str) {
        println!("  {:<20} {}", style(key).dim(), value);
    }

    /// Print an indented message
    pub fn indent(&self, message: &str) {
        println!("    {}", message);
    }

    /// Print blank line
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }

    /// Print a critical error with enhanced styling
    pub fn critical(&self, message: &str) {
        eprintln!("{} {}", style("✖").red().bold(), style(message).red().bold());
    }
}
