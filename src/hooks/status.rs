//! Check outcomes and the overall hook status

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Failed,
    Skipped,
}

/// One named check with its outcome and the lines explaining it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub name: String,
    pub outcome: CheckOutcome,
    /// One-line summary printed next to the status word
    pub summary: String,
    /// Indented lines printed below a failure
    pub details: Vec<String>,
}

impl CheckReport {
    pub fn passed(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self::new(name, CheckOutcome::Passed, summary, Vec::new())
    }

    pub fn failed(name: impl Into<String>, summary: impl Into<String>, details: Vec<String>) -> Self {
        Self::new(name, CheckOutcome::Failed, summary, details)
    }

    pub fn skipped(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self::new(name, CheckOutcome::Skipped, summary, Vec::new())
    }

    fn new(
        name: impl Into<String>,
        outcome: CheckOutcome,
        summary: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            outcome,
            summary: summary.into(),
            details,
        }
    }
}

/// Aggregate status across every check in a hook run
///
/// Starts as passing. A single failed check latches it to failing; later
/// passes and skips never reset it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverallStatus {
    failed: bool,
    checks: Vec<CheckReport>,
}

impl OverallStatus {
    pub fn record(&mut self, report: CheckReport) {
        self.failed |= report.outcome == CheckOutcome::Failed;
        self.checks.push(report);
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Process exit code: 0 lets the commit through, 1 aborts it
    pub fn exit_code(&self) -> i32 {
        if self.failed { 1 } else { 0 }
    }

    pub fn checks(&self) -> &[CheckReport] {
        &self.checks
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckReport> {
        self.checks
            .iter()
            .filter(|check| check.outcome == CheckOutcome::Failed)
    }
}
