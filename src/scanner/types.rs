use std::fmt;
use std::path::PathBuf;

/// A line containing a banned debugging construct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugMatch {
    /// Path relative to the repository working directory
    pub path: PathBuf,
    /// 1-based line number
    pub line_number: u64,
    /// Name of the first pattern that matched the line
    pub pattern: String,
}

impl fmt::Display for DebugMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.line_number)
    }
}

/// Statistics from a scanning operation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
}

/// File that could not be scanned
#[derive(Debug, Clone)]
pub struct Warning {
    pub path: PathBuf,
    pub message: String,
}

/// Result of a scanning operation
#[derive(Debug, Default)]
pub struct ScanResult {
    pub matches: Vec<DebugMatch>,
    pub stats: ScanStats,
    pub warnings: Vec<Warning>,
}

impl ScanResult {
    pub fn is_clean(&self) -> bool {
        self.matches.is_empty()
    }
}
