//! Line-oriented debug statement search over staged files

use super::patterns::DebugPatterns;
use super::types::{DebugMatch, ScanResult, Warning};
use crate::config::DebugPatternConfig;
use anyhow::Result;
use grep_regex::RegexMatcher;
use grep_searcher::sinks::Lossy;
use grep_searcher::{BinaryDetection, Searcher, SearcherBuilder};
use std::path::{Path, PathBuf};

/// Scanner for leftover debugging statements
pub struct DebugScanner {
    patterns: DebugPatterns,
    /// Alternation of every pattern; `None` when nothing is configured
    matcher: Option<RegexMatcher>,
}

impl DebugScanner {
    pub fn new(configs: &[DebugPatternConfig]) -> Result<Self> {
        let patterns = DebugPatterns::new(configs)?;
        let matcher = if patterns.is_empty() {
            None
        } else {
            Some(RegexMatcher::new(&patterns.combined())?)
        };

        Ok(Self { patterns, matcher })
    }

    /// Scan `files`, given relative to `workdir`
    pub fn scan_paths(&self, workdir: &Path, files: &[PathBuf]) -> ScanResult {
        let mut result = ScanResult::default();
        let Some(matcher) = &self.matcher else {
            return result;
        };

        let mut searcher = Self::searcher();
        for file in files {
            match self.scan_file(&mut searcher, matcher, workdir, file) {
                Ok(mut matches) => {
                    result.stats.files_scanned += 1;
                    result.matches.append(&mut matches);
                }
                Err(e) => {
                    tracing::warn!("Failed to scan {}: {}", file.display(), e);
                    result.stats.files_skipped += 1;
                    result.warnings.push(Warning {
                        path: file.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        result
    }

    fn searcher() -> Searcher {
        SearcherBuilder::new()
            .binary_detection(BinaryDetection::quit(b'\x00'))
            .line_number(true)
            .build()
    }

    fn scan_file(
        &self,
        searcher: &mut Searcher,
        matcher: &RegexMatcher,
        workdir: &Path,
        file: &Path,
    ) -> std::io::Result<Vec<DebugMatch>> {
        let mut matches = Vec::new();

        searcher.search_path(
            matcher,
            workdir.join(file),
            Lossy(|line_number, line| {
                if let Some(pattern) = self.patterns.flag(line) {
                    matches.push(DebugMatch {
                        path: file.to_path_buf(),
                        line_number,
                        pattern: pattern.to_string(),
                    });
                }
                Ok(true)
            }),
        )?;

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintgateConfig;
    use std::fs;
    use tempfile::TempDir;

    fn scanner() -> DebugScanner {
        let config = LintgateConfig::defaults().unwrap();
        DebugScanner::new(&config.debug.patterns).unwrap()
    }

    #[test]
    fn test_reports_file_and_line() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("app.py"),
            "import os\n# print(\"commented\")\nprint(\"debug\")\nvalue = string.printable\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("cmd")).unwrap();
        fs::write(
            dir.path().join("cmd/main.go"),
            "package main\n\nfunc main() {\n\t// fmt.Println(\"x\")\n\tfmt.Println(\"x\")\n}\n",
        )
        .unwrap();

        let files = vec![PathBuf::from("app.py"), PathBuf::from("cmd/main.go")];
        let result = scanner().scan_paths(dir.path(), &files);

        let found: Vec<String> = result.matches.iter().map(|m| m.to_string()).collect();
        assert_eq!(found, vec!["app.py:3", "cmd/main.go:5"]);
        assert_eq!(result.matches[1].pattern, "fmt-print");
        assert_eq!(result.stats.files_scanned, 2);
        assert!(!result.is_clean());
    }

    #[test]
    fn test_clean_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("lib.py"), "def f():\n    return 1\n").unwrap();

        let result = scanner().scan_paths(dir.path(), &[PathBuf::from("lib.py")]);

        assert!(result.is_clean());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_missing_file_is_skipped_with_warning() {
        let dir = TempDir::new().unwrap();

        let result = scanner().scan_paths(dir.path(), &[PathBuf::from("gone.py")]);

        assert!(result.is_clean());
        assert_eq!(result.stats.files_skipped, 1);
        assert_eq!(result.warnings[0].path, PathBuf::from("gone.py"));
    }

    #[test]
    fn test_binary_files_not_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("blob.bin"), b"\x00\x01print(\x00").unwrap();

        let result = scanner().scan_paths(dir.path(), &[PathBuf::from("blob.bin")]);

        assert!(result.is_clean());
    }

    #[test]
    fn test_no_patterns_scans_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.py"), "print(1)\n").unwrap();

        let result = DebugScanner::new(&[]).unwrap().scan_paths(dir.path(), &[PathBuf::from("app.py")]);

        assert!(result.is_clean());
        assert_eq!(result.stats.files_scanned, 0);
    }
}
