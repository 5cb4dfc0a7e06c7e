//! Debugging statement scanner
//!
//! Searches staged files line by line for leftover debugging code such as
//! print calls and debugger breakpoints. This is a purely lexical check: it
//! does not parse any language, so a banned call inside a multi-line string is
//! still flagged and whole-line comments are the only lines it ignores.

pub mod core;
pub mod patterns;
pub mod types;

// Re-export main types for easier access
pub use core::DebugScanner;
pub use patterns::{DebugPattern, DebugPatterns};
pub use types::{DebugMatch, ScanResult, ScanStats, Warning};
