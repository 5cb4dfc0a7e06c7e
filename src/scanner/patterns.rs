use crate::config::DebugPatternConfig;
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Lines whose first non-blank characters start a comment
    static ref COMMENT_LINE: Regex = Regex::new(r"^\s*(#|//)").expect("valid comment regex");
}

/// A compiled banned pattern
#[derive(Debug, Clone)]
pub struct DebugPattern {
    pub name: String,
    pub regex: Regex,
    pub exclude: Option<Regex>,
}

impl DebugPattern {
    fn flags(&self, line: &str) -> bool {
        self.regex.is_match(line) && !self.exclude.as_ref().is_some_and(|ex| ex.is_match(line))
    }
}

#[derive(Debug, Clone)]
pub struct DebugPatterns {
    pub patterns: Vec<DebugPattern>,
}

impl DebugPatterns {
    pub fn new(configs: &[DebugPatternConfig]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(configs.len());

        for config in configs {
            let regex = Regex::new(&config.regex)
                .with_context(|| format!("Invalid regex for debug pattern '{}'", config.name))?;
            let exclude = config
                .exclude
                .as_deref()
                .map(Regex::new)
                .transpose()
                .with_context(|| format!("Invalid exclude regex for debug pattern '{}'", config.name))?;

            patterns.push(DebugPattern {
                name: config.name.clone(),
                regex,
                exclude,
            });
        }

        Ok(DebugPatterns { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// One alternation of every pattern, used to find candidate lines quickly
    pub fn combined(&self) -> String {
        self.patterns
            .iter()
            .map(|p| format!("(?:{})", p.regex.as_str()))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Name of the first pattern flagging `line`, unless it is a whole-line comment
    pub fn flag(&self, line: &str) -> Option<&str> {
        if COMMENT_LINE.is_match(line) {
            return None;
        }

        self.patterns
            .iter()
            .find(|p| p.flags(line))
            .map(|p| p.name.as_str())
    }
}
