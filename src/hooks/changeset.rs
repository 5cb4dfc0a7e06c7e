//! Staged file classification by language

use crate::config::LanguageConfig;
use std::path::PathBuf;

/// Staged files owned by one language
#[derive(Debug, Clone)]
pub struct LanguageBucket<'a> {
    pub language: &'a LanguageConfig,
    pub files: Vec<PathBuf>,
}

impl LanguageBucket<'_> {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Staged files partitioned into one bucket per configured language
#[derive(Debug, Clone)]
pub struct ChangeSet<'a> {
    pub buckets: Vec<LanguageBucket<'a>>,
}

impl<'a> ChangeSet<'a> {
    /// Partition `files` by suffix, keeping staged order inside each bucket
    ///
    /// A file goes to the first language claiming its suffix; files no
    /// language claims are left out.
    pub fn classify(files: &[PathBuf], languages: &'a [LanguageConfig]) -> Self {
        let mut buckets: Vec<LanguageBucket<'a>> = languages
            .iter()
            .map(|language| LanguageBucket {
                language,
                files: Vec::new(),
            })
            .collect();

        for file in files {
            if let Some(bucket) = buckets.iter_mut().find(|b| b.language.matches(file)) {
                bucket.files.push(file.clone());
            }
        }

        for bucket in &buckets {
            tracing::debug!("{} staged {} files", bucket.language.name, bucket.files.len());
        }

        Self { buckets }
    }
}
