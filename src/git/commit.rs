//! Commit message utilities
//!
//! Helpers for pulling an issue identifier out of a branch name and writing
//! it into a commit message without disturbing the rest of the message.

use regex::Regex;

/// Extract the first issue identifier from a branch name
pub fn extract_issue_id(branch: &str, pattern: &Regex) -> Option<String> {
    pattern.find(branch).map(|m| m.as_str().to_string())
}

/// Append `<prefix><issue_id>` to the subject line of a commit message
///
/// The subject is the first line that is neither blank nor a `#` comment.
/// Every other byte of the message is preserved. Returns `None` when the tag
/// is already present or the message has no subject line.
pub fn append_issue_id(message: &str, issue_id: &str, prefix: &str) -> Option<String> {
    let tag = format!("{prefix}{issue_id}");
    if contains_tag(message, &tag) {
        return None;
    }

    let mut augmented = String::with_capacity(message.len() + tag.len() + 1);
    let mut appended = false;

    for line in message.split_inclusive('\n') {
        if !appended && is_subject_line(line) {
            let (content, ending) = split_line_ending(line);
            augmented.push_str(content.trim_end());
            augmented.push(' ');
            augmented.push_str(&tag);
            augmented.push_str(ending);
            appended = true;
        } else {
            augmented.push_str(line);
        }
    }

    appended.then_some(augmented)
}

fn is_subject_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

/// Whole-token containment, so `#PROJ-12` does not count as `#PROJ-1`
fn contains_tag(message: &str, tag: &str) -> bool {
    message.match_indices(tag).any(|(start, _)| {
        message[start + tag.len()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_ascii_alphanumeric())
    })
}
