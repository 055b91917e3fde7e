//! Closing-keyword status policy.

use crate::board::domain::TaskStatus;

/// Default closing-keyword vocabulary.
pub const CLOSING_KEYWORDS: [&str; 9] = [
    "fix", "fixes", "fixed", "close", "closes", "closed", "resolve", "resolves", "done",
];

/// Derives the intended task status from a commit message.
///
/// The policy is stateless and commit-local: it never inspects a task's
/// current status, so a task already `done` is reopened to `in_progress`
/// by a later commit that merely mentions its key. Keyword matching is a
/// plain case-insensitive substring test, not word-bounded ("prefixes"
/// matches "fix"); the heuristic favours signalling "someone touched this"
/// over a strict forward-only status machine.
#[derive(Debug, Clone)]
pub struct StatusPolicy {
    closing_keywords: Vec<String>,
}

impl StatusPolicy {
    /// Creates a policy with a custom closing-keyword vocabulary.
    ///
    /// Keywords are lowercased; matching happens against the lowercased
    /// commit message.
    #[must_use]
    pub fn new(closing_keywords: impl IntoIterator<Item = String>) -> Self {
        Self {
            closing_keywords: closing_keywords
                .into_iter()
                .map(|keyword| keyword.to_lowercase())
                .collect(),
        }
    }

    /// Returns the configured closing-keyword vocabulary.
    #[must_use]
    pub fn closing_keywords(&self) -> &[String] {
        &self.closing_keywords
    }

    /// Returns the status a commit with this message signals.
    #[must_use]
    pub fn target_status(&self, message: &str) -> TaskStatus {
        let lowered = message.to_lowercase();
        if self
            .closing_keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
        {
            TaskStatus::Done
        } else {
            TaskStatus::InProgress
        }
    }
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self::new(CLOSING_KEYWORDS.iter().map(|keyword| (*keyword).to_owned()))
    }
}
