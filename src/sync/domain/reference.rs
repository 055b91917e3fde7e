//! Textual extraction of task references from commit messages.

use crate::board::domain::{ProjectKey, TaskKey};
use regex::Regex;
use thiserror::Error;

/// Error returned when the task-reference pattern fails to compile.
#[derive(Debug, Error)]
#[error("failed to compile task-reference pattern for key '{key}': {source}")]
pub struct ReferencePatternError {
    /// Project key the pattern was built for.
    key: String,
    /// Underlying regex compilation failure.
    #[source]
    source: regex::Error,
}

/// Scans commit messages for `<PROJECT_KEY>-<digits>` task references.
///
/// Matching is purely textual and case-insensitive, anchored only by the
/// digit-run terminating: `NEX-12foo` yields `NEX-12`, and a key embedded
/// in a longer word still matches. That imprecision is part of the
/// contract; callers wanting stricter matching must not get it silently.
#[derive(Debug, Clone)]
pub struct ReferenceExtractor {
    pattern: Regex,
}

impl ReferenceExtractor {
    /// Compiles the reference matcher for one project key.
    ///
    /// # Errors
    ///
    /// Returns [`ReferencePatternError`] if the pattern fails to compile.
    /// Validated project keys are alphanumeric, so in practice compilation
    /// only fails for keys constructed outside the domain types.
    pub fn for_key(key: &ProjectKey) -> Result<Self, ReferencePatternError> {
        let pattern = Regex::new(&format!("(?i){}-[0-9]+", key.as_str())).map_err(|source| {
            ReferencePatternError {
                key: key.as_str().to_owned(),
                source,
            }
        })?;
        Ok(Self { pattern })
    }

    /// Returns the distinct task references in a commit message.
    ///
    /// Matches are normalized to uppercase; duplicate occurrences of the
    /// same key collapse to a single reference, preserving first-occurrence
    /// order. A message without references yields an empty list.
    #[must_use]
    pub fn extract(&self, message: &str) -> Vec<TaskKey> {
        let mut references = Vec::new();
        for found in self.pattern.find_iter(message) {
            // The pattern only produces <alnum>-<digits> text, so key
            // construction cannot fail here.
            let Ok(key) = TaskKey::new(found.as_str()) else {
                continue;
            };
            if !references.contains(&key) {
                references.push(key);
            }
        }
        references
    }
}
