//! Human-facing key types for projects and tasks.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Short alphanumeric project token used as the task-reference prefix.
///
/// Keys are normalized to uppercase so that `nex`, `Nex`, and `NEX` all
/// denote the same project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectKey(String);

impl ProjectKey {
    /// Creates a validated, uppercase-normalized project key.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidProjectKey`] when the value is
    /// empty after trimming or contains non-alphanumeric ASCII characters.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let is_valid =
            !normalized.is_empty() && normalized.chars().all(|c| c.is_ascii_alphanumeric());

        if !is_valid {
            return Err(BoardDomainError::InvalidProjectKey(raw));
        }

        Ok(Self(normalized.to_ascii_uppercase()))
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-facing task reference of the form `<PROJECT_KEY>-<digits>`.
///
/// Unique within its owning project. Like [`ProjectKey`], task keys are
/// normalized to uppercase; the digit run is kept verbatim, so `NEX-007`
/// and `NEX-7` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskKey(String);

impl TaskKey {
    /// Creates a validated, uppercase-normalized task key.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTaskKey`] when the value does not
    /// split into an alphanumeric prefix and a decimal digit run separated
    /// by a single hyphen.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let Some((prefix, digits)) = normalized.split_once('-') else {
            return Err(BoardDomainError::InvalidTaskKey(raw));
        };

        let is_valid = !prefix.is_empty()
            && prefix.chars().all(|c| c.is_ascii_alphanumeric())
            && !digits.is_empty()
            && digits.chars().all(|c| c.is_ascii_digit());

        if !is_valid {
            return Err(BoardDomainError::InvalidTaskKey(raw));
        }

        Ok(Self(normalized.to_ascii_uppercase()))
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
