//! Error types for board domain validation.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The project key is empty or contains non-alphanumeric characters.
    #[error("invalid project key '{0}', expected a short alphanumeric token")]
    InvalidProjectKey(String),

    /// The task key does not follow `<PROJECT_KEY>-<digits>` format.
    #[error("invalid task key '{0}', expected <PROJECT_KEY>-<digits>")]
    InvalidTaskKey(String),

    /// The repository name does not follow `owner/repo` format.
    #[error("invalid repository name '{0}', expected owner/repo")]
    InvalidRepository(String),
}
