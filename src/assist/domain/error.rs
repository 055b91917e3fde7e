//! Error types for assist domain validation.

use thiserror::Error;

/// Errors returned while constructing assist domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssistDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
}
