//! Completion provider port.

use crate::assist::domain::{BreakdownRequest, TaskBreakdown};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for completion provider operations.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Text-completion collaborator contract.
///
/// Both operations are single-shot request/response calls; the engine in
/// this crate does not depend on them, and implementations own their own
/// prompt content, credentials, and transport.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generates a task breakdown from a title and type.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Provider`] when the collaborator fails.
    async fn breakdown(&self, request: &BreakdownRequest) -> CompletionResult<TaskBreakdown>;

    /// Polishes free text into a revised version.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Provider`] when the collaborator fails.
    async fn polish(&self, text: &str) -> CompletionResult<String>;
}

/// Errors returned by completion provider implementations.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// Collaborator-side failure.
    #[error("completion provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl CompletionError {
    /// Wraps a provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
