//! Canned completion provider for consumer tests.

use crate::assist::domain::{BreakdownRequest, TaskBreakdown};
use crate::assist::ports::{CompletionProvider, CompletionResult};
use async_trait::async_trait;

/// Completion provider returning pre-configured responses.
///
/// `breakdown` always yields the configured value; `polish` echoes the
/// input with surrounding whitespace trimmed.
#[derive(Debug, Clone)]
pub struct CannedCompletionProvider {
    breakdown: TaskBreakdown,
}

impl CannedCompletionProvider {
    /// Creates a provider that answers every breakdown request with the
    /// given value.
    #[must_use]
    pub const fn new(breakdown: TaskBreakdown) -> Self {
        Self { breakdown }
    }
}

#[async_trait]
impl CompletionProvider for CannedCompletionProvider {
    async fn breakdown(&self, _request: &BreakdownRequest) -> CompletionResult<TaskBreakdown> {
        Ok(self.breakdown.clone())
    }

    async fn polish(&self, text: &str) -> CompletionResult<String> {
        Ok(text.trim().to_owned())
    }
}
