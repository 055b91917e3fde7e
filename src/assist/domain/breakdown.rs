//! Task-breakdown value objects.

use super::AssistDomainError;
use serde::{Deserialize, Serialize};

/// Request payload for generating a task breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRequest {
    title: String,
    task_type: String,
}

impl BreakdownRequest {
    /// Creates a breakdown request from a task title and type.
    ///
    /// # Errors
    ///
    /// Returns [`AssistDomainError::EmptyTitle`] if the title is empty
    /// after trimming.
    pub fn new(
        title: impl Into<String>,
        task_type: impl Into<String>,
    ) -> Result<Self, AssistDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(AssistDomainError::EmptyTitle);
        }

        Ok(Self {
            title: normalized_title.to_owned(),
            task_type: task_type.into(),
        })
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task type.
    #[must_use]
    pub fn task_type(&self) -> &str {
        &self.task_type
    }
}

/// Generated breakdown as returned by the completion provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBreakdown {
    /// Suggested task description.
    pub description: String,
    /// Suggested subtask titles.
    pub subtasks: Vec<String>,
    /// Suggested story-point estimate.
    pub points: u32,
}
