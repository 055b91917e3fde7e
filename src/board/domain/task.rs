//! Task aggregate root and status type.

use super::{ProjectId, TaskId, TaskKey};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task workflow status.
///
/// The synchronization engine only ever writes [`TaskStatus::InProgress`]
/// and [`TaskStatus::Done`]. Statuses minted by other collaborators (custom
/// board columns) round-trip through [`TaskStatus::Custom`] unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Todo,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Done,
    /// Status owned by another collaborator, preserved verbatim.
    Custom(String),
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Custom(value) => value,
        }
    }

    /// Parses a storage representation, preserving unknown values.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "todo" => Self::Todo,
            "in_progress" => Self::InProgress,
            "done" => Self::Done,
            other => Self::Custom(other.to_owned()),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Custom(value) => value,
            other => other.as_str().to_owned(),
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    key: TaskKey,
    status: TaskStatus,
    last_commit_message: Option<String>,
    last_commit_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project identifier.
    pub project_id: ProjectId,
    /// Persisted human-facing task key.
    pub key: TaskKey,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted message of the last commit that touched this task.
    pub last_commit_message: Option<String>,
    /// Persisted URL of the last commit that touched this task.
    pub last_commit_url: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in `todo` status with no commit provenance.
    #[must_use]
    pub fn new(project_id: ProjectId, key: TaskKey, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            project_id,
            key,
            status: TaskStatus::Todo,
            last_commit_message: None,
            last_commit_url: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            key: data.key,
            status: data.status,
            last_commit_message: data.last_commit_message,
            last_commit_url: data.last_commit_url,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the human-facing task key.
    #[must_use]
    pub const fn key(&self) -> &TaskKey {
        &self.key
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the message of the last commit that touched this task.
    #[must_use]
    pub fn last_commit_message(&self) -> Option<&str> {
        self.last_commit_message.as_deref()
    }

    /// Returns the URL of the last commit that touched this task.
    #[must_use]
    pub fn last_commit_url(&self) -> Option<&str> {
        self.last_commit_url.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Records a commit that referenced this task.
    ///
    /// Overwrites status and commit provenance unconditionally. Processing
    /// commits in delivery order therefore yields last-write-wins semantics
    /// within a delivery.
    pub fn record_commit(
        &mut self,
        status: TaskStatus,
        message: impl Into<String>,
        url: impl Into<String>,
        clock: &impl Clock,
    ) {
        self.status = status;
        self.last_commit_message = Some(message.into());
        self.last_commit_url = Some(url.into());
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
