//! Repository ports for project and task persistence.
//!
//! The synchronization engine needs exactly three store capabilities:
//! find a project by repository identity, find a task by key within a
//! project, and overwrite a task record. `store` exists on both ports so
//! that tests and the dashboard can seed records through the same contract.

use crate::board::domain::{Project, ProjectId, RepositoryFullName, Task, TaskId, TaskKey};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] when the project
    /// ID already exists or [`ProjectRepositoryError::DuplicateRepository`]
    /// when another project is already linked to the repository.
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Finds the project linked to the given repository identity.
    ///
    /// Returns `None` when no project matches. At most one project can
    /// match: repository identity is unique across projects.
    async fn find_by_repo_full_name(
        &self,
        repo_full_name: &RepositoryFullName,
    ) -> ProjectRepositoryResult<Option<Project>>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// Another project is already linked to the repository.
    #[error("repository already linked to a project: {0}")]
    DuplicateRepository(RepositoryFullName),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists or [`TaskRepositoryError::DuplicateKey`] when the key
    /// is already taken within the owning project.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (status, commit provenance,
    /// timestamps). The write replaces the stored record wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by human-facing key within the given project scope.
    ///
    /// Returns `None` when no task in the project carries the key.
    async fn find_by_key(
        &self,
        project_id: ProjectId,
        key: &TaskKey,
    ) -> TaskRepositoryResult<Option<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The key is already taken within the owning project.
    #[error("duplicate task key {key} in project {project_id}")]
    DuplicateKey {
        /// Owning project identifier.
        project_id: ProjectId,
        /// Conflicting task key.
        key: TaskKey,
    },

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
