//! In-memory task repository for tests and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{ProjectId, Task, TaskId, TaskKey},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    key_index: HashMap<(ProjectId, TaskKey), TaskId>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        let index_key = (task.project_id(), task.key().clone());
        if state.key_index.contains_key(&index_key) {
            return Err(TaskRepositoryError::DuplicateKey {
                project_id: task.project_id(),
                key: task.key().clone(),
            });
        }

        state.key_index.insert(index_key, task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let old_task = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .clone();

        // Keys are stable in practice, but reindex anyway so the index never
        // drifts from the record store.
        let old_index_key = (old_task.project_id(), old_task.key().clone());
        state.key_index.remove(&old_index_key);
        state
            .key_index
            .insert((task.project_id(), task.key().clone()), task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_key(
        &self,
        project_id: ProjectId,
        key: &TaskKey,
    ) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let task = state
            .key_index
            .get(&(project_id, key.clone()))
            .and_then(|task_id| state.tasks.get(task_id))
            .cloned();
        Ok(task)
    }
}
