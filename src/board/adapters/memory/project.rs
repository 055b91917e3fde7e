//! In-memory project repository for tests and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Project, ProjectId, RepositoryFullName},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: HashMap<ProjectId, Project>,
    repo_index: HashMap<RepositoryFullName, ProjectId>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.projects.contains_key(&project.id()) {
            return Err(ProjectRepositoryError::DuplicateProject(project.id()));
        }

        let repo_full_name = project.repo_full_name().clone();
        if state.repo_index.contains_key(&repo_full_name) {
            return Err(ProjectRepositoryError::DuplicateRepository(repo_full_name));
        }

        state.repo_index.insert(repo_full_name, project.id());
        state.projects.insert(project.id(), project.clone());
        Ok(())
    }

    async fn find_by_repo_full_name(
        &self,
        repo_full_name: &RepositoryFullName,
    ) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let project = state
            .repo_index
            .get(repo_full_name)
            .and_then(|project_id| state.projects.get(project_id))
            .cloned();
        Ok(project)
    }
}
