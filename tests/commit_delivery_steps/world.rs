//! Shared world state for commit synchronization BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use trellis::board::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTaskRepository},
    domain::{Project, Task, TaskKey},
    ports::TaskRepository,
};
use trellis::sync::domain::{DeliveryOutcome, SyncConfig};
use trellis::sync::services::{CommitSyncResult, CommitSyncService};

/// Service type used by the BDD world.
pub type TestSyncService =
    CommitSyncService<InMemoryProjectRepository, InMemoryTaskRepository, DefaultClock>;

/// Scenario world for commit synchronization behaviour tests.
pub struct SyncWorld {
    pub service: TestSyncService,
    pub projects: InMemoryProjectRepository,
    pub tasks: InMemoryTaskRepository,
    pub clock: DefaultClock,
    pub project: Option<Project>,
    pub last_outcome: Option<CommitSyncResult<DeliveryOutcome>>,
}

impl SyncWorld {
    /// Creates a world with empty stores and the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        let projects = InMemoryProjectRepository::new();
        let tasks = InMemoryTaskRepository::new();
        let service = CommitSyncService::new(
            Arc::new(projects.clone()),
            Arc::new(tasks.clone()),
            Arc::new(DefaultClock),
            SyncConfig::standard().expect("standard configuration"),
        );
        Self {
            service,
            projects,
            tasks,
            clock: DefaultClock,
            project: None,
            last_outcome: None,
        }
    }

    /// Fetches a task by key within the scenario project.
    pub fn fetch_task(&self, key: &str) -> Result<Option<Task>, eyre::Report> {
        let project = self
            .project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing scenario project"))?;
        let task_key = TaskKey::new(key).map_err(|err| eyre::eyre!("invalid task key: {err}"))?;
        run_async(self.tasks.find_by_key(project.id(), &task_key))
            .map_err(|err| eyre::eyre!("task lookup failed: {err}"))
    }
}

impl Default for SyncWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SyncWorld {
    SyncWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
