//! Synchronization orchestrator: one delivery in, one outcome out.

use crate::board::ports::{
    ProjectRepository, ProjectRepositoryError, TaskRepository, TaskRepositoryError,
};
use crate::sync::domain::{
    DecodedDelivery, DeliveryOutcome, ReferenceExtractor, ReferencePatternError, RejectionKind,
    SyncConfig, decode_delivery,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Unexpected failures while processing a delivery.
///
/// These surface as a 500-equivalent response; rejections that are part of
/// the delivery contract (malformed payload, unresolvable project) are
/// [`DeliveryOutcome::Rejected`] values instead.
#[derive(Debug, Error)]
pub enum CommitSyncError {
    /// Project lookup failed at the persistence layer.
    #[error(transparent)]
    ProjectRepository(#[from] ProjectRepositoryError),

    /// Task lookup or update failed at the persistence layer.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),

    /// The task-reference pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] ReferencePatternError),
}

/// Result type for synchronization service operations.
pub type CommitSyncResult<T> = Result<T, CommitSyncError>;

/// Commit-driven task status synchronization service.
///
/// Stateless across deliveries; concurrent deliveries may run in parallel.
/// Within one delivery, commits and task writes are processed strictly in
/// delivery order so that the last commit referencing a task wins.
#[derive(Clone)]
pub struct CommitSyncService<P, T, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    clock: Arc<C>,
    config: SyncConfig,
}

impl<P, T, C> CommitSyncService<P, T, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new synchronization service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>, clock: Arc<C>, config: SyncConfig) -> Self {
        Self {
            projects,
            tasks,
            clock,
            config,
        }
    }

    /// Processes one webhook delivery to a terminal outcome.
    ///
    /// Non-`push` events and pushes without matching references complete
    /// successfully as no-ops. References to unknown tasks are skipped
    /// without aborting the rest of the delivery. Updates already applied
    /// when an error occurs remain applied; there is no rollback and no
    /// retry (redelivery is the sending provider's responsibility).
    ///
    /// # Errors
    ///
    /// Returns [`CommitSyncError`] on unexpected persistence or pattern
    /// failures.
    pub async fn process_delivery(
        &self,
        event_type: &str,
        body: &[u8],
    ) -> CommitSyncResult<DeliveryOutcome> {
        let push = match decode_delivery(event_type, body) {
            Ok(DecodedDelivery::Push(push)) => push,
            Ok(DecodedDelivery::Ignored { event_type: kind }) => {
                debug!(event_type = %kind, "ignoring non-push delivery");
                return Ok(DeliveryOutcome::Completed { tasks_updated: 0 });
            }
            Err(err) => {
                warn!(error = %err, "rejecting malformed delivery");
                return Ok(DeliveryOutcome::Rejected(RejectionKind::MalformedPayload {
                    detail: err.to_string(),
                }));
            }
        };

        let Some(project) = self.projects.find_by_repo_full_name(&push.repository).await? else {
            warn!(repository = %push.repository, "no project linked to repository");
            return Ok(DeliveryOutcome::Rejected(RejectionKind::ProjectNotFound {
                repo_full_name: push.repository.to_string(),
            }));
        };

        let project_key = project.key().cloned().unwrap_or_else(|| {
            warn!(
                project_id = %project.id(),
                fallback = %self.config.default_project_key(),
                "project has no key, substituting configured default"
            );
            self.config.default_project_key().clone()
        });
        let extractor = ReferenceExtractor::for_key(&project_key)?;

        let mut tasks_updated = 0_usize;
        for commit in &push.commits {
            let references = extractor.extract(&commit.message);
            if references.is_empty() {
                continue;
            }
            let status = self.config.policy().target_status(&commit.message);

            for key in references {
                let Some(mut task) = self.tasks.find_by_key(project.id(), &key).await? else {
                    debug!(
                        repository = %push.repository,
                        commit_id = %commit.id,
                        task_key = %key,
                        "referenced task not found, skipping"
                    );
                    continue;
                };

                task.record_commit(
                    status.clone(),
                    commit.message.clone(),
                    commit.url.clone(),
                    &*self.clock,
                );
                self.tasks.update(&task).await?;
                tasks_updated += 1;
                info!(
                    repository = %push.repository,
                    commit_id = %commit.id,
                    task_key = %key,
                    status = task.status().as_str(),
                    "task synchronized from commit"
                );
            }
        }

        Ok(DeliveryOutcome::Completed { tasks_updated })
    }
}
