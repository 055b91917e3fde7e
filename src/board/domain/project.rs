//! Project aggregate root.

use super::{ProjectId, ProjectKey, RepositoryFullName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Project record owning a set of tasks.
///
/// Projects are created and edited by the dashboard; the synchronization
/// engine treats them as read-only lookup targets. The `key` is optional at
/// the record level: a project without a key still participates in
/// synchronization through the configured default key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    key: Option<ProjectKey>,
    repo_full_name: RepositoryFullName,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted project key, if any.
    pub key: Option<ProjectKey>,
    /// Persisted external repository identity.
    pub repo_full_name: RepositoryFullName,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project linked to an external repository.
    #[must_use]
    pub fn new(
        key: Option<ProjectKey>,
        repo_full_name: RepositoryFullName,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ProjectId::new(),
            key,
            repo_full_name,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            key: data.key,
            repo_full_name: data.repo_full_name,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project key, if one is set.
    #[must_use]
    pub const fn key(&self) -> Option<&ProjectKey> {
        self.key.as_ref()
    }

    /// Returns the external repository identity.
    #[must_use]
    pub const fn repo_full_name(&self) -> &RepositoryFullName {
        &self.repo_full_name
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
}
