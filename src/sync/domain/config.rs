//! Synchronization engine configuration.

use super::StatusPolicy;
use crate::board::domain::{BoardDomainError, ProjectKey};

/// Default key literal substituted for projects without a key of their own.
pub const DEFAULT_PROJECT_KEY: &str = "TASK";

/// Configuration for the synchronization engine.
///
/// Both knobs exist so the matching behaviour is exercisable
/// deterministically in tests: the fallback project key and the
/// closing-keyword vocabulary.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    default_project_key: ProjectKey,
    policy: StatusPolicy,
}

impl SyncConfig {
    /// Creates a configuration from explicit parts.
    #[must_use]
    pub const fn new(default_project_key: ProjectKey, policy: StatusPolicy) -> Self {
        Self {
            default_project_key,
            policy,
        }
    }

    /// Creates the standard configuration: default key literal
    /// [`DEFAULT_PROJECT_KEY`] and the default closing-keyword policy.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] if the default key literal fails
    /// validation; the shipped literal is statically valid, so this only
    /// arises when the constant is edited to an invalid token.
    pub fn standard() -> Result<Self, BoardDomainError> {
        Ok(Self::new(
            ProjectKey::new(DEFAULT_PROJECT_KEY)?,
            StatusPolicy::default(),
        ))
    }

    /// Returns the fallback project key.
    #[must_use]
    pub const fn default_project_key(&self) -> &ProjectKey {
        &self.default_project_key
    }

    /// Returns the status policy.
    #[must_use]
    pub const fn policy(&self) -> &StatusPolicy {
        &self.policy
    }
}
