//! Decoding of inbound webhook deliveries into typed push events.

use crate::board::domain::{BoardDomainError, RepositoryFullName};
use serde::Deserialize;
use thiserror::Error;

/// Event type value that triggers synchronization.
pub const PUSH_EVENT: &str = "push";

/// A single commit carried by a push delivery.
///
/// Transient value decoded from the wire; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushCommit {
    /// Commit identifier as reported by the provider.
    pub id: String,
    /// Full commit message.
    pub message: String,
    /// Browsable URL of the commit.
    pub url: String,
}

/// Decoded push delivery: repository identity plus its ordered commits.
///
/// Commits are kept in delivery order (oldest first); the last-write-wins
/// rule of the synchronization engine depends on that ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushEvent {
    /// Repository the push was made to.
    pub repository: RepositoryFullName,
    /// Commits in delivery order.
    pub commits: Vec<PushCommit>,
}

/// Result of decoding one inbound delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedDelivery {
    /// An actionable push event.
    Push(PushEvent),
    /// A non-push event, accepted as a no-op.
    Ignored {
        /// Event type reported by the sender.
        event_type: String,
    },
}

/// Errors returned while decoding a push delivery body.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The push payload body is not valid JSON.
    #[error("push payload is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The push payload lacks the repository identity.
    #[error("push payload is missing repository.full_name")]
    MissingRepository,

    /// The repository identity is not in `owner/repo` format.
    #[error(transparent)]
    InvalidRepository(#[from] BoardDomainError),
}

#[derive(Debug, Deserialize)]
struct RawPushPayload {
    repository: Option<RawRepository>,
    #[serde(default)]
    commits: Vec<RawCommit>,
}

#[derive(Debug, Deserialize)]
struct RawRepository {
    full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCommit {
    id: String,
    message: String,
    url: String,
}

/// Decodes an inbound delivery into a typed event.
///
/// Non-`push` event types are accepted without inspecting the body and
/// decode to [`DecodedDelivery::Ignored`]; the integration is push-only and
/// other events are reserved for future extension. A missing `commits`
/// array decodes as an empty commit list.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the header declares a `push` event and
/// the body cannot be parsed, lacks `repository.full_name`, or names a
/// repository that is not `owner/repo`.
pub fn decode_delivery(event_type: &str, body: &[u8]) -> Result<DecodedDelivery, DecodeError> {
    if event_type != PUSH_EVENT {
        return Ok(DecodedDelivery::Ignored {
            event_type: event_type.to_owned(),
        });
    }

    let raw: RawPushPayload = serde_json::from_slice(body).map_err(DecodeError::InvalidJson)?;
    let full_name = raw
        .repository
        .and_then(|repository| repository.full_name)
        .ok_or(DecodeError::MissingRepository)?;
    let repository = RepositoryFullName::new(full_name)?;
    let commits = raw
        .commits
        .into_iter()
        .map(|commit| PushCommit {
            id: commit.id,
            message: commit.message,
            url: commit.url,
        })
        .collect();

    Ok(DecodedDelivery::Push(PushEvent {
        repository,
        commits,
    }))
}
