//! Orchestration services for commit-driven synchronization.

mod synchronizer;

pub use synchronizer::{CommitSyncError, CommitSyncResult, CommitSyncService};
