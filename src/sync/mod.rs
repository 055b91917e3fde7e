//! Commit-driven task status synchronization for Trellis.
//!
//! This module implements the webhook-facing engine that keeps board task
//! status in step with source-control activity: decoding an inbound push
//! delivery, resolving the repository to a project, scanning commit
//! messages for task references, deriving the intended status from closing
//! keywords, and applying idempotent task updates in delivery order. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]
//! - Inbound adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
