//! Project board records for Trellis.
//!
//! This module owns the persistent entities the synchronization engine
//! resolves against: projects (keyed by their external repository identity)
//! and the tasks they contain. Projects are created and edited by the
//! dashboard UI; the engine reads them and mutates task status and commit
//! provenance only. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
