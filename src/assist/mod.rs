//! AI helper collaborator contracts for Trellis.
//!
//! The dashboard offers two AI-assisted helpers: generating a task
//! breakdown from a title and type, and polishing free text. Both are
//! single-shot calls to an external text-completion provider. This module
//! carries the contracts only — the provider is an opaque collaborator and
//! its prompt content lives outside this crate. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
