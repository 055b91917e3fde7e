//! Step definitions for commit synchronization BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;
