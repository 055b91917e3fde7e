//! Trellis: commit-driven task status synchronization for a project board.
//!
//! This crate implements the integration engine behind a project-management
//! dashboard: a webhook receiver that keeps task status in step with
//! source-control commit activity, plus the board records the engine
//! resolves against and the collaborator contracts for the AI-assisted
//! helper endpoints.
//!
//! # Architecture
//!
//! Trellis follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, etc.)
//!
//! # Modules
//!
//! - [`board`]: Project and task records with their repository ports
//! - [`sync`]: Commit-driven task status synchronization engine
//! - [`assist`]: AI helper collaborator contracts

pub mod assist;
pub mod board;
pub mod sync;
