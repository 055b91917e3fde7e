//! Adapter implementations for the AI helper ports.

pub mod memory;
