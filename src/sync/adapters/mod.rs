//! Adapter implementations for the synchronization engine.

pub mod http;
