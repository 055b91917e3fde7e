//! Domain model for the AI helper contracts.

mod breakdown;
mod error;

pub use breakdown::{BreakdownRequest, TaskBreakdown};
pub use error::AssistDomainError;
