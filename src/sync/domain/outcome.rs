//! Tagged delivery outcomes.
//!
//! The engine distinguishes two failure granularities: whole-delivery
//! rejection (malformed payload, unresolvable project) and per-reference
//! misses that are swallowed while processing continues. Representing the
//! delivery-level result as a tagged type keeps the two structurally
//! distinguishable instead of threading exceptions through control flow.

/// Terminal result of processing one webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Delivery processed to completion, possibly as a no-op.
    Completed {
        /// Number of task update operations applied, in delivery order.
        tasks_updated: usize,
    },
    /// Delivery rejected wholesale; no partial processing occurred.
    Rejected(RejectionKind),
}

/// Reason a delivery was rejected wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionKind {
    /// The body could not be decoded as a push delivery.
    MalformedPayload {
        /// Human-readable diagnostic detail.
        detail: String,
    },
    /// No project is linked to the delivery's repository.
    ProjectNotFound {
        /// Repository identity that failed to resolve.
        repo_full_name: String,
    },
}
