//! Error type shared by the priority queue and the intent queue.
//!
//! Both conditions are raised at the call that violates the precondition.
//! Nothing in this crate retries or recovers internally.

use thiserror::Error;

/// Errors returned by order-heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A constructor or operation was given an unusable argument
    /// (zero starting capacity, blank identity).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// `extract_best` was called on a queue with no elements.
    #[error("priority queue is empty")]
    Empty,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Unit Tests
// ============================================================================
