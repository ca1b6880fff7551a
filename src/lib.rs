//! # order-heap
//!
//! Ordering primitive and order intake for a price-time matching context.
//!
//! ## Architecture
//!
//! - **Types**: The [`Order`] record and its [`Side`]
//! - **Heap**: Comparator-ordered binary heap plus price-time orderings
//! - **Broker**: Per-broker queue of order intents awaiting ingestion
//!
//! ## Flow
//!
//! 1. A broker queues intents (identifier `0`) on its [`IntentQueue`]
//! 2. The exchange takes a snapshot, assigns identifiers, and inserts each
//!    order into a [`PriorityQueue`] per instrument per side
//! 3. The exchange clears the broker's pending intents
//!
//! Both containers are single-threaded; wrap them in a lock to share them.

// ============================================================================
// Module declarations
// ============================================================================

/// Error type shared by every fallible operation
pub mod error;

/// Core data types: Order, Side
pub mod types;

/// Priority queue and book orderings
pub mod heap;

/// Broker intent queue
pub mod broker;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{Error, Result};
pub use types::{Order, Side, UNASSIGNED_ID};
pub use heap::{ask_priority, bid_priority, PriorityQueue, DEFAULT_CAPACITY};
pub use broker::IntentQueue;
