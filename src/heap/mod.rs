//! Priority queue module for order-heap.
//!
//! ## Components
//!
//! - [`PriorityQueue`]: array-backed binary heap ordered by an injected
//!   comparison function
//! - [`bid_priority`] / [`ask_priority`]: price-time orderings for books
//!   of admitted [`Order`](crate::types::Order)s
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert | O(log n), amortized O(1) growth |
//! | Peek best | O(1) |
//! | Extract best | O(log n) |
//! | Len / is_empty | O(1) |
//!
//! ## Example
//!
//! ```
//! use order_heap::heap::{ask_priority, PriorityQueue};
//! use order_heap::types::{Order, Side};
//!
//! let mut asks = PriorityQueue::new(ask_priority);
//! asks.insert(Order::new(1, "Alice", "AAPL", Side::Sell, 105, 10));
//! asks.insert(Order::new(2, "Bob", "AAPL", Side::Sell, 103, 10));
//!
//! let best = asks.extract_best().unwrap();
//! assert_eq!(best.limit_price, 103);
//! ```

pub mod binary_heap;
pub mod priority;

pub use binary_heap::PriorityQueue;
pub use priority::{ask_priority, bid_priority, for_side, OrderOrdering};

/// Starting capacity used by [`PriorityQueue::new`]
pub const DEFAULT_CAPACITY: usize = 16;
