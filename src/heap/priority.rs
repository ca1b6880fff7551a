//! Price-time orderings for admitted orders.
//!
//! The heap itself defines no tie order. Books that need strict price-time
//! priority pass one of these functions, which break price ties on the
//! exchange-assigned identifier (identifiers are handed out in arrival
//! order, so a lower id arrived earlier).
//!
//! - **Bids**: highest price first, then earliest arrival
//! - **Asks**: lowest price first, then earliest arrival

use std::cmp::Ordering;

use crate::types::{Order, Side};

/// Signature shared by the side orderings
pub type OrderOrdering = fn(&Order, &Order) -> Ordering;

/// Bid-side priority: higher limit price ranks first, then lower id
pub fn bid_priority(a: &Order, b: &Order) -> Ordering {
    b.limit_price
        .cmp(&a.limit_price)
        .then_with(|| a.id.cmp(&b.id))
}

/// Ask-side priority: lower limit price ranks first, then lower id
pub fn ask_priority(a: &Order, b: &Order) -> Ordering {
    a.limit_price
        .cmp(&b.limit_price)
        .then_with(|| a.id.cmp(&b.id))
}

/// Ordering for the book that holds orders of `side`
///
/// # Example
///
/// ```
/// use order_heap::heap::{for_side, PriorityQueue};
/// use order_heap::types::{Order, Side};
///
/// let mut bids = PriorityQueue::new(for_side(Side::Buy));
/// bids.insert(Order::new(1, "Alice", "AAPL", Side::Buy, 100, 10));
/// bids.insert(Order::new(2, "Bob", "AAPL", Side::Buy, 101, 10));
///
/// assert_eq!(bids.peek_best().map(|o| o.id), Some(2));
/// ```
pub fn for_side(side: Side) -> OrderOrdering {
    match side {
        Side::Buy => bid_priority,
        Side::Sell => ask_priority,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
