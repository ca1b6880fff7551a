//! Per-broker queue of order intents awaiting ingestion.
//!
//! ## Hand-off
//!
//! ```text
//! place_buy_order / place_sell_order   (N -> N+1)
//!        |
//!        v
//!   pending_snapshot  --> exchange assigns ids, inserts into books
//!        |
//!        v
//!   clear_pending                       (N -> 0)
//! ```
//!
//! Intents are never lost as long as the caller snapshots before clearing
//! with no append in between. Holding `&mut IntentQueue` across both calls
//! guarantees that.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Order, Side};

/// Order intents queued by one broker.
///
/// ## Example
///
/// ```
/// use order_heap::broker::IntentQueue;
///
/// let mut broker = IntentQueue::new("Alice").unwrap();
/// broker.place_buy_order("AAPL", 100, 10);
///
/// let snapshot = broker.pending_snapshot();
/// assert_eq!(snapshot.len(), 1);
/// assert_eq!(snapshot[0].id, 0);
///
/// broker.clear_pending();
/// assert!(broker.pending_snapshot().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct IntentQueue {
    /// Trimmed, non-blank broker identity
    identity: String,

    /// Intents in placement order, all with an unassigned id
    pending: Vec<Order>,
}

impl IntentQueue {
    /// Create an empty intent queue for a broker
    ///
    /// Surrounding whitespace is trimmed from `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `identity` is empty after trimming.
    pub fn new(identity: &str) -> Result<Self> {
        let identity = identity.trim();
        if identity.is_empty() {
            return Err(Error::InvalidArgument("identity cannot be blank"));
        }

        Ok(Self {
            identity: identity.to_owned(),
            pending: Vec::new(),
        })
    }

    /// The broker identity given at construction
    #[inline]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Number of intents waiting for ingestion
    #[inline]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Queue a buy intent
    pub fn place_buy_order(&mut self, instrument: &str, limit_price: u64, quantity: u64) {
        self.place(instrument, Side::Buy, limit_price, quantity);
    }

    /// Queue a sell intent
    pub fn place_sell_order(&mut self, instrument: &str, limit_price: u64, quantity: u64) {
        self.place(instrument, Side::Sell, limit_price, quantity);
    }

    /// Independent copy of the pending intents, in placement order
    pub fn pending_snapshot(&self) -> Vec<Order> {
        self.pending.clone()
    }

    /// Drop all pending intents once the exchange has ingested a snapshot
    pub fn clear_pending(&mut self) {
        debug!(
            identity = %self.identity,
            cleared = self.pending.len(),
            "pending intents cleared"
        );
        self.pending.clear();
    }

    fn place(&mut self, instrument: &str, side: Side, limit_price: u64, quantity: u64) {
        self.pending.push(Order::intent(
            self.identity.as_str(),
            instrument,
            side,
            limit_price,
            quantity,
        ));

        debug!(
            identity = %self.identity,
            instrument,
            %side,
            limit_price,
            quantity,
            pending = self.pending.len(),
            "order intent queued"
        );
    }
}

impl fmt::Display for IntentQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntentQueue[{}]", self.identity)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
