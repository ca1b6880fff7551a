//! Order intent record passed from brokers to the ingestion side.
//!
//! An [`Order`] starts life as an *intent*: its identifier is the sentinel
//! [`UNASSIGNED_ID`] until the exchange admits it and assigns a real one.
//! Prices and quantities are plain integers; range checks belong to the
//! exchange.

use std::fmt;

/// Identifier carried by an order that has not been admitted yet.
pub const UNASSIGNED_ID: u64 = 0;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// Buy order (bid) - wants to purchase the instrument
    Buy,
    /// Sell order (ask) - wants to sell the instrument
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("BUY"),
            Side::Sell => f.write_str("SELL"),
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A limit order, either still an intent or admitted with a real id.
///
/// ## Example
///
/// ```
/// use order_heap::types::{Order, Side};
///
/// let intent = Order::intent("Alice", "AAPL", Side::Buy, 100, 10);
/// assert!(!intent.is_assigned());
///
/// let admitted = intent.with_id(7);
/// assert_eq!(admitted.id, 7);
/// assert!(admitted.is_assigned());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    /// Order identifier, [`UNASSIGNED_ID`] until admitted
    pub id: u64,

    /// Identity of the broker that placed the order
    pub owner: String,

    /// Instrument code, e.g. "AAPL"
    pub instrument: String,

    /// Buy or Sell
    pub side: Side,

    /// Limit price in integer ticks
    pub limit_price: u64,

    /// Quantity in integer units
    pub quantity: u64,
}

impl Order {
    /// Create a new order with an explicit identifier
    pub fn new(
        id: u64,
        owner: impl Into<String>,
        instrument: impl Into<String>,
        side: Side,
        limit_price: u64,
        quantity: u64,
    ) -> Self {
        Self {
            id,
            owner: owner.into(),
            instrument: instrument.into(),
            side,
            limit_price,
            quantity,
        }
    }

    /// Create an order intent (identifier left unassigned)
    pub fn intent(
        owner: impl Into<String>,
        instrument: impl Into<String>,
        side: Side,
        limit_price: u64,
        quantity: u64,
    ) -> Self {
        Self::new(UNASSIGNED_ID, owner, instrument, side, limit_price, quantity)
    }

    /// Check whether the exchange has assigned a real identifier
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.id != UNASSIGNED_ID
    }

    /// Return this order carrying the given identifier
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
