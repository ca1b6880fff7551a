//! Core data types for order-heap
//!
//! ## Types
//!
//! - [`Order`]: A limit order, starting out as an unassigned intent
//! - [`Side`]: Buy or Sell
//!
//! ## Identifiers
//!
//! Brokers never assign identifiers. Every order they queue carries
//! [`UNASSIGNED_ID`] until the exchange admits it.

mod order;

pub use order::{Order, Side, UNASSIGNED_ID};
