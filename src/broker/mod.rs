//! Broker-side intent queue.
//!
//! A broker queues buy/sell intents with an unassigned identifier. The
//! exchange (outside this crate) snapshots them, assigns real identifiers,
//! inserts them into its books and then clears the queue.

pub mod intent_queue;

pub use intent_queue::IntentQueue;
