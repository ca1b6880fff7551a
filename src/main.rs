//! order-heap - Binary Entry Point
//!
//! Walks one ingestion round: two brokers queue intents, an exchange-style
//! loop assigns identifiers and fills per-instrument books, then the books
//! are drained best-first.
//!
//! Set `RUST_LOG=debug` to see intent placement, `RUST_LOG=trace` for heap
//! growth.

use std::collections::BTreeMap;

use tracing::info;
use tracing_subscriber::EnvFilter;

use order_heap::heap::{for_side, OrderOrdering, PriorityQueue};
use order_heap::{IntentQueue, Order, Side};

type Book = PriorityQueue<Order, OrderOrdering>;

fn main() -> order_heap::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut alice = IntentQueue::new("Alice")?;
    let mut bob = IntentQueue::new("Bob")?;

    alice.place_buy_order("AAPL", 100, 10);
    alice.place_buy_order("AAPL", 101, 5);
    alice.place_sell_order("MSFT", 250, 3);
    bob.place_sell_order("AAPL", 103, 7);
    bob.place_buy_order("AAPL", 101, 2);
    bob.place_sell_order("AAPL", 102, 4);

    // Ingest: snapshot, assign ids in arrival order, file into books, clear
    let mut books: BTreeMap<(String, Side), Book> = BTreeMap::new();
    let mut next_id = 1u64;

    for broker in [&mut alice, &mut bob] {
        let snapshot = broker.pending_snapshot();
        info!(broker = %broker, intents = snapshot.len(), "ingesting");

        for intent in snapshot {
            let order = intent.with_id(next_id);
            next_id += 1;

            books
                .entry((order.instrument.clone(), order.side))
                .or_insert_with(|| PriorityQueue::new(for_side(order.side)))
                .insert(order);
        }

        broker.clear_pending();
    }

    for ((instrument, side), book) in &books {
        if let Some(best) = book.peek_best() {
            info!(
                %instrument,
                %side,
                depth = book.len(),
                best_price = best.limit_price,
                best_id = best.id,
                "book top"
            );
        }
    }

    for ((instrument, side), mut book) in books {
        println!("{} {}:", instrument, side);
        while !book.is_empty() {
            let order = book.extract_best()?;
            println!(
                "  #{:<3} {:<6} {:>6} x {}",
                order.id, order.owner, order.limit_price, order.quantity
            );
        }
    }

    Ok(())
}
