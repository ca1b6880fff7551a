//! End-to-end hand-off from brokers into price-time books.
//!
//! The exchange loop here is test scaffolding: snapshot each broker, assign
//! ids in arrival order, insert into one book per instrument per side, clear.

use std::collections::HashMap;

use order_heap::heap::{for_side, OrderOrdering};
use order_heap::{Error, IntentQueue, Order, PriorityQueue, Side, UNASSIGNED_ID};

type Book = PriorityQueue<Order, OrderOrdering>;

struct TestExchange {
    books: HashMap<(String, Side), Book>,
    next_id: u64,
}

impl TestExchange {
    fn new() -> Self {
        Self {
            books: HashMap::new(),
            next_id: 1,
        }
    }

    fn ingest(&mut self, broker: &mut IntentQueue) -> usize {
        let snapshot = broker.pending_snapshot();
        let count = snapshot.len();

        for intent in snapshot {
            assert_eq!(intent.id, UNASSIGNED_ID);
            let order = intent.with_id(self.next_id);
            self.next_id += 1;

            self.books
                .entry((order.instrument.clone(), order.side))
                .or_insert_with(|| PriorityQueue::new(for_side(order.side)))
                .insert(order);
        }

        broker.clear_pending();
        count
    }

    fn book(&mut self, instrument: &str, side: Side) -> &mut Book {
        self.books
            .get_mut(&(instrument.to_string(), side))
            .expect("book exists")
    }
}

#[test]
fn test_ingest_builds_price_time_books() {
    let mut alice = IntentQueue::new("Alice").unwrap();
    let mut bob = IntentQueue::new("Bob").unwrap();

    alice.place_buy_order("AAPL", 100, 10);
    alice.place_buy_order("AAPL", 101, 5);
    bob.place_buy_order("AAPL", 101, 2);
    bob.place_sell_order("AAPL", 103, 7);
    bob.place_sell_order("AAPL", 102, 4);

    let mut exchange = TestExchange::new();
    assert_eq!(exchange.ingest(&mut alice), 2);
    assert_eq!(exchange.ingest(&mut bob), 3);

    assert_eq!(alice.pending_count(), 0);
    assert_eq!(bob.pending_count(), 0);

    // Bids: 101 (Alice, id 2) before 101 (Bob, id 3) before 100
    let bids = exchange.book("AAPL", Side::Buy);
    let first = bids.extract_best().unwrap();
    assert_eq!((first.owner.as_str(), first.id, first.limit_price), ("Alice", 2, 101));
    let second = bids.extract_best().unwrap();
    assert_eq!((second.owner.as_str(), second.id, second.limit_price), ("Bob", 3, 101));
    assert_eq!(bids.extract_best().unwrap().limit_price, 100);
    assert_eq!(bids.extract_best(), Err(Error::Empty));

    // Asks: lowest price first
    let asks = exchange.book("AAPL", Side::Sell);
    assert_eq!(asks.peek_best().map(|o| o.limit_price), Some(102));
    assert_eq!(asks.len(), 2);
}

#[test]
fn test_snapshot_before_clear_loses_nothing() {
    let mut broker = IntentQueue::new("Alice").unwrap();
    broker.place_buy_order("AAPL", 100, 10);
    broker.place_buy_order("AAPL", 99, 10);

    let mut exchange = TestExchange::new();
    exchange.ingest(&mut broker);

    // Intents placed after the clear are picked up by the next round
    broker.place_sell_order("AAPL", 105, 1);
    assert_eq!(broker.pending_snapshot().len(), 1);
    exchange.ingest(&mut broker);

    assert_eq!(exchange.book("AAPL", Side::Buy).len(), 2);
    let ask = exchange.book("AAPL", Side::Sell).extract_best().unwrap();
    assert_eq!(ask.id, 3);
    assert!(broker.pending_snapshot().is_empty());
}

#[test]
fn test_books_are_per_instrument() {
    let mut broker = IntentQueue::new("Carol").unwrap();
    broker.place_sell_order("AAPL", 150, 1);
    broker.place_sell_order("MSFT", 300, 1);
    broker.place_sell_order("AAPL", 149, 1);

    let mut exchange = TestExchange::new();
    exchange.ingest(&mut broker);

    assert_eq!(exchange.books.len(), 2);
    assert_eq!(exchange.book("AAPL", Side::Sell).len(), 2);
    assert_eq!(
        exchange.book("AAPL", Side::Sell).peek_best().map(|o| o.limit_price),
        Some(149)
    );
    assert_eq!(exchange.book("MSFT", Side::Sell).len(), 1);
}

#[test]
fn test_blank_broker_rejected() {
    assert!(matches!(IntentQueue::new("  "), Err(Error::InvalidArgument(_))));
}
