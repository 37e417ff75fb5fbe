use demos::setup_logger;
use matchbook::{BookConfig, Exchange, OrderId, OrderRequest, Side};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info};

// Number of threads to use for the test
const THREAD_COUNT: usize = 8;
// Duration of the test in seconds
const TEST_DURATION_SECS: u64 = 3;
const MARKETS: [&str; 2] = ["ETH", "BTC"];

fn main() {
    setup_logger();
    info!("Multi-threaded Exchange Test");
    info!("Threads: {}, duration: {} seconds", THREAD_COUNT, TEST_DURATION_SECS);

    let exchange = Arc::new(Exchange::new());
    for market in MARKETS {
        if let Err(err) = exchange.add_market(market, BookConfig::default()) {
            error!("Could not open {}: {}", market, err);
            return;
        }
    }
    populate(&exchange, 500);

    let barrier = Arc::new(Barrier::new(THREAD_COUNT + 1));
    let running = Arc::new(AtomicBool::new(true));
    let mut handles = Vec::with_capacity(THREAD_COUNT);

    for thread_id in 0..THREAD_COUNT {
        let exchange = Arc::clone(&exchange);
        let barrier = Arc::clone(&barrier);
        let running = Arc::clone(&running);

        handles.push(thread::spawn(move || {
            barrier.wait();
            let mut counter: u64 = 0;
            while running.load(Ordering::Relaxed) {
                let market = MARKETS[(counter as usize) % MARKETS.len()];
                let side = if counter % 2 == 0 { Side::Bid } else { Side::Ask };
                match thread_id % 4 {
                    0 => {
                        let base = if side == Side::Bid { 9_900.0 } else { 10_100.0 };
                        let price = base + (counter % 10) as f64 * 10.0;
                        let _ = exchange.place_order(market, &OrderRequest::limit(side, 10.0, price));
                    }
                    1 => {
                        let size = 5.0 + (counter % 5) as f64;
                        let _ = exchange.place_order(market, &OrderRequest::market(side, size));
                    }
                    2 => {
                        // Mostly misses: ids are guessed, not tracked.
                        let _ = exchange.cancel_order(market, OrderId(counter % 2_000));
                    }
                    _ => {
                        let _ = exchange.snapshot(market);
                    }
                }
                counter += 1;
            }
            counter
        }));
    }

    let start = Instant::now();
    barrier.wait();
    thread::sleep(Duration::from_secs(TEST_DURATION_SECS));
    running.store(false, Ordering::Relaxed);

    let mut total = 0;
    for (i, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(count) => {
                info!("Thread {}: {} operations", i, count);
                total += count;
            }
            Err(_) => error!("Thread {} panicked", i),
        }
    }
    let elapsed = start.elapsed();
    info!(
        "Total operations: {} ({:.2} ops/s)",
        total,
        total as f64 / elapsed.as_secs_f64()
    );

    for market in MARKETS {
        let checked = exchange.with_book(market, |book| {
            (book.order_count(), book.bid_total_volume(), book.ask_total_volume(), book.validate())
        });
        match checked {
            Ok((orders, bids, asks, valid)) => info!(
                "{}: {} resting orders, bid volume {}, ask volume {}, invariants {:?}",
                market, orders, bids, asks, valid
            ),
            Err(err) => error!("{}: {}", market, err),
        }
    }
}

fn populate(exchange: &Exchange, per_market: usize) {
    for market in MARKETS {
        for i in 0..per_market {
            let (side, price) = if i % 2 == 0 {
                (Side::Bid, 9_900.0 - (i % 50) as f64 * 5.0)
            } else {
                (Side::Ask, 10_100.0 + (i % 50) as f64 * 5.0)
            };
            let _ = exchange.place_order(market, &OrderRequest::limit(side, 10.0, price));
        }
        info!("{}: populated with {} orders", market, per_market);
    }
}
