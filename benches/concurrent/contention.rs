use criterion::{BenchmarkId, Criterion};
use matchbook::{BookConfig, Exchange, OrderRequest, Side};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

const THREAD_COUNT: usize = 8;
const MARKETS: [&str; 4] = ["ETH", "BTC", "SOL", "ADA"];

/// Register benchmarks that test different contention patterns on the exchange
pub fn register_contention_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Exchange - Contention Patterns");

    for read_ratio in [0, 25, 50, 75, 95].iter() {
        group.bench_with_input(
            BenchmarkId::new("read_write_ratio", read_ratio),
            read_ratio,
            |b, &read_ratio| {
                b.iter_custom(|iters| {
                    measure_read_write_contention(THREAD_COUNT, iters, read_ratio)
                });
            },
        );
    }

    // Share of requests that go to the first market, the rest spread evenly
    for hot_market_percentage in [25, 50, 80, 100].iter() {
        group.bench_with_input(
            BenchmarkId::new("hot_market_contention", hot_market_percentage),
            hot_market_percentage,
            |b, &hot_market_percentage| {
                b.iter_custom(|iters| {
                    measure_hot_market_contention(THREAD_COUNT, iters, hot_market_percentage)
                });
            },
        );
    }

    group.finish();
}

fn populated_exchange(orders_per_market: usize) -> Arc<Exchange> {
    let exchange = Arc::new(Exchange::new());
    for market in MARKETS {
        let _ = exchange.add_market(market, BookConfig::default());
        for i in 0..orders_per_market {
            let side = if i % 2 == 0 { Side::Bid } else { Side::Ask };
            let price = if side == Side::Bid { 990.0 } else { 1_010.0 };
            let _ = exchange.place_order(market, &OrderRequest::limit(side, 10.0, price));
        }
    }
    exchange
}

/// Place, match and snapshot on one market; `read_ratio` is the percentage of snapshots
fn measure_read_write_contention(
    thread_count: usize,
    iterations: u64,
    read_ratio: usize,
) -> Duration {
    let exchange = populated_exchange(500);
    let barrier = Arc::new(Barrier::new(thread_count + 1));
    let mut handles = Vec::with_capacity(thread_count);

    for thread_id in 0..thread_count {
        let exchange = Arc::clone(&exchange);
        let barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || {
            barrier.wait();
            let side = if thread_id % 2 == 0 { Side::Bid } else { Side::Ask };
            let price = if side == Side::Bid { 990.0 } else { 1_010.0 };

            for i in 0..iterations {
                if (i as usize % 100) < read_ratio {
                    let _ = exchange.with_book(MARKETS[0], |book| book.create_snapshot(5));
                } else if i % 2 == 0 {
                    let _ = exchange.place_order(MARKETS[0], &OrderRequest::limit(side, 10.0, price));
                } else {
                    let _ = exchange.place_order(MARKETS[0], &OrderRequest::market(side, 2.0));
                }
            }
            barrier.wait();
        }));
    }

    barrier.wait();
    let start = Instant::now();
    barrier.wait();
    let duration = start.elapsed();

    for handle in handles {
        let _ = handle.join();
    }
    duration
}

/// Place and match across markets; independent books only contend on the hot one
fn measure_hot_market_contention(
    thread_count: usize,
    iterations: u64,
    hot_market_percentage: usize,
) -> Duration {
    let exchange = populated_exchange(100);
    let barrier = Arc::new(Barrier::new(thread_count + 1));
    let mut handles = Vec::with_capacity(thread_count);

    for thread_id in 0..thread_count {
        let exchange = Arc::clone(&exchange);
        let barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..iterations {
                let market = if (i as usize % 100) < hot_market_percentage {
                    MARKETS[0]
                } else {
                    MARKETS[1 + thread_id % (MARKETS.len() - 1)]
                };
                let request = if i % 2 == 0 {
                    OrderRequest::limit(Side::Ask, 1.0, 1_010.0)
                } else {
                    OrderRequest::market(Side::Bid, 1.0)
                };
                let _ = exchange.place_order(market, &request);
            }
            barrier.wait();
        }));
    }

    barrier.wait();
    let start = Instant::now();
    barrier.wait();
    let duration = start.elapsed();

    for handle in handles {
        let _ = handle.join();
    }
    duration
}
