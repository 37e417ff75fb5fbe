#[cfg(test)]
mod concurrency_tests {
    use matchbook::{BookConfig, Exchange, OrderRequest, Side};
    use std::sync::{Arc, Barrier};
    use std::thread;

    const THREADS: usize = 8;
    const OPS_PER_THREAD: usize = 200;

    #[test]
    fn test_concurrent_orders_keep_books_consistent() {
        let exchange = Arc::new(Exchange::new());
        for market in ["ETH", "BTC"] {
            exchange.add_market(market, BookConfig::default()).unwrap();
        }
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|thread_id| {
                let exchange = Arc::clone(&exchange);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let market = if thread_id % 2 == 0 { "ETH" } else { "BTC" };
                    for i in 0..OPS_PER_THREAD {
                        let side = if (thread_id + i) % 2 == 0 { Side::Bid } else { Side::Ask };
                        let base = if side == Side::Bid { 990.0 } else { 1_010.0 };
                        let request = if i % 5 == 4 {
                            OrderRequest::market(side, 2.0)
                        } else {
                            OrderRequest::limit(side, 1.0 + (i % 3) as f64, base + (i % 7) as f64)
                        };
                        if let Ok(outcome) = exchange.place_order(market, &request) {
                            if outcome.resting && i % 11 == 0 {
                                let _ = exchange.cancel_order(market, outcome.order_id);
                            }
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        for market in ["ETH", "BTC"] {
            let valid = exchange.with_book(market, |book| book.validate()).unwrap();
            assert!(valid.is_ok(), "{} invariants broken: {:?}", market, valid);
        }
    }

    #[test]
    fn test_concurrent_market_orders_never_oversell() {
        let exchange = Arc::new(Exchange::new());
        exchange.add_market("ETH", BookConfig::default()).unwrap();
        for i in 0..10 {
            exchange
                .place_order("ETH", &OrderRequest::limit(Side::Ask, 1.0, 100.0 + i as f64))
                .unwrap();
        }

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let exchange = Arc::clone(&exchange);
                thread::spawn(move || {
                    exchange
                        .place_order("ETH", &OrderRequest::market(Side::Bid, 3.0))
                        .map(|outcome| outcome.filled_size())
                        .unwrap_or(0.0)
                })
            })
            .collect();

        let filled: f64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        let left = exchange.snapshot("ETH").unwrap().total_ask_volume;

        // Three orders of 3 fit into 10, the rest are refused whole.
        assert_eq!(filled, 9.0);
        assert_eq!(left, 1.0);
    }
}
