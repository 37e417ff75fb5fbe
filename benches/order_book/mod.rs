pub mod cancel_orders;

pub fn register_benchmarks(c: &mut criterion::Criterion) {
    add_orders::register_benchmarks(c);
    match_orders::register_benchmarks(c);
    cancel_orders::register_benchmarks(c);
}

use matchbook::{OrderBook, OrderId, Side};

/// A book with `order_count` resting orders of size 10 on `side`, spread over `levels` prices
pub(crate) fn setup_book(side: Side, order_count: u64, levels: u64) -> (OrderBook, Vec<OrderId>) {
    let mut order_book = OrderBook::new("TEST-SYMBOL");
    let mut ids = Vec::with_capacity(order_count as usize);
    for i in 0..order_count {
        let price = match side {
            Side::Ask => 1_000.0 + (i % levels) as f64,
            Side::Bid => 1_000.0 - (i % levels) as f64,
        };
        if let Ok(order) = order_book.new_order(side, 10.0) {
            ids.push(order.id());
            let _ = order_book.place_limit(price, order);
        }
    }
    (order_book, ids)
}
