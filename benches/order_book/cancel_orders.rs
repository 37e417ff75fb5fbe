use super::setup_book;
use criterion::{BatchSize, BenchmarkId, Criterion};
use matchbook::Side;
use std::hint::black_box;

/// Register benchmarks for cancelling resting orders
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Cancel Orders");

    for order_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("cancel_all", order_count),
            order_count,
            |b, &order_count| {
                b.iter_batched(
                    || setup_book(Side::Bid, order_count, 20),
                    |(mut order_book, ids)| {
                        for id in ids {
                            let _ = black_box(order_book.cancel(id));
                        }
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.bench_function("cancel_unknown", |b| {
        let (mut order_book, _) = setup_book(Side::Bid, 100, 10);
        b.iter(|| black_box(order_book.cancel(matchbook::OrderId(u64::MAX))))
    });

    group.finish();
}
