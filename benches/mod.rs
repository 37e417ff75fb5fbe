use criterion::{criterion_group, criterion_main};

mod concurrent;
mod order_book;

use concurrent::register_contention_benchmarks;
use order_book::register_benchmarks as register_order_book_benchmarks;
use simple::basic::benchmark_data;

criterion_group!(
    benches,
    benchmark_data,
    register_order_book_benchmarks,
    register_contention_benchmarks,
);

criterion_main!(benches);
