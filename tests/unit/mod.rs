mod concurrency_tests;
mod exchange_tests;
