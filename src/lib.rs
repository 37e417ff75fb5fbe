//! # Price-Time Priority Matching Core
//!
//! The matching core of a single-asset limit order book. Orders are grouped by exact
//! price into levels that keep arrival order; market orders walk the opposite side
//! best price first and produce one [`Match`] per resting order they touch.
//!
//! ## Key Features
//!
//! - **Price-time priority**: best price first, then earliest arrival within a price.
//!
//! - **Volume accounting**: every level's volume equals the sum of its resting sizes after
//!   every operation, and a level disappears the moment its last order leaves.
//!
//! - **All-or-nothing market orders**: a market order larger than the opposite side's
//!   volume is rejected with [`OrderBookError::InsufficientLiquidity`] before anything is
//!   touched.
//!
//! - **Canonical prices**: prices are rounded to a configured precision before they key a
//!   level, so floating point representation noise never splits one price into two levels.
//!
//! - **Multi-market registry**: [`Exchange`] maps market symbols to books, each behind
//!   its own lock.
//!
//! ## Limit orders are passive
//!
//! By default a limit order always rests at its price, even when that price crosses the
//! opposite side. Set [`BookConfig::match_marketable_limits`] to let crossing limit orders
//! trade up to their price first.
//!
//! ## Example
//!
//! ```rust
//! use matchbook::{OrderBook, Side};
//!
//! let mut book = OrderBook::new("ETH");
//! let ask = book.new_order(Side::Ask, 20.0).unwrap();
//! book.place_limit(10_000.0, ask).unwrap();
//!
//! let mut bid = book.new_order(Side::Bid, 10.0).unwrap();
//! let matches = book.place_market(&mut bid).unwrap();
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].price, 10_000.0);
//! assert_eq!(book.ask_total_volume(), 10.0);
//! ```

pub mod config;
pub mod exchange;
pub mod orderbook;

mod utils;

pub use config::{BookConfig, ExchangeConfig, MarketConfig};
pub use exchange::{Exchange, SharedBook};
pub use orderbook::{
    Match, Order, OrderBook, OrderBookError, OrderBookSnapshot, OrderId, OrderKind,
    OrderRequest, PlaceOrderOutcome, Price, PriceLevel, Side,
};
pub use utils::{MonotonicClock, current_time_millis, current_time_nanos};
