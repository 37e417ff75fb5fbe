//! OrderBook implementation for managing price levels and order matching.

pub mod book;
mod error;
pub mod level;
mod modifications;
mod operations;
pub mod order;
pub mod price;
mod private;
mod request;
pub mod side;
mod snapshot;

pub mod matching;

pub use book::OrderBook;
pub use error::OrderBookError;
pub use level::{LevelFill, OrderSnapshot, PriceLevel, PriceLevelSnapshot};
pub use order::{Match, Order, OrderId, OrderKind, Side};
pub use price::Price;
pub use request::{OrderRequest, PlaceOrderOutcome};
pub use side::BookSide;
pub use snapshot::OrderBookSnapshot;
