//! Orders, sides and the match records produced when orders trade.

use super::price::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of an order within one book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl OrderId {
    /// Wrap a raw numeric id
    pub fn from_u64(id: u64) -> Self {
        OrderId(id)
    }

    /// The raw numeric id
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Buy (bid) or sell (ask) side of the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy side
    Bid,
    /// Sell side
    Ask,
}

impl Side {
    /// The side an order of this side trades against
    pub fn opposite(&self) -> Side {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "BID"),
            Side::Ask => write!(f, "ASK"),
        }
    }
}

/// How an incoming order is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    /// Rests at its price
    Limit,
    /// Consumes opposite liquidity best-price-first until filled
    Market,
}

/// A request to trade `size` on one side of the book.
///
/// While the order rests, `level` holds the price of the level that owns it. The
/// reference is only a lookup key; the level's queue owns the order itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    side: Side,
    size: f64,
    original_size: f64,
    timestamp: u64,
    #[serde(skip)]
    level: Option<Price>,
}

impl Order {
    /// Create an order that does not rest anywhere yet
    pub fn new(id: OrderId, side: Side, size: f64, timestamp: u64) -> Self {
        Self {
            id,
            side,
            size,
            original_size: size,
            timestamp,
            level: None,
        }
    }

    /// The order id
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// The order side
    pub fn side(&self) -> Side {
        self.side
    }

    /// Remaining unfilled size
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Size at creation
    pub fn original_size(&self) -> f64 {
        self.original_size
    }

    /// Size traded so far
    pub fn filled_size(&self) -> f64 {
        self.original_size - self.size
    }

    /// Creation time in nanoseconds since epoch
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Price of the level this order rests at, if any
    pub fn level(&self) -> Option<Price> {
        self.level
    }

    /// Whether the order rests in a price level
    pub fn is_resting(&self) -> bool {
        self.level.is_some()
    }

    /// An order is filled once its remaining size is exactly zero
    pub fn is_filled(&self) -> bool {
        self.size == 0.0
    }

    pub(crate) fn set_level(&mut self, level: Option<Price>) {
        self.level = level;
    }

    pub(crate) fn set_timestamp(&mut self, timestamp: u64) {
        self.timestamp = timestamp;
    }

    /// Trade up to `size` against `other`, shrinking both. Returns the size exchanged.
    pub(crate) fn trade_with(&mut self, other: &mut Order) -> f64 {
        let filled = self.size.min(other.size);
        self.size -= filled;
        other.size -= filled;
        filled
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order {} {} size {:.2}/{:.2}",
            self.id, self.side, self.size, self.original_size
        )
    }
}

/// One pairwise fill between an aggressor and a resting order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The sell order of the pair
    pub ask_order_id: OrderId,
    /// The buy order of the pair
    pub bid_order_id: OrderId,
    /// Execution price: the resting (maker) order's level price
    pub price: f64,
    /// Quantity exchanged in this fill
    pub size_filled: f64,
    /// Side of the aggressor
    pub taker_side: Side,
}

impl Match {
    /// Build the match for `aggressor` trading against `resting` at `price`
    pub(crate) fn between(aggressor: &Order, resting: &Order, price: Price, size: f64) -> Self {
        let (ask, bid) = match aggressor.side() {
            Side::Bid => (resting.id(), aggressor.id()),
            Side::Ask => (aggressor.id(), resting.id()),
        };
        Match {
            ask_order_id: ask,
            bid_order_id: bid,
            price: price.value(),
            size_filled: size,
            taker_side: aggressor.side(),
        }
    }

    /// Id of the resting (maker) order
    pub fn maker_order_id(&self) -> OrderId {
        match self.taker_side {
            Side::Bid => self.ask_order_id,
            Side::Ask => self.bid_order_id,
        }
    }

    /// Id of the aggressor (taker) order
    pub fn taker_order_id(&self) -> OrderId {
        match self.taker_side {
            Side::Bid => self.bid_order_id,
            Side::Ask => self.ask_order_id,
        }
    }

    /// Notional value of the fill
    pub fn notional(&self) -> f64 {
        self.price * self.size_filled
    }
}
