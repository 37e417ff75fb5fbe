//! Order book snapshot for market data

use super::level::{OrderSnapshot, PriceLevelSnapshot};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A snapshot of the order book state at a specific point in time.
///
/// Asks are listed lowest price first and bids highest price first; within a level,
/// orders appear in arrival order. Depth displays rely on exactly this ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Total resting size on the bid side
    pub total_bid_volume: f64,

    /// Total resting size on the ask side
    pub total_ask_volume: f64,

    /// Snapshot of bid price levels
    pub bids: Vec<PriceLevelSnapshot>,

    /// Snapshot of ask price levels
    pub asks: Vec<PriceLevelSnapshot>,
}

impl OrderBookSnapshot {
    /// Get the best bid price and volume
    pub fn best_bid(&self) -> Option<(f64, f64)> {
        let bid = self.bids.first().map(|level| (level.price, level.volume));
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask price and volume
    pub fn best_ask(&self) -> Option<(f64, f64)> {
        let ask = self.asks.first().map(|level| (level.price, level.volume));
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        let mid_price = match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => Some((bid_price + ask_price) / 2.0),
            _ => None,
        };
        trace!("mid_price: {:?}", mid_price);
        mid_price
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<f64> {
        let spread = match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => Some(ask_price - bid_price),
            _ => None,
        };
        trace!("spread: {:?}", spread);
        spread
    }

    /// Calculate the total value on the bid side (price * quantity)
    pub fn total_bid_value(&self) -> f64 {
        let value = self
            .bids
            .iter()
            .map(|level| level.price * level.volume)
            .sum();
        trace!("total_bid_value: {:?}", value);
        value
    }

    /// Calculate the total value on the ask side (price * quantity)
    pub fn total_ask_value(&self) -> f64 {
        let value = self
            .asks
            .iter()
            .map(|level| level.price * level.volume)
            .sum();
        trace!("total_ask_value: {:?}", value);
        value
    }

    /// Ask orders flattened into `(price, order)` pairs, in display order
    pub fn ask_orders(&self) -> Vec<(f64, &OrderSnapshot)> {
        flatten(&self.asks)
    }

    /// Bid orders flattened into `(price, order)` pairs, in display order
    pub fn bid_orders(&self) -> Vec<(f64, &OrderSnapshot)> {
        flatten(&self.bids)
    }
}

fn flatten(levels: &[PriceLevelSnapshot]) -> Vec<(f64, &OrderSnapshot)> {
    levels
        .iter()
        .flat_map(|level| level.orders.iter().map(move |order| (level.price, order)))
        .collect()
}
