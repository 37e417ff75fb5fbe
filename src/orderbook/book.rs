//! Core OrderBook implementation for managing price levels and orders

use super::error::OrderBookError;
use super::level::PriceLevel;
use super::order::{Order, OrderId, Side};
use super::price::Price;
use super::side::BookSide;
use super::snapshot::OrderBookSnapshot;
use crate::config::BookConfig;
use crate::utils::{MonotonicClock, current_time_millis};
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// The OrderBook manages the price levels of both sides of one market.
///
/// All operations take `&self` or `&mut self` and run to completion without blocking;
/// sharing a book between threads is the job of [`crate::Exchange`], which puts each
/// book behind its own lock.
#[derive(Debug)]
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    pub(super) config: BookConfig,

    /// Bid side price levels (buy orders)
    pub(super) bids: BookSide,

    /// Ask side price levels (sell orders)
    pub(super) asks: BookSide,

    /// Where each resting order lives, so cancellation never scans levels
    pub(super) order_locations: HashMap<OrderId, (Price, Side)>,

    /// Source of order timestamps
    pub(super) clock: MonotonicClock,

    /// Next id handed out by [`OrderBook::new_order`]
    pub(super) next_order_id: u64,

    /// Every id ever placed, resting or not; ids are never reused
    pub(super) seen_ids: HashSet<OrderId>,

    /// The last price at which a trade occurred
    pub(super) last_trade_price: Option<f64>,
}

impl OrderBook {
    /// Create a new order book for the given symbol with default settings
    pub fn new(symbol: &str) -> Self {
        Self::with_config(symbol, BookConfig::default())
    }

    /// Create a new order book for the given symbol
    pub fn with_config(symbol: &str, config: BookConfig) -> Self {
        Self {
            symbol: symbol.to_string(),
            config,
            bids: BookSide::new(Side::Bid),
            asks: BookSide::new(Side::Ask),
            order_locations: HashMap::new(),
            clock: MonotonicClock::new(),
            next_order_id: 1,
            seen_ids: HashSet::new(),
            last_trade_price: None,
        }
    }

    /// Get the symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The book settings
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Normalize a raw price with this book's precision
    pub fn normalize_price(&self, price: f64) -> Result<Price, OrderBookError> {
        Price::with_decimals(price, self.config.price_decimals)
    }

    /// One side of the book
    pub fn side(&self, side: Side) -> &BookSide {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    pub(super) fn side_mut(&mut self, side: Side) -> &mut BookSide {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }

    /// Ask levels, lowest price first
    pub fn best_asks(&self) -> Vec<&PriceLevel> {
        self.asks.iter_best().collect()
    }

    /// Bid levels, highest price first
    pub fn best_bids(&self) -> Vec<&PriceLevel> {
        self.bids.iter_best().collect()
    }

    /// Get the best bid price, if any
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.best_price().map(|price| price.value())
    }

    /// Get the best ask price, if any
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.best_price().map(|price| price.value())
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Get the last trade price, if any
    pub fn last_trade_price(&self) -> Option<f64> {
        self.last_trade_price
    }

    /// Total resting size on the bid side
    pub fn bid_total_volume(&self) -> f64 {
        self.bids.total_volume()
    }

    /// Total resting size on the ask side
    pub fn ask_total_volume(&self) -> f64 {
        self.asks.total_volume()
    }

    /// Number of resting orders on both sides
    pub fn order_count(&self) -> usize {
        self.order_locations.len()
    }

    /// Number of price levels on `side`
    pub fn level_count(&self, side: Side) -> usize {
        self.side(side).level_count()
    }

    /// Get a resting order by ID
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        let (price, side) = *self.order_locations.get(&order_id)?;
        self.side(side).get(price)?.get_order(order_id)
    }

    /// Get all resting orders at a specific price, in arrival order
    pub fn get_orders_at_price(&self, price: f64, side: Side) -> Vec<&Order> {
        trace!(
            "Order book {}: Getting orders at price {} for side {}",
            self.symbol, price, side
        );
        let Ok(price) = self.normalize_price(price) else {
            return Vec::new();
        };
        self.side(side)
            .get(price)
            .map(|level| level.iter_orders().collect())
            .unwrap_or_default()
    }

    /// Get the total volume at each price level, keyed by price, bids then asks
    pub fn get_volume_by_price(&self) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
        let volumes = |side: &BookSide| -> Vec<(f64, f64)> {
            side.iter_best()
                .map(|level| (level.price().value(), level.volume()))
                .collect()
        };
        (volumes(&self.bids), volumes(&self.asks))
    }

    /// Create a snapshot of the current order book state, keeping `depth` levels per side
    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            total_bid_volume: self.bid_total_volume(),
            total_ask_volume: self.ask_total_volume(),
            bids: self
                .bids
                .iter_best()
                .take(depth)
                .map(PriceLevel::snapshot)
                .collect(),
            asks: self
                .asks
                .iter_best()
                .take(depth)
                .map(PriceLevel::snapshot)
                .collect(),
        }
    }

    /// Snapshot of every level on both sides
    pub fn snapshot(&self) -> OrderBookSnapshot {
        self.create_snapshot(usize::MAX)
    }
}
