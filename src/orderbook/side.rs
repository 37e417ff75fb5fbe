//! One side of the book: price levels keyed by price plus their ordering.

use super::level::PriceLevel;
use super::order::Side;
use super::price::Price;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Price levels of one side.
///
/// `levels` answers "is there a level at this price" in O(1); `prices` keeps the same
/// keys sorted so best-price-first traversal never has to re-sort.
#[derive(Debug, Clone)]
pub struct BookSide {
    side: Side,
    levels: HashMap<Price, PriceLevel>,
    prices: BTreeSet<Price>,
}

impl BookSide {
    /// Create an empty side
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: HashMap::new(),
            prices: BTreeSet::new(),
        }
    }

    /// Which side this is
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Whether the side holds no level
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of resting orders across all levels
    pub fn order_count(&self) -> usize {
        self.levels.values().map(PriceLevel::order_count).sum()
    }

    /// Sum of all level volumes
    pub fn total_volume(&self) -> f64 {
        self.iter_best().map(PriceLevel::volume).sum()
    }

    /// The level at `price`, if any
    pub fn get(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    pub(super) fn get_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// The best price: lowest ask or highest bid
    pub fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Ask => self.prices.first().copied(),
            Side::Bid => self.prices.last().copied(),
        }
    }

    /// Prices best first: ascending for asks, descending for bids
    pub fn prices_best_first(&self) -> Vec<Price> {
        match self.side {
            Side::Ask => self.prices.iter().copied().collect(),
            Side::Bid => self.prices.iter().rev().copied().collect(),
        }
    }

    /// Levels best first
    pub fn iter_best(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        let prices: Box<dyn Iterator<Item = &Price> + '_> = match self.side {
            Side::Ask => Box::new(self.prices.iter()),
            Side::Bid => Box::new(self.prices.iter().rev()),
        };
        Box::new(prices.filter_map(move |price| self.levels.get(price)))
    }

    /// The level at `price`, created empty if it does not exist yet
    pub(super) fn level_or_insert(&mut self, price: Price) -> &mut PriceLevel {
        let side = self.side;
        if self.prices.insert(price) {
            debug!("Side {}: creating level {}", side, price);
        }
        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price, side))
    }

    /// Drop the level at `price` if it no longer holds any order. Returns whether it was dropped.
    pub(super) fn remove_if_empty(&mut self, price: Price) -> bool {
        let empty = self.levels.get(&price).is_some_and(PriceLevel::is_empty);
        if empty {
            self.levels.remove(&price);
            self.prices.remove(&price);
            debug!("Side {}: removed empty level {}", self.side, price);
        }
        empty
    }

    /// Whether an order on the other side at `price` would trade with this side's best level
    pub fn is_crossed_by(&self, price: Price) -> bool {
        match (self.side, self.best_price()) {
            (Side::Ask, Some(best)) => price >= best,
            (Side::Bid, Some(best)) => price <= best,
            (_, None) => false,
        }
    }

    pub(super) fn ordered_price_count(&self) -> usize {
        self.prices.len()
    }

    pub(super) fn has_ordered_price(&self, price: Price) -> bool {
        self.prices.contains(&price)
    }
}
