//! A single price level: the FIFO queue of resting orders at one exact price.

use super::error::OrderBookError;
use super::order::{Match, Order, OrderId, Side};
use super::price::Price;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{error, trace};

/// Outcome of running an aggressor through one level
#[derive(Debug, Default)]
pub struct LevelFill {
    /// Matches in fill order
    pub matches: Vec<Match>,
    /// Resting orders that were fully filled and removed from the level
    pub filled: Vec<Order>,
}

/// All resting orders at one price on one side, oldest first.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: Price,
    side: Side,
    orders: VecDeque<Order>,
    volume: f64,
}

impl PriceLevel {
    /// Create an empty level
    pub fn new(price: Price, side: Side) -> Self {
        Self {
            price,
            side,
            orders: VecDeque::new(),
            volume: 0.0,
        }
    }

    /// The level price
    pub fn price(&self) -> Price {
        self.price
    }

    /// The side this level belongs to
    pub fn side(&self) -> Side {
        self.side
    }

    /// Sum of the remaining sizes of all orders at this level
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Number of resting orders
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Whether no order rests here
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Orders in arrival order
    pub fn iter_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Look up a resting order by id
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == order_id)
    }

    /// Append `order` at the back of the queue
    pub fn add(&mut self, mut order: Order) {
        trace!(
            "Level {} {}: adding order {} size {}",
            self.side,
            self.price,
            order.id(),
            order.size()
        );
        order.set_level(Some(self.price));
        self.volume += order.size();
        self.orders.push_back(order);
    }

    /// Remove the order with `order_id`, keeping the survivors in arrival order.
    ///
    /// Removing an order that is not here is a caller bug; the level is left untouched
    /// and an error is returned.
    pub fn remove(&mut self, order_id: OrderId) -> Result<Order, OrderBookError> {
        let Some(position) = self.orders.iter().position(|order| order.id() == order_id) else {
            error!(
                "Level {} {}: attempted to remove non-resident order {}",
                self.side, self.price, order_id
            );
            return Err(OrderBookError::OrderNotFound(order_id));
        };
        let mut order = self
            .orders
            .remove(position)
            .ok_or_else(|| OrderBookError::invariant("level queue position vanished"))?;
        order.set_level(None);
        self.recompute_volume();
        trace!(
            "Level {} {}: removed order {}, volume now {}",
            self.side, self.price, order_id, self.volume
        );
        Ok(order)
    }

    /// Match `aggressor` against the queue from the oldest order forward.
    ///
    /// Stops as soon as the aggressor is filled. Resting orders that reach zero are
    /// taken out of the queue after the pass and handed back in [`LevelFill::filled`].
    pub fn fill(&mut self, aggressor: &mut Order) -> LevelFill {
        let mut result = LevelFill::default();
        let mut exhausted = 0;

        for resting in self.orders.iter_mut() {
            if aggressor.is_filled() {
                break;
            }
            let size = resting.trade_with(aggressor);
            result
                .matches
                .push(Match::between(aggressor, resting, self.price, size));
            self.volume -= size;
            if resting.is_filled() {
                exhausted += 1;
            }
        }

        // Matching is strictly FIFO, so every filled resting order sits at the front.
        for _ in 0..exhausted {
            if let Some(mut order) = self.orders.pop_front() {
                order.set_level(None);
                result.filled.push(order);
            }
        }
        self.recompute_volume();

        trace!(
            "Level {} {}: {} matches, {} orders filled, volume now {}",
            self.side,
            self.price,
            result.matches.len(),
            result.filled.len(),
            self.volume
        );
        result
    }

    /// Snapshot of the level for market data
    pub fn snapshot(&self) -> PriceLevelSnapshot {
        PriceLevelSnapshot {
            price: self.price.value(),
            volume: self.volume,
            orders: self
                .orders
                .iter()
                .map(|order| OrderSnapshot {
                    id: order.id(),
                    size: order.size(),
                    side: order.side(),
                    timestamp: order.timestamp(),
                })
                .collect(),
        }
    }

    // Incremental subtraction drifts with fractional sizes; summing in queue order keeps
    // `volume` equal to the sum of the resting sizes.
    fn recompute_volume(&mut self) {
        self.volume = self.orders.iter().map(Order::size).sum();
    }
}

/// A resting order as seen in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// The order id
    pub id: OrderId,
    /// Remaining size
    pub size: f64,
    /// The order side
    pub side: Side,
    /// Creation time in nanoseconds since epoch
    pub timestamp: u64,
}

/// A price level as seen in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevelSnapshot {
    /// Level price
    pub price: f64,
    /// Total resting size
    pub volume: f64,
    /// Resting orders in arrival order
    pub orders: Vec<OrderSnapshot>,
}

impl PriceLevelSnapshot {
    /// Number of orders at the level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
