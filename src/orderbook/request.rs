//! Order placement requests and their outcomes, as exchanged with the service layer.

use super::order::{Match, OrderId, OrderKind, Side};
use serde::{Deserialize, Serialize};

/// A request to place an order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub side: Side,
    pub size: f64,
    /// Limit price; ignored for market orders
    #[serde(default)]
    pub price: Option<f64>,
    pub kind: OrderKind,
}

impl OrderRequest {
    /// A limit order request
    pub fn limit(side: Side, size: f64, price: f64) -> Self {
        Self {
            side,
            size,
            price: Some(price),
            kind: OrderKind::Limit,
        }
    }

    /// A market order request
    pub fn market(side: Side, size: f64) -> Self {
        Self {
            side,
            size,
            price: None,
            kind: OrderKind::Market,
        }
    }
}

/// What happened to an accepted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderOutcome {
    /// Id assigned to the order
    pub order_id: OrderId,
    /// Fills produced, in execution order
    pub matches: Vec<Match>,
    /// Whether some of the order now rests in the book
    pub resting: bool,
    /// Size left unfilled (resting, or dust for market orders)
    pub remaining: f64,
}

impl PlaceOrderOutcome {
    /// Total size traded
    pub fn filled_size(&self) -> f64 {
        self.matches.iter().map(|m| m.size_filled).sum()
    }
}
