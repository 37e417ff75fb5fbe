//! Order book error types

use super::order::{OrderId, Side};
use std::fmt;

/// Errors that can occur within the OrderBook or the exchange that hosts it
#[derive(Debug, Clone, PartialEq)]
pub enum OrderBookError {
    /// Order not found in the book (unknown, already filled or already cancelled)
    OrderNotFound(OrderId),

    /// An order with this id has already been placed in the book
    DuplicateOrderId(OrderId),

    /// No book is registered for the market symbol
    MarketNotFound(String),

    /// A book is already registered for the market symbol
    MarketAlreadyExists(String),

    /// Price is not finite or not strictly positive
    InvalidPrice(f64),

    /// Size is not finite or not strictly positive
    InvalidQuantity(f64),

    /// A limit order request arrived without a price
    MissingLimitPrice,

    /// Insufficient liquidity for market order
    InsufficientLiquidity {
        /// The side of the market order
        side: Side,
        /// Quantity requested
        requested: f64,
        /// Quantity available on the opposite side
        available: f64,
    },

    /// Internal bookkeeping is inconsistent
    InvariantViolation {
        /// Description of the broken invariant
        message: String,
    },

    /// Configuration could not be parsed or is out of range
    InvalidConfig {
        /// Description of the error
        message: String,
    },
}

impl OrderBookError {
    /// True for failures caused by the request itself rather than by the book
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            OrderBookError::InvariantViolation { .. } | OrderBookError::InvalidConfig { .. }
        )
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        OrderBookError::InvariantViolation {
            message: message.into(),
        }
    }
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::OrderNotFound(id) => write!(f, "Order not found: {}", id),
            OrderBookError::DuplicateOrderId(id) => write!(f, "Duplicate order id: {}", id),
            OrderBookError::MarketNotFound(market) => write!(f, "Market not found: {}", market),
            OrderBookError::MarketAlreadyExists(market) => {
                write!(f, "Market already exists: {}", market)
            }
            OrderBookError::InvalidPrice(price) => write!(f, "Invalid price: {}", price),
            OrderBookError::InvalidQuantity(size) => write!(f, "Invalid quantity: {}", size),
            OrderBookError::MissingLimitPrice => write!(f, "Limit order requires a price"),
            OrderBookError::InsufficientLiquidity {
                side,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Insufficient liquidity for {} order: requested {}, available {}",
                    side, requested, available
                )
            }
            OrderBookError::InvariantViolation { message } => {
                write!(f, "Invariant violation: {}", message)
            }
            OrderBookError::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}

impl From<serde_json::Error> for OrderBookError {
    fn from(err: serde_json::Error) -> Self {
        OrderBookError::InvalidConfig {
            message: err.to_string(),
        }
    }
}
