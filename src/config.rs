//! Book and exchange configuration.
//!
//! Everything deserializes from JSON with `serde`; omitted fields take their defaults.
//!
//! ```json
//! {
//!   "markets": [
//!     { "symbol": "ETH" },
//!     { "symbol": "BTC", "price_decimals": 2, "match_marketable_limits": true }
//!   ]
//! }
//! ```

use crate::orderbook::OrderBookError;
use crate::orderbook::price::{DEFAULT_PRICE_DECIMALS, MAX_PRICE_DECIMALS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-book settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Decimals kept when normalizing prices into level keys
    pub price_decimals: u32,

    /// When set, a limit order priced through the opposite best trades immediately up
    /// to its limit and only the remainder rests. Off by default: limit orders are
    /// purely passive.
    pub match_marketable_limits: bool,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            price_decimals: DEFAULT_PRICE_DECIMALS,
            match_marketable_limits: false,
        }
    }
}

impl BookConfig {
    /// Check ranges
    pub fn validate(&self) -> Result<(), OrderBookError> {
        if self.price_decimals > MAX_PRICE_DECIMALS {
            return Err(OrderBookError::InvalidConfig {
                message: format!(
                    "price_decimals {} exceeds maximum {}",
                    self.price_decimals, MAX_PRICE_DECIMALS
                ),
            });
        }
        Ok(())
    }
}

/// One market served by the exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Market symbol, e.g. `ETH`
    pub symbol: String,

    /// Settings of the market's book
    #[serde(flatten)]
    pub book: BookConfig,
}

impl MarketConfig {
    /// A market with default book settings
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            book: BookConfig::default(),
        }
    }
}

/// The set of markets an exchange starts with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeConfig {
    pub markets: Vec<MarketConfig>,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            markets: vec![MarketConfig::new("ETH")],
        }
    }
}

impl ExchangeConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, OrderBookError> {
        let config: ExchangeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty or duplicate symbols and out-of-range book settings
    pub fn validate(&self) -> Result<(), OrderBookError> {
        let mut seen = HashSet::new();
        for market in &self.markets {
            if market.symbol.trim().is_empty() {
                return Err(OrderBookError::InvalidConfig {
                    message: "market symbol must not be empty".to_string(),
                });
            }
            if !seen.insert(market.symbol.as_str()) {
                return Err(OrderBookError::InvalidConfig {
                    message: format!("market {} configured twice", market.symbol),
                });
            }
            market.book.validate()?;
        }
        Ok(())
    }
}
