//! Canonical price keys.
//!
//! Levels are indexed by exact price, so every price entering the book is first rounded
//! to a fixed number of decimals. `10000.1` parsed from text and `10000.0 + 0.1` computed
//! in floating point then land on the same level.

use super::error::OrderBookError;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Number of decimals kept when no configuration says otherwise
pub const DEFAULT_PRICE_DECIMALS: u32 = 8;

/// Largest supported number of decimals; beyond this `f64` cannot hold the scaled value exactly
pub const MAX_PRICE_DECIMALS: u32 = 12;

/// A finite, strictly positive price rounded to a fixed precision.
///
/// Equality and hashing use the exact bit pattern of the rounded value, ordering uses
/// `f64::total_cmp`, so `Price` can key both hash maps and ordered sets.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Normalize `value` with the default precision
    pub fn new(value: f64) -> Result<Self, OrderBookError> {
        Self::with_decimals(value, DEFAULT_PRICE_DECIMALS)
    }

    /// Normalize `value` to `decimals` decimal places
    pub fn with_decimals(value: f64, decimals: u32) -> Result<Self, OrderBookError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(OrderBookError::InvalidPrice(value));
        }
        let scale = 10f64.powi(decimals.min(MAX_PRICE_DECIMALS) as i32);
        let rounded = (value * scale).round() / scale;
        if !rounded.is_finite() || rounded <= 0.0 {
            return Err(OrderBookError::InvalidPrice(value));
        }
        Ok(Price(rounded))
    }

    /// The canonical value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Price {}

impl Hash for Price {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}
