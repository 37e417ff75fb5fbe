//! Registry of markets, each with its own independently locked book.
//!
//! The exchange is built once at startup and shared by reference (or `Arc`) with
//! whatever serves requests. Each operation locks exactly one book for its whole
//! duration, so a market order's liquidity check and the walk it gates can never be
//! interleaved with another request on the same market.

use crate::config::{BookConfig, ExchangeConfig};
use crate::orderbook::{Order, OrderBook, OrderBookError, OrderBookSnapshot, OrderId};
use crate::orderbook::{OrderRequest, PlaceOrderOutcome};
use dashmap::DashMap;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// A book shared between request handlers
pub type SharedBook = Arc<Mutex<OrderBook>>;

/// Market symbol to book registry
#[derive(Debug, Default)]
pub struct Exchange {
    books: DashMap<String, SharedBook>,
}

impl Exchange {
    /// An exchange without markets
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
        }
    }

    /// An exchange with every market of `config`
    pub fn from_config(config: &ExchangeConfig) -> Result<Self, OrderBookError> {
        config.validate()?;
        let exchange = Self::new();
        for market in &config.markets {
            exchange.add_market(&market.symbol, market.book)?;
        }
        Ok(exchange)
    }

    /// Register a new market
    pub fn add_market(&self, symbol: &str, config: BookConfig) -> Result<(), OrderBookError> {
        config.validate()?;
        match self.books.entry(symbol.to_string()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(OrderBookError::MarketAlreadyExists(symbol.to_string()))
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(Arc::new(Mutex::new(OrderBook::with_config(symbol, config))));
                info!("Exchange: opened market {}", symbol);
                Ok(())
            }
        }
    }

    /// Registered market symbols, sorted
    pub fn markets(&self) -> Vec<String> {
        let mut markets: Vec<String> = self.books.iter().map(|item| item.key().clone()).collect();
        markets.sort();
        markets
    }

    /// The shared book of `market`
    pub fn book(&self, market: &str) -> Result<SharedBook, OrderBookError> {
        self.books
            .get(market)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| OrderBookError::MarketNotFound(market.to_string()))
    }

    /// Run `f` with exclusive access to the book of `market`
    pub fn with_book<R>(
        &self,
        market: &str,
        f: impl FnOnce(&mut OrderBook) -> R,
    ) -> Result<R, OrderBookError> {
        let book = self.book(market)?;
        let mut guard = book.lock().map_err(|_| {
            OrderBookError::invariant(format!("book {} lock poisoned", market))
        })?;
        Ok(f(&mut guard))
    }

    /// Place an order on `market`
    pub fn place_order(
        &self,
        market: &str,
        request: &OrderRequest,
    ) -> Result<PlaceOrderOutcome, OrderBookError> {
        let result = self.with_book(market, |book| book.submit(request))?;
        if let Err(err) = &result {
            warn!("Exchange: rejected {:?} on {}: {}", request, market, err);
        }
        result
    }

    /// Cancel a resting order on `market`
    pub fn cancel_order(&self, market: &str, order_id: OrderId) -> Result<Order, OrderBookError> {
        let result = self.with_book(market, |book| book.cancel(order_id))?;
        if let Err(err) = &result {
            warn!("Exchange: cancel of {} on {} failed: {}", order_id, market, err);
        }
        result
    }

    /// Full snapshot of `market`
    pub fn snapshot(&self, market: &str) -> Result<OrderBookSnapshot, OrderBookError> {
        self.with_book(market, |book| book.snapshot())
    }
}
