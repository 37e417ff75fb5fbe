//! Order book operations: creating and placing limit and market orders

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Match, Order, OrderId, OrderKind, Side};
use super::request::{OrderRequest, PlaceOrderOutcome};
use tracing::{debug, trace};

impl OrderBook {
    /// Create an order with the next free id and a fresh timestamp.
    ///
    /// The order is not placed; hand it to [`OrderBook::place_limit`] or
    /// [`OrderBook::place_market`].
    pub fn new_order(&mut self, side: Side, size: f64) -> Result<Order, OrderBookError> {
        Self::check_size(size)?;
        let id = OrderId(self.next_order_id);
        self.next_order_id += 1;
        Ok(Order::new(id, side, size, self.clock.next()))
    }

    /// Rest `order` at `price`.
    ///
    /// Limit orders are passive: the order rests even if `price` crosses the opposite
    /// side, and the returned vector is empty. With
    /// [`BookConfig::match_marketable_limits`](crate::BookConfig) enabled a crossing order
    /// first trades against the opposite side up to `price`, and only the remainder rests.
    pub fn place_limit(&mut self, price: f64, mut order: Order) -> Result<Vec<Match>, OrderBookError> {
        trace!(
            "Order book {}: placing limit {} at {}",
            self.symbol, order, price
        );
        let price = self.normalize_price(price)?;
        Self::check_size(order.size())?;
        self.check_unique(order.id())?;

        let mut matches = Vec::new();
        if self.config.match_marketable_limits
            && self.side(order.side().opposite()).is_crossed_by(price)
        {
            debug!(
                "Order book {}: limit order {} at {} crosses the book",
                self.symbol,
                order.id(),
                price
            );
            self.claim_id(order.id());
            matches = self.match_order(&mut order, Some(price)).matches;
        }

        if !order.is_filled() {
            self.rest_order(price, order);
        }
        Ok(matches)
    }

    /// Execute `order` against the opposite side, best price first.
    ///
    /// Fails with [`OrderBookError::InsufficientLiquidity`] before touching the book when the
    /// opposite side holds less than `order.size()`.
    pub fn place_market(&mut self, order: &mut Order) -> Result<Vec<Match>, OrderBookError> {
        trace!("Order book {}: placing market {}", self.symbol, order);
        Self::check_size(order.size())?;
        self.check_unique(order.id())?;

        let side = order.side();
        let available = self.side(side.opposite()).total_volume();
        if order.size() > available {
            return Err(OrderBookError::InsufficientLiquidity {
                side,
                requested: order.size(),
                available,
            });
        }
        self.claim_id(order.id());

        let matches = self.match_order(order, None).matches;
        debug!(
            "Order book {}: market order {} produced {} matches",
            self.symbol,
            order.id(),
            matches.len()
        );
        Ok(matches)
    }

    /// Build an order from `request` and place it
    pub fn submit(&mut self, request: &OrderRequest) -> Result<PlaceOrderOutcome, OrderBookError> {
        let mut order = self.new_order(request.side, request.size)?;
        let order_id = order.id();

        let matches = match request.kind {
            OrderKind::Limit => {
                let price = request.price.ok_or(OrderBookError::MissingLimitPrice)?;
                self.place_limit(price, order)?
            }
            OrderKind::Market => {
                let matches = self.place_market(&mut order)?;
                return Ok(PlaceOrderOutcome {
                    order_id,
                    matches,
                    resting: false,
                    remaining: order.size(),
                });
            }
        };

        let remaining = self.get_order(order_id).map_or(0.0, Order::size);
        Ok(PlaceOrderOutcome {
            order_id,
            matches,
            resting: remaining > 0.0,
            remaining,
        })
    }

    fn check_size(size: f64) -> Result<(), OrderBookError> {
        if size.is_finite() && size > 0.0 {
            Ok(())
        } else {
            Err(OrderBookError::InvalidQuantity(size))
        }
    }

    fn check_unique(&self, order_id: OrderId) -> Result<(), OrderBookError> {
        if self.seen_ids.contains(&order_id) {
            Err(OrderBookError::DuplicateOrderId(order_id))
        } else {
            Ok(())
        }
    }
}
