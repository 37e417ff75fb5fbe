use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Order, OrderId};
use super::price::Price;
use super::side::BookSide;
use tracing::{error, trace};

impl OrderBook {
    /// Places a resting order in the book, updates its location.
    ///
    /// The order is stamped on arrival, so queue position and timestamp always agree
    /// whatever order the caller created its orders in.
    pub(super) fn rest_order(&mut self, price: Price, mut order: Order) {
        let (side, order_id) = (order.side(), order.id());
        self.claim_id(order_id);
        order.set_timestamp(self.clock.next());
        self.side_mut(side).level_or_insert(price).add(order);
        // The location is stored as (price, side) for efficient retrieval in cancel
        self.order_locations.insert(order_id, (price, side));
        trace!(
            "Order book {}: order {} resting at {} {}",
            self.symbol, order_id, side, price
        );
    }

    /// Retire `order_id` for good and keep generated ids clear of it
    pub(super) fn claim_id(&mut self, order_id: OrderId) {
        self.seen_ids.insert(order_id);
        if order_id.as_u64() >= self.next_order_id {
            self.next_order_id = order_id.as_u64().saturating_add(1);
        }
    }

    /// Check every structural invariant of the book.
    ///
    /// Every indexed level is non-empty, sits at its own key on its own side and holds only
    /// orders of that side pointing back at it, with `volume` equal to the sum of their
    /// sizes. Every resting order appears in the location index exactly once.
    pub fn validate(&self) -> Result<(), OrderBookError> {
        let mut resting = 0;
        for side in [&self.bids, &self.asks] {
            resting += self.validate_side(side)?;
        }
        if resting != self.order_locations.len() {
            return Err(self.violation(format!(
                "{} resting orders but {} indexed locations",
                resting,
                self.order_locations.len()
            )));
        }
        Ok(())
    }

    fn validate_side(&self, book_side: &BookSide) -> Result<usize, OrderBookError> {
        let side = book_side.side();
        if book_side.ordered_price_count() != book_side.level_count() {
            return Err(self.violation(format!(
                "{} side orders {} prices but indexes {} levels",
                side,
                book_side.ordered_price_count(),
                book_side.level_count()
            )));
        }

        let mut resting = 0;
        for level in book_side.iter_best() {
            let price = level.price();
            if !book_side.has_ordered_price(price) || level.side() != side {
                return Err(self.violation(format!("{} level {} is misplaced", side, price)));
            }
            if level.is_empty() {
                return Err(self.violation(format!("{} level {} is empty", side, price)));
            }

            let mut volume = 0.0;
            let mut last_timestamp = None;
            for order in level.iter_orders() {
                if order.side() != side || order.level() != Some(price) {
                    return Err(self.violation(format!(
                        "order {} does not belong to {} level {}",
                        order.id(),
                        side,
                        price
                    )));
                }
                if order.size() <= 0.0 {
                    return Err(self.violation(format!(
                        "order {} rests with size {}",
                        order.id(),
                        order.size()
                    )));
                }
                if last_timestamp.is_some_and(|last| order.timestamp() < last) {
                    return Err(self.violation(format!(
                        "{} level {} is out of arrival order at order {}",
                        side,
                        price,
                        order.id()
                    )));
                }
                if self.order_locations.get(&order.id()) != Some(&(price, side)) {
                    return Err(self.violation(format!(
                        "order {} is not indexed at {} {}",
                        order.id(),
                        side,
                        price
                    )));
                }
                last_timestamp = Some(order.timestamp());
                volume += order.size();
                resting += 1;
            }
            if volume != level.volume() {
                return Err(self.violation(format!(
                    "{} level {} reports volume {} but holds {}",
                    side,
                    price,
                    level.volume(),
                    volume
                )));
            }
        }
        Ok(resting)
    }

    pub(super) fn violation(&self, message: String) -> OrderBookError {
        error!("Order book {}: invariant violation: {}", self.symbol, message);
        OrderBookError::invariant(message)
    }
}
