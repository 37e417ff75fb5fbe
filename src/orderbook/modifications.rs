use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Order, OrderId};
use tracing::trace;

impl OrderBook {
    /// Cancel a resting order by ID and return it.
    ///
    /// Unknown ids, and ids of orders already filled or cancelled, yield
    /// [`OrderBookError::OrderNotFound`] and leave the book untouched.
    pub fn cancel(&mut self, order_id: OrderId) -> Result<Order, OrderBookError> {
        trace!("Order book {}: cancelling order {}", self.symbol, order_id);
        let Some(&(price, side)) = self.order_locations.get(&order_id) else {
            return Err(OrderBookError::OrderNotFound(order_id));
        };

        let removed = match self.side_mut(side).get_mut(price) {
            Some(level) => level.remove(order_id),
            None => Err(OrderBookError::OrderNotFound(order_id)),
        };
        let order = match removed {
            Ok(order) => order,
            Err(_) => {
                let err = self.violation(format!(
                    "order {} indexed at {} {} but not resident there",
                    order_id, side, price
                ));
                if cfg!(debug_assertions) {
                    panic!("{}", err);
                }
                return Err(err);
            }
        };

        self.order_locations.remove(&order_id);
        self.side_mut(side).remove_if_empty(price);
        Ok(order)
    }

    /// Cancel the resting order `order` refers to, using its level back-reference
    pub fn cancel_order(&mut self, order: &Order) -> Result<Order, OrderBookError> {
        if !order.is_resting() {
            return Err(OrderBookError::OrderNotFound(order.id()));
        }
        self.cancel(order.id())
    }
}
