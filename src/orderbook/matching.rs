//! Contains the core matching engine logic for the order book.

use super::book::OrderBook;
use super::level::LevelFill;
use super::order::{Order, Side};
use super::price::Price;
use super::side::BookSide;
use tracing::{trace, warn};

impl BookSide {
    /// Run `aggressor` through this side best-price-first.
    ///
    /// With a `limit_price`, levels priced worse than the limit are left alone. Levels that
    /// empty during the walk are removed from this side before moving on.
    pub(super) fn walk(&mut self, aggressor: &mut Order, limit_price: Option<Price>) -> LevelFill {
        let mut result = LevelFill::default();

        for price in self.prices_best_first() {
            if aggressor.is_filled() {
                break;
            }
            if let Some(limit) = limit_price {
                match self.side() {
                    Side::Ask if price > limit => break,
                    Side::Bid if price < limit => break,
                    _ => {}
                }
            }

            let Some(level) = self.get_mut(price) else {
                continue;
            };
            let level_fill = level.fill(aggressor);
            result.matches.extend(level_fill.matches);
            result.filled.extend(level_fill.filled);

            self.remove_if_empty(price);
        }

        result
    }
}

impl OrderBook {
    /// Match `aggressor` against the opposite side, optionally bounded by a limit price.
    ///
    /// Updates the order index for resting orders that were filled and records the last
    /// trade price. Does not check liquidity; callers decide whether a partial walk is
    /// acceptable.
    pub(super) fn match_order(
        &mut self,
        aggressor: &mut Order,
        limit_price: Option<Price>,
    ) -> LevelFill {
        trace!(
            "Order book {}: matching {} against {} side, limit {:?}",
            self.symbol,
            aggressor,
            aggressor.side().opposite(),
            limit_price
        );
        let match_side = match aggressor.side() {
            Side::Bid => &mut self.asks,
            Side::Ask => &mut self.bids,
        };
        let result = match_side.walk(aggressor, limit_price);

        for order in &result.filled {
            self.order_locations.remove(&order.id());
        }
        if let Some(last) = result.matches.last() {
            self.last_trade_price = Some(last.price);
        }

        if limit_price.is_none() && !aggressor.is_filled() {
            // Only reachable through floating point dust once liquidity was pre-checked.
            warn!(
                "Order book {}: market order {} left {} unfilled after exhausting the book",
                self.symbol,
                aggressor.id(),
                aggressor.size()
            );
        }

        result
    }
}
