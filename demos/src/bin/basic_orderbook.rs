// demos/src/bin/basic_orderbook.rs

use demos::setup_logger;
use matchbook::{Exchange, ExchangeConfig, OrderBookError, OrderRequest, Side};
use tracing::{error, info};

const MARKET: &str = "ETH";

fn main() {
    // Set up logging
    setup_logger();
    info!("Basic OrderBook Example");

    let exchange = match create_exchange() {
        Ok(exchange) => exchange,
        Err(err) => {
            error!("Could not start exchange: {}", err);
            return;
        }
    };

    if let Err(err) = run(&exchange) {
        error!("Demo failed: {}", err);
    }
}

fn create_exchange() -> Result<Exchange, OrderBookError> {
    // Passed as the first argument, otherwise a single default ETH market.
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).map_err(|err| {
                OrderBookError::InvalidConfig {
                    message: format!("{}: {}", path, err),
                }
            })?;
            ExchangeConfig::from_json(&json)?
        }
        None => ExchangeConfig::default(),
    };
    let exchange = Exchange::from_config(&config)?;
    info!("Markets: {:?}", exchange.markets());
    Ok(exchange)
}

fn run(exchange: &Exchange) -> Result<(), OrderBookError> {
    demo_adding_orders(exchange)?;
    display_orderbook_state(exchange)?;

    demo_market_orders(exchange)?;
    display_orderbook_state(exchange)?;

    demo_cancel_orders(exchange)?;

    info!("\nFinal OrderBook State:");
    display_orderbook_state(exchange)
}

fn demo_adding_orders(exchange: &Exchange) -> Result<(), OrderBookError> {
    info!("\nAdding orders to the OrderBook...");

    for i in 0..5 {
        let price = 9_900.0 + (i as f64 * 20.0); // 9900, 9920, 9940, 9960, 9980
        let size = 10.0 + (i as f64 * 5.0); // 10, 15, 20, 25, 30
        let outcome = exchange.place_order(MARKET, &OrderRequest::limit(Side::Bid, size, price))?;
        info!("Bid {} resting: {} @ {}", outcome.order_id, size, price);
    }

    for i in 0..5 {
        let price = 10_000.0 + (i as f64 * 20.0); // 10000, 10020, 10040, 10060, 10080
        let size = 10.0 + (i as f64 * 5.0);
        let outcome = exchange.place_order(MARKET, &OrderRequest::limit(Side::Ask, size, price))?;
        info!("Ask {} resting: {} @ {}", outcome.order_id, size, price);
    }
    Ok(())
}

fn demo_market_orders(exchange: &Exchange) -> Result<(), OrderBookError> {
    info!("\nSubmitting market orders...");

    let outcome = exchange.place_order(MARKET, &OrderRequest::market(Side::Bid, 25.0))?;
    for m in &outcome.matches {
        info!(
            "Match: ask {} / bid {} size {} @ {}",
            m.ask_order_id, m.bid_order_id, m.size_filled, m.price
        );
    }

    // Far more than the bid side holds: rejected, book untouched.
    match exchange.place_order(MARKET, &OrderRequest::market(Side::Ask, 1_000_000.0)) {
        Err(err @ OrderBookError::InsufficientLiquidity { .. }) => {
            info!("Oversized market order rejected as expected: {}", err);
        }
        Err(err) => return Err(err),
        Ok(outcome) => info!("Unexpectedly filled: {:?}", outcome),
    }
    Ok(())
}

fn demo_cancel_orders(exchange: &Exchange) -> Result<(), OrderBookError> {
    info!("\nCancelling orders...");

    let outcome = exchange.place_order(MARKET, &OrderRequest::limit(Side::Bid, 7.0, 9_500.0))?;
    let cancelled = exchange.cancel_order(MARKET, outcome.order_id)?;
    info!("Cancelled {}", cancelled);

    match exchange.cancel_order(MARKET, outcome.order_id) {
        Err(OrderBookError::OrderNotFound(id)) => info!("Second cancel of {} reports not found", id),
        other => info!("Unexpected second cancel result: {:?}", other),
    }
    Ok(())
}

fn display_orderbook_state(exchange: &Exchange) -> Result<(), OrderBookError> {
    let snapshot = exchange.snapshot(MARKET)?;
    info!(
        "Best bid: {:?}, best ask: {:?}, spread: {:?}, mid: {:?}",
        snapshot.best_bid(),
        snapshot.best_ask(),
        snapshot.spread(),
        snapshot.mid_price()
    );
    info!(
        "Total bid volume: {}, total ask volume: {}",
        snapshot.total_bid_volume, snapshot.total_ask_volume
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => info!("Snapshot:\n{}", json),
        Err(err) => error!("Could not encode snapshot: {}", err),
    }
    Ok(())
}
