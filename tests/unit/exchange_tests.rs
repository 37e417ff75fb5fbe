//! Exchange registry behaviour.

#[cfg(test)]
mod exchange_tests {
    use matchbook::{BookConfig, Exchange, ExchangeConfig, OrderBookError, OrderRequest, Side};

    fn exchange_with(markets: &[&str]) -> Exchange {
        let exchange = Exchange::new();
        for market in markets {
            exchange.add_market(market, BookConfig::default()).unwrap();
        }
        exchange
    }

    #[test]
    fn test_unknown_market_is_reported() {
        let exchange = exchange_with(&["ETH"]);

        let result = exchange.place_order("DOGE", &OrderRequest::limit(Side::Bid, 1.0, 1.0));
        assert_eq!(result, Err(OrderBookError::MarketNotFound("DOGE".to_string())));
        assert!(matches!(
            exchange.snapshot("DOGE"),
            Err(OrderBookError::MarketNotFound(_))
        ));
    }

    #[test]
    fn test_add_market_twice_is_rejected() {
        let exchange = exchange_with(&["ETH"]);

        let result = exchange.add_market("ETH", BookConfig::default());
        assert_eq!(
            result,
            Err(OrderBookError::MarketAlreadyExists("ETH".to_string()))
        );
        assert_eq!(exchange.markets(), vec!["ETH".to_string()]);
    }

    #[test]
    fn test_markets_are_independent() {
        let exchange = exchange_with(&["ETH", "BTC"]);
        exchange
            .place_order("ETH", &OrderRequest::limit(Side::Ask, 5.0, 2_000.0))
            .unwrap();

        let eth = exchange.snapshot("ETH").unwrap();
        let btc = exchange.snapshot("BTC").unwrap();
        assert_eq!(eth.total_ask_volume, 5.0);
        assert_eq!(btc.total_ask_volume, 0.0);
        assert_eq!(exchange.markets(), vec!["BTC".to_string(), "ETH".to_string()]);

        // No BTC liquidity, so the market order is refused.
        let result = exchange.place_order("BTC", &OrderRequest::market(Side::Bid, 1.0));
        assert!(matches!(
            result,
            Err(OrderBookError::InsufficientLiquidity { .. })
        ));
    }

    #[test]
    fn test_place_and_cancel_through_exchange() {
        let exchange = exchange_with(&["ETH"]);
        let placed = exchange
            .place_order("ETH", &OrderRequest::limit(Side::Bid, 3.0, 1_500.0))
            .unwrap();
        assert!(placed.resting);
        assert_eq!(placed.remaining, 3.0);
        assert!(placed.matches.is_empty());

        let cancelled = exchange.cancel_order("ETH", placed.order_id).unwrap();
        assert_eq!(cancelled.id(), placed.order_id);
        assert_eq!(cancelled.size(), 3.0);

        let again = exchange.cancel_order("ETH", placed.order_id);
        assert_eq!(again, Err(OrderBookError::OrderNotFound(placed.order_id)));
        assert!(exchange.snapshot("ETH").unwrap().bids.is_empty());
    }

    #[test]
    fn test_market_order_outcome() {
        let exchange = exchange_with(&["ETH"]);
        exchange
            .place_order("ETH", &OrderRequest::limit(Side::Ask, 4.0, 100.0))
            .unwrap();
        exchange
            .place_order("ETH", &OrderRequest::limit(Side::Ask, 4.0, 101.0))
            .unwrap();

        let outcome = exchange
            .place_order("ETH", &OrderRequest::market(Side::Bid, 6.0))
            .unwrap();
        assert_eq!(outcome.matches.len(), 2);
        assert_eq!(outcome.filled_size(), 6.0);
        assert!(!outcome.resting);
        assert_eq!(outcome.remaining, 0.0);

        let snapshot = exchange.snapshot("ETH").unwrap();
        assert_eq!(snapshot.best_ask(), Some((101.0, 2.0)));
    }

    #[test]
    fn test_limit_request_without_price_is_rejected() {
        let exchange = exchange_with(&["ETH"]);
        let mut request = OrderRequest::limit(Side::Bid, 1.0, 10.0);
        request.price = None;

        assert_eq!(
            exchange.place_order("ETH", &request),
            Err(OrderBookError::MissingLimitPrice)
        );
    }

    #[test]
    fn test_exchange_from_json_config() {
        let json = r#"{
            "markets": [
                { "symbol": "ETH" },
                { "symbol": "BTC", "price_decimals": 2, "match_marketable_limits": true }
            ]
        }"#;
        let config = ExchangeConfig::from_json(json).unwrap();
        let exchange = Exchange::from_config(&config).unwrap();
        assert_eq!(exchange.markets(), vec!["BTC".to_string(), "ETH".to_string()]);

        // BTC rounds to cents and lets crossing limits trade.
        exchange
            .place_order("BTC", &OrderRequest::limit(Side::Ask, 1.0, 30_000.004))
            .unwrap();
        let outcome = exchange
            .place_order("BTC", &OrderRequest::limit(Side::Bid, 3.0, 30_100.0))
            .unwrap();
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].price, 30_000.0);
        assert!(outcome.resting);
        assert_eq!(outcome.remaining, 2.0);

        // ETH keeps crossing limits passive.
        exchange
            .place_order("ETH", &OrderRequest::limit(Side::Ask, 1.0, 2_000.0))
            .unwrap();
        let outcome = exchange
            .place_order("ETH", &OrderRequest::limit(Side::Bid, 1.0, 2_100.0))
            .unwrap();
        assert!(outcome.matches.is_empty());
        assert!(outcome.resting);
    }

    #[test]
    fn test_duplicate_market_config_is_rejected() {
        let json = r#"{ "markets": [ { "symbol": "ETH" }, { "symbol": "ETH" } ] }"#;
        assert!(matches!(
            ExchangeConfig::from_json(json),
            Err(OrderBookError::InvalidConfig { .. })
        ));
    }
}
