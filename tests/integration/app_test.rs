//! End-to-end tests for the application core against a mocked service

use chrono::Utc;
use rust_decimal_macros::dec;
use serde_json::json;
use std::sync::Arc;
use tickersim::api::{ApiClient, ApiClientConfig};
use tickersim::app::App;
use tickersim::feed::{FeedEvent, FeedStatus, PriceTick};
use tickersim::portfolio::{TradeAction, TradeError};
use tickersim::session::{SessionStatus, TradingMode};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app(server: &MockServer) -> App {
    let api = Arc::new(ApiClient::new(ApiClientConfig::new(server.uri())));
    App::new(api, "AAPL", 50)
}

fn tick(price: rust_decimal::Decimal) -> FeedEvent {
    FeedEvent::Tick(PriceTick {
        symbol: "AAPL".to_string(),
        price,
        received_at: Utc::now(),
    })
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"balance": 10000.0, "stocks": {}})),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_adopts_initial_snapshot() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let mut app = app(&server);
    app.login("alice", "pw1", &TradingMode::Simulation)
        .await
        .unwrap();

    assert_eq!(app.session().status, SessionStatus::Authenticated);
    let portfolio = app.portfolio().unwrap();
    assert_eq!(portfolio.balance, dec!(10000));
    assert_eq!(portfolio.quantity("AAPL"), 0);
}

#[tokio::test]
async fn test_buy_replaces_portfolio_wholesale() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/stock/buy"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"balance": 9850.0, "stocks": {"AAPL": 1}})),
        )
        .mount(&server)
        .await;

    let mut app = app(&server);
    app.login("alice", "pw1", &TradingMode::Simulation)
        .await
        .unwrap();
    app.trade(TradeAction::Buy, 1).await.unwrap();

    let model = app.render();
    assert_eq!(model.balance_line.as_deref(), Some("Balance: $9850.00"));
    assert_eq!(model.holdings_line.as_deref(), Some("Stocks Owned: 1"));
}

#[tokio::test]
async fn test_rejected_sell_leaves_portfolio_unchanged() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/stock/sell"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"message": "Not enough stocks to sell"})),
        )
        .mount(&server)
        .await;

    let mut app = app(&server);
    app.login("alice", "pw1", &TradingMode::Simulation)
        .await
        .unwrap();

    let err = app.trade(TradeAction::Sell, 1).await.unwrap_err();
    assert!(matches!(err, TradeError::Rejected(_)));

    let portfolio = app.portfolio().unwrap();
    assert_eq!(portfolio.balance, dec!(10000));
    assert_eq!(portfolio.quantity("AAPL"), 0);
}

#[tokio::test]
async fn test_ticks_flow_into_history_after_login() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let mut app = app(&server);

    // Ticks before login are discarded
    app.on_feed_event(tick(dec!(149)));
    assert!(app.history().is_empty());

    app.login("alice", "pw1", &TradingMode::Simulation)
        .await
        .unwrap();

    for price in [dec!(150), dec!(151), dec!(152)] {
        app.on_feed_event(tick(price));
    }

    assert_eq!(app.history().len(), 3);
    let model = app.render();
    assert_eq!(model.price_line.as_deref(), Some("Current Price: $152.00"));
    assert_eq!(model.chart.labels, vec![1, 2, 3]);
    assert_eq!(app.feed_status(), FeedStatus::Live);
}

#[tokio::test]
async fn test_logout_clears_state_even_when_server_errors() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut app = app(&server);
    app.login("alice", "pw1", &TradingMode::Simulation)
        .await
        .unwrap();
    app.on_feed_event(tick(dec!(150)));

    let result = app.logout().await;
    assert!(result.is_err());

    // Local state is cleared regardless of the server's answer
    assert_eq!(app.session().status, SessionStatus::Anonymous);
    assert!(app.session().identity.is_none());
    assert!(app.portfolio().is_none());
    assert!(app.history().is_empty());
}

#[tokio::test]
async fn test_auth_expiry_demotes_session() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/stock/buy"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
        .mount(&server)
        .await;

    let mut app = app(&server);
    app.login("alice", "pw1", &TradingMode::Simulation)
        .await
        .unwrap();

    let err = app.trade(TradeAction::Buy, 1).await.unwrap_err();
    assert!(matches!(err, TradeError::AuthExpired));
    assert_eq!(app.session().status, SessionStatus::LoggedOut);

    // Further trades are refused locally
    let err = app.trade(TradeAction::Buy, 1).await.unwrap_err();
    assert!(matches!(err, TradeError::NotAuthenticated));
}

#[tokio::test]
async fn test_seed_quote_populates_history() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/stock/info"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"symbol": "AAPL", "price": 150.0})),
        )
        .mount(&server)
        .await;

    let mut app = app(&server);
    app.login("alice", "pw1", &TradingMode::Simulation)
        .await
        .unwrap();
    app.seed_quote().await.unwrap();

    assert_eq!(app.history().latest(), Some(dec!(150)));
}

#[tokio::test]
async fn test_zero_quantity_rejected_locally() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let mut app = app(&server);
    app.login("alice", "pw1", &TradingMode::Simulation)
        .await
        .unwrap();

    let err = app.trade(TradeAction::Buy, 0).await.unwrap_err();
    assert!(matches!(err, TradeError::Rejected(_)));
    assert_eq!(app.portfolio().unwrap().balance, dec!(10000));
}
