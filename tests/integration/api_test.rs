//! Integration tests for the REST API client

use rust_decimal_macros::dec;
use serde_json::json;
use tickersim::api::{ApiClient, ApiClientConfig, LoginRequest, RegisterRequest};
use tickersim::portfolio::{TradeAction, TradeError};
use tickersim::session::{AuthError, RegError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiClientConfig::new(server.uri()))
}

fn login_request() -> LoginRequest {
    LoginRequest {
        username: "alice".to_string(),
        password: "pw1".to_string(),
        mode: "simulation".to_string(),
        api_key: None,
        api_url: None,
    }
}

#[tokio::test]
async fn test_login_success_returns_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"balance": 10000.0, "stocks": {}})),
        )
        .mount(&server)
        .await;

    let snapshot = client(&server).login(&login_request()).await.unwrap();
    assert_eq!(snapshot.balance, dec!(10000));
    assert!(snapshot.holdings.is_empty());
}

#[tokio::test]
async fn test_login_rejected_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let err = client(&server).login(&login_request()).await.unwrap_err();
    match err {
        AuthError::Rejected(message) => assert_eq!(message, "Invalid credentials"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_register_duplicate_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "User already exists"})),
        )
        .mount(&server)
        .await;

    let request = RegisterRequest {
        username: "alice".to_string(),
        password: "pw1".to_string(),
    };
    let err = client(&server).register(&request).await.unwrap_err();
    match err {
        RegError::Rejected(message) => assert_eq!(message, "User already exists"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_buy_success_returns_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/stock/buy"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"balance": 9850.0, "stocks": {"AAPL": 1}})),
        )
        .mount(&server)
        .await;

    let snapshot = client(&server).trade(TradeAction::Buy, 1).await.unwrap();
    assert_eq!(snapshot.balance, dec!(9850));
    assert_eq!(snapshot.holdings.get("AAPL"), Some(&1));
}

#[tokio::test]
async fn test_sell_without_holdings_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/stock/sell"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"message": "Not enough stocks to sell"})),
        )
        .mount(&server)
        .await;

    let err = client(&server).trade(TradeAction::Sell, 1).await.unwrap_err();
    match err {
        TradeError::Rejected(message) => assert_eq!(message, "Not enough stocks to sell"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_trade_unauthorized_is_auth_expired() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/stock/buy"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
        .mount(&server)
        .await;

    let err = client(&server).trade(TradeAction::Buy, 1).await.unwrap_err();
    assert!(matches!(err, TradeError::AuthExpired));
}

#[tokio::test]
async fn test_rejection_without_body_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server).login(&login_request()).await.unwrap_err();
    match err {
        AuthError::Rejected(message) => assert!(message.contains("500")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_stock_info_returns_quote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stock/info"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"symbol": "AAPL", "price": 150.0})),
        )
        .mount(&server)
        .await;

    let quote = client(&server).stock_info().await.unwrap();
    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.price, dec!(150));
}
