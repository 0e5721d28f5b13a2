use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use serde_json::{json, Value};
use tower::ServiceExt;

use nse_market_data::provider::{QuoteProvider, SymbolSearchProvider};
use nse_market_data::{MarketDataConfig, PriceQuote, QuoteError, QuoteService};
use nse_stock_server::{api::app_router, AppState};

struct StubSearch(Option<String>);

#[async_trait]
impl SymbolSearchProvider for StubSearch {
    fn id(&self) -> &'static str {
        "STUB_SEARCH"
    }

    async fn search_symbol(&self, _query: &str) -> Result<Option<String>, QuoteError> {
        Ok(self.0.clone())
    }
}

struct StubQuotes(Option<f64>);

#[async_trait]
impl QuoteProvider for StubQuotes {
    fn id(&self) -> &'static str {
        "STUB_QUOTES"
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<PriceQuote, QuoteError> {
        match self.0 {
            Some(price) => Ok(PriceQuote {
                symbol: symbol.to_string(),
                price,
                open: None,
                high: None,
                low: None,
                prev_close: None,
                change: None,
                change_pct: None,
                volume: None,
            }),
            None => Err(QuoteError::PriceUnavailable(symbol.to_string())),
        }
    }
}

fn test_router(resolved: Option<&str>, price: Option<f64>) -> axum::Router {
    let search: Vec<Arc<dyn SymbolSearchProvider>> =
        vec![Arc::new(StubSearch(resolved.map(String::from)))];
    let quotes: Arc<dyn QuoteProvider> = Arc::new(StubQuotes(price));
    let service = QuoteService::with_providers(&MarketDataConfig::default(), search, quotes);
    app_router(Arc::new(AppState {
        quote_service: Arc::new(service),
    }))
}

async fn get_json(app: axum::Router, uri: &str) -> (u16, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn health_reports_the_exchange_scope() {
    let (status, body) = get_json(test_router(None, None), "/health").await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "exchange": "NSE-ONLY",
        })
    );
}

#[tokio::test]
async fn search_stock_resolves_a_name() {
    let app = test_router(Some("PERSISTENT.NS"), None);
    let (status, body) = get_json(app, "/search-stock?name=persistent%20systems").await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"symbol": "PERSISTENT.NS"}));
}

#[tokio::test]
async fn search_stock_serves_alias_hits_without_a_provider() {
    // "tcs" is in the built-in alias table; the provider returns nothing.
    let app = test_router(None, None);
    let (status, body) = get_json(app, "/search-stock?name=tcs").await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"symbol": "TCS"}));
}

#[tokio::test]
async fn search_stock_miss_is_not_found() {
    let app = test_router(None, None);
    let (status, body) = get_json(app, "/search-stock?name=no%20such%20company").await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({"detail": "NSE stock not found"}));
}

#[tokio::test]
async fn search_stock_requires_the_name_parameter() {
    let app = test_router(Some("TCS.NS"), None);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/search-stock")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn get_price_returns_the_quote() {
    let app = test_router(None, Some(3456.5));
    let (status, body) = get_json(app, "/get-price?symbol=tcs.ns").await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"symbol": "TCS.NS", "price": 3456.5}));
}

#[tokio::test]
async fn get_price_failure_is_price_unavailable() {
    let app = test_router(None, None);
    let (status, body) = get_json(app, "/get-price?symbol=TCS.NS").await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({"detail": "Price unavailable"}));
}

#[tokio::test]
async fn ltp_resolves_and_quotes_in_one_call() {
    let app = test_router(Some("PERSISTENT.NS"), Some(3456.5));
    let (status, body) = get_json(app, "/ltp?name=persistent%20systems").await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"symbol": "PERSISTENT.NS", "ltp": 3456.5, "exchange": "NSE"})
    );
}

#[tokio::test]
async fn ltp_resolution_failure_is_stock_not_found() {
    let app = test_router(None, Some(3456.5));
    let (status, body) = get_json(app, "/ltp?name=no%20such%20company").await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({"detail": "NSE stock not found"}));
}

#[tokio::test]
async fn ltp_price_failure_is_price_unavailable() {
    let app = test_router(Some("PERSISTENT.NS"), None);
    let (status, body) = get_json(app, "/ltp?name=persistent%20systems").await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({"detail": "Price unavailable"}));
}
