use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{LtpResponse, PriceResponse, SymbolResponse};

#[derive(serde::Deserialize)]
struct NameQuery {
    name: String,
}

#[derive(serde::Deserialize)]
struct SymbolQuery {
    symbol: String,
}

/// Resolve a company name to its NSE symbol.
async fn search_stock(
    State(state): State<Arc<AppState>>,
    Query(q): Query<NameQuery>,
) -> ApiResult<Json<SymbolResponse>> {
    let symbol = state.quote_service.resolve_symbol(&q.name).await?;
    Ok(Json(SymbolResponse { symbol }))
}

/// Fetch the last traded price for an already-resolved symbol.
async fn get_price(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SymbolQuery>,
) -> ApiResult<Json<PriceResponse>> {
    let quote = state.quote_service.fetch_price(&q.symbol).await?;
    Ok(Json(PriceResponse {
        symbol: quote.symbol,
        price: quote.price,
    }))
}

/// Resolve a name and fetch its price in one call.
async fn get_ltp(
    State(state): State<Arc<AppState>>,
    Query(q): Query<NameQuery>,
) -> ApiResult<Json<LtpResponse>> {
    let quote = state.quote_service.resolve_and_quote(&q.name).await?;
    Ok(Json(LtpResponse {
        symbol: quote.symbol,
        ltp: quote.price,
        exchange: "NSE",
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search-stock", get(search_stock))
        .route("/get-price", get(get_price))
        .route("/ltp", get(get_ltp))
}
