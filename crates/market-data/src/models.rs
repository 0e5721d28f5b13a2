//! Data models shared across providers and the orchestrator.

use serde::Serialize;

/// A resolved symbol with its last traded price.
///
/// Only `symbol` and `price` are guaranteed; the remaining fields are
/// best-effort passthrough from the upstream payload and may be absent.
#[derive(Debug, Clone, Serialize)]
pub struct PriceQuote {
    /// NSE symbol with the `.NS` market suffix (e.g., "TCS.NS")
    pub symbol: String,
    /// Last traded price, taken from the canonical current-price field
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

/// A candidate record from a symbol search, as judged by the exchange
/// policy filter.
#[derive(Debug, Clone)]
pub struct SearchCandidate {
    /// Ticker string as returned by the upstream (e.g., "TCS.NS")
    pub symbol: String,
    /// Exchange code (e.g., "NSI", "BSE")
    pub exchange: String,
    /// Quote classification (e.g., "EQUITY", "ETF")
    pub quote_type: String,
}
