use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SymbolResponse {
    pub symbol: String,
}

#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub symbol: String,
    pub price: f64,
}

/// Combined resolve-and-quote payload. `exchange` is always `"NSE"`;
/// the policy filter guarantees no other listing gets this far.
#[derive(Debug, Serialize)]
pub struct LtpResponse {
    pub symbol: String,
    pub ltp: f64,
    pub exchange: &'static str,
}
