//! Serde models for the Yahoo Finance search response.
//!
//! Every field is optional; upstream payloads drift and a missing field
//! must read as "absent", never panic.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct YahooSearchResponse {
    #[serde(default)]
    pub quotes: Vec<YahooSearchQuote>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooSearchQuote {
    pub symbol: Option<String>,
    pub exchange: Option<String>,
    pub quote_type: Option<String>,
}
