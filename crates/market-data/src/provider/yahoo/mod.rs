//! Yahoo Finance symbol search provider.
//!
//! Search-only: quotes come from the NSE client. Every candidate passes
//! through the exchange policy filter before it can be returned, so a
//! BSE or ADR listing is never resolved even when it is the sole match.
//! A single request, no retry; the orchestrator falls back to other
//! resolution paths on failure.

mod models;

use reqwest::Client;
use tracing::debug;

use crate::config::MarketDataConfig;
use crate::errors::QuoteError;
use crate::models::SearchCandidate;
use crate::policy::ExchangePolicy;
use crate::provider::{yahoo_headers, SymbolSearchProvider};

use async_trait::async_trait;
use models::YahooSearchResponse;

pub struct YahooSearchProvider {
    client: Client,
    base_url: String,
    policy: ExchangePolicy,
}

impl YahooSearchProvider {
    pub fn new(config: &MarketDataConfig, policy: ExchangePolicy) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .default_headers(yahoo_headers())
            .pool_max_idle_per_host(config.max_idle_connections)
            .build()?;
        Ok(Self {
            client,
            base_url: config.yahoo_base_url.clone(),
            policy,
        })
    }

    /// Pick the first candidate the exchange policy accepts.
    fn first_acceptable(&self, response: YahooSearchResponse) -> Option<String> {
        for quote in response.quotes {
            let candidate = SearchCandidate {
                symbol: quote.symbol.unwrap_or_default(),
                exchange: quote.exchange.unwrap_or_default(),
                quote_type: quote.quote_type.unwrap_or_default(),
            };
            if candidate.symbol.is_empty() {
                continue;
            }
            if self.policy.accepts(&candidate) {
                return Some(candidate.symbol);
            }
            debug!(symbol = %candidate.symbol, exchange = %candidate.exchange, "candidate rejected by exchange policy");
        }
        None
    }
}

#[async_trait]
impl SymbolSearchProvider for YahooSearchProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn search_symbol(&self, query: &str) -> Result<Option<String>, QuoteError> {
        let url = format!("{}/v1/finance/search", self.base_url);

        debug!(%query, "searching Yahoo for NSE symbol");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("quotesCount", "10"), ("newsCount", "0")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuoteError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }

        let data: YahooSearchResponse = response
            .json()
            .await
            .map_err(|e| QuoteError::Parse(e.to_string()))?;

        Ok(self.first_acceptable(data))
    }
}
