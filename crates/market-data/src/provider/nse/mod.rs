//! Session-backed NSE client.
//!
//! NSE's public endpoints require browser-like headers and session
//! cookies obtained by fetching the site root once. The session is an
//! owned field of the client (a `reqwest::Client` whose cookie jar
//! carries the NSE cookies), swapped atomically under a lock when the
//! upstream reports it expired.
//!
//! Quote fetches retry up to the configured attempt budget:
//! - 401: invalidate the session, re-bootstrap, retry (the retry
//!   consumes one attempt)
//! - transport error, including a connection cut while reading the
//!   body: linear backoff (`attempt_index * backoff_base`), then retry
//! - any other non-success status, or a payload that fails to decode:
//!   fail immediately
//!
//! Symbol autocomplete is a single request with no retry; callers fall
//! back to other resolution paths.

mod models;

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::MarketDataConfig;
use crate::errors::QuoteError;
use crate::models::PriceQuote;
use crate::provider::{nse_headers, QuoteProvider, SymbolSearchProvider};

use models::{NseQuoteResponse, NseSearchResponse};

pub struct NseClient {
    base_url: String,
    request_timeout: std::time::Duration,
    quote_attempts: usize,
    backoff_base: std::time::Duration,
    max_idle_connections: usize,
    /// Current session, shared across in-flight calls. `None` until the
    /// first use and after an auth failure. The pointer swap is atomic;
    /// a redundant bootstrap from two concurrent 401s is harmless.
    session: RwLock<Option<Arc<Client>>>,
}

impl NseClient {
    pub fn new(config: &MarketDataConfig) -> Self {
        Self {
            base_url: config.nse_base_url.clone(),
            request_timeout: config.request_timeout,
            quote_attempts: config.quote_attempts.max(1),
            backoff_base: config.backoff_base,
            max_idle_connections: config.max_idle_connections,
            session: RwLock::new(None),
        }
    }

    // ========================================================================
    // Session lifecycle
    // ========================================================================

    /// Get the active session, bootstrapping one if needed.
    async fn ensure_session(&self) -> Result<Arc<Client>, QuoteError> {
        {
            let guard = self.session.read().unwrap();
            if let Some(client) = guard.as_ref() {
                return Ok(client.clone());
            }
        }

        let client = self.bootstrap_session().await?;

        let mut guard = self.session.write().unwrap();
        // Another task may have bootstrapped concurrently; reuse theirs
        // so both see one consistent cookie jar.
        if let Some(existing) = guard.as_ref() {
            return Ok(existing.clone());
        }
        *guard = Some(client.clone());
        Ok(client)
    }

    /// Drop the current session so the next call rebuilds it.
    fn invalidate_session(&self) {
        let mut guard = self.session.write().unwrap();
        *guard = None;
    }

    /// Build a fresh client and warm it up against the site root to
    /// collect session cookies. Bootstrap failure is tolerated: the
    /// data call may still succeed without it.
    async fn bootstrap_session(&self) -> Result<Arc<Client>, QuoteError> {
        let client = Client::builder()
            .timeout(self.request_timeout)
            .default_headers(nse_headers())
            .cookie_store(true)
            .pool_max_idle_per_host(self.max_idle_connections)
            .build()?;
        let client = Arc::new(client);

        match client.get(&self.base_url).send().await {
            Ok(response) => {
                debug!(status = %response.status(), "NSE session bootstrap complete");
            }
            Err(e) => {
                warn!(error = %e, "NSE session bootstrap failed, continuing without cookies");
            }
        }

        Ok(client)
    }

    // ========================================================================
    // Quote fetching
    // ========================================================================

    async fn fetch_quote_inner(&self, symbol: &str) -> Result<PriceQuote, QuoteError> {
        let bare = bare_symbol(symbol);
        let url = format!("{}/api/quote-equity", self.base_url);

        for attempt in 0..self.quote_attempts {
            let client = self.ensure_session().await?;

            let result = client
                .get(&url)
                .query(&[("symbol", bare.as_str())])
                .send()
                .await;

            let transport_error = match result {
                Ok(response) if response.status() == StatusCode::UNAUTHORIZED => {
                    debug!(symbol = %bare, attempt, "NSE session rejected, rebuilding");
                    self.invalidate_session();
                    continue;
                }
                Ok(response) if !response.status().is_success() => {
                    return Err(QuoteError::UpstreamStatus {
                        status: response.status().as_u16(),
                    });
                }
                Ok(response) => match response.json::<NseQuoteResponse>().await {
                    Ok(data) => return quote_from_response(&bare, data),
                    // A decode failure is a malformed payload; anything
                    // else from the body read is the connection dying
                    // mid-response and gets the transport treatment.
                    Err(e) if e.is_decode() => {
                        return Err(QuoteError::Parse(e.to_string()));
                    }
                    Err(e) => e,
                },
                Err(e) => e,
            };

            if attempt + 1 < self.quote_attempts {
                let delay = self.backoff_base * (attempt as u32 + 1);
                debug!(symbol = %bare, attempt, error = %transport_error, "transient NSE error, retrying in {:?}", delay);
                tokio::time::sleep(delay).await;
                continue;
            }
            return Err(if transport_error.is_timeout() {
                QuoteError::Timeout
            } else {
                QuoteError::Network(transport_error)
            });
        }

        // Every attempt was answered with 401.
        Err(QuoteError::SessionExpired)
    }
}

/// Strip the market suffix and normalize; the NSE API wants the bare
/// ticker (`TCS`, not `TCS.NS`).
fn bare_symbol(symbol: &str) -> String {
    symbol
        .trim()
        .to_uppercase()
        .trim_end_matches(".NS")
        .trim_end_matches(".BO")
        .to_string()
}

/// Map the NSE payload to a [`PriceQuote`], re-appending the `.NS`
/// suffix. Only `lastPrice` may serve as the price.
fn quote_from_response(bare: &str, data: NseQuoteResponse) -> Result<PriceQuote, QuoteError> {
    let price_info = data
        .price_info
        .ok_or_else(|| QuoteError::PriceUnavailable(format!("{}.NS", bare)))?;

    let price = price_info
        .last_price
        .ok_or_else(|| QuoteError::PriceUnavailable(format!("{}.NS", bare)))?;

    let (high, low) = match price_info.intra_day_high_low {
        Some(high_low) => (high_low.max, high_low.min),
        None => (None, None),
    };

    Ok(PriceQuote {
        symbol: format!("{}.NS", bare),
        price,
        open: price_info.open,
        high,
        low,
        prev_close: price_info.previous_close,
        change: price_info.change,
        change_pct: price_info.p_change,
        volume: data
            .pre_open_market
            .and_then(|pre_open| pre_open.total_traded_volume),
    })
}

#[async_trait]
impl QuoteProvider for NseClient {
    fn id(&self) -> &'static str {
        "NSE"
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<PriceQuote, QuoteError> {
        self.fetch_quote_inner(symbol).await
    }
}

#[async_trait]
impl SymbolSearchProvider for NseClient {
    fn id(&self) -> &'static str {
        "NSE"
    }

    /// Resolve a name via NSE's autocomplete. Single request; any
    /// failure is a miss for the caller's fallback chain.
    async fn search_symbol(&self, query: &str) -> Result<Option<String>, QuoteError> {
        let client = self.ensure_session().await?;
        let url = format!("{}/api/search/autocomplete", self.base_url);
        let q = query.trim().to_uppercase();

        let response = client.get(&url).query(&[("q", q.as_str())]).send().await?;

        if !response.status().is_success() {
            return Err(QuoteError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }

        let data: NseSearchResponse = response
            .json()
            .await
            .map_err(|e| QuoteError::Parse(e.to_string()))?;

        Ok(data
            .symbols
            .into_iter()
            .filter_map(|item| item.symbol)
            .map(|s| s.to_uppercase())
            .find(|s| !s.is_empty()))
    }
}
