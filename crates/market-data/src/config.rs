//! Configuration for upstream clients and the symbol cache.

use std::time::Duration;

/// Tunables for the market data layer.
///
/// Base URLs are overridable so tests can point the clients at a local
/// mock server. Defaults mirror production behavior against the real
/// exchanges.
///
/// There is deliberately no price TTL here: price reads always go to
/// the network, so no price cache exists to configure.
#[derive(Debug, Clone)]
pub struct MarketDataConfig {
    /// NSE site root; also the session bootstrap resource.
    pub nse_base_url: String,
    /// Yahoo Finance query host used for symbol search.
    pub yahoo_base_url: String,
    /// Per-request network timeout.
    pub request_timeout: Duration,
    /// Total attempt budget for a quote fetch (401 recovery included).
    pub quote_attempts: usize,
    /// Base for the linear retry backoff (attempt index multiplies it).
    pub backoff_base: Duration,
    /// TTL for resolved symbols. Symbols are durable, so this is long.
    pub symbol_ttl: Duration,
    /// Hard capacity bound of the symbol cache.
    pub symbol_cache_capacity: usize,
    /// Upstream connection pool bound per host.
    pub max_idle_connections: usize,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            nse_base_url: "https://www.nseindia.com".to_string(),
            yahoo_base_url: "https://query1.finance.yahoo.com".to_string(),
            request_timeout: Duration::from_secs(15),
            quote_attempts: 3,
            backoff_base: Duration::from_millis(500),
            symbol_ttl: Duration::from_secs(3600),
            symbol_cache_capacity: 256,
            max_idle_connections: 4,
        }
    }
}
