//! Quote service - resolution and price-fetch orchestration.
//!
//! Composes the alias table, the symbol cache and the upstream
//! providers into the two operations the API exposes: resolve a name
//! to an NSE symbol, and fetch its last traded price.
//!
//! Prices are never cached. The one failure mode this service exists
//! to prevent is serving a stale LTP, so every price read goes to the
//! network while only the durable name->symbol mapping is cached.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::alias;
use crate::cache::TtlCache;
use crate::config::MarketDataConfig;
use crate::errors::QuoteError;
use crate::models::PriceQuote;
use crate::policy::ExchangePolicy;
use crate::provider::nse::NseClient;
use crate::provider::yahoo::YahooSearchProvider;
use crate::provider::{QuoteProvider, SymbolSearchProvider};

pub struct QuoteService {
    /// Normalized query -> resolved symbol. Long TTL; symbols are durable.
    symbol_cache: TtlCache<String>,
    /// Search sources in fallback order.
    search_providers: Vec<Arc<dyn SymbolSearchProvider>>,
    quote_provider: Arc<dyn QuoteProvider>,
}

impl QuoteService {
    /// Build the production wiring: Yahoo search (policy-filtered)
    /// first, NSE autocomplete as fallback, NSE for quotes.
    pub fn new(config: &MarketDataConfig) -> Result<Self, QuoteError> {
        let yahoo = Arc::new(YahooSearchProvider::new(config, ExchangePolicy::default())?);
        let nse = Arc::new(NseClient::new(config));
        let search_providers: Vec<Arc<dyn SymbolSearchProvider>> = vec![yahoo, nse.clone()];
        Ok(Self::with_providers(config, search_providers, nse))
    }

    /// Assemble from explicit providers. Test seam and extension point.
    pub fn with_providers(
        config: &MarketDataConfig,
        search_providers: Vec<Arc<dyn SymbolSearchProvider>>,
        quote_provider: Arc<dyn QuoteProvider>,
    ) -> Self {
        Self {
            symbol_cache: TtlCache::new(config.symbol_ttl, config.symbol_cache_capacity),
            search_providers,
            quote_provider,
        }
    }

    /// Resolve a free-text company name to an NSE symbol.
    ///
    /// Lookup order: symbol cache, local alias table, then the search
    /// providers in their fallback order. The cache goes first: it is
    /// as cheap as the alias table and fresher if the table is
    /// outdated. Only network-resolved symbols are written back to the
    /// cache; alias hits are authoritative already.
    pub async fn resolve_symbol(&self, name: &str) -> Result<String, QuoteError> {
        let query = alias::normalize_query(name);
        if query.is_empty() {
            return Err(QuoteError::SymbolNotFound(name.to_string()));
        }

        if let Some(symbol) = self.symbol_cache.get(&query) {
            debug!(%query, %symbol, "symbol cache hit");
            return Ok(symbol);
        }

        if let Some(symbol) = alias::resolve_local(&query) {
            debug!(%query, symbol, "resolved via local alias table");
            return Ok(symbol.to_string());
        }

        for provider in &self.search_providers {
            match provider.search_symbol(&query).await {
                Ok(Some(symbol)) => {
                    debug!(provider = provider.id(), %query, %symbol, "symbol resolved");
                    self.symbol_cache.set(&query, symbol.clone());
                    return Ok(symbol);
                }
                Ok(None) => {
                    debug!(provider = provider.id(), %query, "no acceptable candidate");
                }
                Err(e) => {
                    // Classified and logged, then treated as a miss so
                    // the next source gets its turn.
                    warn!(provider = provider.id(), %query, class = ?e.failure_class(), error = %e, "symbol search failed");
                }
            }
        }

        Err(QuoteError::SymbolNotFound(name.trim().to_string()))
    }

    /// Fetch a fresh last traded price. Deliberately bypasses every
    /// cache; a missing or non-positive price is "unavailable", not a
    /// valid quote of zero.
    pub async fn fetch_price(&self, symbol: &str) -> Result<PriceQuote, QuoteError> {
        let ticker = symbol.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(QuoteError::PriceUnavailable(symbol.to_string()));
        }

        let quote = match self.quote_provider.fetch_quote(&ticker).await {
            Ok(quote) => quote,
            Err(e) => {
                warn!(%ticker, class = ?e.failure_class(), error = %e, "quote fetch failed");
                return Err(QuoteError::PriceUnavailable(ticker));
            }
        };

        if quote.price <= 0.0 {
            return Err(QuoteError::PriceUnavailable(ticker));
        }

        Ok(quote)
    }

    /// Resolve a name and fetch its price in one step. Either failure
    /// short-circuits; no partial result is ever returned.
    pub async fn resolve_and_quote(&self, name: &str) -> Result<PriceQuote, QuoteError> {
        let symbol = self.resolve_symbol(name).await?;
        self.fetch_price(&symbol).await
    }
}
