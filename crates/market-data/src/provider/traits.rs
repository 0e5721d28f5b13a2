//! Provider trait definitions.

use async_trait::async_trait;

use crate::errors::QuoteError;
use crate::models::PriceQuote;

/// A source that can resolve a free-text company name to a symbol.
///
/// `Ok(None)` means "no acceptable candidate" and is not an error; the
/// orchestrator falls through to the next provider in its fallback
/// order. Errors are logged and likewise treated as a miss.
#[async_trait]
pub trait SymbolSearchProvider: Send + Sync {
    /// Unique identifier, used for logging and diagnostics.
    fn id(&self) -> &'static str;

    /// Search for a symbol matching the query.
    async fn search_symbol(&self, query: &str) -> Result<Option<String>, QuoteError>;
}

/// A source for the current last traded price of a symbol.
///
/// Implementations own their retry and session-recovery behavior; by
/// the time an error escapes this trait the attempt budget is spent.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier, used for logging and diagnostics.
    fn id(&self) -> &'static str;

    /// Fetch a fresh quote. Never served from a cache.
    async fn fetch_quote(&self, symbol: &str) -> Result<PriceQuote, QuoteError>;
}
