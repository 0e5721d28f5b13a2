//! NSE Market Data Crate
//!
//! Resolves free-text company names to NSE ticker symbols and fetches
//! their last traded price (LTP) from the upstream exchanges.
//!
//! # Overview
//!
//! The crate enforces a strict single-market policy:
//! - NSE only: candidates from other exchanges (BSE, US ADR listings)
//!   are rejected during symbol resolution
//! - One canonical price field: `priceInfo.lastPrice` from the NSE
//!   quote payload, never previous-close or pre/post-market prices
//! - No stale prices: symbol lookups are cached, price reads never are
//!
//! # Architecture
//!
//! ```text
//! +-----------------+
//! |  QuoteService   |  (orchestrator: alias -> cache -> providers)
//! +-----------------+
//!     |         |
//!     v         v
//! +--------+ +-------------------+
//! | TtlCache| | SymbolSearch /   |
//! | (FIFO) | | QuoteProvider     |  (Yahoo search, NSE session client)
//! +--------+ +-------------------+
//! ```
//!
//! # Core Types
//!
//! - [`QuoteService`] - Resolution and quote orchestration
//! - [`TtlCache`] - Bounded FIFO cache with per-entry expiry
//! - [`PriceQuote`] - A resolved symbol with its last traded price
//! - [`QuoteError`] - Error taxonomy with failure classification

pub mod alias;
pub mod cache;
pub mod config;
pub mod errors;
pub mod models;
pub mod policy;
pub mod provider;
pub mod service;

pub use cache::TtlCache;
pub use config::MarketDataConfig;
pub use errors::{FailureClass, QuoteError};
pub use models::{PriceQuote, SearchCandidate};
pub use policy::ExchangePolicy;
pub use provider::nse::NseClient;
pub use provider::yahoo::YahooSearchProvider;
pub use provider::{QuoteProvider, SymbolSearchProvider};
pub use service::QuoteService;
