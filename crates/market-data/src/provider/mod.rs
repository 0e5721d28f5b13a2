//! Upstream provider abstractions and implementations.
//!
//! Two concerns, two traits:
//! - [`SymbolSearchProvider`]: name -> symbol lookup; providers are
//!   consulted in a fixed fallback order by the orchestrator
//! - [`QuoteProvider`]: symbol -> last traded price
//!
//! Concrete implementations: Yahoo Finance search (policy-filtered)
//! and the session-backed NSE client, which implements both traits.

mod headers;
mod traits;

pub mod nse;
pub mod yahoo;

pub use headers::{nse_headers, yahoo_headers};
pub use traits::{QuoteProvider, SymbolSearchProvider};
