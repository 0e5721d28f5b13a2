//! HTTP facade over the NSE market-data crate.
//!
//! Three data routes (`/search-stock`, `/get-price`, `/ltp`) plus a
//! health probe, all read-only. State is a shared [`QuoteService`];
//! the server holds nothing else.
//!
//! [`QuoteService`]: nse_market_data::QuoteService

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;
pub mod models;

pub use config::Config;
pub use main_lib::{build_state, init_tracing, AppState};
