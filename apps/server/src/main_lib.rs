use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use nse_market_data::QuoteService;

use crate::config::Config;

pub struct AppState {
    pub quote_service: Arc<QuoteService>,
}

pub fn init_tracing() {
    let log_format = std::env::var("NSE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let quote_service = Arc::new(QuoteService::new(&config.market_data)?);
    Ok(Arc::new(AppState { quote_service }))
}
