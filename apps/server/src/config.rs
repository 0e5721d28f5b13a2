use std::time::Duration;

use nse_market_data::MarketDataConfig;

/// Server configuration, read from the environment once at startup.
/// Every knob has a default so a bare `cargo run` serves traffic.
pub struct Config {
    pub listen_addr: String,
    pub market_data: MarketDataConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let mut market_data = MarketDataConfig::default();
        if let Some(url) = env_var("NSE_BASE_URL") {
            market_data.nse_base_url = url;
        }
        if let Some(url) = env_var("YAHOO_BASE_URL") {
            market_data.yahoo_base_url = url;
        }
        if let Some(secs) = env_parse::<u64>("NSE_REQUEST_TIMEOUT_SECS") {
            market_data.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = env_parse::<u64>("NSE_SYMBOL_CACHE_TTL_SECS") {
            market_data.symbol_ttl = Duration::from_secs(secs);
        }
        if let Some(capacity) = env_parse::<usize>("NSE_SYMBOL_CACHE_CAPACITY") {
            market_data.symbol_cache_capacity = capacity;
        }
        if let Some(attempts) = env_parse::<usize>("NSE_QUOTE_ATTEMPTS") {
            market_data.quote_attempts = attempts;
        }

        Self {
            listen_addr: env_var("NSE_LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:8000".to_string()),
            market_data,
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env_var(key).and_then(|v| v.trim().parse().ok())
}
