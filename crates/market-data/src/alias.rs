//! Local alias table for common company names.
//!
//! A zero-latency short-circuit consulted before any network search.
//! Absence here is not an error, just "try the network". Symbols are
//! bare NSE tickers (no `.NS` suffix).

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    static ref COMMON_NAMES_TO_SYMBOL: HashMap<&'static str, &'static str> = [
        ("tcs", "TCS"),
        ("tata consultancy", "TCS"),
        ("tata consultancy services", "TCS"),
        ("infosys", "INFY"),
        ("infy", "INFY"),
        ("reliance", "RELIANCE"),
        ("reliance industries", "RELIANCE"),
        ("hdfc bank", "HDFCBANK"),
        ("hdfcbank", "HDFCBANK"),
        ("icici bank", "ICICIBANK"),
        ("icicibank", "ICICIBANK"),
        ("itc", "ITC"),
        ("itc limited", "ITC"),
        ("sbi", "SBIN"),
        ("state bank", "SBIN"),
        ("state bank of india", "SBIN"),
        ("kotak", "KOTAKBANK"),
        ("kotak bank", "KOTAKBANK"),
        ("bharti airtel", "BHARTIARTL"),
        ("airtel", "BHARTIARTL"),
        ("larsen", "LT"),
        ("l&t", "LT"),
        ("larsen toubro", "LT"),
        ("astral", "ASTRAL"),
        ("astral limited", "ASTRAL"),
        ("laurus labs", "LAURUSLABS"),
        ("lauruslabs", "LAURUSLABS"),
        ("wipro", "WIPRO"),
        ("maruti", "MARUTI"),
        ("maruti suzuki", "MARUTI"),
        ("asian paints", "ASIANPAINT"),
        ("asianpaint", "ASIANPAINT"),
        ("titan", "TITAN"),
        ("hindustan unilever", "HINDUNILVR"),
        ("hul", "HINDUNILVR"),
    ]
    .iter()
    .copied()
    .collect();
}

/// Normalize a free-text query for alias and cache lookups.
pub fn normalize_query(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Resolve a common company name without any network call.
pub fn resolve_local(name: &str) -> Option<&'static str> {
    COMMON_NAMES_TO_SYMBOL
        .get(normalize_query(name).as_str())
        .copied()
}
