//! Exchange policy filter.
//!
//! Restricts accepted search results to one configured market and
//! security classification. A candidate failing any axis is treated as
//! not-found, even if it is the only result the upstream returned.

use crate::models::SearchCandidate;

/// The rule set a search candidate must satisfy to be resolved.
///
/// Defaults force NSE only:
/// - exchange code `NSI`
/// - quote classification `EQUITY`
/// - symbol carries the `.NS` suffix
///
/// This rejects BSE (`.BO`), US ADR listings and non-equity results.
#[derive(Debug, Clone)]
pub struct ExchangePolicy {
    pub exchange: String,
    pub quote_type: String,
    pub suffix: String,
}

impl Default for ExchangePolicy {
    fn default() -> Self {
        Self {
            exchange: "NSI".to_string(),
            quote_type: "EQUITY".to_string(),
            suffix: ".NS".to_string(),
        }
    }
}

impl ExchangePolicy {
    /// Returns true if the candidate belongs to the configured market.
    pub fn accepts(&self, candidate: &SearchCandidate) -> bool {
        candidate.exchange == self.exchange
            && candidate.quote_type == self.quote_type
            && candidate.symbol.ends_with(&self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(symbol: &str, exchange: &str, quote_type: &str) -> SearchCandidate {
        SearchCandidate {
            symbol: symbol.to_string(),
            exchange: exchange.to_string(),
            quote_type: quote_type.to_string(),
        }
    }

    #[test]
    fn accepts_nse_equity_with_suffix() {
        let policy = ExchangePolicy::default();
        assert!(policy.accepts(&candidate("TCS.NS", "NSI", "EQUITY")));
    }

    #[test]
    fn rejects_wrong_exchange() {
        let policy = ExchangePolicy::default();
        assert!(!policy.accepts(&candidate("TCS.BO", "BSE", "EQUITY")));
    }

    #[test]
    fn rejects_non_equity_classification() {
        let policy = ExchangePolicy::default();
        assert!(!policy.accepts(&candidate("NIFTYBEES.NS", "NSI", "ETF")));
    }

    #[test]
    fn rejects_missing_suffix() {
        let policy = ExchangePolicy::default();
        // US ADR listing: right classification, wrong market.
        assert!(!policy.accepts(&candidate("INFY", "NYQ", "EQUITY")));
        assert!(!policy.accepts(&candidate("TCS", "NSI", "EQUITY")));
    }
}
