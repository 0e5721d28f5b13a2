//! Error types and failure classification for market data operations.

use thiserror::Error;

/// Errors that can occur while resolving symbols or fetching quotes.
///
/// Each variant is classified into a [`FailureClass`] via
/// [`failure_class`](Self::failure_class), which determines how callers
/// should react: give up, retry, or rebuild the upstream session.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The name could not be resolved to an NSE symbol.
    /// Terminal - retrying won't help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The upstream returned no usable price (missing or non-positive).
    /// A zero price is never reported as a valid quote.
    #[error("Price unavailable for {0}")]
    PriceUnavailable(String),

    /// The upstream session cookies are no longer accepted.
    /// Recoverable - the client rebuilds the session and retries.
    #[error("Upstream session expired")]
    SessionExpired,

    /// The upstream returned a non-success status other than 401.
    /// Terminal for the current call - no retry.
    #[error("Upstream returned status {status}")]
    UpstreamStatus {
        /// The HTTP status code
        status: u16,
    },

    /// The request to the upstream timed out.
    /// Transient - retried with backoff up to the attempt budget.
    #[error("Upstream request timed out")]
    Timeout,

    /// A transport-level error occurred (connection reset, DNS, TLS).
    /// Transient - retried with backoff up to the attempt budget.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream payload could not be decoded.
    #[error("Failed to parse upstream payload: {0}")]
    Parse(String),
}

/// How a failed operation should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Don't retry; surface as not-found to the caller.
    Terminal,
    /// Retry with backoff within the attempt budget.
    Transient,
    /// Rebuild the upstream session, then retry.
    Recoverable,
}

impl QuoteError {
    /// Returns the failure classification for this error.
    ///
    /// Every network failure is classified here rather than silently
    /// swallowed; the orchestrator downgrades whatever survives the
    /// retry budget to a not-found outcome at the API boundary.
    pub fn failure_class(&self) -> FailureClass {
        match self {
            Self::SymbolNotFound(_)
            | Self::PriceUnavailable(_)
            | Self::UpstreamStatus { .. }
            | Self::Parse(_) => FailureClass::Terminal,

            Self::Timeout | Self::Network(_) => FailureClass::Transient,

            Self::SessionExpired => FailureClass::Recoverable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_not_found_is_terminal() {
        let error = QuoteError::SymbolNotFound("INVALID".to_string());
        assert_eq!(error.failure_class(), FailureClass::Terminal);
    }

    #[test]
    fn price_unavailable_is_terminal() {
        let error = QuoteError::PriceUnavailable("TCS.NS".to_string());
        assert_eq!(error.failure_class(), FailureClass::Terminal);
    }

    #[test]
    fn non_success_status_is_terminal() {
        let error = QuoteError::UpstreamStatus { status: 503 };
        assert_eq!(error.failure_class(), FailureClass::Terminal);
    }

    #[test]
    fn timeout_is_transient() {
        let error = QuoteError::Timeout;
        assert_eq!(error.failure_class(), FailureClass::Transient);
    }

    #[test]
    fn session_expiry_is_recoverable() {
        let error = QuoteError::SessionExpired;
        assert_eq!(error.failure_class(), FailureClass::Recoverable);
    }

    #[test]
    fn error_display() {
        let error = QuoteError::SymbolNotFound("INVALID".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: INVALID");

        let error = QuoteError::UpstreamStatus { status: 429 };
        assert_eq!(format!("{}", error), "Upstream returned status 429");
    }
}
