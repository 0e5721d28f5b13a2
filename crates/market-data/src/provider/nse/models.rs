//! Serde models for the NSE quote and autocomplete payloads.
//!
//! All fields are optional: the quote endpoint omits sections freely
//! and a missing field must read as "absent", never as a panic.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NseQuoteResponse {
    pub price_info: Option<NsePriceInfo>,
    pub pre_open_market: Option<NsePreOpenMarket>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NsePriceInfo {
    /// The one canonical "current price" field. Never substituted with
    /// previous close or pre/post-market prices.
    pub last_price: Option<f64>,
    pub open: Option<f64>,
    pub intra_day_high_low: Option<NseHighLow>,
    pub previous_close: Option<f64>,
    pub change: Option<f64>,
    pub p_change: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct NseHighLow {
    pub max: Option<f64>,
    pub min: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NsePreOpenMarket {
    pub total_traded_volume: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct NseSearchResponse {
    #[serde(default)]
    pub symbols: Vec<NseSearchSymbol>,
}

#[derive(Debug, Deserialize)]
pub struct NseSearchSymbol {
    pub symbol: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quote_payload() {
        let json = r#"{
            "priceInfo": {
                "lastPrice": 3456.50,
                "open": 3440.0,
                "intraDayHighLow": {"max": 3460.0, "min": 3431.2},
                "previousClose": 3450.0,
                "change": 6.5,
                "pChange": 0.19
            },
            "preOpenMarket": {"totalTradedVolume": 125000}
        }"#;
        let parsed: NseQuoteResponse = serde_json::from_str(json).unwrap();
        let price_info = parsed.price_info.unwrap();
        assert_eq!(price_info.last_price, Some(3456.50));
        assert_eq!(price_info.previous_close, Some(3450.0));
        assert_eq!(price_info.intra_day_high_low.unwrap().max, Some(3460.0));
        assert_eq!(
            parsed.pre_open_market.unwrap().total_traded_volume,
            Some(125000.0)
        );
    }

    #[test]
    fn tolerates_sparse_payload() {
        let parsed: NseQuoteResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.price_info.is_none());

        let parsed: NseQuoteResponse =
            serde_json::from_str(r#"{"priceInfo": {"lastPrice": 100.0}}"#).unwrap();
        let price_info = parsed.price_info.unwrap();
        assert_eq!(price_info.last_price, Some(100.0));
        assert!(price_info.intra_day_high_low.is_none());
    }

    #[test]
    fn parses_autocomplete_payload() {
        let json = r#"{"symbols": [{"symbol": "TCS", "symbol_info": "Tata Consultancy Services"}]}"#;
        let parsed: NseSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.symbols[0].symbol.as_deref(), Some("TCS"));
    }
}
