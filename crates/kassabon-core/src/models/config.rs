//! Configuration for the receipt parser.
//!
//! The vocabulary tables are data, not behavior: new retailers or locale
//! keywords extend the parser without touching the algorithm.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{KassabonError, Result};

/// Vocabulary and policy knobs for [`ReceiptParser`](crate::ReceiptParser).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Known retailer names, scanned in order against the full text.
    /// First match wins.
    pub stores: Vec<String>,

    /// Keywords marking a line as carrying the receipt total.
    pub total_keywords: Vec<String>,

    /// Keywords marking a line as carrying a discount.
    pub discount_keywords: Vec<String>,

    /// Keywords for header noise (tax label, till, phone, date label) that
    /// must never become items, dates, or totals. Matched as substrings.
    pub header_keywords: Vec<String>,

    /// Store name used when no known retailer matched.
    pub default_store: String,

    /// Upper bound on a single item price. Amounts at or above this are
    /// rejected as misread totals or tax lines.
    pub max_item_price: Decimal,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            stores: [
                "ALBERT HEIJN",
                "JUMBO",
                "PLUS",
                "LIDL",
                "ALDI",
                "COOP",
                "SPAR",
                "DIRK",
                "VOMAR",
                "DEEN",
                "HOOGVLIET",
                "KRUIDVAT",
                "ETOS",
                "HEMA",
                "ACTION",
            ]
            .map(String::from)
            .to_vec(),
            total_keywords: ["totaal", "total", "te betalen", "totale"]
                .map(String::from)
                .to_vec(),
            discount_keywords: ["korting", "discount", "actie", "voordeel"]
                .map(String::from)
                .to_vec(),
            header_keywords: ["btw", "bon", "kassa", "datum", "tijd", "winkel", "tel"]
                .map(String::from)
                .to_vec(),
            default_store: "Supermarkt".to_string(),
            max_item_price: Decimal::from(500),
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| KassabonError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| KassabonError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_vocabulary() {
        let config = ParserConfig::default();

        assert_eq!(config.stores.first().map(String::as_str), Some("ALBERT HEIJN"));
        assert!(config.total_keywords.contains(&"te betalen".to_string()));
        assert!(config.discount_keywords.contains(&"korting".to_string()));
        assert!(config.header_keywords.contains(&"btw".to_string()));
        assert_eq!(config.default_store, "Supermarkt");
        assert_eq!(config.max_item_price, Decimal::from(500));
    }

    #[test]
    fn test_empty_json_yields_defaults() {
        let config: ParserConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.stores, ParserConfig::default().stores);
        assert_eq!(config.default_store, "Supermarkt");
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = ParserConfig::default();
        config.stores.push("MAKRO".to_string());
        config.default_store = "Winkel".to_string();

        let json = serde_json::to_string(&config).unwrap();
        let back: ParserConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.stores, config.stores);
        assert_eq!(back.default_store, "Winkel");
    }
}
