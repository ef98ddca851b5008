//! Provides the deduplicated token price catalog and the exchange math on it.

use serde::Deserialize;
use serde::Serialize;

use crate::token::RawPriceEntry;
use crate::token::TokenAmount;
use crate::token::TokenPrice;

/// An ordered, deduplicated collection of token prices.
///
/// A catalog is built once per fetch and never mutated afterwards; a refresh
/// replaces the whole snapshot. All exchange computations are pure lookups
/// against it, so they are safe to run on every keystroke.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenCatalog(Vec<TokenPrice>);

impl TokenCatalog {
    /// Creates a new, empty `TokenCatalog`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a catalog from raw feed entries.
    ///
    /// Entries without a usable price (missing, zero, negative, or
    /// non-finite) are dropped. When a symbol appears more than once, the
    /// first occurrence in feed order wins; feed order is preserved.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = RawPriceEntry>,
    {
        let mut tokens: Vec<TokenPrice> = Vec::new();
        for entry in entries {
            let Some(price) = entry.price.filter(|p| p.is_finite() && *p > 0.0) else {
                continue;
            };
            if tokens.iter().any(|t| t.currency == entry.currency) {
                continue;
            }
            tokens.push(TokenPrice {
                currency: entry.currency,
                price,
                id: entry.id,
            });
        }
        Self(tokens)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Retrieves the full entry for a token symbol.
    pub fn get(&self, symbol: &str) -> Option<&TokenPrice> {
        self.0.iter().find(|t| t.currency == symbol)
    }

    /// Retrieves the reference-unit price for a token symbol.
    ///
    /// Returns `None` if the symbol is not in the catalog.
    pub fn price(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).map(|t| t.price)
    }

    /// Computes the cross rate between two tokens: `price(from) / price(to)`.
    ///
    /// Returns `None` while either symbol is missing, which covers both an
    /// unknown symbol and a catalog that has not loaded yet. Neither case is
    /// an error; the value is simply not computable yet.
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        Some(self.price(from)? / self.price(to)?)
    }

    /// Converts `from` into units of the target token.
    ///
    /// A zero or negative input amount converts to zero regardless of
    /// catalog state. Otherwise `None` propagates from an unknown rate.
    pub fn convert(&self, from: &TokenAmount, to_symbol: &str) -> Option<f64> {
        if from.amount <= 0.0 {
            return Some(0.0);
        }
        self.rate(&from.currency, to_symbol)
            .map(|rate| from.amount * rate)
    }

    /// Returns an iterator over the catalog entries in feed order.
    pub fn iter(&self) -> std::slice::Iter<'_, TokenPrice> {
        self.0.iter()
    }
}

/// Allows `&TokenCatalog` to be used directly in `for` loops.
impl<'a> IntoIterator for &'a TokenCatalog {
    type Item = &'a TokenPrice;
    type IntoIter = std::slice::Iter<'a, TokenPrice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(currency: &str, price: Option<f64>) -> RawPriceEntry {
        RawPriceEntry {
            currency: currency.to_string(),
            price,
            id: None,
        }
    }

    fn sample_catalog() -> TokenCatalog {
        TokenCatalog::from_entries([
            entry("BUSD", Some(1.0)),
            entry("USD", Some(1.0)),
            entry("ETH", Some(2000.0)),
            entry("ATOM", Some(8.25)),
        ])
    }

    #[test]
    fn dedup_keeps_first_occurrence_in_order() {
        let catalog = TokenCatalog::from_entries([
            entry("A", Some(1.0)),
            entry("B", Some(2.0)),
            entry("A", Some(3.0)),
        ]);
        let entries: Vec<(&str, f64)> = catalog
            .iter()
            .map(|t| (t.currency.as_str(), t.price))
            .collect();
        assert_eq!(entries, vec![("A", 1.0), ("B", 2.0)]);
    }

    #[test]
    fn entries_without_usable_price_are_dropped() {
        let catalog = TokenCatalog::from_entries([
            entry("NONE", None),
            entry("ZERO", Some(0.0)),
            entry("NEG", Some(-1.5)),
            entry("NAN", Some(f64::NAN)),
            entry("OK", Some(0.5)),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.price("OK"), Some(0.5));
        assert_eq!(catalog.price("ZERO"), None);
    }

    #[test]
    fn rate_is_price_ratio() {
        let catalog = sample_catalog();
        assert_eq!(catalog.rate("ETH", "USD"), Some(2000.0));
        assert_eq!(catalog.rate("USD", "BUSD"), Some(1.0));
    }

    #[test]
    fn rate_is_reciprocal_within_tolerance() {
        let catalog = sample_catalog();
        for (a, b) in [("ETH", "USD"), ("ATOM", "ETH"), ("BUSD", "ATOM")] {
            let forward = catalog.rate(a, b).unwrap();
            let backward = catalog.rate(b, a).unwrap();
            assert!((forward * backward - 1.0).abs() < 1e-12, "{a}/{b}");
        }
    }

    #[test]
    fn rate_of_unknown_symbol_is_none() {
        let catalog = sample_catalog();
        assert_eq!(catalog.rate("DOGE", "USD"), None);
        assert_eq!(catalog.rate("USD", "DOGE"), None);
        assert_eq!(TokenCatalog::new().rate("USD", "USD"), None);
    }

    #[test]
    fn convert_multiplies_by_rate() {
        let catalog = sample_catalog();
        let ten_eth = TokenAmount::new("ETH", 10.0);
        assert_eq!(catalog.convert(&ten_eth, "USD"), Some(20_000.0));
    }

    #[test]
    fn convert_of_nonpositive_amount_is_zero_even_without_catalog() {
        let empty = TokenCatalog::new();
        assert_eq!(empty.convert(&TokenAmount::new("ETH", 0.0), "USD"), Some(0.0));
        assert_eq!(empty.convert(&TokenAmount::new("ETH", -3.0), "USD"), Some(0.0));
        let catalog = sample_catalog();
        assert_eq!(catalog.convert(&TokenAmount::new("ETH", 0.0), "NOPE"), Some(0.0));
    }

    #[test]
    fn convert_of_unknown_symbol_is_none() {
        let catalog = sample_catalog();
        assert_eq!(catalog.convert(&TokenAmount::new("DOGE", 5.0), "USD"), None);
        assert_eq!(catalog.convert(&TokenAmount::new("ETH", 5.0), "DOGE"), None);
    }

    #[test]
    fn feed_payload_deserializes() {
        let json = r#"[
            {"currency": "BUSD", "date": "2023-08-29T07:10:40.000Z", "price": 0.999183113},
            {"currency": "ETH", "price": 1645.93, "id": "eth"},
            {"currency": "RATOM"}
        ]"#;
        let entries: Vec<RawPriceEntry> = serde_json::from_str(json).unwrap();
        let catalog = TokenCatalog::from_entries(entries);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("ETH").unwrap().id.as_deref(), Some("eth"));
    }
}
