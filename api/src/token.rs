//! Defines the shared token value types used by the swap form and catalog.

use serde::Deserialize;
use serde::Serialize;

/// A single entry of the remote price feed, exactly as it arrives.
///
/// The feed is messy: symbols repeat, and some entries carry no usable
/// price. `TokenCatalog::from_entries` is responsible for cleaning this up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPriceEntry {
    pub currency: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// A cleaned catalog entry: a token symbol and its price in the feed's
/// common reference unit. The price is always finite and positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPrice {
    pub currency: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// One side of the swap form: a token symbol and an amount of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAmount {
    pub currency: String,
    pub amount: f64,
}

impl TokenAmount {
    pub fn new(currency: impl Into<String>, amount: f64) -> Self {
        Self {
            currency: currency.into(),
            amount,
        }
    }
}
