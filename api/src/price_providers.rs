//! Defines traits and implementations for external price data providers.

use thiserror::Error;

use crate::catalog::TokenCatalog;
use crate::token::RawPriceEntry;

/// An error reaching or decoding the remote price feed.
///
/// This is the only true error in the swap domain; everything downstream
/// ("symbol not in catalog", "catalog not loaded yet") is expressed as
/// `None` by the catalog lookups instead.
#[derive(Debug, Error)]
pub enum CatalogFetchError {
    /// The feed could not be reached, or replied with an error status.
    #[error("price feed unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    /// The feed replied, but the payload was not a valid price list.
    #[error("malformed price feed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// A trait for any service that can provide the token price catalog.
pub trait PriceProvider {
    /// Fetches the latest catalog: filtered and deduplicated, first
    /// occurrence winning.
    async fn get_tokens(&self) -> Result<TokenCatalog, CatalogFetchError>;
}

/// Provides price data from the public Switcheo price feed.
pub mod price_feed {
    use super::*;

    /// An implementation of the `PriceProvider` trait for the fixed
    /// `prices.json` feed.
    pub struct PriceFeed;

    impl PriceProvider for PriceFeed {
        async fn get_tokens(&self) -> Result<TokenCatalog, CatalogFetchError> {
            const URL: &str = "https://interview.switcheo.com/prices.json";

            let client = reqwest::Client::new();
            let body = client
                .get(URL)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;

            // Parsed by hand rather than via reqwest's json() so that a
            // transport failure and a malformed payload stay distinguishable.
            let entries: Vec<RawPriceEntry> = serde_json::from_str(&body)?;

            Ok(TokenCatalog::from_entries(entries))
        }
    }
}
