//! Handles the caching logic for external price provider data.
#![allow(dead_code)]

use crate::catalog::TokenCatalog;
use crate::price_providers::{price_feed::PriceFeed, CatalogFetchError, PriceProvider};
use std::time::{Duration, Instant};
use tokio::sync::{OnceCell, RwLock};

#[derive(Clone, Debug)]
struct CachedCatalog {
    catalog: TokenCatalog,
    last_fetched: Instant,
}

/// A lazy, time-based cache in front of a price provider.
///
/// The cache acts as a gatekeeper to the underlying provider: it only calls
/// the provider when it holds no catalog yet or the held one is older than
/// the ttl. A provider failure leaves the previous entry in place, so a
/// stale catalog is only ever replaced wholesale by a fresh one.
pub struct CatalogCache<P> {
    provider: P,
    ttl: Duration,
    slot: RwLock<Option<CachedCatalog>>,
}

impl<P: PriceProvider> CatalogCache<P> {
    pub fn new(provider: P, ttl: Duration) -> Self {
        Self {
            provider,
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Retrieves the catalog, fetching through the provider only when the
    /// cached entry is missing or stale.
    pub async fn get(&self) -> Result<TokenCatalog, CatalogFetchError> {
        // Check if a valid, non-stale cache entry exists first with a read lock.
        let read_lock = self.slot.read().await;
        if let Some(cache) = &*read_lock {
            if cache.last_fetched.elapsed() < self.ttl {
                return Ok(cache.catalog.clone());
            }
        }
        drop(read_lock); // Release read lock before attempting to acquire a write lock.

        // If the cache was empty or stale, acquire a write lock to update it.
        let mut write_lock = self.slot.write().await;

        // Another task might have updated the cache while we were waiting for the write lock.
        if let Some(cache) = &*write_lock {
            if cache.last_fetched.elapsed() < self.ttl {
                return Ok(cache.catalog.clone());
            }
        }

        // We have the lock and the cache is confirmed to be stale. Fetch new data.
        let new_catalog = self.provider.get_tokens().await?;

        *write_lock = Some(CachedCatalog {
            catalog: new_catalog.clone(),
            last_fetched: Instant::now(),
        });

        Ok(new_catalog)
    }
}

/// Retrieves the token catalog from the process-wide cache over the fixed
/// remote feed.
pub async fn get_cached_catalog() -> Result<TokenCatalog, CatalogFetchError> {
    static CACHE: OnceCell<CatalogCache<PriceFeed>> = OnceCell::const_new();
    const CACHE_DURATION: Duration = Duration::from_secs(60);

    let cache = CACHE
        .get_or_init(|| async { CatalogCache::new(PriceFeed, CACHE_DURATION) })
        .await;

    cache.get().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::RawPriceEntry;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A provider that counts its calls and prices one token by call number.
    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl PriceProvider for &CountingProvider {
        async fn get_tokens(&self) -> Result<TokenCatalog, CatalogFetchError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(TokenCatalog::from_entries([RawPriceEntry {
                currency: "ETH".to_string(),
                price: Some(call as f64),
                id: None,
            }]))
        }
    }

    #[tokio::test]
    async fn serves_cached_catalog_within_ttl() {
        let provider = CountingProvider::new();
        let cache = CatalogCache::new(&provider, Duration::from_secs(60));

        let first = cache.get().await.unwrap();
        let second = cache.get().await.unwrap();

        assert_eq!(provider.calls(), 1);
        assert_eq!(first, second);
        assert_eq!(second.price("ETH"), Some(1.0));
    }

    #[tokio::test]
    async fn refetches_once_the_ttl_has_elapsed() {
        let provider = CountingProvider::new();
        // A zero ttl makes every entry immediately stale.
        let cache = CatalogCache::new(&provider, Duration::ZERO);

        let first = cache.get().await.unwrap();
        let second = cache.get().await.unwrap();

        assert_eq!(provider.calls(), 2);
        assert_eq!(first.price("ETH"), Some(1.0));
        assert_eq!(second.price("ETH"), Some(2.0), "replaced wholesale");
    }
}
