//! This crate contains all shared fullstack server functions.

pub mod catalog;
pub mod prefs;
#[cfg(not(target_arch = "wasm32"))]
mod price_caching;
pub mod price_providers;
pub mod token;

use dioxus::prelude::*;

use catalog::TokenCatalog;
use prefs::swap_defaults::SwapDefaults;

pub type ApiError = anyhow::Error;

/// Retrieves the swap form defaults.
///
/// In the future this may read from a settings file.  For now it just
/// returns the default settings, which read from env vars.
#[post("/api/swap_defaults")]
pub async fn swap_defaults() -> Result<SwapDefaults, ApiError> {
    Ok(SwapDefaults::default())
}

/// Retrieves the deduplicated token price catalog.
///
/// Served from a short-lived cache in front of the remote feed, so the
/// client can poll for fresh prices without hammering the feed on every
/// request.
#[post("/api/tokens")]
pub async fn tokens() -> Result<TokenCatalog, ApiError> {
    let catalog = price_caching::get_cached_catalog().await?;
    dioxus_logger::tracing::info!("price catalog loaded: {} tokens", catalog.len());
    Ok(catalog)
}
