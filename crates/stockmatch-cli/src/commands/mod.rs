pub mod catalog;
pub mod config;
pub mod normalize;
pub mod search;

use anyhow::{Context, Result};
use std::sync::Arc;
use stockmatch_core::CatalogStore;
use stockmatch_search::ImageSearch;

use crate::config::Config;

pub use catalog::{check_catalog, list_catalog};
pub use normalize::show_signature;
pub use search::{search_tags, search_title};

/// Open the configured catalog, or the bundled one when none is configured.
pub fn open_store(config: &Config) -> Result<Arc<CatalogStore>> {
    let store = match &config.catalog_path {
        Some(path) => CatalogStore::from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => CatalogStore::bundled().context("Failed to load bundled catalog")?,
    };
    Ok(Arc::new(store))
}

/// Build a search over the configured catalog with the configured limits.
pub fn build_search(config: &Config) -> Result<ImageSearch> {
    let store = open_store(config)?;
    Ok(ImageSearch::new(store)
        .with_fallback(config.fallback_image.clone())
        .with_options(config.rank_options()))
}
