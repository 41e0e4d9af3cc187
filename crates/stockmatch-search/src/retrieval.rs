//! Retrieval API: title and tag search over the catalog store.
//!
//! Every search reads exactly one catalog snapshot, normalizes the input the
//! same way catalog tags were normalized, ranks, and maps matches back to
//! image references. When nothing matches, the fallback reference is
//! returned instead, so callers always receive at least one image.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use stockmatch_core::{CatalogSnapshot, CatalogStore, ImageRecord};
//! use stockmatch_search::ImageSearch;
//!
//! let store = Arc::new(CatalogStore::new(CatalogSnapshot::from_records(vec![
//!     ImageRecord::new("Birthday Cake", "img://A").with_tags(["birthday", "cake"]),
//! ])));
//! let search = ImageSearch::new(store).with_fallback("img://default");
//!
//! assert_eq!(search.search_by_tags(&["Birthday"]), vec!["img://A"]);
//! assert_eq!(search.search_by_title("quarterly tax forms"), vec!["img://default"]);
//! ```

use std::sync::Arc;

use stockmatch_core::normalize::{normalize, normalize_title};
use stockmatch_core::{CatalogSnapshot, CatalogStore};

use crate::ranker::{rank_with, RankOptions};

/// Image returned when no catalog entry matches.
pub const DEFAULT_IMAGE_URL: &str = "https://photos.google.com/share/AF1QipMoj8Yhuzm3b-b7XguhmS0hSUA8zd9lkQRjW8rzEtz88Wxs9ETgju0Mp9VtU2giBA/photo/AF1QipNuCGWjwFs3Km73Em-8X7BFR2ECQseonYtnakef?key=ejREcHZRcGgtN0l4V2NrNmM3eWU0LWtPaWtCQk93";

/// A ranked catalog entry, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Position in the catalog.
    pub index: usize,
    pub title: String,
    pub image: String,
    /// The entry's tag signature that was compared.
    pub signature: String,
    pub distance: usize,
}

/// Title and tag search over a shared [`CatalogStore`].
#[derive(Debug, Clone)]
pub struct ImageSearch {
    store: Arc<CatalogStore>,
    fallback: String,
    options: RankOptions,
}

impl ImageSearch {
    #[must_use]
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self {
            store,
            fallback: DEFAULT_IMAGE_URL.to_string(),
            options: RankOptions::default(),
        }
    }

    /// Use `fallback` instead of [`DEFAULT_IMAGE_URL`] when nothing matches.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: RankOptions) -> Self {
        self.options = options;
        self
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn options(&self) -> RankOptions {
        self.options
    }

    /// Image references best matching a free-text title.
    pub fn search_by_title(&self, title: &str) -> Vec<String> {
        let query = normalize_title(title);
        self.images_or_fallback(&query)
    }

    /// Image references best matching a tag list.
    pub fn search_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<String> {
        let query = normalize(tags);
        self.images_or_fallback(&query)
    }

    /// Ranked hits for a title, without the fallback.
    pub fn explain_title(&self, title: &str) -> Vec<SearchHit> {
        let query = normalize_title(title);
        self.hits(&self.store.snapshot(), &query)
    }

    /// Ranked hits for a tag list, without the fallback.
    pub fn explain_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<SearchHit> {
        let query = normalize(tags);
        self.hits(&self.store.snapshot(), &query)
    }

    fn images_or_fallback(&self, query: &str) -> Vec<String> {
        let snapshot = self.store.snapshot();
        let images: Vec<String> = rank_with(query, snapshot.signatures(), self.options)
            .into_iter()
            .filter_map(|m| snapshot.get(m.index))
            .map(|record| record.image.clone())
            .collect();

        log::debug!("Query {:?} matched {} images", query, images.len());

        if images.is_empty() {
            log::warn!("No image matched {:?}, using fallback", query);
            return vec![self.fallback.clone()];
        }
        images
    }

    fn hits(&self, snapshot: &CatalogSnapshot, query: &str) -> Vec<SearchHit> {
        rank_with(query, snapshot.signatures(), self.options)
            .into_iter()
            .filter_map(|m| {
                let record = snapshot.get(m.index)?;
                Some(SearchHit {
                    index: m.index,
                    title: record.title.clone(),
                    image: record.image.clone(),
                    signature: snapshot.signature(m.index)?.to_string(),
                    distance: m.distance,
                })
            })
            .collect()
    }
}
