use serde::{Deserialize, Serialize};

/// A stock image in the catalog.
///
/// Only `tags` feed the catalog-side signature; `title` is kept for display
/// and diagnostics. Records are immutable once a catalog has been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub title: String,

    /// Descriptive tags, in dataset order.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Attribution or provenance of the image.
    #[serde(default)]
    pub source: String,

    /// Reference (usually a URL) to the deliverable asset.
    pub image: String,
}

impl ImageRecord {
    #[must_use]
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tags: Vec::new(),
            source: String::new(),
            image: image.into(),
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// On-disk dataset layout: `{ "images": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub images: Vec<ImageRecord>,
}
