//! Process-wide catalog state as an explicit, shareable object.
//!
//! The store holds the current snapshot behind an `Arc`. Readers clone the
//! `Arc` and then work on an immutable catalog without holding any lock.
//! Reloads build the replacement snapshot completely before taking the write
//! lock, and the lock only guards the pointer swap. A reader therefore sees
//! either the old catalog or the new one, never records from one paired with
//! signatures from the other.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::{loader, CatalogSnapshot};
use crate::error::Result;

#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Create a store holding the bundled dataset.
    pub fn bundled() -> Result<Self> {
        loader::load_bundled().map(Self::new)
    }

    /// Create a store holding an external dataset.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        loader::load_file(path).map(Self::new)
    }

    /// The snapshot visible right now.
    ///
    /// The returned `Arc` stays valid and unchanged across later reloads.
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Publish `snapshot`, returning the one it replaced.
    pub fn replace(&self, snapshot: CatalogSnapshot) -> Arc<CatalogSnapshot> {
        let next = Arc::new(snapshot);
        log::info!(
            "Publishing catalog: {} images from {}",
            next.len(),
            next.origin()
        );
        let previous = std::mem::replace(&mut *self.current.write(), next);
        log::debug!(
            "Retired catalog: {} images from {}",
            previous.len(),
            previous.origin()
        );
        previous
    }

    /// Replace the catalog with an external dataset.
    ///
    /// On error the current catalog is left untouched.
    pub fn reload_from_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let snapshot = loader::load_file(path)?;
        let count = snapshot.len();
        self.replace(snapshot);
        Ok(count)
    }

    /// Replace the catalog with the bundled dataset.
    pub fn reload_bundled(&self) -> Result<usize> {
        let snapshot = loader::load_bundled()?;
        let count = snapshot.len();
        self.replace(snapshot);
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogOrigin;
    use crate::model::ImageRecord;

    fn store_with(images: &[&str]) -> CatalogStore {
        let records = images
            .iter()
            .map(|image| ImageRecord::new(*image, *image).with_tags([*image]))
            .collect();
        CatalogStore::new(CatalogSnapshot::from_records(records))
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let store = store_with(&["img://old"]);
        let held = store.snapshot();

        let previous = store.replace(CatalogSnapshot::from_records(vec![
            ImageRecord::new("new", "img://new"),
            ImageRecord::new("newer", "img://newer"),
        ]));

        assert_eq!(held.len(), 1);
        assert_eq!(held.get(0).map(|r| r.image.as_str()), Some("img://old"));
        assert!(Arc::ptr_eq(&held, &previous));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_failed_reload_keeps_current_catalog() {
        let store = store_with(&["img://keep"]);
        let result = store.reload_from_file("/nonexistent/stockmatch/images.json");

        assert!(result.is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.snapshot().get(0).map(|r| r.image.as_str()),
            Some("img://keep")
        );
    }

    #[test]
    fn test_reload_bundled() {
        let store = store_with(&["img://tmp"]);
        let count = store.reload_bundled().unwrap();

        assert_eq!(count, store.len());
        assert_eq!(*store.snapshot().origin(), CatalogOrigin::Bundled);
    }

    #[test]
    fn test_bundled_store_is_aligned() {
        let store = CatalogStore::bundled().unwrap();
        let snapshot = store.snapshot();
        assert!(!store.is_empty());
        assert_eq!(snapshot.records().len(), snapshot.signatures().len());
    }
}
