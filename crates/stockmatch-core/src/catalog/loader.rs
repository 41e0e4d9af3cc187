//! Catalog loading: the bundled dataset and external dataset files.
//!
//! Both entry points funnel through [`load_str`], which parses, validates and
//! builds the snapshot in one go. A failure at any step returns an error and
//! no snapshot, so callers can never observe a half-built catalog.
//!
//! # Example
//!
//! ```
//! use stockmatch_core::catalog::load_bundled;
//!
//! let snapshot = load_bundled().unwrap();
//! assert_eq!(snapshot.records().len(), snapshot.signatures().len());
//! ```

use std::path::Path;

use crate::catalog::{CatalogOrigin, CatalogSnapshot};
use crate::error::{DataError, Result};
use crate::model::Dataset;

/// The default dataset compiled into the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../data/stockimage.json");

/// Load the dataset compiled into the binary.
pub fn load_bundled() -> Result<CatalogSnapshot> {
    load_str(BUNDLED_DATASET, CatalogOrigin::Bundled)
}

/// Load an external dataset file.
pub fn load_file(path: impl AsRef<Path>) -> Result<CatalogSnapshot> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&content, CatalogOrigin::File(path.to_path_buf()))
}

/// Parse, validate and index a JSON dataset.
pub fn load_str(json: &str, origin: CatalogOrigin) -> Result<CatalogSnapshot> {
    let dataset: Dataset = serde_json::from_str(json).map_err(|source| DataError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    validate(&dataset, &origin)?;

    let snapshot = CatalogSnapshot::build(dataset.images, origin);
    log::info!(
        "Loaded {} images from {}",
        snapshot.len(),
        snapshot.origin()
    );
    Ok(snapshot)
}

fn validate(dataset: &Dataset, origin: &CatalogOrigin) -> Result<()> {
    if dataset.images.is_empty() {
        return Err(DataError::InvalidData(format!(
            "{origin} contains no images"
        )));
    }

    if let Some((index, record)) = dataset
        .images
        .iter()
        .enumerate()
        .find(|(_, record)| record.image.trim().is_empty())
    {
        return Err(DataError::InvalidData(format!(
            "{origin}: image #{index} ({:?}) has an empty image reference",
            record.title
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_loads() {
        let snapshot = load_bundled().unwrap();
        assert!(!snapshot.is_empty());
        assert_eq!(snapshot.records().len(), snapshot.signatures().len());
        assert_eq!(*snapshot.origin(), CatalogOrigin::Bundled);
    }

    #[test]
    fn test_bundled_signatures_match_tags() {
        let snapshot = load_bundled().unwrap();
        for (record, signature) in snapshot.iter() {
            assert_eq!(signature, crate::normalize::normalize(&record.tags));
        }
    }

    #[test]
    fn test_load_str_preserves_order() {
        let json = r#"{"images": [
            {"title": "Second", "tags": ["b"], "source": "s", "image": "img://2"},
            {"title": "First", "tags": ["a"], "source": "s", "image": "img://1"}
        ]}"#;
        let snapshot = load_str(json, CatalogOrigin::Memory).unwrap();
        assert_eq!(snapshot.get(0).map(|r| r.image.as_str()), Some("img://2"));
        assert_eq!(snapshot.get(1).map(|r| r.image.as_str()), Some("img://1"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = load_str("{\"images\": [", CatalogOrigin::Memory);
        assert!(matches!(result, Err(DataError::Parse { .. })));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let result = load_str(r#"{"images": [{"title": 3}]}"#, CatalogOrigin::Memory);
        assert!(matches!(result, Err(DataError::Parse { .. })));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let result = load_str(r#"{"images": []}"#, CatalogOrigin::Memory);
        assert!(matches!(result, Err(DataError::InvalidData(_))));

        let result = load_str("{}", CatalogOrigin::Memory);
        assert!(matches!(result, Err(DataError::InvalidData(_))));
    }

    #[test]
    fn test_blank_image_reference_is_rejected() {
        let json = r#"{"images": [
            {"title": "ok", "tags": [], "image": "img://ok"},
            {"title": "broken", "tags": [], "image": "  "}
        ]}"#;
        let err = load_str(json, CatalogOrigin::Memory).unwrap_err();
        assert!(err.to_string().contains("#1"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_file("/nonexistent/stockmatch/images.json");
        assert!(matches!(result, Err(DataError::Io { .. })));
    }
}
