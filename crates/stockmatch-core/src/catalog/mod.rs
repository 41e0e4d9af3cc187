//! The image catalog and its parallel signature index.
//!
//! A [`CatalogSnapshot`] pairs the ordered records with one signature per
//! record. Snapshots are only built by the [`loader`], so `signatures[i]` is
//! always derived from `records[i].tags` and the two vectors always have the
//! same length. The [`store`] publishes snapshots to readers.

pub mod loader;
pub mod store;

use std::fmt;
use std::path::PathBuf;

use crate::model::ImageRecord;

pub use loader::{load_bundled, load_file, load_str, BUNDLED_DATASET};
pub use store::CatalogStore;

/// Where a snapshot's records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// The dataset compiled into the binary.
    Bundled,
    /// An external dataset file.
    File(PathBuf),
    /// In-memory records (tests and embedders).
    Memory,
}

impl fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => write!(f, "bundled dataset"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => write!(f, "in-memory records"),
        }
    }
}

/// An immutable catalog plus its signature index.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    records: Vec<ImageRecord>,
    signatures: Vec<String>,
    origin: CatalogOrigin,
}

impl CatalogSnapshot {
    /// Build a snapshot, deriving every signature from the record's tags.
    pub(crate) fn build(records: Vec<ImageRecord>, origin: CatalogOrigin) -> Self {
        let signatures = records
            .iter()
            .map(|record| crate::normalize::normalize(&record.tags))
            .collect();
        Self {
            records,
            signatures,
            origin,
        }
    }

    /// Build a snapshot from records that are already in memory.
    ///
    /// Unlike the loaders this performs no validation; an empty snapshot is
    /// allowed.
    #[must_use]
    pub fn from_records(records: Vec<ImageRecord>) -> Self {
        Self::build(records, CatalogOrigin::Memory)
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn signatures(&self) -> &[String] {
        &self.signatures
    }

    pub fn origin(&self) -> &CatalogOrigin {
        &self.origin
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    pub fn signature(&self, index: usize) -> Option<&str> {
        self.signatures.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records zipped with their signatures, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&ImageRecord, &str)> {
        self.records
            .iter()
            .zip(self.signatures.iter().map(String::as_str))
    }
}
