//! Integration tests for loading, reloading and sharing the catalog.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use stockmatch_core::catalog::{load_file, CatalogOrigin, CatalogSnapshot};
use stockmatch_core::{normalize, CatalogStore, DataError, ImageRecord};
use tempfile::NamedTempFile;

fn write_dataset(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn catalog_of(prefix: &str, count: usize) -> CatalogSnapshot {
    let records = (0..count)
        .map(|i| {
            ImageRecord::new(format!("{prefix} {i}"), format!("img://{prefix}/{i}"))
                .with_tags([prefix.to_string(), format!("item{i}")])
        })
        .collect();
    CatalogSnapshot::from_records(records)
}

#[test]
fn test_load_external_file() {
    let file = write_dataset(
        r#"{"images": [
            {"title": "Birthday Cake", "tags": ["birthday", "cake"], "source": "test", "image": "img://A"},
            {"title": "Office", "tags": ["office", "desk"], "source": "test", "image": "img://B"}
        ]}"#,
    );

    let snapshot = load_file(file.path()).unwrap();

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.signatures(), ["birthdai cake", "desk offic"]);
    assert_eq!(
        *snapshot.origin(),
        CatalogOrigin::File(file.path().to_path_buf())
    );
}

#[test]
fn test_signature_index_is_derived_from_tags() {
    let store = CatalogStore::bundled().unwrap();
    let snapshot = store.snapshot();

    assert_eq!(snapshot.records().len(), snapshot.signatures().len());
    for (i, record) in snapshot.records().iter().enumerate() {
        assert_eq!(snapshot.signatures()[i], normalize(&record.tags));
    }
}

#[test]
fn test_reload_replaces_whole_catalog() {
    let store = CatalogStore::bundled().unwrap();
    let file = write_dataset(
        r#"{"images": [{"title": "Only", "tags": ["only"], "source": "t", "image": "img://only"}]}"#,
    );

    let count = store.reload_from_file(file.path()).unwrap();

    assert_eq!(count, 1);
    assert_eq!(store.len(), 1);
    assert_eq!(store.snapshot().signatures(), ["onli"]);
}

#[test]
fn test_reload_with_malformed_file_fails_and_keeps_catalog() {
    let store = CatalogStore::bundled().unwrap();
    let before = store.snapshot();
    let file = write_dataset(r#"{"images": [{"title": "x", "tags": "#);

    let err = store.reload_from_file(file.path()).unwrap_err();

    assert!(matches!(err, DataError::Parse { .. }));
    assert!(std::sync::Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn test_readers_never_see_mixed_catalogs() {
    let store = CatalogStore::new(catalog_of("alpha", 3));
    let done = AtomicBool::new(false);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                while !done.load(Ordering::Relaxed) {
                    let snapshot = store.snapshot();
                    assert_eq!(snapshot.records().len(), snapshot.signatures().len());

                    let prefix = if snapshot.len() == 3 { "alpha" } else { "beta" };
                    for (record, signature) in snapshot.iter() {
                        assert!(record.image.starts_with(&format!("img://{prefix}/")));
                        assert!(signature.contains(prefix));
                    }
                }
            });
        }

        for round in 0..200 {
            if round % 2 == 0 {
                store.replace(catalog_of("beta", 7));
            } else {
                store.replace(catalog_of("alpha", 3));
            }
        }
        done.store(true, Ordering::Relaxed);
    });
}
