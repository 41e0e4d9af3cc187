use anyhow::{Context, Result};
use std::path::Path;
use stockmatch_core::catalog::load_file;

use super::open_store;
use crate::config::Config;

/// List every image in the configured catalog with its signature.
pub fn list_catalog(config: &Config) -> Result<()> {
    let snapshot = open_store(config)?.snapshot();

    println!("Catalog: {} ({} images)\n", snapshot.origin(), snapshot.len());

    for (index, (record, signature)) in snapshot.iter().enumerate() {
        println!("{:>3}. {}", index, record.title);
        println!("     signature: {}", signature);
        if !record.source.is_empty() {
            println!("     source: {}", record.source);
        }
        println!("     image: {}", record.image);
    }

    Ok(())
}

/// Validate a dataset file without publishing it.
pub fn check_catalog(path: &Path) -> Result<()> {
    let snapshot =
        load_file(path).with_context(|| format!("Invalid catalog {}", path.display()))?;

    let untagged = snapshot
        .iter()
        .filter(|(record, _)| record.tags.is_empty())
        .count();

    println!("✓ {}: {} images", path.display(), snapshot.len());
    if untagged > 0 {
        println!("  {} image(s) have no tags and only match an empty query", untagged);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_check_valid_catalog() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"images": [{{"title": "Kite", "tags": ["kite"], "image": "img://kite"}},
                           {{"title": "Blank", "image": "img://blank"}}]}}"#
        )
        .unwrap();
        assert!(check_catalog(file.path()).is_ok());
    }

    #[test]
    fn test_check_rejects_empty_catalog() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"images": []}}"#).unwrap();
        let err = check_catalog(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid catalog"));
    }

    #[test]
    fn test_list_bundled_catalog() {
        assert!(list_catalog(&Config::default()).is_ok());
    }
}
