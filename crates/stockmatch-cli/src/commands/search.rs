use anyhow::Result;
use stockmatch_search::SearchHit;

use super::build_search;
use crate::config::Config;

/// Print the images best matching a free-text title.
pub fn search_title(config: &Config, title: &str, explain: bool) -> Result<()> {
    let search = build_search(config)?;

    if explain {
        print_hits(&search.explain_title(title), search.fallback());
    } else {
        print_images(&search.search_by_title(title));
    }

    Ok(())
}

/// Print the images best matching a tag list.
pub fn search_tags(config: &Config, tags: &[String], explain: bool) -> Result<()> {
    let search = build_search(config)?;

    if explain {
        print_hits(&search.explain_tags(tags), search.fallback());
    } else {
        print_images(&search.search_by_tags(tags));
    }

    Ok(())
}

fn print_images(images: &[String]) {
    for image in images {
        println!("{}", image);
    }
}

fn print_hits(hits: &[SearchHit], fallback: &str) {
    if hits.is_empty() {
        println!("No matches; the fallback image would be returned:");
        println!("  {}", fallback);
        return;
    }

    println!("{} match(es), best first:\n", hits.len());
    for (rank, hit) in hits.iter().enumerate() {
        println!("{}", format_hit(rank + 1, hit));
    }
}

fn format_hit(rank: usize, hit: &SearchHit) -> String {
    format!(
        "{:>3}. [distance {}] {} (#{})\n     signature: {}\n     image: {}",
        rank, hit.distance, hit.title, hit.index, hit.signature, hit.image
    )
}
