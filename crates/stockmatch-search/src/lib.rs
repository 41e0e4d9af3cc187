//! Fuzzy search for stockmatch.
//!
//! Ranks catalog signatures against a normalized query by approximate string
//! similarity and maps the matches back to image references.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod ranker;
pub mod retrieval;

pub use ranker::{rank, rank_with, Match, RankOptions};
pub use retrieval::{ImageSearch, SearchHit, DEFAULT_IMAGE_URL};
