//! Core domain model for stockmatch.
//!
//! This crate defines the stock image record, the tag normalizer that turns
//! free text into canonical signatures, and the catalog loader and store
//! that keep records and signatures aligned.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod normalize;

pub use catalog::{CatalogOrigin, CatalogSnapshot, CatalogStore};
pub use error::{DataError, Result};
pub use model::ImageRecord;
pub use normalize::{normalize, normalize_title, normalize_tokens};
