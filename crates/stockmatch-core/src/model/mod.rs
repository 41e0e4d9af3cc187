pub mod image;

pub use image::{Dataset, ImageRecord};
