//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer.

mod cancel;
mod collection_api;
mod image_fetcher;

pub use cancel::SearchToken;
pub use collection_api::{ApiError, CollectionApi};
pub use image_fetcher::{DecodedImage, FetchedImage, ImageError, ImageFetcher};
