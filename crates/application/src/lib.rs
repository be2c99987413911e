//! Curio Application - Use cases and ports
//!
//! This crate orchestrates searches and image loading against the ports
//! implemented by the infrastructure layer. It owns no I/O of its own
//! beyond writing saved images.

pub mod ports;
pub mod use_cases;

pub use ports::{
    ApiError, CollectionApi, DecodedImage, FetchedImage, ImageError, ImageFetcher, SearchToken,
};
pub use use_cases::{FetchThumbnail, LoadFullImage, SaveImage, SearchArtworks, SearchOutcome};
