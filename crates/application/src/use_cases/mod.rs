//! Application use cases (business logic orchestration).

mod fetch_thumbnail;
mod load_full_image;
mod save_image;
mod search_artworks;

pub use fetch_thumbnail::FetchThumbnail;
pub use load_full_image::LoadFullImage;
pub use save_image::SaveImage;
pub use search_artworks::{SearchArtworks, SearchOutcome};
