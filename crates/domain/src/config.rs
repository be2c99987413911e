//! Shared application constants.

/// Base URL of the museum's public collection API.
pub const API_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1";

/// Maximum number of search results fetched for one query.
pub const MAX_RESULTS: usize = 80;

/// Bound on concurrent object-detail requests during the search fan-out.
pub const DETAIL_FETCH_CONCURRENCY: usize = 8;

/// Maximum thumbnail width in pixels.
pub const THUMBNAIL_MAX_WIDTH: u32 = 200;

/// Maximum thumbnail height in pixels.
pub const THUMBNAIL_MAX_HEIGHT: u32 = THUMBNAIL_MAX_WIDTH;
