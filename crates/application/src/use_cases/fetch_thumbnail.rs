//! Thumbnail fetch use case.

use std::sync::Arc;

use curio_domain::config;

use crate::ports::{DecodedImage, ImageError, ImageFetcher};

/// Use case for loading one result row's thumbnail.
///
/// Each visible row is one independent unit of work; a failure here is
/// reported on the affected row only and never fails the search.
pub struct FetchThumbnail<F: ImageFetcher> {
    fetcher: Arc<F>,
}

impl<F: ImageFetcher> FetchThumbnail<F> {
    /// Creates the use case.
    #[must_use]
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Downloads and scales the thumbnail for one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the download or decode fails.
    pub async fn execute(&self, url: &str) -> Result<DecodedImage, ImageError> {
        self.fetcher
            .fetch_thumbnail(url, config::THUMBNAIL_MAX_WIDTH, config::THUMBNAIL_MAX_HEIGHT)
            .await
    }
}
