//! Full-image load use case.

use std::sync::Arc;

use crate::ports::{FetchedImage, ImageError, ImageFetcher};

/// Use case for loading the original-resolution image for the viewer.
pub struct LoadFullImage<F: ImageFetcher> {
    fetcher: Arc<F>,
}

impl<F: ImageFetcher> LoadFullImage<F> {
    /// Creates the use case.
    #[must_use]
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Downloads the image at its original resolution.
    ///
    /// The raw bytes come back alongside the decoded pixels so a later
    /// "Download Image" writes the file exactly as served.
    ///
    /// # Errors
    ///
    /// Returns an error if the download or decode fails.
    pub async fn execute(&self, url: &str) -> Result<FetchedImage, ImageError> {
        self.fetcher.fetch_image(url).await
    }
}
