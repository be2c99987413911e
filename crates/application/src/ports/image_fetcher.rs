//! Image fetcher port.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// Errors from the image fetcher adapter.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The request could not reach the image host.
    #[error("connection failed: {0}")]
    Network(String),

    /// The image host answered with a non-success status.
    #[error("image host answered with status {code}")]
    Status {
        /// HTTP status code of the response.
        code: u16,
    },

    /// The downloaded bytes are not a decodable image.
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// Writing a saved image to disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A decoded image as raw RGBA8 pixels.
///
/// Pixels are row-major with four bytes per pixel. This representation
/// crosses thread boundaries freely; the UI layer wraps it into a toolkit
/// image type on the event-loop thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 pixel data, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

/// A fetched image: the bytes as downloaded plus the decoded pixels.
///
/// The raw bytes are kept so "Download Image" writes exactly what the
/// museum served, with no re-encoding.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    /// Image bytes exactly as downloaded.
    pub raw: Vec<u8>,
    /// Decoded pixels for display.
    pub decoded: DecodedImage,
}

/// Port for downloading and decoding images.
pub trait ImageFetcher: Send + Sync {
    /// Downloads and decodes an image at its original resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the download fails, the host answers with a
    /// non-success status, or the bytes cannot be decoded.
    fn fetch_image(
        &self,
        url: &str,
    ) -> Pin<Box<dyn Future<Output = Result<FetchedImage, ImageError>> + Send + '_>>;

    /// Downloads an image and scales it down to fit the given bounds.
    ///
    /// The aspect ratio is preserved and images smaller than the bounds are
    /// not scaled up.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ImageFetcher::fetch_image`].
    fn fetch_thumbnail(
        &self,
        url: &str,
        max_width: u32,
        max_height: u32,
    ) -> Pin<Box<dyn Future<Output = Result<DecodedImage, ImageError>> + Send + '_>>;
}
