//! Image fetcher using reqwest and the image crate.
//!
//! Downloads image bytes, decodes them into RGBA8 pixels, and scales
//! thumbnails down to the bounds requested by the application layer.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use curio_application::ports::{DecodedImage, FetchedImage, ImageError, ImageFetcher};
use image::DynamicImage;
use reqwest::Client;

/// Per-request timeout in milliseconds.
const REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Image fetcher backed by `reqwest::Client`.
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    /// Creates a fetcher with the default client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, ImageError> {
        let client = Client::builder()
            .user_agent("Curio/0.1.0")
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .build()
            .map_err(|e| ImageError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status {
                code: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    fn decode(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
        image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))
    }

    /// Scales an image down to fit within the bounds, keeping aspect ratio.
    ///
    /// Images already within the bounds come back untouched so thumbnails
    /// are never scaled up.
    fn scale_down(image: DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
        if image.width() <= max_width && image.height() <= max_height {
            image
        } else {
            image.thumbnail(max_width, max_height)
        }
    }

    fn to_decoded(image: &DynamicImage) -> DecodedImage {
        let rgba = image.to_rgba8();
        DecodedImage {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        }
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch_image(
        &self,
        url: &str,
    ) -> Pin<Box<dyn Future<Output = Result<FetchedImage, ImageError>> + Send + '_>> {
        let url = url.to_string();

        Box::pin(async move {
            let raw = self.download(&url).await?;
            let decoded = Self::to_decoded(&Self::decode(&raw)?);
            Ok(FetchedImage { raw, decoded })
        })
    }

    fn fetch_thumbnail(
        &self,
        url: &str,
        max_width: u32,
        max_height: u32,
    ) -> Pin<Box<dyn Future<Output = Result<DecodedImage, ImageError>> + Send + '_>> {
        let url = url.to_string();

        Box::pin(async move {
            let raw = self.download(&url).await?;
            let scaled = Self::scale_down(Self::decode(&raw)?, max_width, max_height);
            Ok(Self::to_decoded(&scaled))
        })
    }
}

#[cfg(test)]
mod tests {
    use image::RgbaImage;
    use pretty_assertions::assert_eq;

    use super::*;

    fn solid_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([120, 30, 30, 255]),
        ))
    }

    #[test]
    fn client_creation() {
        assert!(HttpImageFetcher::new().is_ok());
    }

    #[test]
    fn scaling_preserves_aspect_ratio() {
        let scaled = HttpImageFetcher::scale_down(solid_image(400, 300), 200, 200);
        assert_eq!((scaled.width(), scaled.height()), (200, 150));

        let scaled = HttpImageFetcher::scale_down(solid_image(300, 600), 200, 200);
        assert_eq!((scaled.width(), scaled.height()), (100, 200));
    }

    #[test]
    fn small_images_are_not_scaled_up() {
        let scaled = HttpImageFetcher::scale_down(solid_image(120, 80), 200, 200);
        assert_eq!((scaled.width(), scaled.height()), (120, 80));
    }

    #[test]
    fn decoded_pixels_have_rgba_stride() {
        let decoded = HttpImageFetcher::to_decoded(&solid_image(10, 4));
        assert_eq!(decoded.width, 10);
        assert_eq!(decoded.height, 4);
        assert_eq!(decoded.pixels.len(), 10 * 4 * 4);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let result = HttpImageFetcher::decode(b"definitely not an image");
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }
}
