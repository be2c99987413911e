//! Image save use case.

use std::path::Path;

use tokio::fs;

use crate::ports::ImageError;

/// Use case for writing a downloaded image to a user-chosen path.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveImage;

impl SaveImage {
    /// Creates the use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Writes the image bytes to the given path.
    ///
    /// The parent directory is created if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub async fn execute(&self, bytes: &[u8], path: &Path) -> Result<(), ImageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn writes_bytes_to_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("images").join("DP346474.jpg");

        SaveImage::new().execute(b"jpeg-bytes", &path).await.unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, b"jpeg-bytes");
    }

    #[tokio::test]
    async fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("image.jpg");

        SaveImage::new().execute(b"first", &path).await.unwrap();
        SaveImage::new().execute(b"second", &path).await.unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, b"second");
    }
}
