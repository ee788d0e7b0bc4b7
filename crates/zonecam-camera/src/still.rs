use std::path::Path;

use async_trait::async_trait;
use zonecam_image::{ImageMime, RawImage};

use crate::{Camera, CameraError};

/// Camera that serves a fixed, pre-encoded image on every fetch.
///
/// Useful as the upstream of a zone camera in tests and demos.
#[derive(Debug, Clone)]
pub struct StillCamera {
    image: RawImage,
}

impl StillCamera {
    pub fn new(image: RawImage) -> Self {
        Self { image }
    }

    /// Loads the still image from a file.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Io` if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>, mime: ImageMime) -> Result<Self, CameraError> {
        let bytes = std::fs::read(path)?;
        Ok(Self {
            image: RawImage { bytes, mime },
        })
    }
}

#[async_trait]
impl Camera for StillCamera {
    async fn fetch_frame(&self) -> Result<RawImage, CameraError> {
        log::trace!("still camera serving {} byte frame", self.image.bytes.len());
        Ok(self.image.clone())
    }
}
