use async_trait::async_trait;
use zonecam_image::RawImage;

use crate::CameraError;

/// Async camera trait for on-demand frame retrieval.
///
/// Implementations return the current frame as an encoded `RawImage`
/// tagged with its mime type. Handles are shared as `Arc<dyn Camera>`, so
/// `fetch_frame` takes `&self`; implementations that need mutable capture
/// state use interior mutability.
#[async_trait]
pub trait Camera: Send + Sync {
    /// Fetch the current frame from the camera.
    async fn fetch_frame(&self) -> Result<RawImage, CameraError>;
}
