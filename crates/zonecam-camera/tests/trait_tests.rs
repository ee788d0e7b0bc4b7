use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use zonecam_camera::{Camera, CameraError};
use zonecam_image::{ImageMime, RawImage};

// Mock implementation for testing
struct MockCamera {
    fetches: AtomicUsize,
}

impl MockCamera {
    fn new() -> Self {
        Self {
            fetches: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Camera for MockCamera {
    async fn fetch_frame(&self) -> Result<RawImage, CameraError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(RawImage {
            bytes: vec![1, 2, 3],
            mime: ImageMime::Jpeg,
        })
    }
}

#[tokio::test]
async fn test_camera_trait_mock_implementation() {
    let cam = MockCamera::new();

    let frame = cam.fetch_frame().await.unwrap();
    assert_eq!(frame.bytes, vec![1, 2, 3]);
    assert_eq!(frame.mime, ImageMime::Jpeg);
    assert_eq!(cam.fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_camera_trait_object() {
    // Handles are shared as Arc<dyn Camera>
    let cam: Arc<dyn Camera> = Arc::new(MockCamera::new());

    let first = cam.fetch_frame().await.unwrap();
    let second = cam.fetch_frame().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fetch_error_propagates() {
    struct FailingCamera;

    #[async_trait]
    impl Camera for FailingCamera {
        async fn fetch_frame(&self) -> Result<RawImage, CameraError> {
            Err(CameraError::Fetch("sensor unplugged".to_string()))
        }
    }

    let err = FailingCamera.fetch_frame().await.unwrap_err();
    assert!(err.to_string().contains("sensor unplugged"));
}
