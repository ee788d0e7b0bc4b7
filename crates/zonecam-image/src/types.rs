use crate::FrameError;
use crates_image::ImageFormat;

/// A wire image: encoded bytes tagged with their mime type.
#[derive(Debug, Clone, PartialEq)]
pub struct RawImage {
    pub bytes: Vec<u8>,
    pub mime: ImageMime,
}

/// Image encodings supported on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
}

impl ImageMime {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
        }
    }

    /// Parses a mime string such as `"image/jpeg"`.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::UnsupportedMime` for anything other than the
    /// JPEG and PNG mime types.
    pub fn from_mime(mime: &str) -> Result<Self, FrameError> {
        match mime {
            "image/jpeg" | "image/jpg" => Ok(ImageMime::Jpeg),
            "image/png" => Ok(ImageMime::Png),
            other => Err(FrameError::UnsupportedMime(other.to_string())),
        }
    }

    /// Guesses the mime type from a file path extension.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::UnsupportedMime` for unrecognized extensions.
    pub fn from_extension(path: &str) -> Result<Self, FrameError> {
        match path.rsplit('.').next() {
            Some("jpg") | Some("jpeg") => Ok(ImageMime::Jpeg),
            Some("png") => Ok(ImageMime::Png),
            _ => Err(FrameError::UnsupportedMime(path.to_string())),
        }
    }

    pub(crate) fn format(&self) -> ImageFormat {
        match self {
            ImageMime::Jpeg => ImageFormat::Jpeg,
            ImageMime::Png => ImageFormat::Png,
        }
    }
}

/// A decoded RGB8 raster in HWC layout, 3 bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelFrame {
    /// Creates a frame from raw RGB8 data.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::BufferSize` if `data` is not exactly
    /// `width * height * 3` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(FrameError::BufferSize {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a frame filled with a single color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Reads the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = 3 * (y as usize * self.width as usize + x as usize);
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Overwrites the pixel at `(x, y)`; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = 3 * (y as usize * self.width as usize + x as usize);
        self.data[idx..idx + 3].copy_from_slice(&rgb);
    }
}
