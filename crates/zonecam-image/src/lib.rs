//! Image codec utilities for the zonecam ecosystem.
//!
//! This crate converts between the wire representation of a frame
//! (`RawImage`: encoded bytes tagged with a mime type) and the `PixelFrame`
//! RGB8 buffer the overlay compositor operates on.
//!
//! All pixel frames use HWC layout: `[height, width, 3]`.

pub mod error;
pub mod types;

pub use error::FrameError;
pub use types::{ImageMime, PixelFrame, RawImage};

use std::io::Cursor;

use crates_image::DynamicImage;

/// Decodes a wire image into an RGB8 pixel frame.
///
/// The byte format is auto-detected by the `image` crate; the mime tag on
/// `raw` is not trusted for decoding, only carried through so output can be
/// re-encoded identically. Inputs with other color models (grayscale,
/// alpha) are normalized to RGB8.
///
/// # Errors
///
/// Returns `FrameError::Decode` if the data is invalid or the format is
/// unsupported.
pub fn decode_frame(raw: &RawImage) -> Result<PixelFrame, FrameError> {
    let img = crates_image::load_from_memory(&raw.bytes)?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    PixelFrame::new(width, height, rgb.into_raw())
}

/// Encodes an RGB8 pixel frame into wire bytes with the given mime type.
///
/// # Errors
///
/// Returns `FrameError::Encode` if the encoder rejects the frame.
pub fn encode_frame(frame: &PixelFrame, mime: ImageMime) -> Result<RawImage, FrameError> {
    let buffer: crates_image::RgbImage =
        crates_image::ImageBuffer::from_raw(frame.width, frame.height, frame.data.clone())
            .ok_or_else(|| {
                FrameError::Encode("pixel buffer does not match frame dimensions".to_string())
            })?;

    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(buffer)
        .write_to(&mut Cursor::new(&mut bytes), mime.format())
        .map_err(|e| FrameError::Encode(e.to_string()))?;

    Ok(RawImage { bytes, mime })
}
