use std::fmt;

#[derive(Debug)]
pub enum FrameError {
    Decode(String),
    Encode(String),
    UnsupportedMime(String),
    BufferSize { expected: usize, got: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Decode(msg) => write!(f, "decode error: {msg}"),
            FrameError::Encode(msg) => write!(f, "encode error: {msg}"),
            FrameError::UnsupportedMime(mime) => write!(f, "unsupported mime type: {mime}"),
            FrameError::BufferSize { expected, got } => {
                write!(f, "buffer size mismatch: expected {expected} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for FrameError {}

impl From<crates_image::ImageError> for FrameError {
    fn from(err: crates_image::ImageError) -> Self {
        FrameError::Decode(err.to_string())
    }
}
