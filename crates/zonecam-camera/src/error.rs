use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    Fetch(String),
    Io(std::io::Error),
    Closed,
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Fetch(msg) => write!(f, "fetch error: {msg}"),
            CameraError::Io(err) => write!(f, "io error: {err}"),
            CameraError::Closed => write!(f, "camera closed"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Io(err)
    }
}
