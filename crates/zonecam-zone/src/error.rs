use std::fmt;

use zonecam_camera::CameraError;
use zonecam_image::FrameError;
use zonecam_overlay::ZoneConfigError;

#[derive(Debug)]
pub enum ZoneCameraError {
    Config(ZoneConfigError),
    UnresolvedDependency(String),
    Upstream(CameraError),
    Frame(FrameError),
    Unimplemented(&'static str),
}

impl fmt::Display for ZoneCameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneCameraError::Config(err) => write!(f, "configuration error: {err}"),
            ZoneCameraError::UnresolvedDependency(name) => {
                write!(f, "unresolved dependency: camera {name} not found")
            }
            ZoneCameraError::Upstream(err) => write!(f, "upstream fetch error: {err}"),
            ZoneCameraError::Frame(err) => write!(f, "frame error: {err}"),
            ZoneCameraError::Unimplemented(what) => write!(f, "{what} is not implemented"),
        }
    }
}

impl std::error::Error for ZoneCameraError {}

impl From<ZoneConfigError> for ZoneCameraError {
    fn from(err: ZoneConfigError) -> Self {
        ZoneCameraError::Config(err)
    }
}

impl From<CameraError> for ZoneCameraError {
    fn from(err: CameraError) -> Self {
        ZoneCameraError::Upstream(err)
    }
}

impl From<FrameError> for ZoneCameraError {
    fn from(err: FrameError) -> Self {
        ZoneCameraError::Frame(err)
    }
}
