//! Camera abstraction for the zonecam ecosystem.
//!
//! This crate provides the async `Camera` trait for on-demand frame
//! retrieval, plus a `StillCamera` implementation that serves a fixed
//! encoded image (used by tests and demos; real capture backends live
//! outside this workspace).

pub mod error;
pub mod still;
pub mod traits;

pub use error::CameraError;
pub use still::StillCamera;
pub use traits::Camera;
