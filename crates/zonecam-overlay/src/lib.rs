//! Zone overlay core for the zonecam ecosystem.
//!
//! Two pieces: the zone configuration store (`zones`), which turns untyped
//! key-value attributes into validated polygon and color maps, and the
//! compositor (`compositor`), which fills the configured polygons into an
//! overlay copy of a frame and alpha-blends it back onto the original.

pub mod compositor;
pub mod error;
pub mod zones;

pub use compositor::{ZONE_FILL_ALPHA, render_zones};
pub use error::ZoneConfigError;
pub use zones::{DEFAULT_ZONE_COLOR, Zone, ZoneOverlayConfig, validate_attrs};
