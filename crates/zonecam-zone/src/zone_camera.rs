use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::{Map, Value};
use zonecam_camera::{Camera, CameraError};
use zonecam_image::{ImageMime, RawImage, decode_frame, encode_frame};
use zonecam_overlay::{ZoneOverlayConfig, render_zones, validate_attrs};

use crate::ZoneCameraError;

/// Immutable bundle of a validated configuration and its resolved
/// upstream handle. Swapped wholesale on reconfigure so a reader never
/// sees new zones with an old camera or vice versa.
struct ZoneSnapshot {
    config: ZoneOverlayConfig,
    upstream: Arc<dyn Camera>,
}

/// Camera wrapper that annotates every frame with the configured zones.
pub struct ZoneCamera {
    name: String,
    snapshot: RwLock<Arc<ZoneSnapshot>>,
}

impl std::fmt::Debug for ZoneCamera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoneCamera")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl ZoneCamera {
    /// Validates raw attributes, returning the `(required, optional)`
    /// dependency name lists. The upstream camera named by `camera_name`
    /// is the sole required dependency.
    ///
    /// # Errors
    ///
    /// Returns `ZoneCameraError::Config` naming the missing or mistyped
    /// field. No state is touched.
    pub fn validate(
        attrs: &Map<String, Value>,
    ) -> Result<(Vec<String>, Vec<String>), ZoneCameraError> {
        Ok(validate_attrs(attrs)?)
    }

    /// Builds the component from raw attributes and resolved dependencies.
    ///
    /// # Errors
    ///
    /// Fails with `ZoneCameraError::Config` on invalid attributes or
    /// `ZoneCameraError::UnresolvedDependency` when the named upstream
    /// camera is absent from `dependencies`. A component that fails to
    /// build serves nothing; there is no prior configuration to fall back
    /// to.
    pub fn new(
        name: impl Into<String>,
        attrs: &Map<String, Value>,
        dependencies: &HashMap<String, Arc<dyn Camera>>,
    ) -> Result<Self, ZoneCameraError> {
        let snapshot = build_snapshot(attrs, dependencies)?;
        Ok(Self {
            name: name.into(),
            snapshot: RwLock::new(Arc::new(snapshot)),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies a new configuration atomically.
    ///
    /// The replacement snapshot is fully constructed before the swap; on
    /// any error the previous configuration stays in service untouched.
    /// Frame requests already in flight keep the snapshot they started
    /// with.
    ///
    /// # Errors
    ///
    /// Same failure modes as `new`.
    pub fn reconfigure(
        &self,
        attrs: &Map<String, Value>,
        dependencies: &HashMap<String, Arc<dyn Camera>>,
    ) -> Result<(), ZoneCameraError> {
        let snapshot = build_snapshot(attrs, dependencies)?;
        log::info!(
            "{}: reconfigured with {} zone(s), upstream {}",
            self.name,
            snapshot.config.zones.len(),
            snapshot.config.camera_name
        );
        let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(snapshot);
        Ok(())
    }

    /// Fetches the current upstream frame with the zone overlays
    /// composited on top.
    ///
    /// The result is re-encoded to `mime_hint` when given, otherwise to
    /// the mime type the upstream frame arrived with.
    ///
    /// # Errors
    ///
    /// Upstream fetch failures propagate unchanged as
    /// `ZoneCameraError::Upstream` without attempting a render, and are
    /// not retried here. Frames that cannot be decoded surface as
    /// `ZoneCameraError::Frame`.
    pub async fn annotated_image(
        &self,
        mime_hint: Option<ImageMime>,
    ) -> Result<RawImage, ZoneCameraError> {
        let snapshot = self.current();
        let raw = snapshot.upstream.fetch_frame().await?;
        let frame = decode_frame(&raw)?;
        let annotated = render_zones(&frame, &snapshot.config);
        let mime = mime_hint.unwrap_or(raw.mime);
        Ok(encode_frame(&annotated, mime)?)
    }

    /// Named multi-image retrieval is not implemented for zone cameras.
    pub async fn images(&self) -> Result<Vec<(String, RawImage)>, ZoneCameraError> {
        log::error!("{}: images is not implemented", self.name);
        Err(ZoneCameraError::Unimplemented("images"))
    }

    /// Point cloud retrieval is not implemented for zone cameras.
    pub async fn point_cloud(&self) -> Result<(Vec<u8>, String), ZoneCameraError> {
        log::error!("{}: point_cloud is not implemented", self.name);
        Err(ZoneCameraError::Unimplemented("point_cloud"))
    }

    /// Property reporting is not implemented for zone cameras.
    pub async fn properties(&self) -> Result<Map<String, Value>, ZoneCameraError> {
        log::error!("{}: properties is not implemented", self.name);
        Err(ZoneCameraError::Unimplemented("properties"))
    }

    /// Geometry listing is not implemented for zone cameras.
    pub async fn geometries(&self) -> Result<Vec<Value>, ZoneCameraError> {
        log::error!("{}: geometries is not implemented", self.name);
        Err(ZoneCameraError::Unimplemented("geometries"))
    }

    /// Arbitrary command dispatch is not implemented for zone cameras.
    pub async fn do_command(
        &self,
        _command: Map<String, Value>,
    ) -> Result<Map<String, Value>, ZoneCameraError> {
        log::error!("{}: do_command is not implemented", self.name);
        Err(ZoneCameraError::Unimplemented("do_command"))
    }

    fn current(&self) -> Arc<ZoneSnapshot> {
        // Guard dropped before any await; readers hold only the Arc.
        Arc::clone(&self.snapshot.read().unwrap_or_else(|e| e.into_inner()))
    }
}

#[async_trait]
impl Camera for ZoneCamera {
    /// Zone cameras are cameras themselves, so wrappers can be stacked.
    async fn fetch_frame(&self) -> Result<RawImage, CameraError> {
        self.annotated_image(None)
            .await
            .map_err(|e| CameraError::Fetch(e.to_string()))
    }
}

fn build_snapshot(
    attrs: &Map<String, Value>,
    dependencies: &HashMap<String, Arc<dyn Camera>>,
) -> Result<ZoneSnapshot, ZoneCameraError> {
    let config = ZoneOverlayConfig::from_attrs(attrs)?;
    let upstream = dependencies
        .get(&config.camera_name)
        .ok_or_else(|| ZoneCameraError::UnresolvedDependency(config.camera_name.clone()))?;

    Ok(ZoneSnapshot {
        config,
        upstream: Arc::clone(upstream),
    })
}
