use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::ZoneConfigError;

/// Fill color used for zones without an entry in the color map.
pub const DEFAULT_ZONE_COLOR: [u8; 3] = [255, 255, 255];

/// A zone polygon: ordered vertices in frame pixel coordinates.
///
/// Coordinates may be fractional in configuration; they are truncated to
/// integer pixels at render time. Polygons with fewer than 3 vertices are
/// stored but never rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub polygon: Vec<(f64, f64)>,
}

/// Validated zone overlay configuration.
///
/// `zones` and `colors` are keyed by zone name. Color entries naming
/// unknown zones are retained but have no effect on rendering. Zones
/// render in lexicographic name order, which keeps output deterministic
/// for identical configurations.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneOverlayConfig {
    pub camera_name: String,
    pub zones: BTreeMap<String, Zone>,
    pub colors: BTreeMap<String, Option<[u8; 3]>>,
}

/// Validates raw attributes and returns the dependency names they imply.
///
/// Checks that `camera_name` is a string and that `zones` and
/// `zone_colors` are objects. On success returns
/// `(required, optional)` dependency name lists: the upstream camera is
/// the sole required dependency, and there are no optional ones.
///
/// # Errors
///
/// Returns `ZoneConfigError::MissingOrInvalidField` naming the first
/// offending field.
pub fn validate_attrs(
    attrs: &Map<String, Value>,
) -> Result<(Vec<String>, Vec<String>), ZoneConfigError> {
    let camera_name = attrs
        .get("camera_name")
        .and_then(Value::as_str)
        .ok_or(ZoneConfigError::MissingOrInvalidField("camera_name"))?;

    if !matches!(attrs.get("zones"), Some(Value::Object(_))) {
        return Err(ZoneConfigError::MissingOrInvalidField("zones"));
    }

    if !matches!(attrs.get("zone_colors"), Some(Value::Object(_))) {
        return Err(ZoneConfigError::MissingOrInvalidField("zone_colors"));
    }

    Ok((vec![camera_name.to_string()], Vec::new()))
}

impl ZoneOverlayConfig {
    /// Parses raw attributes into a typed configuration.
    ///
    /// Re-checks the field shapes `validate_attrs` checks, then converts
    /// every zone's coordinate list and every color entry. An explicitly
    /// empty color entry parses to `None`, which disables that zone's
    /// fill.
    ///
    /// # Errors
    ///
    /// `MissingOrInvalidField` for top-level shape violations,
    /// `InvalidZone` / `InvalidColor` naming the offending zone otherwise.
    pub fn from_attrs(attrs: &Map<String, Value>) -> Result<Self, ZoneConfigError> {
        let camera_name = attrs
            .get("camera_name")
            .and_then(Value::as_str)
            .ok_or(ZoneConfigError::MissingOrInvalidField("camera_name"))?
            .to_string();

        let raw_zones = attrs
            .get("zones")
            .and_then(Value::as_object)
            .ok_or(ZoneConfigError::MissingOrInvalidField("zones"))?;

        let raw_colors = attrs
            .get("zone_colors")
            .and_then(Value::as_object)
            .ok_or(ZoneConfigError::MissingOrInvalidField("zone_colors"))?;

        let mut zones = BTreeMap::new();
        for (name, value) in raw_zones {
            zones.insert(name.clone(), parse_zone(name, value)?);
        }

        let mut colors = BTreeMap::new();
        for (name, value) in raw_colors {
            colors.insert(name.clone(), parse_color(name, value)?);
        }

        Ok(Self {
            camera_name,
            zones,
            colors,
        })
    }

    /// Fill color for a zone: its configured color, white when no entry
    /// exists, `None` when the entry explicitly disables the fill.
    pub fn fill_color(&self, zone: &str) -> Option<[u8; 3]> {
        match self.colors.get(zone) {
            Some(Some(rgb)) => Some(*rgb),
            Some(None) => None,
            None => Some(DEFAULT_ZONE_COLOR),
        }
    }
}

fn parse_zone(name: &str, value: &Value) -> Result<Zone, ZoneConfigError> {
    let invalid = || ZoneConfigError::InvalidZone {
        name: name.to_string(),
    };

    let points = value.as_array().ok_or_else(invalid)?;
    let mut polygon = Vec::with_capacity(points.len());
    for point in points {
        let pair = point.as_array().ok_or_else(invalid)?;
        if pair.len() != 2 {
            return Err(invalid());
        }
        let x = pair[0].as_f64().ok_or_else(invalid)?;
        let y = pair[1].as_f64().ok_or_else(invalid)?;
        polygon.push((x, y));
    }

    Ok(Zone { polygon })
}

fn parse_color(name: &str, value: &Value) -> Result<Option<[u8; 3]>, ZoneConfigError> {
    let invalid = || ZoneConfigError::InvalidColor {
        name: name.to_string(),
    };

    let parts = value.as_array().ok_or_else(invalid)?;

    // An empty entry disables the fill for that zone.
    if parts.is_empty() {
        return Ok(None);
    }

    if parts.len() != 3 {
        return Err(invalid());
    }

    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(parts) {
        let channel = part.as_u64().ok_or_else(invalid)?;
        *slot = u8::try_from(channel).map_err(|_| invalid())?;
    }

    Ok(Some(rgb))
}
