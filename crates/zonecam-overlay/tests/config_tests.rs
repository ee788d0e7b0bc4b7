use serde_json::{Map, Value, json};
use zonecam_overlay::{DEFAULT_ZONE_COLOR, ZoneConfigError, ZoneOverlayConfig, validate_attrs};

fn attrs(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

#[test]
fn test_validate_empty_attrs() {
    let err = validate_attrs(&Map::new()).unwrap_err();
    assert_eq!(err, ZoneConfigError::MissingOrInvalidField("camera_name"));
}

#[test]
fn test_validate_camera_name_must_be_string() {
    let err = validate_attrs(&attrs(json!({"camera_name": 5}))).unwrap_err();
    assert_eq!(err, ZoneConfigError::MissingOrInvalidField("camera_name"));
}

#[test]
fn test_validate_missing_zones() {
    let err = validate_attrs(&attrs(json!({"camera_name": "cam1"}))).unwrap_err();
    assert_eq!(err, ZoneConfigError::MissingOrInvalidField("zones"));
}

#[test]
fn test_validate_zones_must_be_object() {
    let err = validate_attrs(&attrs(json!({
        "camera_name": "cam1",
        "zones": [[0, 0], [1, 1]],
    })))
    .unwrap_err();
    assert_eq!(err, ZoneConfigError::MissingOrInvalidField("zones"));
}

#[test]
fn test_validate_checks_zone_colors_directly() {
    // zones is well-formed here, so a validator that re-checked zones in
    // place of zone_colors would wrongly accept this input
    let err = validate_attrs(&attrs(json!({
        "camera_name": "cam1",
        "zones": {},
    })))
    .unwrap_err();
    assert_eq!(err, ZoneConfigError::MissingOrInvalidField("zone_colors"));
}

#[test]
fn test_validate_returns_camera_dependency() {
    let (required, optional) = validate_attrs(&attrs(json!({
        "camera_name": "cam1",
        "zones": {},
        "zone_colors": {},
    })))
    .unwrap();

    assert_eq!(required, vec!["cam1".to_string()]);
    assert!(optional.is_empty());
}

#[test]
fn test_from_attrs_parses_zones_and_colors() {
    let config = ZoneOverlayConfig::from_attrs(&attrs(json!({
        "camera_name": "cam1",
        "zones": {
            "door": [[0, 0], [10, 0], [10, 10], [0, 10]],
            "window": [[1.5, 2.25], [8.0, 2.0], [4.0, 9.75]],
        },
        "zone_colors": {
            "door": [255, 0, 0],
        },
    })))
    .unwrap();

    assert_eq!(config.camera_name, "cam1");
    assert_eq!(config.zones.len(), 2);
    assert_eq!(config.zones["window"].polygon[0], (1.5, 2.25));
    assert_eq!(config.fill_color("door"), Some([255, 0, 0]));
    assert_eq!(config.fill_color("window"), Some(DEFAULT_ZONE_COLOR));
}

#[test]
fn test_from_attrs_rejects_malformed_zone() {
    let err = ZoneOverlayConfig::from_attrs(&attrs(json!({
        "camera_name": "cam1",
        "zones": {"lobby": [[0, 0], [1]]},
        "zone_colors": {},
    })))
    .unwrap_err();

    assert_eq!(
        err,
        ZoneConfigError::InvalidZone {
            name: "lobby".to_string()
        }
    );
}

#[test]
fn test_from_attrs_rejects_non_numeric_point() {
    let err = ZoneOverlayConfig::from_attrs(&attrs(json!({
        "camera_name": "cam1",
        "zones": {"lobby": [[0, 0], ["a", 1], [2, 2]]},
        "zone_colors": {},
    })))
    .unwrap_err();

    assert!(matches!(err, ZoneConfigError::InvalidZone { .. }));
}

#[test]
fn test_from_attrs_rejects_bad_color_arity() {
    let err = ZoneOverlayConfig::from_attrs(&attrs(json!({
        "camera_name": "cam1",
        "zones": {},
        "zone_colors": {"door": [255, 0]},
    })))
    .unwrap_err();

    assert_eq!(
        err,
        ZoneConfigError::InvalidColor {
            name: "door".to_string()
        }
    );
}

#[test]
fn test_from_attrs_rejects_out_of_range_channel() {
    let err = ZoneOverlayConfig::from_attrs(&attrs(json!({
        "camera_name": "cam1",
        "zones": {},
        "zone_colors": {"door": [300, 0, 0]},
    })))
    .unwrap_err();

    assert!(matches!(err, ZoneConfigError::InvalidColor { .. }));
}

#[test]
fn test_empty_color_entry_disables_fill() {
    let config = ZoneOverlayConfig::from_attrs(&attrs(json!({
        "camera_name": "cam1",
        "zones": {"door": [[0, 0], [4, 0], [4, 4]]},
        "zone_colors": {"door": []},
    })))
    .unwrap();

    assert_eq!(config.fill_color("door"), None);
}

#[test]
fn test_color_for_unknown_zone_is_retained_but_inert() {
    let config = ZoneOverlayConfig::from_attrs(&attrs(json!({
        "camera_name": "cam1",
        "zones": {},
        "zone_colors": {"ghost": [1, 2, 3]},
    })))
    .unwrap();

    // Entry parses fine; with no matching zone it never reaches the
    // compositor (covered in compositor_tests)
    assert_eq!(config.colors["ghost"], Some([1, 2, 3]));
    assert!(config.zones.is_empty());
}
