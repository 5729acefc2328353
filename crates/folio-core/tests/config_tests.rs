// Content manifest parsing and the compiled-in defaults.

use folio_core::config::{ConfigError, ContentManifest};

#[test]
fn defaults_describe_the_nine_body_system() {
    let manifest = ContentManifest::default();
    assert_eq!(manifest.bodies.len(), 9);
    assert_eq!(manifest.bodies[0].name, "Mercury");
    assert_eq!(manifest.bodies[8].name, "Pluto");
    // distances strictly increase outward
    for pair in manifest.bodies.windows(2) {
        assert!(pair[0].distance < pair[1].distance);
    }
    assert_eq!(manifest.sections.len(), 6);
    assert!(!manifest.constellation.is_empty());
}

#[test]
fn manifest_round_trips_through_json() {
    let manifest = ContentManifest::default();
    let json = serde_json::to_string(&manifest).unwrap();
    let parsed = ContentManifest::from_json(&json).unwrap();
    assert_eq!(parsed.bodies.len(), manifest.bodies.len());
    assert_eq!(parsed.sections, manifest.sections);
}

#[test]
fn optional_fields_default_when_omitted() {
    let json = r#"{
        "bodies": [
            { "name": "Solo", "distance": 10.0, "angular_speed": 0.2, "visual_scale": 1.0 }
        ]
    }"#;
    let manifest = ContentManifest::from_json(json).unwrap();
    let body = &manifest.bodies[0];
    assert_eq!(body.initial_phase, 0.0);
    assert!(body.link.is_empty());
    assert!(body.technologies.is_empty());
    assert!(manifest.constellation.is_empty());
    assert_eq!(manifest.sections.len(), 6, "sections fall back to defaults");
}

#[test]
fn a_manifest_without_bodies_is_rejected() {
    let err = ContentManifest::from_json(r#"{ "bodies": [] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NoBodies));
}

#[test]
fn malformed_json_reports_a_parse_error() {
    let err = ContentManifest::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("invalid content manifest"));
}
