use serde_json::json;
use site_basics::form::form_model::{FormState, FormStore};
use site_basics::form::path::FieldPath;
use site_basics::ScreenError;

fn path(raw: &str) -> FieldPath {
    FieldPath::parse(raw).unwrap()
}

// =========================================================================
// FieldPath
// =========================================================================

#[test]
fn field_path_rejects_empty_segments() {
    assert!(FieldPath::parse("").is_err(), "Empty path");
    assert!(FieldPath::parse("   ").is_err(), "Whitespace path");
    assert!(FieldPath::parse("wpseo..tracking").is_err(), "Empty middle segment");
    assert!(FieldPath::parse(".tracking").is_err(), "Leading dot");
    assert!(FieldPath::parse("wpseo.").is_err(), "Trailing dot");
    assert!(FieldPath::parse("wpseo. tracking").is_err(), "Padded segment");
    assert!(FieldPath::parse("wpseo .tracking").is_err(), "Padded segment");
    assert!(FieldPath::parse("wpseo. .tracking").is_err(), "Blank segment");
    assert!(FieldPath::parse("  wpseo.tracking ").is_ok(), "Outer whitespace is trimmed");
}

#[test]
fn field_path_accessors() {
    let p = path("wpseo_social.og_default_image");
    assert_eq!(p.segments().collect::<Vec<_>>(), vec!["wpseo_social", "og_default_image"]);
    assert_eq!(p.leaf(), "og_default_image");
    assert_eq!(p.dom_id(), "wpseo_social-og_default_image");
    assert_eq!(p.to_string(), "wpseo_social.og_default_image");
}

#[test]
fn field_path_deserializes_with_validation() {
    let ok: FieldPath = serde_json::from_value(json!("wpseo.tracking")).unwrap();
    assert_eq!(ok.as_str(), "wpseo.tracking");
    assert!(serde_json::from_value::<FieldPath>(json!("a..b")).is_err());
}

// =========================================================================
// FormState read/write
// =========================================================================

#[test]
fn read_walks_nested_objects() {
    let form = FormState::from_value(json!({
        "blogname": "Site",
        "wpseo_social": { "opengraph": true }
    }))
    .unwrap();

    assert_eq!(form.read(&path("blogname")), Some(json!("Site")));
    assert_eq!(form.read(&path("wpseo_social.opengraph")), Some(json!(true)));
    assert_eq!(form.read(&path("wpseo_social.missing")), None);
    assert_eq!(form.read(&path("blogname.deeper")), None, "Cannot descend into a string");
}

#[test]
fn write_creates_intermediate_objects() {
    let mut form = FormState::new();
    form.write(&path("wpseo_titles.separator"), json!("sc-pipe"));
    assert_eq!(form.as_value(), json!({ "wpseo_titles": { "separator": "sc-pipe" } }));
}

#[test]
fn write_replaces_non_object_parent() {
    let mut form = FormState::from_value(json!({ "wpseo": "legacy" })).unwrap();
    form.write(&path("wpseo.tracking"), json!(true));
    assert_eq!(form.read_bool(&path("wpseo.tracking")), Some(true));
}

#[test]
fn write_keeps_siblings() {
    let mut form = FormState::from_value(json!({ "wpseo": { "tracking": false, "other": 1 } })).unwrap();
    form.write(&path("wpseo.tracking"), json!(true));
    assert_eq!(form.as_value(), json!({ "wpseo": { "tracking": true, "other": 1 } }));
}

#[test]
fn typed_reads_are_strict() {
    let form = FormState::from_value(json!({
        "flag_str": "true",
        "flag_num": 1,
        "flag": true,
        "name": "x"
    }))
    .unwrap();

    assert_eq!(form.read_bool(&path("flag_str")), None);
    assert_eq!(form.read_bool(&path("flag_num")), None);
    assert_eq!(form.read_bool(&path("flag")), Some(true));
    assert_eq!(form.read_str(&path("name")), Some("x".to_string()));
    assert_eq!(form.read_str(&path("flag")), None);
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn from_yaml_accepts_mapping() {
    let yaml = r#"
blogname: "My Site"
wpseo_social:
  opengraph: false
"#;
    let form = FormState::from_yaml_str(yaml).unwrap();
    assert_eq!(form.read_str(&path("blogname")), Some("My Site".to_string()));
    assert_eq!(form.read_bool(&path("wpseo_social.opengraph")), Some(false));
}

#[test]
fn from_yaml_rejects_non_mapping_root() {
    match FormState::from_yaml_str("- a\n- b\n") {
        Err(ScreenError::Malformed(msg)) => assert!(msg.contains("a list")),
        other => panic!("Expected Malformed, got {:?}", other),
    }
}

#[test]
fn load_missing_file_is_io_error() {
    match FormState::load("definitely_missing_form_state.yaml") {
        Err(ScreenError::Io { context, .. }) => assert!(context.contains("definitely_missing")),
        other => panic!("Expected Io error, got {:?}", other),
    }
}
