use serde_json::{Value, json};
use site_basics::prefs::separator::{SeparatorOption, SeparatorOptions};
use site_basics::prefs::snapshot::{DEFAULT_SITE_FEATURES_URL, PreferenceSnapshot};

mod common;
use crate::common::fixtures::separators_json;

fn snapshot(value: Value) -> PreferenceSnapshot {
    PreferenceSnapshot::from_value(value).unwrap()
}

// =========================================================================
// Defaults for missing or malformed entries
// =========================================================================

#[test]
fn empty_snapshot_uses_documented_defaults() {
    let prefs = PreferenceSnapshot::default();
    assert!(!prefs.can_manage_options());
    assert_eq!(prefs.general_settings_url(), "");
    assert!(prefs.separators().is_empty());
    assert!(prefs.link_params().is_empty());
    assert_eq!(prefs.site_features_url(), DEFAULT_SITE_FEATURES_URL);
}

#[test]
fn wrong_types_fall_back_to_defaults() {
    let prefs = snapshot(json!({
        "canManageOptions": "yes",
        "generalSettingsUrl": 12,
        "separators": "dash",
        "linkParams": ["a"]
    }));
    assert!(!prefs.can_manage_options(), "String is not a boolean");
    assert_eq!(prefs.general_settings_url(), "");
    assert!(prefs.separators().is_empty());
    assert!(prefs.link_params().is_empty());
}

#[test]
fn read_falls_back_when_missing_or_wrong_type() {
    let prefs = snapshot(json!({
        "canManageOptions": "yes",
        "present": null,
        "generalSettingsUrl": "https://example.com/options.php",
        "linkParams": { "a": "1" }
    }));
    assert_eq!(prefs.read("canManageOptions", json!(false)), json!(false));
    assert_eq!(prefs.read("present", json!("fallback")), json!("fallback"));
    assert_eq!(prefs.read("absent", json!("fallback")), json!("fallback"));
    assert_eq!(
        prefs.read("generalSettingsUrl", json!("")),
        json!("https://example.com/options.php")
    );
    assert_eq!(prefs.read("linkParams", json!({})), json!({ "a": "1" }));
    assert_eq!(prefs.read("present", Value::Null), Value::Null, "Null default takes anything");
    assert_eq!(prefs.read("canManageOptions", Value::Null), json!("yes"));
}

#[test]
fn non_mapping_document_is_rejected() {
    assert!(PreferenceSnapshot::from_value(json!([1, 2])).is_err());
    assert!(PreferenceSnapshot::from_value(json!(null)).is_ok());
}

// =========================================================================
// Separators
// =========================================================================

#[test]
fn separators_mapping_keeps_insertion_order() {
    let prefs = snapshot(json!({ "separators": separators_json() }));
    let values: Vec<String> = prefs.separators().iter().map(|o| o.value.clone()).collect();
    assert_eq!(values, vec!["sc-dash", "sc-ndash", "sc-pipe"]);

    let ndash = prefs.separators().iter().nth(1).cloned().unwrap();
    assert_eq!(ndash.label, "&ndash;");
    assert_eq!(ndash.aria_label, "En dash");
}

#[test]
fn separators_list_form() {
    let prefs = snapshot(json!({
        "separators": [
            { "value": "-", "label": "-", "aria_label": "Dash" },
            { "value": "|", "label": "|", "ariaLabel": "Pipe" }
        ]
    }));
    let options = prefs.separators();
    assert_eq!(options.len(), 2);
    assert_eq!(options.position("|"), Some(1));
    assert_eq!(options.iter().nth(1).unwrap().aria_label, "Pipe");
}

#[test]
fn separators_skip_malformed_entries() {
    let prefs = snapshot(json!({
        "separators": {
            "sc-dash": { "label": "-" },
            "sc-broken": { "aria_label": "No label" },
            "sc-num": 5
        }
    }));
    let options = prefs.separators();
    assert_eq!(options.len(), 1);
    assert!(options.contains("sc-dash"));
    assert_eq!(options.iter().next().unwrap().aria_label, "");
}

#[test]
fn separator_values_are_unique() {
    let option = |value: &str, label: &str| SeparatorOption {
        value: value.to_string(),
        label: label.to_string(),
        aria_label: String::new(),
    };
    let options = SeparatorOptions::new(vec![option("-", "first"), option("|", "pipe"), option("-", "second")]);
    assert_eq!(options.len(), 2);
    assert_eq!(options.iter().next().unwrap().label, "first", "First occurrence wins");
}

// =========================================================================
// Link params and fingerprints
// =========================================================================

#[test]
fn link_params_stringify_scalars() {
    let prefs = snapshot(json!({
        "linkParams": { "php_version": "8.2", "days_active": 30, "premium": false, "nested": {} }
    }));
    assert_eq!(
        prefs.link_params(),
        vec![
            ("php_version".to_string(), "8.2".to_string()),
            ("days_active".to_string(), "30".to_string()),
            ("premium".to_string(), "false".to_string()),
        ]
    );
}

#[test]
fn fingerprint_tracks_only_named_keys() {
    let a = snapshot(json!({ "generalSettingsUrl": "https://a.test", "canManageOptions": true }));
    let b = snapshot(json!({ "generalSettingsUrl": "https://a.test", "canManageOptions": false }));
    let c = snapshot(json!({ "generalSettingsUrl": "https://c.test", "canManageOptions": true }));

    let keys = ["generalSettingsUrl"];
    assert_eq!(a.fingerprint(&keys), b.fingerprint(&keys));
    assert_ne!(a.fingerprint(&keys), c.fingerprint(&keys));
    assert_eq!(a.fingerprint(&keys).len(), 40, "SHA-1 hex digest");
}

#[test]
fn fingerprint_distinguishes_missing_from_empty() {
    let missing = PreferenceSnapshot::default();
    let empty = snapshot(json!({ "generalSettingsUrl": "" }));
    assert_ne!(
        missing.fingerprint(&["generalSettingsUrl"]),
        empty.fingerprint(&["generalSettingsUrl"])
    );
}
