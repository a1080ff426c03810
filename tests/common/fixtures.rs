use serde_json::{Value, json};
use site_basics::{FormState, PreferenceSnapshot};

pub fn separators_json() -> Value {
    json!({
        "sc-dash": { "label": "-", "aria_label": "Dash" },
        "sc-ndash": { "label": "&ndash;", "aria_label": "En dash" },
        "sc-pipe": { "label": "|", "aria_label": "Vertical bar" }
    })
}

pub fn prefs(can_manage: bool) -> PreferenceSnapshot {
    PreferenceSnapshot::from_value(json!({
        "canManageOptions": can_manage,
        "generalSettingsUrl": "https://example.com/wp-admin/options-general.php",
        "separators": separators_json(),
    }))
    .unwrap()
}

pub fn form(opengraph: bool) -> FormState {
    FormState::from_value(json!({
        "blogname": "Example Site",
        "blogdescription": "Just another site",
        "wpseo_titles": { "separator": "sc-dash" },
        "wpseo_social": {
            "opengraph": opengraph,
            "og_default_image": "https://example.com/og.png",
            "og_default_image_id": 42
        },
        "wpseo": { "disableadvanced_meta": true, "tracking": false }
    }))
    .unwrap()
}

/// Fresh per-test directory under the system temp dir.
pub fn temp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("site_basics_{}", name));
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
