use serde_json::{Map, Value};

use crate::error::ScreenError;
use crate::form::form_model::json_type;
use crate::prefs::separator::SeparatorOptions;

pub const CAN_MANAGE_OPTIONS: &str = "canManageOptions";
pub const GENERAL_SETTINGS_URL: &str = "generalSettingsUrl";
pub const SEPARATORS: &str = "separators";
pub const LINK_PARAMS: &str = "linkParams";
pub const SITE_FEATURES_URL: &str = "siteFeaturesUrl";

pub const DEFAULT_SITE_FEATURES_URL: &str = "#/site-features#card-wpseo_social-opengraph";

/// Permissions the screen gates fields on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ManageOptions,
}

impl Permission {
    pub fn key(self) -> &'static str {
        match self {
            Permission::ManageOptions => CAN_MANAGE_OPTIONS,
        }
    }
}

/// Read-only view of site-wide preferences, sourced once at the
/// composition root and passed down explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceSnapshot {
    values: Map<String, Value>,
}

impl PreferenceSnapshot {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn from_value(value: Value) -> Result<Self, ScreenError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            Value::Null => Ok(Self::default()),
            other => Err(ScreenError::Malformed(format!(
                "preferences must be a mapping, got {}",
                json_type(&other)
            ))),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ScreenError> {
        let value: Value = serde_yaml::from_str(content).map_err(|source| ScreenError::Yaml {
            context: "preferences".to_string(),
            source,
        })?;
        Self::from_value(value)
    }

    pub fn load(path: &str) -> Result<Self, ScreenError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScreenError::Io {
            context: format!("reading preferences {}", path),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Lookup with fallback. Returns `default` when the key is missing or
    /// holds a different JSON type than `default`. A `null` default accepts
    /// any stored value.
    pub fn read(&self, key: &str, default: Value) -> Value {
        match self.values.get(key) {
            Some(value) if default.is_null() || same_type(value, &default) => value.clone(),
            Some(other) => {
                tracing::warn!(
                    key,
                    found = json_type(other),
                    expected = json_type(&default),
                    "preference has the wrong type, using default"
                );
                default
            }
            None => default,
        }
    }

    pub fn read_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                tracing::warn!(key, found = json_type(other), "expected a boolean preference");
                default
            }
            None => default,
        }
    }

    pub fn read_str(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                tracing::warn!(key, found = json_type(other), "expected a string preference");
                default.to_string()
            }
            None => default.to_string(),
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.read_bool(permission.key(), false)
    }

    pub fn can_manage_options(&self) -> bool {
        self.has_permission(Permission::ManageOptions)
    }

    pub fn general_settings_url(&self) -> String {
        self.read_str(GENERAL_SETTINGS_URL, "")
    }

    pub fn site_features_url(&self) -> String {
        self.read_str(SITE_FEATURES_URL, DEFAULT_SITE_FEATURES_URL)
    }

    pub fn separators(&self) -> SeparatorOptions {
        self.values
            .get(SEPARATORS)
            .map(SeparatorOptions::from_value)
            .unwrap_or_default()
    }

    /// Query arguments appended to external links. Non-string values are
    /// stringified; a malformed entry yields no parameters.
    pub fn link_params(&self) -> Vec<(String, String)> {
        match self.values.get(LINK_PARAMS) {
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(k, v)| match v {
                    Value::String(s) => Some((k.clone(), s.clone())),
                    Value::Number(n) => Some((k.clone(), n.to_string())),
                    Value::Bool(b) => Some((k.clone(), b.to_string())),
                    _ => None,
                })
                .collect(),
            Some(other) => {
                tracing::warn!(found = json_type(other), "expected linkParams mapping");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// SHA-1 over the values of `keys`, in order. Missing keys hash as null,
    /// so the fingerprint only changes when one of the named inputs does.
    pub fn fingerprint(&self, keys: &[&str]) -> String {
        use sha1::{Digest, Sha1};

        let mut hasher = Sha1::new();
        for key in keys {
            hasher.update(key.as_bytes());
            hasher.update([0u8]);
            let value = self.values.get(*key).unwrap_or(&Value::Null);
            hasher.update(value.to_string().as_bytes());
            hasher.update([0u8]);
        }
        format!("{:x}", hasher.finalize())
    }
}

fn same_type(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}
