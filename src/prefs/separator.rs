use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One selectable title separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparatorOption {
    pub value: String,
    /// May contain HTML entities (`&ndash;`), rendered as-is by the widget.
    pub label: String,
    #[serde(rename = "aria_label", alias = "ariaLabel", default)]
    pub aria_label: String,
}

/// Ordered separator options with unique values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeparatorOptions(Vec<SeparatorOption>);

impl SeparatorOptions {
    /// Build from options in display order. Later duplicates of a value are dropped.
    pub fn new(options: impl IntoIterator<Item = SeparatorOption>) -> Self {
        let mut kept: Vec<SeparatorOption> = Vec::new();
        for option in options {
            if kept.iter().any(|o| o.value == option.value) {
                tracing::warn!(value = %option.value, "duplicate separator option dropped");
                continue;
            }
            kept.push(option);
        }
        SeparatorOptions(kept)
    }

    /// Parse the `separators` preference.
    ///
    /// Accepts the mapping form `{ "sc-dash": { "label": "-", "aria_label": "Dash" } }`
    /// (order is insertion order) or a list of `{ value, label, aria_label }`.
    /// Anything else yields an empty list; malformed entries are skipped.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::new(map.iter().filter_map(|(key, entry)| {
                let label = entry.get("label").and_then(Value::as_str);
                match label {
                    Some(label) => Some(SeparatorOption {
                        value: key.clone(),
                        label: label.to_string(),
                        aria_label: entry
                            .get("aria_label")
                            .or_else(|| entry.get("ariaLabel"))
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                    }),
                    None => {
                        tracing::warn!(value = %key, "separator option without label skipped");
                        None
                    }
                }
            })),
            Value::Array(items) => Self::new(items.iter().filter_map(|item| {
                match serde_json::from_value::<SeparatorOption>(item.clone()) {
                    Ok(option) => Some(option),
                    Err(e) => {
                        tracing::warn!(error = %e, "malformed separator option skipped");
                        None
                    }
                }
            })),
            Value::Null => Self::default(),
            _ => {
                tracing::warn!("separators preference is neither a mapping nor a list");
                Self::default()
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeparatorOption> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, value: &str) -> Option<usize> {
        self.0.iter().position(|o| o.value == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.position(value).is_some()
    }
}

impl<'a> IntoIterator for &'a SeparatorOptions {
    type Item = &'a SeparatorOption;
    type IntoIter = std::slice::Iter<'a, SeparatorOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
