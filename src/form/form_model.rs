use serde_json::{Map, Value};

use crate::error::ScreenError;
use crate::form::path::FieldPath;

/// Read/write access to the live form values, addressed by path.
///
/// The form session owns the values; screen code only reads them and
/// issues path-scoped writes.
pub trait FormStore {
    fn read(&self, path: &FieldPath) -> Option<Value>;
    fn write(&mut self, path: &FieldPath, value: Value);

    fn read_str(&self, path: &FieldPath) -> Option<String> {
        match self.read(path) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Strict boolean read: only JSON `true`/`false` count.
    fn read_bool(&self, path: &FieldPath) -> Option<bool> {
        match self.read(path) {
            Some(Value::Bool(b)) => Some(b),
            _ => None,
        }
    }
}

/// In-memory form state backed by a JSON object tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: Map<String, Value>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Result<Self, ScreenError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            Value::Null => Ok(Self::default()),
            other => Err(ScreenError::Malformed(format!(
                "form state must be a mapping, got {}",
                json_type(&other)
            ))),
        }
    }

    /// Parse form values from YAML (JSON is valid YAML too).
    pub fn from_yaml_str(content: &str) -> Result<Self, ScreenError> {
        let value: Value = serde_yaml::from_str(content).map_err(|source| ScreenError::Yaml {
            context: "form state".to_string(),
            source,
        })?;
        Self::from_value(value)
    }

    pub fn load(path: &str) -> Result<Self, ScreenError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScreenError::Io {
            context: format!("reading form state {}", path),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

impl FormStore for FormState {
    fn read(&self, path: &FieldPath) -> Option<Value> {
        let mut segments = path.segments();
        let first = segments.next()?;
        let mut current = self.values.get(first)?;
        for seg in segments {
            current = current.as_object()?.get(seg)?;
        }
        Some(current.clone())
    }

    fn write(&mut self, path: &FieldPath, value: Value) {
        let segments: Vec<&str> = path.segments().collect();
        let (leaf, parents) = match segments.split_last() {
            Some(split) => split,
            None => return,
        };

        let mut current = &mut self.values;
        for seg in parents {
            let slot = current
                .entry(seg.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                tracing::debug!(path = %path, segment = %seg, "replacing non-object parent");
                *slot = Value::Object(Map::new());
            }
            let Value::Object(map) = slot else {
                return;
            };
            current = map;
        }
        current.insert(leaf.to_string(), value);
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
