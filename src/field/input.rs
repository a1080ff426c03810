use serde_json::Value;

use crate::error::ScreenError;
use crate::field::choice_group::ChoiceGroup;
use crate::field::field_model::{FieldDescriptor, FieldKind, FieldState, Gate};
use crate::form::form_model::FormStore;

/// A user edit to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Toggle(bool),
    Choice(String),
    Media { url: String, id: Option<u64> },
}

impl FieldInput {
    /// Interpret a raw string (e.g. from `--set path=value`) for `kind`.
    ///
    /// Media values are `url` or `url#id`.
    pub fn parse_for(field: &FieldDescriptor, raw: &str) -> Result<Self, ScreenError> {
        match &field.kind {
            FieldKind::Text => Ok(FieldInput::Text(raw.to_string())),
            FieldKind::Radio { .. } => Ok(FieldInput::Choice(raw.to_string())),
            FieldKind::Toggle => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "1" | "yes" => Ok(FieldInput::Toggle(true)),
                "false" | "off" | "0" | "no" => Ok(FieldInput::Toggle(false)),
                _ => Err(ScreenError::TypeMismatch {
                    path: field.path.to_string(),
                    expected: "a boolean",
                }),
            },
            FieldKind::MediaSelect { .. } => match raw.rsplit_once('#') {
                Some((url, id)) if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) => {
                    let id = id.parse().map_err(|_| ScreenError::TypeMismatch {
                        path: field.path.to_string(),
                        expected: "a numeric attachment id",
                    })?;
                    Ok(FieldInput::Media {
                        url: url.to_string(),
                        id: Some(id),
                    })
                }
                _ => Ok(FieldInput::Media {
                    url: raw.to_string(),
                    id: None,
                }),
            },
        }
    }
}

/// Write `input` into the form if `state` allows it and the input fits the
/// field's kind.
pub fn apply_input(
    field: &FieldDescriptor,
    state: &FieldState,
    input: FieldInput,
    form: &mut dyn FormStore,
) -> Result<(), ScreenError> {
    if !state.visible || !state.editable {
        return Err(ScreenError::ReadOnly {
            path: field.path.to_string(),
        });
    }
    if !state.enabled {
        let dependency = match &field.gate {
            Gate::Flag { path } => path.to_string(),
            _ => String::new(),
        };
        return Err(ScreenError::Disabled {
            path: field.path.to_string(),
            dependency,
        });
    }

    match (&field.kind, input) {
        (FieldKind::Text, FieldInput::Text(text)) => {
            form.write(&field.path, Value::String(text));
        }
        (FieldKind::Toggle, FieldInput::Toggle(on)) => {
            form.write(&field.path, Value::Bool(on));
        }
        (FieldKind::Radio { options }, FieldInput::Choice(value)) => {
            ChoiceGroup::from_options(&field.path, options, &*form).select(&value, form)?;
        }
        (FieldKind::MediaSelect { id_path, .. }, FieldInput::Media { url, id }) => {
            form.write(&field.path, Value::String(url));
            form.write(id_path, id.map(Value::from).unwrap_or(Value::Null));
        }
        (kind, _) => {
            return Err(ScreenError::TypeMismatch {
                path: field.path.to_string(),
                expected: expected_input(kind),
            });
        }
    }

    tracing::debug!(path = %field.path, "field updated");
    Ok(())
}

fn expected_input(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Radio { .. } => "a choice",
        FieldKind::Toggle => "a boolean",
        FieldKind::MediaSelect { .. } => "a media selection",
    }
}
