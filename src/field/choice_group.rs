use serde::Serialize;
use serde_json::Value;

use crate::error::ScreenError;
use crate::form::form_model::FormStore;
use crate::form::path::FieldPath;
use crate::prefs::separator::SeparatorOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceItem {
    pub id: String,
    pub value: String,
    pub label: String,
    pub aria_label: String,
    pub checked: bool,
}

/// Mutually exclusive choices bound to one form path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceGroup {
    pub path: FieldPath,
    pub items: Vec<ChoiceItem>,
}

impl ChoiceGroup {
    /// One item per option, in option order. The item whose value equals the
    /// stored value is checked; a stored value missing from `options` checks
    /// nothing.
    pub fn from_options(path: &FieldPath, options: &SeparatorOptions, form: &dyn FormStore) -> Self {
        let current = form.read_str(path);
        if let Some(value) = &current {
            if !options.is_empty() && !options.contains(value) {
                tracing::debug!(path = %path, value = %value, "stored choice not among options");
            }
        }

        let items = options
            .iter()
            .map(|option| ChoiceItem {
                id: format!("input-{}-{}", path.dom_id(), option.value),
                value: option.value.clone(),
                label: option.label.clone(),
                aria_label: option.aria_label.clone(),
                checked: current.as_deref() == Some(option.value.as_str()),
            })
            .collect();

        ChoiceGroup {
            path: path.clone(),
            items,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.items.iter().position(|item| item.checked)
    }

    pub fn selected_item(&self) -> Option<&ChoiceItem> {
        self.items.iter().find(|item| item.checked)
    }

    /// Store `value` at the group's path.
    pub fn select(&self, value: &str, form: &mut dyn FormStore) -> Result<(), ScreenError> {
        if !self.items.iter().any(|item| item.value == value) {
            return Err(ScreenError::UnknownOption {
                path: self.path.to_string(),
                value: value.to_string(),
            });
        }
        form.write(&self.path, Value::String(value.to_string()));
        Ok(())
    }
}
