use serde::Serialize;

use crate::field::field_model::{FieldDescriptor, FieldState, Gate, Notice};
use crate::form::form_model::FormStore;
use crate::form::path::FieldPath;
use crate::prefs::snapshot::PreferenceSnapshot;

/// Resolve one field's state. Pure in `form` and `prefs`.
pub fn resolve_field(
    field: &FieldDescriptor,
    form: &dyn FormStore,
    prefs: &PreferenceSnapshot,
) -> FieldState {
    match &field.gate {
        Gate::Always => FieldState::open(),
        Gate::Permission(permission) => FieldState {
            editable: prefs.has_permission(*permission),
            ..FieldState::open()
        },
        Gate::Flag { path } => {
            // Only a literal `true` enables the field.
            let enabled = form.read_bool(path) == Some(true);
            FieldState {
                enabled,
                notice: (!enabled).then(|| Notice::DependencyDisabled {
                    dependency: path.clone(),
                }),
                ..FieldState::open()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedField {
    pub id: String,
    pub path: FieldPath,
    pub state: FieldState,
}

/// Per-field states for one render pass, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub fields: Vec<ResolvedField>,
}

impl Resolution {
    pub fn get(&self, path: &FieldPath) -> Option<&FieldState> {
        self.fields
            .iter()
            .find(|f| &f.path == path)
            .map(|f| &f.state)
    }

    /// SHA-1 over the canonical JSON encoding. Equal resolutions hash equal.
    pub fn fingerprint(&self) -> String {
        use sha1::{Digest, Sha1};

        let bytes = serde_json::to_vec(self).unwrap_or_default();
        let mut hasher = Sha1::new();
        hasher.update(&bytes);
        format!("{:x}", hasher.finalize())
    }
}

pub fn resolve(
    fields: &[FieldDescriptor],
    form: &dyn FormStore,
    prefs: &PreferenceSnapshot,
) -> Resolution {
    let fields = fields
        .iter()
        .map(|field| ResolvedField {
            id: field.id.clone(),
            path: field.path.clone(),
            state: resolve_field(field, form, prefs),
        })
        .collect();
    Resolution { fields }
}
