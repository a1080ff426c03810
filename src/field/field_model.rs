use serde::Serialize;

use crate::form::path::FieldPath;
use crate::prefs::separator::SeparatorOptions;
use crate::prefs::snapshot::Permission;
use crate::text::rich_text::RichText;

/// Widget kind of a field, with the data only that widget needs.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Radio {
        options: SeparatorOptions,
    },
    Toggle,
    MediaSelect {
        /// Where the attachment id is stored; `path` holds the URL.
        id_path: FieldPath,
        preview_label: RichText,
    },
}

/// Rule deciding whether a field accepts edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Always,
    /// Shown read-only unless the permission is granted.
    Permission(Permission),
    /// Disabled, with a notice, unless the boolean at `path` is `true`.
    Flag { path: FieldPath },
}

/// Declarative description of one input on the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub id: String,
    pub path: FieldPath,
    pub label: String,
    pub description: Option<RichText>,
    pub kind: FieldKind,
    pub gate: Gate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    /// The field keeps its value but cannot be edited until `dependency` is on.
    DependencyDisabled { dependency: FieldPath },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub visible: bool,
    pub editable: bool,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl FieldState {
    pub fn open() -> Self {
        Self {
            visible: true,
            editable: true,
            enabled: true,
            notice: None,
        }
    }

    pub fn accepts_edits(&self) -> bool {
        self.visible && self.editable && self.enabled
    }
}
