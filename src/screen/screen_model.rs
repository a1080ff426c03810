use serde::Serialize;

use crate::field::choice_group::ChoiceGroup;
use crate::field::field_model::FieldState;
use crate::field::resolver::Resolution;
use crate::form::path::FieldPath;
use crate::text::composer::Diagnostic;
use crate::text::rich_text::RichText;

/// The rendered settings screen.
#[derive(Debug, Clone, Serialize)]
pub struct Screen {
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
    pub resolution: Resolution,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl Screen {
    pub fn fields(&self) -> impl Iterator<Item = &FieldView> {
        self.sections.iter().flat_map(|s| {
            s.blocks.iter().filter_map(|b| match b {
                Block::Field(field) => Some(field),
                Block::Alert(_) => None,
            })
        })
    }

    pub fn field(&self, path: &FieldPath) -> Option<&FieldView> {
        self.fields().find(|f| &f.path == path)
    }

    pub fn alert(&self, id: &str) -> Option<&Alert> {
        self.sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .find_map(|b| match b {
                Block::Alert(alert) if alert.id.as_deref() == Some(id) => Some(alert),
                Block::Field(field) => field
                    .notice
                    .as_ref()
                    .filter(|n| n.id.as_deref() == Some(id)),
                _ => None,
            })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    Alert(Alert),
    Field(FieldView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertVariant {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub variant: AlertVariant,
    pub body: RichText,
}

/// One field as shown: descriptor data, resolved state and widget contents.
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub id: String,
    pub path: FieldPath,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<RichText>,
    pub state: FieldState,
    /// Shown above the widget, e.g. why it is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Alert>,
    pub widget: WidgetView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetView {
    Text {
        value: String,
        read_only: bool,
    },
    Radio {
        group: ChoiceGroup,
    },
    Toggle {
        checked: bool,
    },
    MediaSelect {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
        preview_label: RichText,
        disabled: bool,
    },
}
