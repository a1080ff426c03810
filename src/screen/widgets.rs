use crate::field::choice_group::ChoiceGroup;
use crate::field::field_model::{FieldDescriptor, FieldKind, FieldState};
use crate::form::form_model::FormStore;
use crate::screen::screen_model::WidgetView;

type WidgetRenderer = fn(&FieldDescriptor, &FieldState, &dyn FormStore) -> WidgetView;

/// Renderer for each field kind.
pub fn renderer_for(kind: &FieldKind) -> WidgetRenderer {
    match kind {
        FieldKind::Text => render_text,
        FieldKind::Radio { .. } => render_radio,
        FieldKind::Toggle => render_toggle,
        FieldKind::MediaSelect { .. } => render_media_select,
    }
}

pub fn render_widget(field: &FieldDescriptor, state: &FieldState, form: &dyn FormStore) -> WidgetView {
    renderer_for(&field.kind)(field, state, form)
}

fn render_text(field: &FieldDescriptor, state: &FieldState, form: &dyn FormStore) -> WidgetView {
    WidgetView::Text {
        value: form.read_str(&field.path).unwrap_or_default(),
        read_only: !state.editable,
    }
}

fn render_radio(field: &FieldDescriptor, _state: &FieldState, form: &dyn FormStore) -> WidgetView {
    let group = match &field.kind {
        FieldKind::Radio { options } => ChoiceGroup::from_options(&field.path, options, form),
        _ => ChoiceGroup {
            path: field.path.clone(),
            items: Vec::new(),
        },
    };
    WidgetView::Radio { group }
}

fn render_toggle(field: &FieldDescriptor, _state: &FieldState, form: &dyn FormStore) -> WidgetView {
    WidgetView::Toggle {
        checked: form.read_bool(&field.path).unwrap_or(false),
    }
}

fn render_media_select(field: &FieldDescriptor, state: &FieldState, form: &dyn FormStore) -> WidgetView {
    let (id, preview_label) = match &field.kind {
        FieldKind::MediaSelect {
            id_path,
            preview_label,
        } => (
            form.read(id_path).and_then(|v| v.as_u64()),
            preview_label.clone(),
        ),
        _ => (None, Default::default()),
    };
    WidgetView::MediaSelect {
        url: form.read_str(&field.path).unwrap_or_default(),
        id,
        preview_label,
        disabled: !state.enabled,
    }
}
