use serde_json::json;
use site_basics::ScreenError;
use site_basics::field::choice_group::ChoiceGroup;
use site_basics::form::form_model::{FormState, FormStore};
use site_basics::form::path::FieldPath;
use site_basics::prefs::separator::SeparatorOptions;

fn separator_path() -> FieldPath {
    FieldPath::parse("wpseo_titles.separator").unwrap()
}

fn dash_pipe() -> SeparatorOptions {
    SeparatorOptions::from_value(&json!([
        { "value": "-", "label": "-", "aria_label": "Dash" },
        { "value": "|", "label": "|", "aria_label": "Pipe" }
    ]))
}

fn form_with_separator(value: &str) -> FormState {
    FormState::from_value(json!({ "wpseo_titles": { "separator": value } })).unwrap()
}

#[test]
fn stored_value_checks_matching_item() {
    let group = ChoiceGroup::from_options(&separator_path(), &dash_pipe(), &form_with_separator("|"));
    assert_eq!(group.selected(), Some(1));
    assert_eq!(group.selected_item().unwrap().aria_label, "Pipe");
    assert_eq!(group.items.iter().filter(|i| i.checked).count(), 1);
}

#[test]
fn stale_value_checks_nothing() {
    let group = ChoiceGroup::from_options(&separator_path(), &dash_pipe(), &form_with_separator("*"));
    assert_eq!(group.selected(), None);
    assert_eq!(group.items.len(), 2, "All options still rendered");
}

#[test]
fn missing_value_checks_nothing() {
    let group = ChoiceGroup::from_options(&separator_path(), &dash_pipe(), &FormState::new());
    assert_eq!(group.selected(), None);
}

#[test]
fn items_follow_option_order_and_ids() {
    let group = ChoiceGroup::from_options(&separator_path(), &dash_pipe(), &FormState::new());
    let ids: Vec<&str> = group.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["input-wpseo_titles-separator--", "input-wpseo_titles-separator-|"]
    );
}

#[test]
fn select_writes_option_value() {
    let mut form = form_with_separator("-");
    let group = ChoiceGroup::from_options(&separator_path(), &dash_pipe(), &form);
    group.select("|", &mut form).unwrap();
    assert_eq!(form.read_str(&separator_path()), Some("|".to_string()));

    let regrouped = ChoiceGroup::from_options(&separator_path(), &dash_pipe(), &form);
    assert_eq!(regrouped.selected(), Some(1));
}

#[test]
fn select_unknown_value_is_rejected() {
    let mut form = form_with_separator("-");
    let group = ChoiceGroup::from_options(&separator_path(), &dash_pipe(), &form);
    match group.select("*", &mut form) {
        Err(ScreenError::UnknownOption { value, .. }) => assert_eq!(value, "*"),
        other => panic!("Expected UnknownOption, got {:?}", other),
    }
    assert_eq!(form.read_str(&separator_path()), Some("-".to_string()), "Unchanged");
}

#[test]
fn empty_options_render_empty_group() {
    let group = ChoiceGroup::from_options(
        &separator_path(),
        &SeparatorOptions::default(),
        &form_with_separator("-"),
    );
    assert!(group.items.is_empty());
    assert_eq!(group.selected(), None);
}
