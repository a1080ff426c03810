use crate::error::ScreenError;
use crate::field::field_model::{FieldDescriptor, FieldKind, Gate, Notice};
use crate::field::resolver::resolve;
use crate::form::form_model::FormStore;
use crate::form::path::FieldPath;
use crate::prefs::snapshot::{
    GENERAL_SETTINGS_URL, LINK_PARAMS, Permission, PreferenceSnapshot, SITE_FEATURES_URL,
};
use crate::screen::links::{LinkProvider, PreferenceLinkProvider};
use crate::screen::screen_model::{Alert, AlertVariant, Block, FieldView, Screen, Section};
use crate::screen::strings;
use crate::screen::widgets::render_widget;
use crate::text::composer::{Composer, Diagnostic, TemplateMode};
use crate::text::interpolate::tag_map;
use crate::text::rich_text::{ElementTemplate, RichText};

// Form paths bound by this screen.
pub const BLOGNAME: &str = "blogname";
pub const BLOGDESCRIPTION: &str = "blogdescription";
pub const SEPARATOR: &str = "wpseo_titles.separator";
pub const OPENGRAPH: &str = "wpseo_social.opengraph";
pub const OG_DEFAULT_IMAGE: &str = "wpseo_social.og_default_image";
pub const OG_DEFAULT_IMAGE_ID: &str = "wpseo_social.og_default_image_id";
pub const DISABLE_ADVANCED_META: &str = "wpseo.disableadvanced_meta";
pub const TRACKING: &str = "wpseo.tracking";

pub const VARIABLES_ALERT_ID: &str = "alert-site-defaults-variables";
pub const OPEN_GRAPH_ALERT_ID: &str = "alert-open-graph-disabled";
pub const USAGE_TRACKING_LINK_ID: &str = "link-usage-tracking";

/// Preference keys the static texts are derived from.
pub const STATIC_TEXT_INPUTS: [&str; 3] = [GENERAL_SETTINGS_URL, LINK_PARAMS, SITE_FEATURES_URL];

/// Display texts that depend only on preferences, never on form values.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticTexts {
    pub variables_info: RichText,
    pub cannot_manage: RichText,
    pub site_title_description: RichText,
    pub tagline_description: RichText,
    pub recommended_size: RichText,
    pub usage_tracking: RichText,
    pub open_graph_disabled: RichText,
    /// Composition failures degraded to raw text (lenient mode only).
    pub diagnostics: Vec<Diagnostic>,
}

impl StaticTexts {
    pub fn compose(
        prefs: &PreferenceSnapshot,
        links: &dyn LinkProvider,
        mode: TemplateMode,
    ) -> Result<Self, ScreenError> {
        let mut composer = Composer::new(mode);
        let em = tag_map([("em", ElementTemplate::new("em"))]);
        let emphasis = ["<em>", "</em>"];
        let anchor = ["<a>", "</a>"];
        let settings_url = prefs.general_settings_url();

        let variables_info =
            composer.markup("variables-info", strings::VARIABLES_INFO, &emphasis, &em)?;
        let cannot_manage =
            composer.markup("cannot-manage-options", strings::CANNOT_MANAGE_OPTIONS, &emphasis, &em)?;

        let site_title_description = composer.markup(
            "site-title-description",
            strings::SITE_TITLE_DESCRIPTION,
            &anchor,
            &tag_map([("a", settings_anchor(&settings_url, BLOGNAME))]),
        )?;
        let tagline_description = composer.markup(
            "tagline-description",
            strings::TAGLINE_DESCRIPTION,
            &anchor,
            &tag_map([("a", settings_anchor(&settings_url, BLOGDESCRIPTION))]),
        )?;

        let recommended_size = composer.markup(
            "recommended-size",
            strings::RECOMMENDED_SIZE,
            &["<strong>", "</strong>", strings::RECOMMENDED_SIZE_VALUE],
            &tag_map([("strong", ElementTemplate::new("strong"))]),
        )?;

        let usage_tracking = links.select_link(
            &mut composer,
            USAGE_TRACKING_LINK_ID,
            strings::USAGE_TRACKING_LINK,
            strings::USAGE_TRACKING_DESCRIPTION,
        )?;

        let open_graph_disabled = composer.markup(
            "open-graph-disabled",
            strings::OPEN_GRAPH_DISABLED,
            &["<em>", "</em>", "<a>", "</a>"],
            &tag_map([
                ("em", ElementTemplate::new("em")),
                ("a", ElementTemplate::new("a").with_attr("href", prefs.site_features_url())),
            ]),
        )?;

        Ok(Self {
            variables_info,
            cannot_manage,
            site_title_description,
            tagline_description,
            recommended_size,
            usage_tracking,
            open_graph_disabled,
            diagnostics: composer.into_diagnostics(),
        })
    }
}

fn settings_anchor(settings_url: &str, fragment: &str) -> ElementTemplate {
    ElementTemplate::new("a")
        .with_attr("href", format!("{}#{}", settings_url, fragment))
        .with_attr("target", "_blank")
        .with_attr("rel", "noreferrer")
}

/// Field descriptors for the current preferences, in display order.
pub fn site_basics_fields(prefs: &PreferenceSnapshot, texts: &StaticTexts) -> Vec<FieldDescriptor> {
    let can_manage = prefs.can_manage_options();

    vec![
        FieldDescriptor {
            id: "input-blogname".to_string(),
            path: FieldPath::known(BLOGNAME),
            label: strings::SITE_TITLE_LABEL.to_string(),
            description: can_manage.then(|| texts.site_title_description.clone()),
            kind: FieldKind::Text,
            gate: Gate::Permission(Permission::ManageOptions),
        },
        FieldDescriptor {
            id: "input-blogdescription".to_string(),
            path: FieldPath::known(BLOGDESCRIPTION),
            label: strings::TAGLINE_LABEL.to_string(),
            description: can_manage.then(|| texts.tagline_description.clone()),
            kind: FieldKind::Text,
            gate: Gate::Permission(Permission::ManageOptions),
        },
        FieldDescriptor {
            id: "input-wpseo_titles-separator".to_string(),
            path: FieldPath::known(SEPARATOR),
            label: strings::SEPARATOR_LABEL.to_string(),
            description: None,
            kind: FieldKind::Radio {
                options: prefs.separators(),
            },
            gate: Gate::Always,
        },
        FieldDescriptor {
            id: "wpseo_social-og_default_image".to_string(),
            path: FieldPath::known(OG_DEFAULT_IMAGE),
            label: strings::SITE_IMAGE_LABEL.to_string(),
            description: Some(RichText::plain(strings::SITE_IMAGE_DESCRIPTION)),
            kind: FieldKind::MediaSelect {
                id_path: FieldPath::known(OG_DEFAULT_IMAGE_ID),
                preview_label: texts.recommended_size.clone(),
            },
            gate: Gate::Flag {
                path: FieldPath::known(OPENGRAPH),
            },
        },
        FieldDescriptor {
            id: "input-wpseo-disableadvanced_meta".to_string(),
            path: FieldPath::known(DISABLE_ADVANCED_META),
            label: strings::RESTRICT_ADVANCED_LABEL.to_string(),
            description: Some(RichText::plain(strings::RESTRICT_ADVANCED_DESCRIPTION)),
            kind: FieldKind::Toggle,
            gate: Gate::Always,
        },
        FieldDescriptor {
            id: "input-wpseo-tracking".to_string(),
            path: FieldPath::known(TRACKING),
            label: strings::USAGE_TRACKING_LABEL.to_string(),
            description: Some(texts.usage_tracking.clone()),
            kind: FieldKind::Toggle,
            gate: Gate::Always,
        },
    ]
}

/// Compose the full screen from already composed static texts.
pub fn assemble(form: &dyn FormStore, prefs: &PreferenceSnapshot, texts: &StaticTexts) -> Screen {
    let fields = site_basics_fields(prefs, texts);
    let resolution = resolve(&fields, form, prefs);

    let mut views: Vec<FieldView> = fields
        .iter()
        .zip(&resolution.fields)
        .map(|(field, resolved)| {
            let state = resolved.state.clone();
            FieldView {
                id: field.id.clone(),
                path: field.path.clone(),
                label: field.label.clone(),
                description: field.description.clone(),
                notice: state.notice.as_ref().map(|n| notice_alert(n, texts)),
                widget: render_widget(field, &state, form),
                state,
            }
        })
        .collect();

    let mut take = |path: &str| -> Option<Block> {
        let i = views.iter().position(|v| v.path.as_str() == path)?;
        Some(Block::Field(views.remove(i)))
    };

    let mut variables = texts.variables_info.clone();
    if !prefs.can_manage_options() {
        variables.push_text("\u{a0}");
        variables.append(texts.cannot_manage.clone());
    }

    let mut site_info = vec![Block::Alert(Alert {
        id: Some(VARIABLES_ALERT_ID.to_string()),
        variant: AlertVariant::Info,
        body: variables,
    })];
    site_info.extend(
        [BLOGNAME, BLOGDESCRIPTION, SEPARATOR, OG_DEFAULT_IMAGE]
            .into_iter()
            .filter_map(&mut take),
    );

    let security: Vec<Block> = [DISABLE_ADVANCED_META, TRACKING]
        .into_iter()
        .filter_map(&mut take)
        .collect();

    Screen {
        title: strings::SCREEN_TITLE.to_string(),
        description: strings::SCREEN_DESCRIPTION.to_string(),
        sections: vec![
            Section {
                title: strings::SITE_INFO_TITLE.to_string(),
                description: Some(strings::SITE_INFO_DESCRIPTION.to_string()),
                blocks: site_info,
            },
            Section {
                title: strings::SECURITY_TITLE.to_string(),
                description: None,
                blocks: security,
            },
        ],
        resolution,
        diagnostics: texts.diagnostics.clone(),
    }
}

fn notice_alert(notice: &Notice, texts: &StaticTexts) -> Alert {
    match notice {
        Notice::DependencyDisabled { dependency } if dependency.as_str() == OPENGRAPH => Alert {
            id: Some(OPEN_GRAPH_ALERT_ID.to_string()),
            variant: AlertVariant::Info,
            body: texts.open_graph_disabled.clone(),
        },
        Notice::DependencyDisabled { dependency } => Alert {
            id: None,
            variant: AlertVariant::Warning,
            body: RichText::plain(format!("Requires '{}' to be enabled.", dependency)),
        },
    }
}

/// Render the site basics screen for the given form values and preferences.
pub fn render_site_basics(
    form: &dyn FormStore,
    prefs: &PreferenceSnapshot,
    mode: TemplateMode,
) -> Result<Screen, ScreenError> {
    let links = PreferenceLinkProvider::new(prefs);
    let texts = StaticTexts::compose(prefs, &links, mode)?;
    Ok(assemble(form, prefs, &texts))
}
